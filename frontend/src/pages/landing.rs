use common::i18n::{localized_path, Locale, Message, Page};
use yew::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::controls::{Button, Card};
use crate::components::navigation::Navigation;
use crate::components::section::{Section, SectionContent, SectionGrid, SectionHeader};
use crate::helpers::navigate;
use crate::theme::Theme;

const SLIDES: [(Message, Message); 4] = [
    (Message::SlideBrewingTitle, Message::SlideBrewingBody),
    (Message::SlideTastingTitle, Message::SlideTastingBody),
    (Message::SlideTourTitle, Message::SlideTourBody),
    (Message::SlideFestivalTitle, Message::SlideFestivalBody),
];

const VALUES: [(Message, Message, Message); 3] = [
    (
        Message::AboutDiversityTitle,
        Message::AboutDiversitySubtitle,
        Message::AboutDiversityBody,
    ),
    (
        Message::AboutCreativityTitle,
        Message::AboutCreativitySubtitle,
        Message::AboutCreativityBody,
    ),
    (
        Message::AboutQualityTitle,
        Message::AboutQualitySubtitle,
        Message::AboutQualityBody,
    ),
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub locale: Locale,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let locale = props.locale;
    let apply = Callback::from(move |_: MouseEvent| navigate(&localized_path(locale, Page::Recruit)));

    html! {
        <>
            <Navigation locale={locale} />
            <Section id="hero">
                <h1 style={format!("font-size: 3.5rem; margin: 0 0 {}; color: {};", theme.spacing.md, theme.colors.text_primary)}>
                    { Message::HeroTitle.text(locale) }
                </h1>
                <p style={format!("font-size: 1.25rem; margin: 0 0 {}; color: {};", theme.spacing.lg, theme.colors.text_secondary)}>
                    { Message::HeroSubtitle.text(locale) }
                </p>
                <Button onclick={apply}>{ Message::JoinCta.text(locale) }</Button>
            </Section>
            <Section id="about">
                <SectionHeader title={Message::AboutTitle.text(locale)} />
                <SectionContent>
                    <p>{ Message::AboutBody.text(locale) }</p>
                </SectionContent>
                <SectionGrid columns={3}>
                    { for VALUES.iter().map(|(title, subtitle, body)| html! {
                        <Card title={title.text(locale)} subtitle={subtitle.text(locale)}>
                            <p style={format!("margin: 0; color: {};", theme.colors.text_secondary)}>{ body.text(locale) }</p>
                        </Card>
                    }) }
                </SectionGrid>
            </Section>
            <Section id="activities">
                <SectionHeader title={Message::ActivitiesTitle.text(locale)} />
                <Carousel locale={locale} auto_play={true} interval_ms={4000}>
                    { for SLIDES.iter().map(|(title, body)| html! {
                        <Card title={title.text(locale)}>
                            <p style={format!("color: {};", theme.colors.text_secondary)}>{ body.text(locale) }</p>
                        </Card>
                    }) }
                </Carousel>
            </Section>
        </>
    }
}
