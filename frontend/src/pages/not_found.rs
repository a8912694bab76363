use common::i18n::{localized_path, Locale, Message, Page};
use yew::prelude::*;

use crate::components::navigation::Navigation;
use crate::components::section::{Section, SectionHeader};

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub locale: Locale,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(props: &NotFoundProps) -> Html {
    html! {
        <>
            <Navigation locale={props.locale} />
            <Section>
                <SectionHeader title={Message::NotFound.text(props.locale)} />
                <a href={localized_path(props.locale, Page::Home)}>{ Message::NavHome.text(props.locale) }</a>
            </Section>
        </>
    }
}
