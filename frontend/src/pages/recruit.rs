//! Recruitment page: shows the application form while the recruitment window
//! is open and a "period ended" notice afterwards.
//!
//! The window is re-checked every [`POLL_INTERVAL`], so a page left open past
//! the deadline switches to the closed notice without a reload.

use chrono::Utc;
use common::i18n::{Locale, Message};
use common::window::{RecruitmentWindow, POLL_INTERVAL};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::navigation::Navigation;
use crate::components::recruit_form::RecruitFormComponent;
use crate::components::section::{Section, SectionContent, SectionHeader};

pub enum Msg {
    CheckWindow,
}

#[derive(Properties, PartialEq)]
pub struct RecruitPageProps {
    pub locale: Locale,
    #[prop_or_default]
    pub window: RecruitmentWindow,
}

pub struct RecruitPage {
    open: bool,
    _poll: Interval,
}

impl Component for RecruitPage {
    type Message = Msg;
    type Properties = RecruitPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let millis = u32::try_from(POLL_INTERVAL.as_millis()).unwrap_or(u32::MAX);
        Self {
            open: ctx.props().window.is_open(Utc::now()),
            _poll: Interval::new(millis, move || link.send_message(Msg::CheckWindow)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CheckWindow => {
                let open = ctx.props().window.is_open(Utc::now());
                let changed = open != self.open;
                self.open = open;
                changed
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.open = ctx.props().window.is_open(Utc::now());
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let locale = ctx.props().locale;
        html! {
            <>
                <Navigation locale={locale} />
                <Section id="recruit">
                    <SectionHeader
                        title={Message::RecruitTitle.text(locale)}
                        subtitle={Message::RecruitSubtitle.text(locale)}
                    />
                    if self.open {
                        <RecruitFormComponent locale={locale} />
                    } else {
                        <SectionContent>
                            <h3>{ Message::PeriodEndedTitle.text(locale) }</h3>
                            <p>{ Message::PeriodEndedMessage.text(locale) }</p>
                            <p>{ Message::PeriodEndedSubmessage.text(locale) }</p>
                        </SectionContent>
                    }
                </Section>
            </>
        }
    }
}
