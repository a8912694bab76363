//! Recruitment application form.
//!
//! The component is a thin Elm-style shell around
//! [`common::form::RecruitForm`]: field edits and checkbox toggles go straight
//! into the shared state machine, `Msg::Submit` asks it for a validated draft,
//! and the HTTP result comes back as `Msg::Settled` to be folded in with
//! `settle`. Every outcome is announced with a toast.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod transport;
mod update;
mod view;

pub use messages::Msg;
pub use props::RecruitFormProps;
pub use state::RecruitFormComponent;

impl Component for RecruitFormComponent {
    type Message = Msg;
    type Properties = RecruitFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        RecruitFormComponent::new(ctx)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().locale != old_props.locale {
            self.form.set_locale(ctx.props().locale);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
