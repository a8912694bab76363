//! Admin dashboard: lists submitted applications for holders of the admin key.
//!
//! Responsibilities
//! - Collect the key, then load `GET /api/recruit?admin=<key>`; a rejected
//!   key leaves the dashboard locked and shows the server's message.
//! - Refresh and log out. The key lives only in component memory.
//! - Open one application in a top sheet via `GET /api/recruit/{id}`.
//!
//! Copy is Korean: the admin route carries no locale prefix.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::AdminPage;

impl Component for AdminPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        AdminPage::new(ctx)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
