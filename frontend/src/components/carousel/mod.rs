//! Slide carousel: a Yew shell around [`common::carousel::CarouselController`].
//!
//! The controller owns every navigation and timing rule; this component only
//! translates DOM events into controller calls and renders its current index.
//! Auto-advance runs on a `gloo_timers` interval whose ticks come back as
//! [`Msg::Tick`] tagged with the timer generation, so ticks from a replaced
//! timer are dropped by the controller.
//!
//! Lifecycle
//! - `changed` pushes new props (slide count, interval, auto-play, infinite)
//!   into the controller, which re-arms or cancels the timer as needed.
//! - `destroy` shuts the controller down, dropping the live interval.

use std::time::Duration;

use common::carousel::{CarouselController, CarouselOptions};
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod view;

pub use messages::Msg;
pub use props::CarouselProps;
pub use state::{Carousel, IntervalScheduler};

use crate::theme::theme_from_scope;

impl Component for Carousel {
    type Message = Msg;
    type Properties = CarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let scheduler = IntervalScheduler::new(ctx.link().callback(Msg::Tick));
        let controller = CarouselController::new(
            scheduler,
            props.children.len(),
            CarouselOptions {
                infinite: props.infinite,
                auto_play: props.auto_play,
                interval: Duration::from_millis(props.interval_ms.into()),
            },
        );
        Carousel {
            controller,
            theme: theme_from_scope(ctx.link()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Next => self.controller.next(),
            Msg::Previous => self.controller.previous(),
            Msg::JumpTo(index) => match self.controller.jump_to(index) {
                Ok(()) => true,
                Err(err) => {
                    gloo_console::error!(err.to_string());
                    false
                }
            },
            Msg::Tick(generation) => self.controller.on_tick(generation),
            Msg::PointerEnter => {
                self.controller.pointer_enter();
                false
            }
            Msg::PointerLeave => {
                self.controller.pointer_leave();
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        self.controller.set_len(props.children.len());
        self.controller.set_infinite(props.infinite);
        self.controller
            .set_interval(Duration::from_millis(props.interval_ms.into()));
        self.controller.set_auto_play(props.auto_play);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.controller.shutdown();
    }
}
