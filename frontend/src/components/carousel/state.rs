use std::time::Duration;

use common::carousel::{CarouselController, TimerScheduler};
use gloo_timers::callback::Interval;
use yew::Callback;

use crate::theme::Theme;

pub struct Carousel {
    pub controller: CarouselController<IntervalScheduler>,
    pub theme: Theme,
}

/// Starts browser intervals that report back through a component callback.
///
/// The returned [`Interval`] cancels itself when dropped, which is how the
/// controller stops a timer.
pub struct IntervalScheduler {
    on_tick: Callback<u64>,
}

impl IntervalScheduler {
    pub fn new(on_tick: Callback<u64>) -> Self {
        Self { on_tick }
    }
}

impl TimerScheduler for IntervalScheduler {
    type Handle = Interval;

    fn start(&mut self, period: Duration, generation: u64) -> Interval {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        let on_tick = self.on_tick.clone();
        Interval::new(millis, move || on_tick.emit(generation))
    }
}
