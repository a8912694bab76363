//! Cyclic slide controller behind the landing-page carousel.
//!
//! The controller owns the current index over a fixed number of slides and,
//! when autoplay is on, one repeating timer obtained from a [`TimerScheduler`].
//! The timer is an owned handle: dropping it cancels it. The controller drops
//! the handle whenever autoplay is switched off, the pointer hovers, the
//! interval changes, the slide list empties or the controller itself is
//! dropped, so a callback is never left running after teardown.
//!
//! Every armed timer is tagged with a generation number and ticks are routed
//! back through [`CarouselController::on_tick`]. Ticks carrying a stale
//! generation are ignored, so at most one timer can ever advance the index.

use std::time::Duration;
use thiserror::Error;

/// Autoplay period used when the caller does not pick one.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

/// Source of repeating timers.
pub trait TimerScheduler {
    /// Cancels the timer when dropped.
    type Handle;

    /// Starts a timer firing every `period`. Each tick must be delivered to
    /// [`CarouselController::on_tick`] with the same `generation`.
    fn start(&mut self, period: Duration, generation: u64) -> Self::Handle;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("slide index {index} is out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    pub infinite: bool,
    pub auto_play: bool,
    pub interval: Duration,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            infinite: true,
            auto_play: false,
            interval: DEFAULT_INTERVAL,
        }
    }
}

struct ArmedTimer<H> {
    generation: u64,
    _handle: H,
}

pub struct CarouselController<S: TimerScheduler> {
    scheduler: S,
    len: usize,
    current: usize,
    infinite: bool,
    interval: Duration,
    auto_play: bool,
    hovered: bool,
    generation: u64,
    timer: Option<ArmedTimer<S::Handle>>,
}

impl<S: TimerScheduler> CarouselController<S> {
    pub fn new(scheduler: S, len: usize, options: CarouselOptions) -> Self {
        let mut controller = Self {
            scheduler,
            len,
            current: 0,
            infinite: options.infinite,
            interval: options.interval,
            auto_play: options.auto_play,
            hovered: false,
            generation: 0,
            timer: None,
        };
        controller.sync_timer();
        controller
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn infinite(&self) -> bool {
        self.infinite
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The persisted autoplay intent, unaffected by hover pauses.
    pub fn is_auto_playing(&self) -> bool {
        self.auto_play
    }

    /// Whether a timer is currently armed.
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn can_go_next(&self) -> bool {
        self.len > 1 && (self.infinite || self.current < self.len - 1)
    }

    pub fn can_go_previous(&self) -> bool {
        self.len > 1 && (self.infinite || self.current > 0)
    }

    /// Moves forward one slide. Returns whether the index changed.
    ///
    /// A manual move restarts the autoplay countdown.
    pub fn next(&mut self) -> bool {
        let moved = self.step_forward();
        if moved {
            self.restart_timer();
        }
        moved
    }

    /// Moves back one slide. Returns whether the index changed.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current = (self.current + self.len - 1) % self.len;
        self.restart_timer();
        true
    }

    /// Shows slide `index` directly. With no slides this is a no-op.
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if self.len == 0 {
            return Ok(());
        }
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index != self.current {
            self.current = index;
            self.restart_timer();
        }
        Ok(())
    }

    pub fn set_auto_play(&mut self, enabled: bool) {
        if self.auto_play == enabled {
            return;
        }
        self.auto_play = enabled;
        self.sync_timer();
    }

    /// Changes the autoplay period, re-arming a running timer with it.
    pub fn set_interval(&mut self, interval: Duration) {
        if self.interval == interval {
            return;
        }
        self.interval = interval;
        self.restart_timer();
    }

    pub fn set_infinite(&mut self, infinite: bool) {
        self.infinite = infinite;
    }

    /// Pauses autoplay without touching the autoplay intent.
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.sync_timer();
    }

    /// Resumes autoplay if it is still intended.
    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        self.sync_timer();
    }

    /// Replaces the slide count, keeping the index in range.
    pub fn set_len(&mut self, len: usize) {
        if self.len == len {
            return;
        }
        self.len = len;
        self.current = self.current.min(len.saturating_sub(1));
        self.sync_timer();
    }

    /// Timer callback. Ticks from timers that were already replaced or
    /// cancelled are ignored. Returns whether the index changed.
    pub fn on_tick(&mut self, generation: u64) -> bool {
        match &self.timer {
            Some(timer) if timer.generation == generation => self.step_forward(),
            _ => false,
        }
    }

    /// Releases the timer for good; used on unmount.
    pub fn shutdown(&mut self) {
        self.auto_play = false;
        self.timer = None;
    }

    fn step_forward(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current = (self.current + 1) % self.len;
        true
    }

    fn should_run(&self) -> bool {
        self.auto_play && !self.hovered && self.len > 1
    }

    fn sync_timer(&mut self) {
        match (self.should_run(), self.timer.is_some()) {
            (true, false) => self.arm(),
            (false, true) => self.timer = None,
            _ => {}
        }
    }

    fn restart_timer(&mut self) {
        if self.timer.is_some() {
            self.timer = None;
            self.arm();
        }
    }

    fn arm(&mut self) {
        self.generation += 1;
        let handle = self.scheduler.start(self.interval, self.generation);
        self.timer = Some(ArmedTimer {
            generation: self.generation,
            _handle: handle,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct ClockState {
        now_ms: u64,
        next_id: usize,
        timers: Vec<FakeTimer>,
    }

    struct FakeTimer {
        id: usize,
        generation: u64,
        period_ms: u64,
        due_ms: u64,
        active: bool,
    }

    /// Simulated clock shared by the test and the scheduler it hands out.
    #[derive(Clone, Default)]
    struct FakeClock(Rc<RefCell<ClockState>>);

    struct FakeHandle {
        id: usize,
        clock: FakeClock,
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            let mut state = self.clock.0.borrow_mut();
            if let Some(timer) = state.timers.iter_mut().find(|t| t.id == self.id) {
                timer.active = false;
            }
        }
    }

    impl TimerScheduler for FakeClock {
        type Handle = FakeHandle;

        fn start(&mut self, period: Duration, generation: u64) -> FakeHandle {
            let mut state = self.0.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let period_ms = period.as_millis() as u64;
            let due_ms = state.now_ms + period_ms;
            state.timers.push(FakeTimer {
                id,
                generation,
                period_ms,
                due_ms,
                active: true,
            });
            FakeHandle {
                id,
                clock: self.clone(),
            }
        }
    }

    impl FakeClock {
        fn active_timers(&self) -> usize {
            self.0.borrow().timers.iter().filter(|t| t.active).count()
        }

        fn started_timers(&self) -> usize {
            self.0.borrow().next_id
        }

        /// Advances time by `ms`, firing every due tick in order.
        fn advance(&self, ms: u64, controller: &mut CarouselController<FakeClock>) {
            let target = self.0.borrow().now_ms + ms;
            loop {
                let due = {
                    let mut state = self.0.borrow_mut();
                    let next = state
                        .timers
                        .iter_mut()
                        .filter(|t| t.active && t.due_ms <= target)
                        .min_by_key(|t| t.due_ms);
                    match next {
                        Some(timer) => {
                            let fired = (timer.due_ms, timer.generation);
                            timer.due_ms += timer.period_ms;
                            Some(fired)
                        }
                        None => None,
                    }
                };
                match due {
                    Some((at, generation)) => {
                        self.0.borrow_mut().now_ms = at;
                        controller.on_tick(generation);
                    }
                    None => break,
                }
            }
            self.0.borrow_mut().now_ms = target;
        }
    }

    fn controller(len: usize, options: CarouselOptions) -> (FakeClock, CarouselController<FakeClock>) {
        let clock = FakeClock::default();
        let controller = CarouselController::new(clock.clone(), len, options);
        (clock, controller)
    }

    fn autoplay(interval_ms: u64) -> CarouselOptions {
        CarouselOptions {
            infinite: true,
            auto_play: true,
            interval: Duration::from_millis(interval_ms),
        }
    }

    #[test]
    fn next_cycles_back_to_start_when_infinite() {
        for len in 2..7 {
            for start in 0..len {
                let (_, mut carousel) = controller(len, CarouselOptions::default());
                carousel.jump_to(start).unwrap();
                for _ in 0..len {
                    carousel.next();
                }
                assert_eq!(carousel.current_index(), start, "len {len}, start {start}");
            }
        }
    }

    #[test]
    fn previous_wraps_when_infinite() {
        let (_, mut carousel) = controller(4, CarouselOptions::default());
        assert!(carousel.previous());
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn finite_carousel_clamps_at_both_ends() {
        let options = CarouselOptions {
            infinite: false,
            ..CarouselOptions::default()
        };
        let (_, mut carousel) = controller(3, options);

        assert!(!carousel.can_go_previous());
        assert!(!carousel.previous());
        assert_eq!(carousel.current_index(), 0);

        for _ in 0..10 {
            carousel.next();
            assert!(carousel.current_index() <= 2);
            assert_eq!(!carousel.can_go_next(), carousel.current_index() == 2);
        }
        assert_eq!(carousel.current_index(), 2);
        assert!(!carousel.next());
    }

    #[test]
    fn empty_and_single_slide_carousels_never_move() {
        let (clock, mut empty) = controller(0, autoplay(100));
        assert!(!empty.next());
        assert!(!empty.previous());
        assert_eq!(empty.jump_to(5), Ok(()));
        assert!(!empty.is_running());
        assert_eq!(clock.started_timers(), 0);

        let (_, mut single) = controller(1, CarouselOptions::default());
        assert!(!single.next());
        assert!(!single.previous());
        assert_eq!(single.current_index(), 0);
        assert!(!single.can_go_next());
    }

    #[test]
    fn jump_out_of_range_is_an_error() {
        let (_, mut carousel) = controller(3, CarouselOptions::default());
        assert_eq!(
            carousel.jump_to(3),
            Err(CarouselError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(carousel.jump_to(2).is_ok());
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn autoplay_advances_once_per_interval_and_freezes_when_disabled() {
        let (clock, mut carousel) = controller(4, autoplay(3000));

        clock.advance(3000 * 6, &mut carousel);
        assert_eq!(carousel.current_index(), 6 % 4);

        carousel.set_auto_play(false);
        assert!(!carousel.is_running());
        clock.advance(3000 * 10, &mut carousel);
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn enabling_twice_keeps_a_single_timer() {
        let (clock, mut carousel) = controller(3, CarouselOptions::default());
        carousel.set_auto_play(true);
        carousel.set_auto_play(true);
        assert_eq!(clock.active_timers(), 1);
        assert_eq!(clock.started_timers(), 1);

        clock.advance(3000, &mut carousel);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn hover_pauses_and_resumes_without_double_advance() {
        let (clock, mut carousel) = controller(5, autoplay(1000));
        clock.advance(2000, &mut carousel);
        assert_eq!(carousel.current_index(), 2);

        carousel.pointer_enter();
        assert!(carousel.is_auto_playing());
        assert!(!carousel.is_running());
        clock.advance(10_000, &mut carousel);
        assert_eq!(carousel.current_index(), 2);

        carousel.pointer_leave();
        assert_eq!(clock.active_timers(), 1);
        clock.advance(999, &mut carousel);
        assert_eq!(carousel.current_index(), 2);
        clock.advance(1, &mut carousel);
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn pointer_leave_without_intent_stays_paused() {
        let (clock, mut carousel) = controller(3, CarouselOptions::default());
        carousel.pointer_enter();
        carousel.pointer_leave();
        assert!(!carousel.is_running());
        assert_eq!(clock.started_timers(), 0);
    }

    #[test]
    fn changing_interval_rearms_with_new_period() {
        let (clock, mut carousel) = controller(10, autoplay(3000));
        clock.advance(1000, &mut carousel);

        carousel.set_interval(Duration::from_millis(500));
        assert_eq!(clock.active_timers(), 1);
        assert_eq!(clock.started_timers(), 2);

        clock.advance(2000, &mut carousel);
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn stale_generation_ticks_are_ignored() {
        let (_, mut carousel) = controller(3, autoplay(1000));
        carousel.set_interval(Duration::from_millis(2000));
        assert!(!carousel.on_tick(1));
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.on_tick(2));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn manual_navigation_restarts_the_countdown() {
        let (clock, mut carousel) = controller(6, autoplay(1000));
        clock.advance(900, &mut carousel);
        carousel.next();
        assert_eq!(carousel.current_index(), 1);

        clock.advance(900, &mut carousel);
        assert_eq!(carousel.current_index(), 1);
        clock.advance(100, &mut carousel);
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(clock.active_timers(), 1);
    }

    #[test]
    fn shrinking_to_empty_releases_the_timer() {
        let (clock, mut carousel) = controller(4, autoplay(1000));
        carousel.jump_to(3).unwrap();
        carousel.set_len(2);
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.is_running());

        carousel.set_len(0);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn dropping_or_shutting_down_cancels_the_timer() {
        let (clock, mut carousel) = controller(3, autoplay(1000));
        carousel.shutdown();
        assert_eq!(clock.active_timers(), 0);

        let (clock, carousel) = controller(3, autoplay(1000));
        assert_eq!(clock.active_timers(), 1);
        drop(carousel);
        assert_eq!(clock.active_timers(), 0);
    }
}
