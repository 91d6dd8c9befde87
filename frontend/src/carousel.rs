//! Step carousel state and its auto-advance timer.
//!
//! Everything here is plain data so the slider component can stay a thin
//! rendering layer over it.

use serde::Deserialize;

use crate::config;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Step {
    pub title: String,
    pub description: String,
}

impl Step {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// What the owner of the interval should do after a flag change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start,
    Stop,
    Keep,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    active_index: usize,
    visible: bool,
    hovered: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active_index: 0,
            visible: false,
            hovered: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_paused(&self) -> bool {
        self.hovered
    }

    /// The interval should be running exactly when this holds.
    pub fn should_run(&self) -> bool {
        self.visible && !self.hovered
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.active_index = (self.active_index + 1) % self.len;
        }
    }

    pub fn retreat(&mut self) {
        if self.len > 0 {
            self.active_index = (self.active_index + self.len - 1) % self.len;
        }
    }

    /// Returns `false` and leaves the index alone when `index` is out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.active_index = index;
            true
        } else {
            false
        }
    }

    pub fn set_visible(&mut self, visible: bool) -> TimerCommand {
        self.transition(|c| c.visible = visible)
    }

    /// Feeds an intersection ratio from the viewport observer.
    pub fn observe_ratio(&mut self, ratio: f64) -> TimerCommand {
        self.set_visible(crosses_visibility_threshold(ratio))
    }

    pub fn set_hovered(&mut self, hovered: bool) -> TimerCommand {
        self.transition(|c| c.hovered = hovered)
    }

    fn transition(&mut self, change: impl FnOnce(&mut Self)) -> TimerCommand {
        let was_running = self.should_run();
        change(self);
        match (was_running, self.should_run()) {
            (false, true) => TimerCommand::Start,
            (true, false) => TimerCommand::Stop,
            _ => TimerCommand::Keep,
        }
    }
}

pub fn crosses_visibility_threshold(ratio: f64) -> bool {
    ratio >= config::VISIBILITY_THRESHOLD
}

/// Something that can start a repeating tick. Dropping the returned guard
/// must cancel the tick.
pub trait Ticker {
    type Guard;

    fn start(&self, period_ms: u32) -> Self::Guard;
}

/// Owns at most one running interval.
pub struct AutoAdvance<T: Ticker> {
    ticker: T,
    period_ms: u32,
    running: Option<T::Guard>,
}

impl<T: Ticker> AutoAdvance<T> {
    pub fn new(ticker: T, period_ms: u32) -> Self {
        Self {
            ticker,
            period_ms,
            running: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn apply(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Start => self.start(),
            TimerCommand::Stop => self.stop(),
            TimerCommand::Keep => {}
        }
    }

    /// Brings the timer in line with the carousel, whatever state it was in.
    pub fn sync(&mut self, carousel: &Carousel) {
        if carousel.should_run() {
            self.start();
        } else {
            self.stop();
        }
    }

    pub fn start(&mut self) {
        if self.running.is_none() {
            log::debug!("starting auto-advance every {}ms", self.period_ms);
            self.running = Some(self.ticker.start(self.period_ms));
        }
    }

    pub fn stop(&mut self) {
        if self.running.take().is_some() {
            log::debug!("auto-advance stopped");
        }
    }
}

pub fn default_steps() -> Vec<Step> {
    vec![
        Step::new(
            "Free Counselling",
            "Talk to an advisor about your goals, budget and the countries that fit them.",
        ),
        Step::new(
            "University Shortlist",
            "We match your profile with programs and prepare a shortlist you can trust.",
        ),
        Step::new(
            "Applications & Offers",
            "Documents, statements of purpose and submissions handled until the offer letter arrives.",
        ),
        Step::new(
            "Visa & Departure",
            "Visa filing, interview preparation, accommodation and a pre-departure briefing.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeTicker {
        live: Rc<Cell<usize>>,
        started: Rc<Cell<usize>>,
    }

    struct FakeGuard(Rc<Cell<usize>>);

    impl Drop for FakeGuard {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    impl Ticker for FakeTicker {
        type Guard = FakeGuard;

        fn start(&self, _period_ms: u32) -> FakeGuard {
            self.live.set(self.live.get() + 1);
            self.started.set(self.started.get() + 1);
            FakeGuard(self.live.clone())
        }
    }

    fn fake_timer() -> (AutoAdvance<FakeTicker>, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let live = Rc::new(Cell::new(0));
        let started = Rc::new(Cell::new(0));
        let ticker = FakeTicker {
            live: live.clone(),
            started: started.clone(),
        };
        (AutoAdvance::new(ticker, config::AUTO_ADVANCE_MS), live, started)
    }

    #[test]
    fn four_steps_wrap_after_the_last() {
        let mut carousel = Carousel::new(4);
        for _ in 0..3 {
            carousel.advance();
        }
        assert_eq!(carousel.active_index(), 3);
        carousel.advance();
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn advancing_n_times_returns_to_start() {
        for len in 1..8 {
            for start in 0..len {
                let mut carousel = Carousel::new(len);
                assert!(carousel.go_to(start));
                for _ in 0..len {
                    carousel.advance();
                }
                assert_eq!(carousel.active_index(), start, "len {len} start {start}");
            }
        }
    }

    #[test]
    fn retreat_from_first_goes_to_last() {
        let mut carousel = Carousel::new(5);
        carousel.retreat();
        assert_eq!(carousel.active_index(), 4);
        carousel.advance();
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut carousel = Carousel::new(3);
        carousel.go_to(2);
        assert!(!carousel.go_to(3));
        assert!(!carousel.go_to(usize::MAX));
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut carousel = Carousel::new(0);
        carousel.advance();
        carousel.retreat();
        assert!(!carousel.go_to(0));
        assert_eq!(carousel.active_index(), 0);
        assert!(carousel.is_empty());
    }

    #[test]
    fn visibility_threshold_is_forty_percent() {
        assert!(!crosses_visibility_threshold(0.0));
        assert!(!crosses_visibility_threshold(0.39));
        assert!(crosses_visibility_threshold(0.4));
        assert!(crosses_visibility_threshold(1.0));
    }

    #[test]
    fn commands_follow_the_run_predicate() {
        let mut carousel = Carousel::new(4);
        assert_eq!(carousel.observe_ratio(0.1), TimerCommand::Keep);
        assert_eq!(carousel.observe_ratio(0.6), TimerCommand::Start);
        assert_eq!(carousel.observe_ratio(0.9), TimerCommand::Keep);
        assert_eq!(carousel.set_hovered(true), TimerCommand::Stop);
        assert_eq!(carousel.set_visible(false), TimerCommand::Keep);
        assert_eq!(carousel.set_hovered(false), TimerCommand::Keep);
        assert_eq!(carousel.set_visible(true), TimerCommand::Start);
        assert!(carousel.should_run());
    }

    #[test]
    fn repeated_toggles_never_leak_a_second_timer() {
        let mut carousel = Carousel::new(4);
        let (mut timer, live, started) = fake_timer();

        for _ in 0..10 {
            timer.apply(carousel.set_visible(true));
            assert_eq!(live.get(), 1);
            timer.apply(carousel.set_hovered(true));
            assert_eq!(live.get(), 0);
            timer.apply(carousel.set_hovered(false));
            assert_eq!(live.get(), 1);
            timer.apply(carousel.set_visible(false));
            assert_eq!(live.get(), 0);
        }
        assert_eq!(started.get(), 20);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let (mut timer, live, started) = fake_timer();
        timer.start();
        timer.start();
        assert_eq!((live.get(), started.get()), (1, 1));
        timer.stop();
        timer.stop();
        assert_eq!(live.get(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn dropping_the_owner_cancels_the_timer() {
        let (mut timer, live, _) = fake_timer();
        let mut carousel = Carousel::new(2);
        carousel.set_visible(true);
        timer.sync(&carousel);
        assert_eq!(live.get(), 1);
        drop(timer);
        assert_eq!(live.get(), 0);
    }
}
