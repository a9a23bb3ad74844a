// src/animation/counter.rs
//
// A number that counts up from zero the first time its element becomes
// visible enough. One instance per displayed stat.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use super::{ease_in, Clock, FrameScheduler};
use crate::config::AnimationConfig;
use crate::visibility::{ElementId, IntersectionEntry, Subscription, VisibilityObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Started,
    /// Unmounted. Terminal; pending frames become no-ops.
    Destroyed,
}

#[derive(Debug)]
struct AnimationState {
    current_count: i64,
    phase: Phase,
    finished: bool,
}

impl AnimationState {
    fn new() -> Self {
        Self {
            current_count: 0,
            phase: Phase::NotStarted,
            finished: false,
        }
    }

    // The only NotStarted -> Started transition. Returns false if already taken.
    fn start(&mut self) -> bool {
        if self.phase == Phase::NotStarted {
            self.phase = Phase::Started;
            true
        } else {
            false
        }
    }
}

/// The environment capabilities an animated number needs.
#[derive(Clone)]
pub struct Capabilities {
    pub observer: Rc<dyn VisibilityObserver>,
    pub scheduler: Rc<dyn FrameScheduler>,
    pub clock: Rc<dyn Clock>,
}

pub fn progress_at(elapsed: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed / duration_ms).clamp(0.0, 1.0)
}

/// `floor(eased * value)`, kept between 0 and `value` since large values
/// lose precision as f64.
pub fn count_at(value: i64, eased: f64) -> i64 {
    let count = (eased * value as f64).floor() as i64;
    if value >= 0 {
        count.clamp(0, value)
    } else {
        count.clamp(value, 0)
    }
}

pub struct AnimatedNumber {
    value: i64,
    suffix: String,
    state: Rc<RefCell<AnimationState>>,
    subscription: Option<Subscription>,
}

impl AnimatedNumber {
    pub fn mount(
        element: ElementId,
        value: i64,
        suffix: &str,
        settings: AnimationConfig,
        capabilities: &Capabilities,
    ) -> Self {
        let state = Rc::new(RefCell::new(AnimationState::new()));

        let on_intersect = {
            let state = state.clone();
            let scheduler = capabilities.scheduler.clone();
            let clock = capabilities.clock.clone();

            move |entry: &IntersectionEntry| {
                if entry.ratio < settings.threshold || !state.borrow_mut().start() {
                    return;
                }
                debug!("{:?} visible at {:.2}, counting to {}", element, entry.ratio, value);

                CountUp {
                    element,
                    value,
                    duration_ms: settings.duration_ms,
                    start_time: clock.now(),
                    state: state.clone(),
                    scheduler: scheduler.clone(),
                }
                .request_next();
            }
        };

        let subscription = Subscription::new(
            capabilities.observer.clone(),
            element,
            settings.threshold,
            Box::new(on_intersect),
        );

        Self {
            value,
            suffix: suffix.to_string(),
            state,
            subscription: Some(subscription),
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn current_count(&self) -> i64 {
        self.state.borrow().current_count
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    pub fn has_started(&self) -> bool {
        self.phase() != Phase::NotStarted
    }

    pub fn is_finished(&self) -> bool {
        self.state.borrow().finished
    }

    pub fn text(&self) -> String {
        format!("{}{}", self.current_count(), self.suffix)
    }

    /// Stop observing and freeze the count. Safe to call more than once.
    pub fn unmount(&mut self) {
        self.state.borrow_mut().phase = Phase::Destroyed;
        self.subscription.take();
    }
}

impl Drop for AnimatedNumber {
    fn drop(&mut self) {
        self.unmount();
    }
}

// One running count-up. Each frame consumes it and re-queues it until done.
struct CountUp {
    element: ElementId,
    value: i64,
    duration_ms: f64,
    start_time: f64,
    state: Rc<RefCell<AnimationState>>,
    scheduler: Rc<dyn FrameScheduler>,
}

impl CountUp {
    fn request_next(self) {
        let scheduler = self.scheduler.clone();
        scheduler.request_frame(Box::new(move |now: f64| self.tick(now)));
    }

    fn tick(self, now: f64) {
        let progress = {
            let mut state = self.state.borrow_mut();
            if state.phase == Phase::Destroyed {
                return;
            }

            let progress = progress_at(now - self.start_time, self.duration_ms);
            if progress >= 1.0 {
                state.current_count = self.value;
                state.finished = true;
            } else {
                state.current_count = count_at(self.value, ease_in(progress));
            }
            progress
        };

        if progress < 1.0 {
            self.request_next();
        } else {
            debug!("{:?} settled at {}", self.element, self.value);
        }
    }
}
