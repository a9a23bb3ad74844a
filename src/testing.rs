// src/testing.rs
//
// Deterministic stand-ins for the clock and visibility capabilities

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::animation::Clock;
use crate::visibility::*;

#[derive(Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn set(&self, now: f64) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

struct Registration {
    target: ElementId,
    callback: Rc<RefCell<IntersectionCallback>>,
}

/// Records every subscribe/unsubscribe and lets tests push ratios by hand.
#[derive(Default)]
pub struct RecordingObserver {
    next_id: Cell<u64>,
    subscribes: Cell<usize>,
    unsubscribes: Cell<usize>,
    thresholds: RefCell<Vec<f32>>,
    registrations: RefCell<BTreeMap<SubscriptionId, Registration>>,
}

impl RecordingObserver {
    pub fn subscribe_count(&self) -> usize {
        self.subscribes.get()
    }

    pub fn unsubscribe_count(&self) -> usize {
        self.unsubscribes.get()
    }

    pub fn active(&self) -> usize {
        self.registrations.borrow().len()
    }

    pub fn thresholds(&self) -> Vec<f32> {
        self.thresholds.borrow().clone()
    }

    pub fn emit(&self, target: ElementId, ratio: f32) {
        let callbacks: Vec<_> = self
            .registrations
            .borrow()
            .values()
            .filter(|registration| registration.target == target)
            .map(|registration| registration.callback.clone())
            .collect();

        let entry = IntersectionEntry::new(target, ratio);
        for callback in callbacks {
            let mut callback = callback.borrow_mut();
            (*callback)(&entry);
        }
    }
}

impl VisibilityObserver for RecordingObserver {
    fn observe(
        &self,
        target: ElementId,
        threshold: f32,
        callback: IntersectionCallback,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribes.set(self.subscribes.get() + 1);
        self.thresholds.borrow_mut().push(threshold);

        self.registrations.borrow_mut().insert(
            id,
            Registration {
                target,
                callback: Rc::new(RefCell::new(callback)),
            },
        );
        id
    }

    fn unobserve(&self, id: SubscriptionId) {
        if self.registrations.borrow_mut().remove(&id).is_some() {
            self.unsubscribes.set(self.unsubscribes.get() + 1);
        }
    }
}
