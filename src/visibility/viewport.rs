// src/visibility/viewport.rs
//
// VisibilityObserver backed by plain rectangle geometry.
// The host feeds it the current viewport and element bounds once per frame;
// observers are notified on their first update and whenever the element
// crosses its threshold in either direction.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::trace;

use super::observer::*;
use crate::models::Rect;

struct Observation {
    target: ElementId,
    threshold: f32,
    last_visible: Option<bool>,
    callback: Rc<RefCell<IntersectionCallback>>,
}

#[derive(Default)]
pub struct ViewportObserver {
    next_id: RefCell<u64>,
    observations: RefCell<BTreeMap<SubscriptionId, Observation>>,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_subscriptions(&self) -> usize {
        self.observations.borrow().len()
    }

    pub fn update<F>(&self, viewport: &Rect, bounds: F)
    where
        F: Fn(ElementId) -> Option<Rect>,
    {
        let mut pending = Vec::new();

        for observation in self.observations.borrow_mut().values_mut() {
            let Some(rect) = bounds(observation.target) else {
                continue;
            };
            let ratio = rect.visible_ratio(viewport);
            let visible = ratio >= observation.threshold;

            if observation.last_visible != Some(visible) {
                observation.last_visible = Some(visible);
                pending.push((
                    observation.callback.clone(),
                    IntersectionEntry::new(observation.target, ratio),
                ));
            }
        }

        // Callbacks run with the map released so they may unobserve
        for (callback, entry) in pending {
            trace!("{:?} crossed threshold at ratio {:.2}", entry.target, entry.ratio);
            let mut callback = callback.borrow_mut();
            (*callback)(&entry);
        }
    }
}

impl VisibilityObserver for ViewportObserver {
    fn observe(
        &self,
        target: ElementId,
        threshold: f32,
        callback: IntersectionCallback,
    ) -> SubscriptionId {
        let mut next_id = self.next_id.borrow_mut();
        let id = SubscriptionId(*next_id);
        *next_id += 1;

        self.observations.borrow_mut().insert(
            id,
            Observation {
                target,
                threshold,
                last_visible: None,
                callback: Rc::new(RefCell::new(callback)),
            },
        );
        id
    }

    fn unobserve(&self, id: SubscriptionId) {
        self.observations.borrow_mut().remove(&id);
    }
}
