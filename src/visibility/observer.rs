// src/visibility/observer.rs
//
// The visibility capability: register an element with a coverage threshold,
// get called back with its intersection ratio, unregister.

use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// What an observer reports about one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub ratio: f32,
}

impl IntersectionEntry {
    pub fn new(target: ElementId, ratio: f32) -> Self {
        Self { target, ratio }
    }
}

pub type IntersectionCallback = Box<dyn FnMut(&IntersectionEntry)>;

pub trait VisibilityObserver {
    fn observe(
        &self,
        target: ElementId,
        threshold: f32,
        callback: IntersectionCallback,
    ) -> SubscriptionId;

    fn unobserve(&self, id: SubscriptionId);
}

/// A standing observation. Dropping it unregisters from the observer.
pub struct Subscription {
    observer: Rc<dyn VisibilityObserver>,
    id: SubscriptionId,
}

impl Subscription {
    pub fn new(
        observer: Rc<dyn VisibilityObserver>,
        target: ElementId,
        threshold: f32,
        callback: IntersectionCallback,
    ) -> Self {
        let id = observer.observe(target, threshold, callback);
        Self { observer, id }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.observer.unobserve(self.id);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
