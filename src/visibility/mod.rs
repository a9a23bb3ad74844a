// src/visibility/mod.rs

pub mod observer;
pub mod viewport;

pub use observer::{
    ElementId, IntersectionCallback, IntersectionEntry, Subscription, SubscriptionId,
    VisibilityObserver,
};
pub use viewport::ViewportObserver;
