pub mod data_model;
pub mod geometry;

pub use data_model::{StatItem, StatsFile};
pub use geometry::Rect;
