// src/views/mod.rs

pub mod counter_grid;
pub mod scroll;

pub use counter_grid::{card_bounds, CardView, CounterCard, CounterGrid};
pub use scroll::ScrollView;
