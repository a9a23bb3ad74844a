// src/render/mod.rs
// nannou drawing for the counter grid

pub mod grid_renderer;

pub use grid_renderer::GridRenderer;
