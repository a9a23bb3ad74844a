// src/lib.rs

pub mod animation;
pub mod config;
pub mod errors;
pub mod models;
pub mod render;
pub mod views;
pub mod visibility;

#[cfg(test)]
pub(crate) mod testing;
