// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub stats_file: String,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

/************************* Animation Configs ********************/
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    pub duration_ms: f64, // Length of the count-up
    pub threshold: f32,   // Visible fraction of a card that starts it (0.0-1.0)
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000.0,
            threshold: 0.4,
        }
    }
}

/************************* Layout Configs ***********************/
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub columns: usize,
    pub card_width: f32,
    pub card_height: f32,
    pub gap: f32,
    pub top_offset: f32,     // Empty space above the grid, in content units
    pub bottom_padding: f32, // Empty space below the grid
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            card_width: 270.0,
            card_height: 180.0,
            gap: 24.0,
            top_offset: 0.0,
            bottom_padding: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StyleConfig {
    pub background: [f32; 3],
    pub card_color: [f32; 3],
    pub number_color: [f32; 3],
    pub label_color: [f32; 3],
    pub number_font_size: u32,
    pub label_font_size: u32,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ScrollConfig {
    pub wheel_step: f32, // Pixels per wheel line
    pub key_step: f32,   // Pixels per arrow key press
}
