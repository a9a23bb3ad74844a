// src/render/grid_renderer.rs
// draws the counter cards with nannou

use nannou::prelude::*;

use crate::config::StyleConfig;
use crate::views::{CardView, ScrollView};

pub struct GridRenderer {
    background: Rgb<f32>,
    card_color: Rgb<f32>,
    number_color: Rgb<f32>,
    label_color: Rgb<f32>,
    number_font_size: u32,
    label_font_size: u32,
}

impl GridRenderer {
    pub fn new(style: &StyleConfig) -> Self {
        Self {
            background: to_rgb(style.background),
            card_color: to_rgb(style.card_color),
            number_color: to_rgb(style.number_color),
            label_color: to_rgb(style.label_color),
            number_font_size: style.number_font_size,
            label_font_size: style.label_font_size,
        }
    }

    pub fn draw(&self, draw: &Draw, cards: &[CardView], scroll: &ScrollView) {
        draw.background().color(self.background);
        let viewport = scroll.viewport();

        for card in cards {
            // Skip anything fully off-screen
            if card.bounds.intersection(&viewport).is_none() {
                continue;
            }

            let (center_x, center_y) = card.bounds.center();
            let (x, y) = scroll.to_window(center_x, center_y);
            let (w, h) = (card.bounds.width, card.bounds.height);

            draw.rect().x_y(x, y).w_h(w, h).color(self.card_color);

            // Number in the upper part of the card, label beneath it
            draw.text(&card.text)
                .x_y(x, y + h * 0.12)
                .w_h(w, h * 0.5)
                .font_size(self.number_font_size)
                .color(self.number_color);

            draw.text(&card.label)
                .x_y(x, y - h * 0.25)
                .w_h(w * 0.9, h * 0.3)
                .font_size(self.label_font_size)
                .color(self.label_color);
        }
    }
}

fn to_rgb(color: [f32; 3]) -> Rgb<f32> {
    rgb(color[0], color[1], color[2])
}
