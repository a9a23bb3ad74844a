// src/views/scroll.rs
//
// Vertical scroll state of the window over the grid's content space.
// The content is centered horizontally in the window.

use crate::models::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollView {
    offset: f32,
    width: f32,
    height: f32,
    content_width: f32,
    content_height: f32,
}

impl ScrollView {
    pub fn new(width: f32, height: f32, content_width: f32, content_height: f32) -> Self {
        Self {
            offset: 0.0,
            width,
            height,
            content_width,
            content_height,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.height).max(0.0)
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.offset + delta);
    }

    pub fn scroll_to(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.height);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-self.height);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.scroll_to(self.offset);
    }

    /// The part of content space currently inside the window.
    pub fn viewport(&self) -> Rect {
        Rect::new(
            (self.content_width - self.width) / 2.0,
            self.offset,
            self.width,
            self.height,
        )
    }

    /// Window coordinates (origin at the center, y up) of a content-space point.
    pub fn to_window(&self, x: f32, y: f32) -> (f32, f32) {
        let viewport = self.viewport();
        (
            x - viewport.x - self.width / 2.0,
            self.height / 2.0 - (y - viewport.y),
        )
    }
}
