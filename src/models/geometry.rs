// src/models/geometry.rs
// Rectangles in content space: origin top-left, y grows downward

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Overlapping region, or `None` when the rectangles only touch or are apart.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());

        if max_x > x && max_y > y {
            Some(Rect::new(x, y, max_x - x, max_y - y))
        } else {
            None
        }
    }

    /// Fraction of this rectangle covered by `viewport`, in 0.0..=1.0.
    pub fn visible_ratio(&self, viewport: &Rect) -> f32 {
        let area = self.area();
        if area <= 0.0 {
            return 0.0;
        }
        self.intersection(viewport)
            .map(|overlap| (overlap.area() / area).min(1.0))
            .unwrap_or(0.0)
    }
}
