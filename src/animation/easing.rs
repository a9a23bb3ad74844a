// src/animation/easing.rs
//
// easing curve over normalized progress (0.0-1.0)

/// Quadratic ease-in: slow start, fastest at the end.
pub fn ease_in(t: f64) -> f64 {
    t * t
}
