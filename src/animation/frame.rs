// src/animation/frame.rs
//
// "Call me on the next display refresh" capability and the queue the app
// drains once per update.

use std::cell::RefCell;

pub type FrameCallback = Box<dyn FnOnce(f64)>;

pub trait FrameScheduler {
    /// Queue a single callback; it receives the frame timestamp in milliseconds.
    fn request_frame(&self, callback: FrameCallback);
}

#[derive(Default)]
pub struct FrameQueue {
    pending: RefCell<Vec<FrameCallback>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Run everything requested before this frame began, in request order.
    /// Requests made while running land in the next frame.
    pub fn run_frame(&self, now: f64) -> usize {
        let due = std::mem::take(&mut *self.pending.borrow_mut());
        let count = due.len();
        for callback in due {
            callback(now);
        }
        count
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&self, callback: FrameCallback) {
        self.pending.borrow_mut().push(callback);
    }
}
