pub mod clock;
pub mod counter;
pub mod easing;
pub mod frame;

pub use clock::{Clock, MonotonicClock};
pub use counter::{AnimatedNumber, Capabilities, Phase};
pub use easing::ease_in;
pub use frame::{FrameCallback, FrameQueue, FrameScheduler};
