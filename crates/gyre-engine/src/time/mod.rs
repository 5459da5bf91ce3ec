//! Time subsystem.
//!
//! Provides the monotonic clock that feeds the renderer's `time` input:
//! - one `FrameClock` per render loop
//! - call `tick()` once per presented frame to obtain `FrameTime`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
