//! Camera.
//!
//! The camera owns the view matrix. The renderer borrows it once per frame and
//! never writes to it.

mod fly;

pub use fly::{CameraConfig, FlyCamera};
