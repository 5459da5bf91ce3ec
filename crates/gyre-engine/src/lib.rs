//! Gyre engine crate.
//!
//! A minimal OpenGL scene renderer: one shader program, one mesh, a ring of
//! spinning instances. This crate owns the platform + GL runtime pieces and
//! the renderer; the `gyre-viewer` binary wires them together.

pub mod assets;
pub mod camera;
pub mod core;
pub mod device;
pub mod gl;
pub mod input;
pub mod logging;
pub mod mesh;
pub mod render;
pub mod shader;
pub mod time;
pub mod window;

mod error;

pub use error::SetupError;
