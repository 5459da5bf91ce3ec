//! OpenGL abstraction.
//!
//! The renderer talks to the driver through [`GlApi`], a narrow trait covering
//! only the calls it issues. [`GlowBackend`] implements it over `glow` for a
//! live context; unit tests implement it with a recording fake.

mod api;
mod glow_backend;

#[cfg(test)]
pub(crate) mod fake;

pub use api::{GlApi, ShaderStage};
pub use glow_backend::GlowBackend;
