//! OpenGL context + surface management.
//!
//! This module is responsible for:
//! - creating the window together with a core-profile GL context
//! - loading GL functions into a [`GlowBackend`](crate::gl::GlowBackend)
//! - resizing and presenting the window surface

mod context;
mod init;

pub use context::GlContext;
pub use init::GlInit;
