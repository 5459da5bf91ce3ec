//! Frame rendering.
//!
//! [`Renderer`] is the single-program renderer: created once by
//! [`Renderer::setup`], told about drawable size changes through
//! [`Renderer::on_viewport`], and asked to draw through [`Renderer::render`].
//!
//! Coordinate conventions follow OpenGL: right-handed world, +Y up, clip depth
//! in -1..1.

mod config;
mod instances;
mod projection;
mod renderer;

pub use config::RendererConfig;
pub use instances::InstanceLayout;
pub use projection::{aspect_ratio, perspective, ProjectionConfig};
pub use renderer::{FrameStats, Renderer};
