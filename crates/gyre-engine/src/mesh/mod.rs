//! Static mesh: model file parsing, upload, and drawing.
//!
//! The model is parsed on the CPU, copied once into a GPU array buffer and
//! then only drawn. Nothing mutates a [`Mesh`] after upload.

mod gpu;
mod model;

pub use gpu::Mesh;
pub use model::{Model, ModelParseError, Vertex};
