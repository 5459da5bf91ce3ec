//! Shader program construction.
//!
//! Setup runs these steps once, in order:
//! - [`compile_shader`] for the vertex and fragment stages
//! - [`link_program`] on the pair
//! - [`Uniforms::resolve`] on the linked program
//!
//! Every failure is reported as a [`SetupError`]; the objects created so far
//! are deleted before returning.

mod compile;
mod link;
mod source;
mod uniforms;

pub use compile::{compile_shader, compile_source};
pub use link::link_program;
pub use source::{shader_path, ShaderSource};
pub use uniforms::{UniformHandle, Uniforms, UNIFORM_NAMES};

use crate::assets::AssetPaths;
use crate::gl::{GlApi, ShaderStage};
use crate::SetupError;

/// Compiles `shader/<name>.vert` and `shader/<name>.frag` and links them.
pub fn build_program<G: GlApi>(
    gl: &G,
    assets: &AssetPaths,
    name: &str,
) -> Result<G::Program, SetupError> {
    let vertex = compile_shader(gl, assets, name, ShaderStage::Vertex)?;
    let fragment = match compile_shader(gl, assets, name, ShaderStage::Fragment) {
        Ok(fragment) => fragment,
        Err(err) => {
            gl.delete_shader(vertex);
            return Err(err);
        }
    };
    link_program(gl, vertex, fragment)
}

/// Driver info logs are optional; blank ones count as absent.
pub(crate) fn driver_log(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        log::debug!("driver returned an empty info log");
        None
    } else {
        Some(trimmed.to_string())
    }
}
