use crate::gl::GlApi;
use crate::SetupError;

use super::model::{Model, Vertex};

/// Vertex buffer holding an uploaded [`Model`].
///
/// Attribute layout:
/// - location 0: position (vec3)
/// - location 1: normal (vec3)
///
/// Drawing expects the renderer's vertex array object to be bound.
#[derive(Debug)]
pub struct Mesh<G: GlApi> {
    buffer: G::Buffer,
    vertex_count: i32,
}

impl<G: GlApi> Mesh<G> {
    /// Copies the model's vertices into a new static array buffer.
    pub fn upload(gl: &G, model: &Model) -> Result<Self, SetupError> {
        let vertex_count = i32::try_from(model.vertex_count()).map_err(|_| SetupError::GpuObject {
            what: "vertex buffer",
            reason: format!("{} vertices exceed the draw range", model.vertex_count()),
        })?;

        let buffer = gl.create_buffer().map_err(|reason| SetupError::GpuObject {
            what: "vertex buffer",
            reason,
        })?;

        gl.bind_array_buffer(Some(buffer));
        gl.array_buffer_data(bytemuck::cast_slice(model.vertices()));
        gl.bind_array_buffer(None);

        log::debug!(
            "uploaded mesh: {} triangles, {} bytes",
            model.triangle_count(),
            model.vertex_count() * Vertex::STRIDE as usize
        );

        Ok(Self {
            buffer,
            vertex_count,
        })
    }

    /// Issues one draw call for the whole mesh.
    ///
    /// Leaves the buffer bound; the frame renderer unbinds it at the end of the
    /// frame.
    pub fn draw(&self, gl: &G) {
        gl.bind_array_buffer(Some(self.buffer));
        gl.vertex_attrib_f32(0, 3, Vertex::STRIDE, Vertex::POSITION_OFFSET);
        gl.vertex_attrib_f32(1, 3, Vertex::STRIDE, Vertex::NORMAL_OFFSET);
        gl.draw_triangles(0, self.vertex_count);
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }
}
