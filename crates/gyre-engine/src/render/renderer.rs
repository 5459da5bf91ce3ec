use glam::Mat4;

use crate::gl::GlApi;
use crate::mesh::{Mesh, Model};
use crate::shader::{self, Uniforms};
use crate::SetupError;

use super::config::RendererConfig;
use super::instances::InstanceLayout;
use super::projection::{self, ProjectionConfig};

/// Summary of one rendered frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    pub draw_calls: u32,
}

/// Single-program renderer drawing a ring of spinning mesh instances.
///
/// A value of this type only exists after a successful [`Renderer::setup`], so
/// the program is always linked, the uniforms resolved, the vertex array bound
/// and the mesh uploaded by the time `on_viewport` or `render` run.
///
/// GPU objects are never deleted explicitly; they go away with the context.
#[derive(Debug)]
pub struct Renderer<G: GlApi> {
    program: G::Program,
    uniforms: Uniforms<G>,
    vertex_array: G::VertexArray,
    mesh: Mesh<G>,
    projection: ProjectionConfig,
    instances: InstanceLayout,
}

impl<G: GlApi> Renderer<G> {
    /// One-time pipeline setup.
    ///
    /// Order: fixed-function state, vertex array, program, uniforms, mesh.
    /// The program is left active.
    pub fn setup(gl: &G, config: &RendererConfig) -> Result<Self, SetupError> {
        log::debug!(
            "setting up renderer: shader '{}', model '{}'",
            config.shader_name,
            config.model_path.display()
        );

        gl.set_clear_color(config.clear_color);
        gl.enable_depth_test();

        // Core profiles refuse to draw without a bound vertex array.
        let vertex_array = gl
            .create_vertex_array()
            .map_err(|reason| SetupError::GpuObject {
                what: "vertex array",
                reason,
            })?;
        gl.bind_vertex_array(Some(vertex_array));

        let program = shader::build_program(gl, &config.assets, &config.shader_name)?;
        let uniforms = Uniforms::resolve(gl, program);

        let mesh = {
            let model = Model::load(&config.assets, &config.model_path)?;
            Mesh::upload(gl, &model)?
        };

        gl.use_program(Some(program));

        log::info!(
            "renderer ready: {} of 4 uniforms active, {} instances of {} vertices",
            uniforms.resolved_count(),
            config.instances.count,
            mesh.vertex_count()
        );

        Ok(Self {
            program,
            uniforms,
            vertex_array,
            mesh,
            projection: config.projection,
            instances: config.instances,
        })
    }

    /// Recomputes the projection for a `width` x `height` drawable and writes it
    /// to the `projection` uniform, replacing the previous value.
    ///
    /// `height` must be non-zero; the window runtime skips zero-sized resizes.
    pub fn on_viewport(&self, gl: &G, width: u32, height: u32) {
        let projection = projection::perspective(width, height, &self.projection);
        log::debug!(
            "viewport {width}x{height}, aspect {:.3}",
            projection::aspect_ratio(width, height)
        );

        gl.use_program(Some(self.program));
        self.uniforms.projection().set_mat4(gl, &projection);
    }

    /// Draws one frame.
    ///
    /// `time` is in seconds and must not decrease between calls. `view` is read
    /// as-is every frame; the camera may change it between frames.
    pub fn render(&self, gl: &G, time: f64, view: &Mat4) -> FrameStats {
        gl.clear_color_and_depth();

        self.uniforms.time().set_f32(gl, time as f32);
        self.uniforms.view().set_mat4(gl, view);

        gl.use_program(Some(self.program));

        let mut stats = FrameStats::default();
        for model in self.instances.transforms(time) {
            self.uniforms.model().set_mat4(gl, &model);
            self.mesh.draw(gl);
            stats.draw_calls += 1;
        }

        gl.bind_array_buffer(None);
        stats
    }

    pub fn program(&self) -> G::Program {
        self.program
    }

    pub fn vertex_array(&self) -> G::VertexArray {
        self.vertex_array
    }

    pub fn uniforms(&self) -> &Uniforms<G> {
        &self.uniforms
    }

    pub fn instances(&self) -> &InstanceLayout {
        &self.instances
    }
}
