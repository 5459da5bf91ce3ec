use std::fmt;

/// Programmable pipeline stage a shader object belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// File extension used for sources of this stage.
    pub const fn extension(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vert",
            ShaderStage::Fragment => "frag",
        }
    }

    /// GL shader type enum.
    pub const fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// OpenGL calls issued by the renderer.
///
/// Implementations are bound to one GL context and must only be used on the
/// thread where that context is current. Object creation may be refused by the
/// driver; the error string is the driver's reason.
///
/// Uniform writes take `Option<&UniformLocation>`: `None` is the "unused"
/// location and writing to it does nothing.
pub trait GlApi {
    type Shader: Copy + fmt::Debug;
    type Program: Copy + fmt::Debug;
    type UniformLocation: Clone + fmt::Debug;
    type Buffer: Copy + fmt::Debug;
    type VertexArray: Copy + fmt::Debug;

    // Fixed-function state.
    fn set_clear_color(&self, rgba: [f32; 4]);
    fn enable_depth_test(&self);
    fn set_viewport(&self, width: i32, height: i32);
    fn clear_color_and_depth(&self);

    // Shader objects.
    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    /// Uploads `source` and compiles it. Status is queried separately.
    fn compile_shader(&self, shader: Self::Shader, source: &str);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    // Program objects.
    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn delete_program(&self, program: Self::Program);
    fn use_program(&self, program: Option<Self::Program>);

    // Uniforms.
    fn uniform_location(&self, program: Self::Program, name: &str)
    -> Option<Self::UniformLocation>;
    fn uniform_f32(&self, location: Option<&Self::UniformLocation>, value: f32);
    /// Column-major 4x4 matrix, not transposed.
    fn uniform_mat4(&self, location: Option<&Self::UniformLocation>, value: &[f32; 16]);

    // Vertex data.
    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    /// Fills the bound array buffer with static data.
    fn array_buffer_data(&self, data: &[u8]);
    /// Describes and enables a float attribute sourced from the bound array buffer.
    fn vertex_attrib_f32(&self, index: u32, components: i32, stride: i32, offset: i32);
    fn draw_triangles(&self, first: i32, count: i32);
}
