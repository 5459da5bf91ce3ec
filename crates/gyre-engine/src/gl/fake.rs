//! Recording [`GlApi`] used by unit tests.
//!
//! Object ids are handed out sequentially starting at 1. Uniform locations are
//! the uniform names themselves, so recorded writes read naturally in asserts.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use super::{GlApi, ShaderStage};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    ClearColor([f32; 4]),
    EnableDepthTest,
    Viewport(i32, i32),
    Clear,
    CreateShader(ShaderStage, u32),
    CompileShader(u32, String),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    UniformF32(Option<String>, f32),
    UniformMat4(Option<String>, [f32; 16]),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    CreateBuffer(u32),
    BindArrayBuffer(Option<u32>),
    ArrayBufferData(usize),
    VertexAttrib {
        index: u32,
        components: i32,
        stride: i32,
        offset: i32,
    },
    DrawTriangles(i32, i32),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingGl {
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u32>,
    stages: RefCell<HashMap<u32, ShaderStage>>,
    failing_stage: Option<(ShaderStage, String)>,
    link_failure: Option<String>,
    missing_uniforms: HashSet<String>,
    refuse_buffers: bool,
}

impl RecordingGl {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Compilation of `stage` fails with `log` as the driver info log.
    pub(crate) fn failing_compile(mut self, stage: ShaderStage, log: &str) -> Self {
        self.failing_stage = Some((stage, log.to_string()));
        self
    }

    /// Linking fails with `log` as the driver info log.
    pub(crate) fn failing_link(mut self, log: &str) -> Self {
        self.link_failure = Some(log.to_string());
        self
    }

    /// The linked program has no active uniform called `name`.
    pub(crate) fn without_uniform(mut self, name: &str) -> Self {
        self.missing_uniforms.insert(name.to_string());
        self
    }

    /// Buffer creation is refused by the "driver".
    pub(crate) fn refusing_buffers(mut self) -> Self {
        self.refuse_buffers = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub(crate) fn draw_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::DrawTriangles(..)))
            .count()
    }

    /// Matrices written to the uniform `name`, in call order.
    pub(crate) fn mat4_writes(&self, name: &str) -> Vec<[f32; 16]> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::UniformMat4(Some(n), m) if n == name => Some(*m),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn f32_writes(&self, name: &str) -> Vec<f32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::UniformF32(Some(n), v) if n == name => Some(*v),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn deleted_shaders(&self) -> Vec<u32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::DeleteShader(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn next(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

impl GlApi for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type UniformLocation = String;
    type Buffer = u32;
    type VertexArray = u32;

    fn set_clear_color(&self, rgba: [f32; 4]) {
        self.record(Call::ClearColor(rgba));
    }

    fn enable_depth_test(&self) {
        self.record(Call::EnableDepthTest);
    }

    fn set_viewport(&self, width: i32, height: i32) {
        self.record(Call::Viewport(width, height));
    }

    fn clear_color_and_depth(&self) {
        self.record(Call::Clear);
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let id = self.next();
        self.stages.borrow_mut().insert(id, stage);
        self.record(Call::CreateShader(stage, id));
        Ok(id)
    }

    fn compile_shader(&self, shader: u32, source: &str) {
        self.record(Call::CompileShader(shader, source.to_string()));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        let stage = self.stages.borrow().get(&shader).copied();
        match (&self.failing_stage, stage) {
            (Some((failing, _)), Some(stage)) => *failing != stage,
            _ => true,
        }
    }

    fn shader_info_log(&self, _shader: u32) -> String {
        self.failing_stage
            .as_ref()
            .map(|(_, log)| log.clone())
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let id = self.next();
        self.record(Call::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    fn program_link_status(&self, _program: u32) -> bool {
        self.link_failure.is_none()
    }

    fn program_info_log(&self, _program: u32) -> String {
        self.link_failure.clone().unwrap_or_default()
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn uniform_location(&self, _program: u32, name: &str) -> Option<String> {
        (!self.missing_uniforms.contains(name)).then(|| name.to_string())
    }

    fn uniform_f32(&self, location: Option<&String>, value: f32) {
        self.record(Call::UniformF32(location.cloned(), value));
    }

    fn uniform_mat4(&self, location: Option<&String>, value: &[f32; 16]) {
        self.record(Call::UniformMat4(location.cloned(), *value));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let id = self.next();
        self.record(Call::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        if self.refuse_buffers {
            return Err("out of memory".to_string());
        }
        let id = self.next();
        self.record(Call::CreateBuffer(id));
        Ok(id)
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        self.record(Call::BindArrayBuffer(buffer));
    }

    fn array_buffer_data(&self, data: &[u8]) {
        self.record(Call::ArrayBufferData(data.len()));
    }

    fn vertex_attrib_f32(&self, index: u32, components: i32, stride: i32, offset: i32) {
        self.record(Call::VertexAttrib {
            index,
            components,
            stride,
            offset,
        });
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(Call::DrawTriangles(first, count));
    }
}
