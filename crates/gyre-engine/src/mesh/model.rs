use std::fmt;
use std::path::Path;

use bytemuck::{Pod, Zeroable};

use crate::assets::AssetPaths;
use crate::SetupError;

/// Interleaved vertex as stored in the GPU buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const STRIDE: i32 = std::mem::size_of::<Vertex>() as i32;
    pub const POSITION_OFFSET: i32 = 0;
    pub const NORMAL_OFFSET: i32 = std::mem::size_of::<[f32; 3]>() as i32;
}

/// A parse error from a `.model` file.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParseError {
    /// 1-based line number; 0 when the error concerns the whole file.
    pub line: usize,
    pub message: String,
}

impl ModelParseError {
    fn new(line: usize, msg: impl Into<String>) -> Self {
        Self { line, message: msg.into() }
    }
}

impl fmt::Display for ModelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model parse error at line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ModelParseError {}

/// CPU-side triangle list.
///
/// Text format: one `v px py pz nx ny nz` line per vertex, three consecutive
/// vertices per triangle. Blank lines and `#` comments are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    vertices: Vec<Vertex>,
}

impl Model {
    /// Reads and parses a model from the asset roots.
    pub fn load(assets: &AssetPaths, relative: &Path) -> Result<Self, SetupError> {
        let (path, text) = assets.read_to_string(relative)?;
        log::debug!("loading model '{}'", path.display());

        Self::parse(&text).map_err(|err| SetupError::InvalidModel {
            path,
            line: err.line,
            reason: err.message,
        })
    }

    pub fn parse(text: &str) -> Result<Self, ModelParseError> {
        let mut vertices = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            match fields.next() {
                Some("v") => {}
                Some(other) => {
                    return Err(ModelParseError::new(
                        line_no,
                        format!("unknown record '{other}'"),
                    ));
                }
                None => continue,
            }

            let mut values = [0.0f32; 6];
            let mut count = 0;
            for field in fields {
                if count == values.len() {
                    return Err(ModelParseError::new(line_no, "expected 6 numbers, found more"));
                }
                values[count] = field.parse().map_err(|_| {
                    ModelParseError::new(line_no, format!("invalid number '{field}'"))
                })?;
                count += 1;
            }
            if count != values.len() {
                return Err(ModelParseError::new(
                    line_no,
                    format!("expected 6 numbers, found {count}"),
                ));
            }

            vertices.push(Vertex {
                position: [values[0], values[1], values[2]],
                normal: [values[3], values[4], values[5]],
            });
        }

        if vertices.is_empty() {
            return Err(ModelParseError::new(0, "model has no vertices"));
        }
        if vertices.len() % 3 != 0 {
            return Err(ModelParseError::new(
                0,
                format!("{} vertices do not form whole triangles", vertices.len()),
            ));
        }

        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}
