use std::path::{Path, PathBuf};

use crate::assets::AssetPaths;
use crate::gl::ShaderStage;
use crate::SetupError;

/// Relative asset path of one stage: `shader/<name>.<ext>`.
pub fn shader_path(name: &str, stage: ShaderStage) -> PathBuf {
    Path::new("shader").join(format!("{name}.{}", stage.extension()))
}

/// Source text of one shader stage.
///
/// Short-lived: it is moved into the compile step and dropped right after the
/// driver has copied it.
#[derive(Debug)]
pub struct ShaderSource {
    path: PathBuf,
    text: String,
}

impl ShaderSource {
    /// Reads the source for `stage` of the shader called `name`.
    pub fn load(assets: &AssetPaths, name: &str, stage: ShaderStage) -> Result<Self, SetupError> {
        let (path, text) = assets.read_to_string(&shader_path(name, stage))?;
        Ok(Self { path, text })
    }

    /// Resolved path the text was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl AsRef<str> for ShaderSource {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
