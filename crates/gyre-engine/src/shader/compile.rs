use std::path::Path;

use crate::assets::AssetPaths;
use crate::gl::{GlApi, ShaderStage};
use crate::SetupError;

use super::driver_log;
use super::source::ShaderSource;

/// Reads and compiles one stage of the shader called `name`.
pub fn compile_shader<G: GlApi>(
    gl: &G,
    assets: &AssetPaths,
    name: &str,
    stage: ShaderStage,
) -> Result<G::Shader, SetupError> {
    let source = ShaderSource::load(assets, name, stage)?;
    let path = source.path().to_path_buf();
    log::debug!("compiling shader '{}'", path.display());

    compile_source(gl, stage, &path, source)
}

/// Compiles already loaded text. `path` is only used in diagnostics.
///
/// `source` is consumed and dropped right after the compile call, whatever the
/// outcome. A failed shader object is deleted before the error is returned.
pub fn compile_source<G, S>(
    gl: &G,
    stage: ShaderStage,
    path: &Path,
    source: S,
) -> Result<G::Shader, SetupError>
where
    G: GlApi,
    S: AsRef<str>,
{
    let shader = gl.create_shader(stage).map_err(|reason| SetupError::GpuObject {
        what: "shader",
        reason,
    })?;

    gl.compile_shader(shader, source.as_ref());
    drop(source);

    if gl.shader_compile_status(shader) {
        return Ok(shader);
    }

    let log = driver_log(gl.shader_info_log(shader));
    gl.delete_shader(shader);

    Err(SetupError::CompileFailure {
        stage,
        path: path.to_path_buf(),
        log,
    })
}
