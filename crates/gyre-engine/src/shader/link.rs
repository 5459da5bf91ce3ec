use crate::gl::GlApi;
use crate::SetupError;

use super::driver_log;

/// Links a vertex and a fragment shader into a program.
///
/// Both shader objects are released here: after linking the program holds the
/// only reference it needs, and on failure nothing is kept.
pub fn link_program<G: GlApi>(
    gl: &G,
    vertex: G::Shader,
    fragment: G::Shader,
) -> Result<G::Program, SetupError> {
    log::debug!("linking program");

    let program = match gl.create_program() {
        Ok(program) => program,
        Err(reason) => {
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
            return Err(SetupError::GpuObject {
                what: "program",
                reason,
            });
        }
    };

    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);

    // Deletion is deferred by the driver while the shaders stay attached.
    gl.delete_shader(vertex);
    gl.delete_shader(fragment);

    if gl.program_link_status(program) {
        return Ok(program);
    }

    let log = driver_log(gl.program_info_log(program));
    gl.delete_program(program);

    Err(SetupError::LinkFailure { log })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::fake::{Call, RecordingGl};
    use crate::gl::ShaderStage;

    fn shaders(gl: &RecordingGl) -> (u32, u32) {
        (
            gl.create_shader(ShaderStage::Vertex).unwrap(),
            gl.create_shader(ShaderStage::Fragment).unwrap(),
        )
    }

    #[test]
    fn links_attached_pair() {
        let gl = RecordingGl::new();
        let (vs, fs) = shaders(&gl);
        gl.clear_calls();

        let program = link_program(&gl, vs, fs).unwrap();

        assert_eq!(
            gl.calls(),
            vec![
                Call::CreateProgram(program),
                Call::AttachShader(program, vs),
                Call::AttachShader(program, fs),
                Call::LinkProgram(program),
                Call::DeleteShader(vs),
                Call::DeleteShader(fs),
            ]
        );
    }

    #[test]
    fn link_failure_carries_log_and_deletes_program() {
        let gl = RecordingGl::new().failing_link("error: varying 'vNormal' not written");
        let (vs, fs) = shaders(&gl);

        let err = link_program(&gl, vs, fs).unwrap_err();

        match err {
            SetupError::LinkFailure { log } => {
                assert_eq!(log.as_deref(), Some("error: varying 'vNormal' not written"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(gl.calls().contains(&Call::DeleteProgram(3)));
    }

    #[test]
    fn link_failure_without_log_is_still_fatal() {
        let gl = RecordingGl::new().failing_link("   ");
        let (vs, fs) = shaders(&gl);

        let err = link_program(&gl, vs, fs).unwrap_err();

        assert!(matches!(err, SetupError::LinkFailure { log: None }));
    }
}
