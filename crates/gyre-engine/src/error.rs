use std::io;
use std::path::PathBuf;

use crate::gl::ShaderStage;

/// Renderer setup failure.
///
/// Every variant is fatal: a renderer without a linked program or an uploaded
/// mesh has nothing it can draw. Callers decide how to terminate.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// No shader base name was supplied on the command line.
    #[error("no shader name supplied")]
    MissingArgument,

    /// A shader or model file could not be read.
    #[error("can't read '{}'", path.display())]
    AssetUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The driver rejected a shader source.
    #[error("{stage} shader '{}' did not compile{}", path.display(), log_suffix(log))]
    CompileFailure {
        stage: ShaderStage,
        path: PathBuf,
        /// Driver info log, when the driver provided a non-empty one.
        log: Option<String>,
    },

    /// The vertex and fragment stages did not link.
    #[error("program did not link{}", log_suffix(log))]
    LinkFailure { log: Option<String> },

    /// The model file was read but is malformed.
    #[error("invalid model '{}' at line {line}: {reason}", path.display())]
    InvalidModel {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The driver refused to create a GL object.
    #[error("failed to create {what}: {reason}")]
    GpuObject { what: &'static str, reason: String },
}

fn log_suffix(log: &Option<String>) -> String {
    match log {
        Some(log) => format!(": {log}"),
        None => String::new(),
    }
}
