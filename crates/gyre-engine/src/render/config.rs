use std::path::PathBuf;

use crate::assets::AssetPaths;
use crate::SetupError;

use super::instances::InstanceLayout;
use super::projection::ProjectionConfig;

/// Everything [`Renderer::setup`](super::Renderer::setup) needs.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Base name of `shader/<name>.vert` and `shader/<name>.frag`.
    pub shader_name: String,
    pub assets: AssetPaths,
    /// Relative path of the mesh asset.
    pub model_path: PathBuf,
    pub clear_color: [f32; 4],
    pub projection: ProjectionConfig,
    pub instances: InstanceLayout,
}

impl RendererConfig {
    pub const DEFAULT_MODEL: &'static str = "model/cube.model";

    pub fn new(shader_name: impl Into<String>) -> Self {
        Self {
            shader_name: shader_name.into(),
            assets: AssetPaths::default(),
            model_path: PathBuf::from(Self::DEFAULT_MODEL),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            projection: ProjectionConfig::default(),
            instances: InstanceLayout::default(),
        }
    }

    /// Builds a config from positional arguments (program name excluded).
    ///
    /// The first argument is the shader name; anything after it is ignored.
    pub fn from_args<I, S>(args: I) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);

        let name = args
            .next()
            .filter(|name| !name.trim().is_empty())
            .ok_or(SetupError::MissingArgument)?;

        let extra: Vec<String> = args.collect();
        if !extra.is_empty() {
            log::warn!("ignoring extra arguments: {}", extra.join(" "));
        }

        Ok(Self::new(name))
    }

    pub fn with_assets(mut self, assets: AssetPaths) -> Self {
        self.assets = assets;
        self
    }

    pub fn with_instances(mut self, instances: InstanceLayout) -> Self {
        self.instances = instances;
        self
    }
}
