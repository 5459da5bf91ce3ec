use std::fs;
use std::path::{Path, PathBuf};

use crate::SetupError;

/// Environment variable naming an extra asset root, searched first.
pub const ASSET_DIR_ENV: &str = "GYRE_ASSET_DIR";

/// Ordered asset search roots.
///
/// The first root containing a requested file wins. When no root contains it,
/// the candidate under the first root is reported, so diagnostics always name a
/// concrete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    roots: Vec<PathBuf>,
}

impl AssetPaths {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// `$GYRE_ASSET_DIR` (when set and non-empty), then `assets`, then the
    /// working directory.
    pub fn from_env() -> Self {
        let mut roots = Vec::new();
        if let Some(dir) = std::env::var_os(ASSET_DIR_ENV).filter(|d| !d.is_empty()) {
            roots.push(PathBuf::from(dir));
        }
        roots.push(PathBuf::from("assets"));
        roots.push(PathBuf::from("."));
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Resolves `relative` against the search roots.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.roots
            .iter()
            .map(|root| root.join(relative))
            .find(|candidate| candidate.is_file())
            .or_else(|| self.roots.first().map(|root| root.join(relative)))
            .unwrap_or_else(|| relative.to_path_buf())
    }

    /// Reads a UTF-8 asset. Returns the resolved path alongside the text.
    pub fn read_to_string(&self, relative: &Path) -> Result<(PathBuf, String), SetupError> {
        let path = self.resolve(relative);
        match fs::read_to_string(&path) {
            Ok(text) => Ok((path, text)),
            Err(source) => Err(SetupError::AssetUnreadable { path, source }),
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::from_env()
    }
}
