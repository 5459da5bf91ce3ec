//! Asset lookup.
//!
//! Shader and model files are addressed by relative paths (`shader/basic.vert`,
//! `model/cube.model`) and resolved against an ordered list of roots.

mod paths;

pub use paths::{AssetPaths, ASSET_DIR_ENV};
