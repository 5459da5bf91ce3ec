use glam::Mat4;

/// Fixed camera-to-clip parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Vertical field of view, in degrees.
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 65.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

/// Width over height. `height` must be non-zero.
#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    debug_assert!(height > 0, "aspect ratio of a zero-height viewport");
    width as f32 / height as f32
}

/// OpenGL-style (right-handed, depth in -1..1) perspective for a drawable of
/// `width` x `height` pixels.
pub fn perspective(width: u32, height: u32, config: &ProjectionConfig) -> Mat4 {
    Mat4::perspective_rh_gl(
        config.fov_y_degrees.to_radians(),
        aspect_ratio(width, height),
        config.near,
        config.far,
    )
}
