/// Initialization parameters for the GL context.
///
/// Keep this structure minimal. Add flags only when a concrete platform or
/// driver requirement exists.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Requested core-profile version `(major, minor)`.
    ///
    /// 3.3 is the oldest version with the `layout(location)` qualifiers the
    /// shipped shaders use.
    pub version: (u8, u8),

    /// Depth buffer bits. The renderer depth-tests every draw.
    pub depth_bits: u8,

    /// Wait for vertical blank when presenting.
    pub vsync: bool,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            version: (3, 3),
            depth_bits: 24,
            vsync: true,
        }
    }
}
