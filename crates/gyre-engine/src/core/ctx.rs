use winit::window::Window;

use crate::gl::GlowBackend;
use crate::input::{InputFrame, InputState};
use crate::time::FrameTime;

/// Context passed to `core::App::on_start`.
pub struct StartCtx<'a> {
    pub gl: &'a GlowBackend,
    pub window: &'a Window,
}

impl StartCtx<'_> {
    /// Drawable size in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }
}

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub gl: &'a GlowBackend,
    pub window: &'a Window,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
}

impl FrameCtx<'_> {
    /// Sets the window title; used for lightweight on-screen diagnostics.
    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }
}
