use winit::event::WindowEvent;

use crate::gl::GlowBackend;

use super::ctx::{FrameCtx, StartCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the binary.
///
/// Callback order: `on_start` once, `on_resize` with the initial drawable size,
/// then `on_frame` per redraw and `on_resize` on every non-zero resize.
pub trait App {
    /// Called once the GL context is current. An error stops the runtime and
    /// is returned from [`Runtime::run`](crate::window::Runtime::run).
    fn on_start(&mut self, ctx: &mut StartCtx<'_>) -> anyhow::Result<()>;

    /// Called with the drawable size in physical pixels; both are non-zero.
    fn on_resize(&mut self, gl: &GlowBackend, width: u32, height: u32) {
        let _ = (gl, width, height);
    }

    /// Called for raw window events, before the runtime handles them.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per redraw. Buffers are swapped after it returns.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}
