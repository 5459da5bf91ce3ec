use std::num::NonZeroU32;

use anyhow::{Context, Result, anyhow};
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use crate::gl::{GlApi, GlowBackend};

use super::GlInit;

/// Owns the GL context, its window surface and the loaded GL functions.
///
/// This type is the low-level rendering context:
/// - creates the window together with a matching framebuffer config
/// - creates a core-profile context and makes it current
/// - resizes and presents the window surface
///
/// The context stays current on the creating thread for the lifetime of this
/// value, which is what [`GlowBackend`] relies on.
pub struct GlContext {
    /// Loaded GL functions for `context`.
    backend: GlowBackend,

    /// Surface bound to the window.
    surface: Surface<WindowSurface>,

    /// Current context.
    context: PossiblyCurrentContext,

    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,
}

impl GlContext {
    /// Creates a window and a GL context rendering into it.
    pub fn create(
        event_loop: &ActiveEventLoop,
        attributes: WindowAttributes,
        init: &GlInit,
    ) -> Result<(Window, Self)> {
        let template = ConfigTemplateBuilder::new().with_depth_size(init.depth_bits);

        let (window, config) = DisplayBuilder::new()
            .with_window_attributes(Some(attributes))
            .build(event_loop, template, pick_config)
            .map_err(|e| anyhow!("failed to create GL display: {e}"))?;
        let window = window.context("GL display did not create a window")?;

        let raw_handle = window
            .window_handle()
            .map_err(|e| anyhow!("window has no native handle: {e}"))?
            .as_raw();

        let display = config.display();
        let (major, minor) = init.version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(Some(raw_handle));

        // SAFETY: `raw_handle` belongs to `window`, which outlives the context
        // (the runtime drops the context first).
        let not_current = unsafe { display.create_context(&config, &context_attributes) }
            .with_context(|| format!("failed to create OpenGL {major}.{minor} core context"))?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .map_err(|e| anyhow!("failed to describe window surface: {e}"))?;
        // SAFETY: as above, the surface does not outlive `window`.
        let surface = unsafe { display.create_window_surface(&config, &surface_attributes) }
            .context("failed to create window surface")?;

        let context = not_current
            .make_current(&surface)
            .context("failed to make GL context current")?;

        let interval = if init.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            log::warn!("failed to set swap interval: {e}");
        }

        // SAFETY: `context` was made current on this thread just above.
        let backend = unsafe { GlowBackend::from_loader(|symbol| display.get_proc_address(symbol)) };
        log::info!("OpenGL {} on {}", backend.version(), backend.renderer());

        let size = window.inner_size();

        Ok((
            window,
            Self {
                backend,
                surface,
                context,
                size,
            },
        ))
    }

    pub fn backend(&self) -> &GlowBackend {
        &self.backend
    }

    /// Returns the current drawable size (physical pixels).
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Resizes the surface and the GL viewport.
    ///
    /// Zero-sized requests (minimized windows) are ignored and return `false`;
    /// the renderer never sees a zero height.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) -> bool {
        let Some((width, height)) = non_zero_size(new_size) else {
            return false;
        };

        self.surface.resize(&self.context, width, height);
        self.size = new_size;

        self.backend
            .set_viewport(new_size.width as i32, new_size.height as i32);
        true
    }

    /// Presents the back buffer.
    pub fn present(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")
    }
}

/// Prefers the config with the most MSAA samples.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .max_by_key(|config| config.num_samples())
        .expect("display builder offers at least one config")
}

pub(crate) fn non_zero_size(size: PhysicalSize<u32>) -> Option<(NonZeroU32, NonZeroU32)> {
    Some((NonZeroU32::new(size.width)?, NonZeroU32::new(size.height)?))
}
