use std::process::ExitCode;

use anyhow::Context;
use gyre_engine::camera::{CameraConfig, FlyCamera};
use gyre_engine::core::{App, AppControl, FrameCtx, StartCtx};
use gyre_engine::device::GlInit;
use gyre_engine::gl::GlowBackend;
use gyre_engine::input::Key;
use gyre_engine::logging::{LoggingConfig, init_logging};
use gyre_engine::render::{RendererConfig, Renderer};
use gyre_engine::window::{Runtime, RuntimeConfig};

const USAGE: &str = "usage: gyre-viewer <shader-name>";

/// Seconds between window title refreshes.
const TITLE_INTERVAL: f64 = 1.0;

struct Viewer {
    config: RendererConfig,
    renderer: Option<Renderer<GlowBackend>>,
    camera: FlyCamera,

    title_frames: u64,
    title_since: f64,
}

impl Viewer {
    fn new(config: RendererConfig) -> Self {
        Self {
            config,
            renderer: None,
            camera: FlyCamera::new(CameraConfig::default()),
            title_frames: 0,
            title_since: 0.0,
        }
    }

    fn refresh_title(&mut self, ctx: &FrameCtx<'_>) {
        self.title_frames += 1;
        let span = ctx.time.elapsed - self.title_since;
        if span < TITLE_INTERVAL {
            return;
        }

        let fps = self.title_frames as f64 / span;
        ctx.set_title(&format!("gyre - {} - {fps:.0} fps", self.config.shader_name));
        self.title_frames = 0;
        self.title_since = ctx.time.elapsed;
    }
}

impl App for Viewer {
    fn on_start(&mut self, ctx: &mut StartCtx<'_>) -> anyhow::Result<()> {
        log::info!("asset roots: {:?}", self.config.assets.roots());
        let renderer = Renderer::setup(ctx.gl, &self.config)?;
        self.renderer = Some(renderer);
        Ok(())
    }

    fn on_resize(&mut self, gl: &GlowBackend, width: u32, height: u32) {
        if let Some(renderer) = &self.renderer {
            renderer.on_viewport(gl, width, height);
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if ctx.input_frame.pressed(Key::Escape) {
            return AppControl::Exit;
        }

        self.camera.update(ctx.input, ctx.input_frame, ctx.time.dt);

        if let Some(renderer) = &self.renderer {
            let stats = renderer.render(ctx.gl, ctx.time.elapsed, self.camera.view_matrix());
            log::trace!("frame {}: {} draw calls", ctx.time.frame_index, stats.draw_calls);
        }

        self.refresh_title(ctx);
        AppControl::Continue
    }
}

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let config = match RendererConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let runtime = RuntimeConfig {
        title: format!("gyre - {}", config.shader_name),
        ..RuntimeConfig::default()
    };

    let result = Runtime::run(runtime, GlInit::default(), Viewer::new(config))
        .context("viewer stopped with an error");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
