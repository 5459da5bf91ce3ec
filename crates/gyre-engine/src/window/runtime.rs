use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, StartCtx};
use crate::device::{GlContext, GlInit};
use crate::input::platform::translate_window_event;
use crate::input::{InputFrame, InputState};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "gyre".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, hands the context to `app` and drives it until exit.
    ///
    /// Returns the error from `App::on_start` or from presenting a frame, if
    /// either ended the loop.
    pub fn run<A>(config: RuntimeConfig, gl_init: GlInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gl_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Per-window state. Field order matters: the GL context must drop before the
/// window it renders into.
struct WindowEntry {
    gl: GlContext,
    window: Window,

    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gl_init: GlInit,
    app: A,

    entry: Option<WindowEntry>,
    failure: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gl_init: GlInit, app: A) -> Self {
        Self {
            config,
            gl_init,
            app,
            entry: None,
            failure: None,
            exit_requested: false,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        self.failure = Some(error);
        self.request_exit(event_loop);
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        // Drop GL objects while the event loop is still alive.
        self.entry = None;
        event_loop.exit();
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let (window, mut gl) = GlContext::create(event_loop, attrs, &self.gl_init)?;

        {
            let mut ctx = StartCtx {
                gl: gl.backend(),
                window: &window,
            };
            self.app
                .on_start(&mut ctx)
                .context("application failed to start")?;
        }

        let size = window.inner_size();
        if gl.resize(size) {
            self.app.on_resize(gl.backend(), size.width, size.height);
        }

        let mut clock = FrameClock::default();
        // Setup time is not part of the first frame.
        clock.reset_delta();

        window.request_redraw();
        self.entry = Some(WindowEntry {
            gl,
            window,
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock,
        });
        Ok(())
    }

    fn redraw(&mut self) -> Result<AppControl> {
        let Some(entry) = self.entry.as_mut() else {
            return Ok(AppControl::Continue);
        };

        let time = entry.clock.tick();
        let control = {
            let mut ctx = FrameCtx {
                gl: entry.gl.backend(),
                window: &entry.window,
                input: &entry.input_state,
                input_frame: &entry.input_frame,
                time,
            };
            self.app.on_frame(&mut ctx)
        };

        entry.gl.present()?;

        // Clear per-frame deltas after the frame is consumed.
        entry.input_frame.clear();
        Ok(control)
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.exit_requested {
            return;
        }

        if let Err(e) = self.start(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Continuous redraw: the scene animates every frame.
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Some(entry) = &self.entry {
            entry.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.window.id() != window_id {
            return;
        }

        if let Some(ev) = translate_window_event(&event) {
            entry.input_state.apply_event(&mut entry.input_frame, ev);
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.request_exit(event_loop),

            WindowEvent::Resized(new_size) => {
                if entry.gl.resize(new_size) {
                    self.app
                        .on_resize(entry.gl.backend(), new_size.width, new_size.height);
                } else {
                    log::debug!("skipping zero-sized resize");
                }
                entry.window.request_redraw();
            }

            WindowEvent::Focused(true) => entry.clock.reset_delta(),

            WindowEvent::RedrawRequested => match self.redraw() {
                Ok(AppControl::Continue) => {}
                Ok(AppControl::Exit) => self.request_exit(event_loop),
                Err(e) => self.fail(event_loop, e),
            },

            _ => {}
        }
    }
}
