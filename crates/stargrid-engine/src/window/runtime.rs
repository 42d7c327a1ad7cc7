use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx, WindowLifecycle};
use crate::device::{Gpu, GpuInit, Lifecycle};
use crate::input::platform::translate_window_event;
use crate::input::InputState;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "stargrid".to_string(),
            initial_size: LogicalSize::new(1000.0, 500.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs the event loop until the window closes.
    ///
    /// Fails when the event loop or the window cannot be created.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.startup_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// The window and the surface that borrows it.
///
/// The surface is created lazily on the first redraw, so it lives in a
/// [`Lifecycle`] rather than being built with the window.
#[self_referencing]
struct WindowEntry {
    input_state: InputState,

    window: Window,

    #[borrows(window)]
    #[covariant]
    surface: Lifecycle<Gpu<'this>>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    startup_error: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            startup_error: None,
            exit_requested: false,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        Ok(WindowEntryBuilder {
            input_state: InputState::default(),
            window,
            surface_builder: |_| Lifecycle::new(),
        }
        .build())
    }

    /// Notifies the app, drops the surface and the window, and stops the loop.
    fn close_window(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(mut entry) = self.window.take() {
            let app = &mut self.app;
            entry.with_mut(|fields| {
                let ctx = WindowCtx { id: fields.window.id(), window: fields.window };
                app.on_lifecycle(&ctx, &WindowLifecycle::Destroyed);
                fields.surface.teardown();
            });
        }

        self.exit_requested = true;
        event_loop.exit();
    }

    fn handle_resize(&mut self, new_size: PhysicalSize<u32>) -> AppControl {
        let Some(entry) = self.window.as_mut() else {
            return AppControl::Continue;
        };
        let app = &mut self.app;

        entry.with_mut(|fields| {
            let ctx = WindowCtx { id: fields.window.id(), window: fields.window };
            let viewport = fields.surface.get_mut().map(|gpu| {
                gpu.resize(new_size);
                ctx.viewport()
            });

            let control = app.on_lifecycle(&ctx, &WindowLifecycle::Resized(viewport));
            ctx.request_redraw();
            control
        })
    }

    /// Drives one frame: acquires the surface, runs the app, and discards the
    /// surface afterwards if the device or surface was lost while drawing.
    fn handle_redraw(&mut self) -> AppControl {
        let Some(entry) = self.window.as_mut() else {
            return AppControl::Continue;
        };
        let (app, gpu_init) = (&mut self.app, &self.gpu_init);

        entry.with_mut(|fields| {
            let window = fields.window;
            let size = window.inner_size();
            if size.width == 0 || size.height == 0 {
                // Minimized; nothing to draw into.
                return AppControl::Continue;
            }

            let ctx = WindowCtx { id: window.id(), window };

            let acquired = match fields
                .surface
                .acquire(|| pollster::block_on(Gpu::new(window, gpu_init)))
            {
                Ok(a) => a,
                Err(e) => {
                    log::error!("surface creation failed: {e:#}");
                    return AppControl::Continue;
                }
            };

            let created = acquired.was_created();
            let gpu = acquired.into_inner();

            if created {
                log::info!("surface created ({}x{})", size.width, size.height);
                if app.on_lifecycle(&ctx, &WindowLifecycle::SurfaceCreated(ctx.viewport()))
                    == AppControl::Exit
                {
                    return AppControl::Exit;
                }
            }

            let mut frame = FrameCtx {
                window: WindowCtx { id: window.id(), window },
                gpu,
            };
            let mut control = app.on_frame(&mut frame);
            let lost = frame.gpu.needs_recreate();

            if lost {
                log::warn!("surface lost; discarding device resources");
                fields.surface.invalidate();
                if app.on_lifecycle(&ctx, &WindowLifecycle::SurfaceDiscarded) == AppControl::Exit {
                    control = AppControl::Exit;
                }
                ctx.request_redraw();
            }

            control
        })
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let mut entry = match self.create_window_entry(event_loop) {
            Ok(entry) => entry,
            Err(e) => {
                log::error!("failed to create initial window: {e:#}");
                self.startup_error = Some(e);
                self.exit_requested = true;
                event_loop.exit();
                return;
            }
        };

        event_loop.set_control_flow(ControlFlow::Wait);

        let app = &mut self.app;
        let control = entry.with_mut(|fields| {
            let ctx = WindowCtx { id: fields.window.id(), window: fields.window };
            let control = app.on_lifecycle(&ctx, &WindowLifecycle::Created);
            ctx.request_redraw();
            control
        });
        self.window = Some(entry);

        if control == AppControl::Exit {
            self.close_window(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Redraws happen on demand (resize, surface loss, app request).
        event_loop.set_control_flow(ControlFlow::Wait);
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

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, window) = (&mut self.app, &mut self.window);

        let Some(entry) = window.as_mut() else {
            return;
        };
        if entry.borrow_window().id() != window_id {
            return;
        }

        let control = entry.with_mut(|fields| {
            let scale_factor = fields.window.scale_factor();
            let Some(ev) =
                translate_window_event(scale_factor, fields.input_state, &event, Instant::now())
            else {
                return AppControl::Continue;
            };
            fields.input_state.apply_event(&ev);

            let ctx = WindowCtx { id: window_id, window: fields.window };
            app.on_input(&ctx, &ev)
        });

        if control == AppControl::Exit {
            self.close_window(event_loop);
            return;
        }

        // Runtime-managed window lifecycle / resize / redraw handling.
        let control = match &event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                self.close_window(event_loop);
                return;
            }

            WindowEvent::Resized(new_size) => self.handle_resize(*new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = self
                    .window
                    .as_ref()
                    .map(|entry| entry.borrow_window().inner_size());
                match new_size {
                    Some(size) => self.handle_resize(size),
                    None => AppControl::Continue,
                }
            }

            WindowEvent::RedrawRequested => self.handle_redraw(),

            _ => AppControl::Continue,
        };

        if control == AppControl::Exit {
            self.close_window(event_loop);
        }
    }
}
