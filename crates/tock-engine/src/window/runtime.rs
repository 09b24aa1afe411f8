use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalPosition, LogicalSize, PhysicalSize};
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Canvas;
use crate::core::{App, AppControl, FrameCtx, RunState};
use crate::device::{Gpu, GpuInit};
use crate::input::{InputEvent, KeyState, MouseButton, MouseButtonState};
use crate::time::TickClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub position: LogicalPosition<f64>,
    /// Logical canvas; also the window's inner size.
    pub canvas: Canvas,
    pub resizable: bool,
    /// Time from one finished frame to the next.
    pub frame_interval: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "tock".to_string(),
            position: LogicalPosition::new(100.0, 100.0),
            canvas: Canvas::new(640, 480),
            resizable: false,
            frame_interval: Duration::from_millis(1000),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `app` until a quit event or a fatal error.
    ///
    /// The window and GPU context are released before this returns, on every
    /// path.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.entry = None;
        log::info!("runtime stopped");

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    run_state: RunState,
    clock: TickClock,
    redraw_pending: bool,
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        let clock = TickClock::new(config.frame_interval);
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            run_state: RunState::Running,
            clock,
            redraw_pending: false,
            fatal: None,
        }
    }

    /// Records a fatal error (the first one wins) and stops the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        self.run_state.quit();
        event_loop.exit();
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let canvas = self.config.canvas;
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_position(self.config.position)
            .with_inner_size(LogicalSize::new(canvas.width as f64, canvas.height as f64))
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("failed to create renderer")?;

        log::info!(
            "window created: {:?} {}x{}",
            self.config.title,
            canvas.width,
            canvas.height
        );
        Ok(entry)
    }

    /// Runs one frame: tick, let the app draw and present, schedule the next.
    fn render_frame(&mut self) -> Result<AppControl> {
        let Some(entry) = self.entry.as_mut() else {
            return Ok(AppControl::Continue);
        };

        let time = self.clock.tick(Instant::now());
        let canvas = self.config.canvas;
        let app = &mut self.app;

        let control = entry.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: fields.window,
                gpu: fields.gpu,
                time,
                canvas,
            };
            app.on_frame(&mut ctx)
        });

        self.clock.finish(Instant::now());
        control
    }
}

/// What the runtime does with one window event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Route {
    Ignore,
    Render,
    /// A redraw arrived after quit was requested in the same pass.
    SkipRender,
    Resize(PhysicalSize<u32>),
    Rescale,
    Stop,
}

/// Feeds `event` to `run_state` and decides what to do with it.
///
/// Input is observed on every call, so a pass keeps draining after a quit
/// request; only redraws look at the state.
fn route_event(run_state: &mut RunState, event: &WindowEvent) -> Route {
    if let Some(ev) = translate_input_event(event) {
        log::trace!("input: {ev:?}");
        if run_state.observe(&ev) {
            log::info!("quit requested ({ev:?})");
        }
        return Route::Ignore;
    }

    match event {
        WindowEvent::RedrawRequested if run_state.is_running() => Route::Render,
        WindowEvent::RedrawRequested => Route::SkipRender,
        WindowEvent::Resized(size) => Route::Resize(*size),
        WindowEvent::ScaleFactorChanged { .. } => Route::Rescale,
        WindowEvent::Destroyed => Route::Stop,
        _ => Route::Ignore,
    }
}

/// What the loop does once the queue is drained.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Wake {
    Exit,
    Redraw,
    Wait,
    WaitUntil(Instant),
}

fn next_wake(
    run_state: RunState,
    has_window: bool,
    redraw_pending: bool,
    clock: &TickClock,
    now: Instant,
) -> Wake {
    if !run_state.is_running() {
        Wake::Exit
    } else if !has_window || redraw_pending {
        Wake::Wait
    } else if clock.is_due(now) {
        Wake::Redraw
    } else {
        Wake::WaitUntil(clock.deadline())
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                self.entry = Some(entry);
                self.clock = TickClock::new(self.config.frame_interval);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let wake = next_wake(
            self.run_state,
            self.entry.is_some(),
            self.redraw_pending,
            &self.clock,
            Instant::now(),
        );

        match wake {
            Wake::Exit => event_loop.exit(),
            Wake::Redraw => {
                if let Some(entry) = self.entry.as_ref() {
                    self.redraw_pending = true;
                    entry.with_window(|w| w.request_redraw());
                }
                event_loop.set_control_flow(ControlFlow::Wait);
            }
            Wake::Wait => event_loop.set_control_flow(ControlFlow::Wait),
            Wake::WaitUntil(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if matches!(event, WindowEvent::RedrawRequested) {
            self.redraw_pending = false;
        }

        match route_event(&mut self.run_state, &event) {
            Route::Render => match self.render_frame() {
                Ok(AppControl::Continue) => {}
                Ok(AppControl::Exit) => self.run_state.quit(),
                Err(err) => self.fail(event_loop, err),
            },

            Route::Resize(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
            }

            Route::Rescale => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
            }

            Route::Stop => self.run_state.quit(),

            Route::SkipRender | Route::Ignore => {}
        }
    }
}

/// Maps the events that can end the program; everything else is `None`.
fn translate_input_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CloseRequested => Some(InputEvent::CloseRequested),

        WindowEvent::MouseInput { state, button, .. } => Some(pointer_button(*state, *button)),

        // Synthetic presses are replayed for keys already held when the window
        // gains focus; they are not user input.
        WindowEvent::KeyboardInput { event, is_synthetic: false, .. } => {
            Some(key_input(event.state, event.repeat))
        }

        _ => None,
    }
}

fn key_input(state: ElementState, repeat: bool) -> InputEvent {
    InputEvent::Key {
        state: match state {
            ElementState::Pressed => KeyState::Pressed,
            ElementState::Released => KeyState::Released,
        },
        repeat,
    }
}

fn pointer_button(state: ElementState, button: WinitMouseButton) -> InputEvent {
    InputEvent::PointerButton {
        button: map_mouse_button(button),
        state: match state {
            ElementState::Pressed => MouseButtonState::Pressed,
            ElementState::Released => MouseButtonState::Released,
        },
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}
