use std::time::{Duration, Instant};

use pixels::{PixelsBuilder, SurfaceTexture};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::console::ConsoleBuffer;
use crate::graphics::draw_console;
use crate::input::{KeyCode, KeyQueue};
use crate::pixels_renderer::PixelsRenderer2d;
use crate::surface::SurfaceSize;
use crate::{GameLogic, HeadlessRunner};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixels backend error: {0}")]
    Pixels(#[from] pixels::Error),
}

pub struct AppConfig {
    pub title: String,
    /// Size of the console raster; the window opens at `buffer_size * window_scale`.
    pub buffer_size: SurfaceSize,
    pub window_scale: u32,
    pub tick_interval: Duration,
    pub vsync: Option<bool>,
}

impl AppConfig {
    pub fn window_size(&self) -> PhysicalSize<u32> {
        let size = self.buffer_size.scaled(self.window_scale);
        PhysicalSize::new(size.width, size.height)
    }
}

/// What the presenter needs to know about a console game's state.
pub trait ConsoleFrame {
    fn console(&self) -> &ConsoleBuffer;

    /// Keys stay queued while this is false.
    fn wants_input(&self) -> bool;

    fn exit_requested(&self) -> bool;
}

/// Runs a console game in a window: one `step` per tick, the console rasterized after each.
///
/// Only returns early on setup failure; the event loop exits the process when the game asks to
/// quit or the window is closed.
pub fn run_console_game<G>(config: AppConfig, game: G) -> Result<(), AppError>
where
    G: GameLogic<Input = Option<KeyCode>> + 'static,
    G::State: ConsoleFrame + 'static,
{
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title.clone())
        .with_inner_size(config.window_size())
        .build(&event_loop)?;

    let window_size = window.inner_size();
    let pixels = {
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        let mut builder = PixelsBuilder::new(
            config.buffer_size.width,
            config.buffer_size.height,
            surface_texture,
        );
        if let Some(vsync) = config.vsync {
            builder = builder.enable_vsync(vsync);
        }
        builder.build()?
    };
    let mut renderer = PixelsRenderer2d::new(pixels, config.buffer_size)?;

    let mut runner = HeadlessRunner::new(game);
    let mut keys = KeyQueue::default();
    let tick_interval = config.tick_interval.max(Duration::from_millis(1));
    let mut next_tick = Instant::now();

    log::info!(
        "window {}x{} (buffer {}x{}), tick {:?}",
        window_size.width,
        window_size.height,
        config.buffer_size.width,
        config.buffer_size.height,
        tick_interval
    );

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => {
                *control_flow = ControlFlow::Exit;
            }
            WindowEvent::Resized(size) => {
                let size = SurfaceSize::new(size.width, size.height);
                if let Err(err) = renderer.resize_surface(size) {
                    log::warn!("resize failed: {err}");
                }
                window.request_redraw();
            }
            WindowEvent::KeyboardInput { input, .. } => {
                if input.state == ElementState::Pressed {
                    if let Some(key) = input.virtual_keycode.and_then(KeyCode::from_virtual_key) {
                        keys.push(key);
                    }
                }
            }
            WindowEvent::ReceivedCharacter(ch) => {
                if let Some(key) = KeyCode::from_char(ch) {
                    keys.push(key);
                }
            }
            _ => {}
        },
        Event::MainEventsCleared => {
            let now = Instant::now();
            if now >= next_tick {
                let key = if runner.state().wants_input() {
                    keys.poll()
                } else {
                    None
                };
                runner.step(key);
                if runner.state().exit_requested() {
                    log::info!("exit requested after {} ticks", runner.frame());
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                window.request_redraw();

                // Never try to catch up on missed ticks; one step per wake-up.
                next_tick += tick_interval;
                if next_tick < now {
                    next_tick = now + tick_interval;
                }
            }
            *control_flow = ControlFlow::WaitUntil(next_tick);
        }
        Event::RedrawRequested(_) => {
            renderer.draw_frame(|gfx| draw_console(gfx, runner.state().console()));
            if let Err(err) = renderer.present() {
                log::warn!("present failed: {err}");
            }
        }
        _ => {}
    });
}
