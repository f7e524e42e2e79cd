use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::callbacks::FrameCallbacks;
use crate::clock::Clock;
use crate::cli::Cli;
use crate::demo::MengerDemo;
use crate::input::InputState;
use crate::renderer::QuadRenderer;

/// Application shell: window lifecycle plus the per-frame sequence
/// poll events -> process input -> render (clear, GUI, uniforms, draw, present).
pub struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<QuadRenderer>,
    demo: MengerDemo,
    input: InputState,
    clock: Clock,
    init_failed: bool,
}

impl App {
    pub fn new(cli: Cli, demo: MengerDemo) -> Self {
        Self {
            cli,
            window: None,
            renderer: None,
            demo,
            input: InputState::new(),
            clock: Clock::new(),
            init_failed: false,
        }
    }

    /// True when window or renderer construction failed and the loop exited
    pub fn init_failed(&self) -> bool {
        self.init_failed
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("menger-kifs")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.cli.width,
                        self.cli.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {}", e);
                    self.init_failed = true;
                    event_loop.exit();
                    return;
                }
            };

            let renderer =
                match pollster::block_on(QuadRenderer::new(window.clone(), &self.cli.shader)) {
                    Ok(r) => r,
                    Err(e) => {
                        log::error!("failed to initialize renderer: {:#}", e);
                        self.init_failed = true;
                        event_loop.exit();
                        return;
                    }
                };

            self.window = Some(window);
            self.renderer = Some(renderer);
            self.clock = Clock::new();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput { .. } => self.input.process_event(&event),
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();
                self.demo.on_input(&self.input, delta);

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    match renderer.render(window, &mut self.demo) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            let size = renderer.size();
                            renderer.resize(size);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("out of GPU memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("dropped frame: {}", e),
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
