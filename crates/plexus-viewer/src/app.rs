//! Viewer application implementing winit ApplicationHandler
//!
//! Owns the simulator and renderer and wires environment signals to the
//! core: resize regenerates the field, cursor moves feed the pointer
//! tracker, redraws drive ticks. Frames are rescheduled only while the
//! simulator is running, so `stop` deterministically ends the loop.

use plexus_field::{FieldSimulator, PointerTracker, Tick};
use plexus_render::{FieldPipeline, FrameRecorder, RenderContext};
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

pub struct FieldApp {
    simulator: FieldSimulator,
    pointer: PointerTracker,
    recorder: FrameRecorder,
    /// Origin for the millisecond timestamps fed to the frame pacer
    started: Instant,

    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    pipeline: Option<FieldPipeline>,

    initial_size: PhysicalSize<u32>,
    fullscreen: bool,
}

impl FieldApp {
    pub fn new(simulator: FieldSimulator, width: u32, height: u32, fullscreen: bool) -> Self {
        Self {
            simulator,
            pointer: PointerTracker::new(),
            recorder: FrameRecorder::new(),
            started: Instant::now(),
            window: None,
            render_context: None,
            pipeline: None,
            initial_size: PhysicalSize::new(width, height),
            fullscreen,
        }
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) {
        let window_attrs = Window::default_attributes()
            .with_title("Plexus")
            .with_inner_size(self.initial_size);

        let window = Arc::new(event_loop.create_window(window_attrs).unwrap());

        if self.fullscreen {
            window.set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
        }

        self.window = Some(window.clone());

        let render_context = pollster::block_on(RenderContext::new(window.clone())).unwrap();
        let pipeline = FieldPipeline::new(&render_context.device, render_context.config.format);

        // Seed the field from the surface the window actually got
        let size = render_context.size;
        self.simulator.reset(size.width as f32, size.height as f32);

        self.render_context = Some(render_context);
        self.pipeline = Some(pipeline);
    }

    fn render(&mut self) {
        let Some(context) = &self.render_context else {
            return;
        };
        let Some(pipeline) = &self.pipeline else {
            return;
        };

        let output = match context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                return;
            }
            Err(e) => {
                eprintln!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        pipeline.render(context, &self.recorder, &view);
        output.present();
    }

    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

impl ApplicationHandler for FieldApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.initialize(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.simulator.stop();
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(context) = &mut self.render_context {
                    context.resize(new_size);
                    // The viewport changed: regenerate the field at the
                    // new dimensions (positions are discarded, not scaled)
                    self.simulator
                        .reset(new_size.width as f32, new_size.height as f32);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.process_move(position.x, position.y);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key {
                        self.simulator.stop();
                        event_loop.exit();
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                match self.simulator.tick(self.now_ms(), &mut self.recorder) {
                    Tick::Rendered { .. } => self.render(),
                    // Skipped frames reschedule without drawing;
                    // a stopped simulator never draws again
                    Tick::Skipped | Tick::Stopped => {}
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if !self.simulator.is_running() {
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
