use std::sync::Arc;
use std::time::{Instant, SystemTime};

use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::canvas::Canvas;
use crate::config::{LAUNCH_OFFSET_DAYS, PALETTE, PARALLAX_LAYER_COUNT, PARTICLE_COUNT};
use crate::gpu::{Canvas2d, CanvasRenderer, GpuContext};
use crate::page::{Countdown, CountdownStatus, PointerParallax};
use crate::simulation::{Animator, ParticleField, TickScheduler};

/// Decorative glow layers: anchor as a viewport fraction, radius, palette index
const GLOW_LAYERS: [((f32, f32), f32, usize); PARALLAX_LAYER_COUNT] = [
    ((0.22, 0.30), 150.0, 0),
    ((0.78, 0.22), 100.0, 1),
    ((0.60, 0.78), 120.0, 2),
];

const GLOW_ALPHA: f32 = 0.05;

/// Chains redraw requests, standing in for requestAnimationFrame
struct RedrawScheduler {
    window: Arc<Window>,
}

impl TickScheduler for RedrawScheduler {
    fn request_tick(&mut self) {
        self.window.request_redraw();
    }
}

/// Application state
pub struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<CanvasRenderer>,
    animator: Option<Animator>,
    canvas: Canvas2d,
    parallax: PointerParallax,
    countdown: Countdown,
    fps_counter: FpsCounter,
}

impl App {
    pub fn new() -> Self {
        Self {
            window: None,
            gpu: None,
            renderer: None,
            animator: None,
            canvas: Canvas2d::new(),
            parallax: PointerParallax::new(PARALLAX_LAYER_COUNT),
            countdown: Countdown::days_after(SystemTime::now(), LAUNCH_OFFSET_DAYS),
            fps_counter: FpsCounter::new(),
        }
    }

    fn render(&mut self) {
        let window = self.window.as_ref().unwrap().clone();
        let gpu = self.gpu.as_mut().unwrap();
        let renderer = self.renderer.as_mut().unwrap();
        let animator = self.animator.as_mut().unwrap();

        let viewport = (gpu.config.width, gpu.config.height);

        // A stopped animator draws nothing and schedules nothing; the last
        // presented frame simply stays on screen
        if !animator.is_stopped() {
            let mut scheduler = RedrawScheduler {
                window: window.clone(),
            };
            animator.tick(&mut self.canvas, &mut scheduler);
            draw_glow_layers(
                &mut self.canvas,
                &self.parallax,
                (viewport.0 as f32, viewport.1 as f32),
            );
        }

        let output = match gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Reconfigure and try again next frame
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        renderer.prepare(&gpu.device, &gpu.queue, self.canvas.vertices(), viewport);

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });
        renderer.draw(&mut encoder, &view);

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        // Refresh the title about once a second
        if let Some(fps) = self.fps_counter.tick() {
            let title = match self.countdown.status(SystemTime::now()) {
                CountdownStatus::Running(parts) => {
                    format!("Emberfield - launching in {parts} - {fps:.0} FPS")
                }
                CountdownStatus::Complete => format!("Emberfield - we are live! - {fps:.0} FPS"),
            };
            window.set_title(&title);
        }
    }

    /// Teardown path shared by close request and Escape; safe to hit twice
    fn shutdown(&mut self) {
        if let Some(animator) = &mut self.animator {
            animator.stop();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        log::info!("Initializing Emberfield...");

        let window_attrs = Window::default_attributes()
            .with_title("Emberfield - coming soon")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        log::info!("Creating GPU context...");
        let gpu = pollster::block_on(GpuContext::new(window.clone()));

        log::info!("Creating canvas renderer...");
        let renderer = CanvasRenderer::new(&gpu.device, gpu.config.format);

        let width = gpu.config.width as f32;
        let height = gpu.config.height as f32;
        log::info!("Spawning {} particles over {}x{}", PARTICLE_COUNT, width, height);

        let mut rng = StdRng::from_entropy();
        let field = ParticleField::new(&mut rng, width, height, PARTICLE_COUNT);

        self.animator = Some(Animator::new(field));
        self.gpu = Some(gpu);
        self.renderer = Some(renderer);

        log::info!("Initialization complete");

        // First tick; every later one is chained by the animator
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, shutting down...");
                self.shutdown();
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed()
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    log::info!("Escape pressed, shutting down...");
                    self.shutdown();
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    log::info!("Window resized to {}x{}", new_size.width, new_size.height);
                    gpu.resize(new_size);
                }
                if let Some(animator) = &mut self.animator {
                    // Particles caught outside the new bounds re-enter on
                    // their next tick's clamp pass
                    animator
                        .field_mut()
                        .resize(new_size.width as f32, new_size.height as f32);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as f32, position.y as f32);
                if let Some(animator) = &mut self.animator {
                    animator.field_mut().set_pointer(x, y);
                }
                if let Some(gpu) = &self.gpu {
                    self.parallax
                        .set_pointer(x, y, (gpu.config.width as f32, gpu.config.height as f32));
                }
            }
            WindowEvent::RedrawRequested => {
                if self.gpu.is_some() {
                    self.render();
                }
            }
            _ => {}
        }
    }
}

/// Paint the parallax-driven glow circles on top of the field
fn draw_glow_layers(canvas: &mut Canvas2d, parallax: &PointerParallax, viewport: (f32, f32)) {
    for (layer, &((fx, fy), radius, color_index)) in GLOW_LAYERS.iter().enumerate() {
        let (ox, oy) = parallax.layer_offset(layer);
        canvas.set_fill_color(PALETTE[color_index]);
        canvas.set_global_alpha(GLOW_ALPHA);
        canvas.fill_circle((fx * viewport.0 + ox, fy * viewport.1 + oy), radius);
    }
    canvas.set_global_alpha(1.0);
}

/// Simple FPS counter
struct FpsCounter {
    last_update: Instant,
    frame_count: u32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frame_count: 0,
        }
    }

    /// Tick the counter; yields the measured rate about once a second
    fn tick(&mut self) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = self.last_update.elapsed();

        if elapsed.as_secs_f64() >= 1.0 {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.last_update = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}
