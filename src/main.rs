//! Wavedrift - an animated background of flowing wave lines
//!
//! Layered translucent polylines drift across the window, displaced by
//! a slice of 3D coherent noise. A settings panel tunes the field
//! while it runs.

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use wavedrift::cli::Args;
use wavedrift::clock::FrameClock;
use wavedrift::panel::ControlPanel;
use wavedrift::params::{RenderConfig, WaveParams};
use wavedrift::rendering::WaveSurface;
use wavedrift::stroke::FrameGeometry;
use wavedrift::viewport::Viewport;
use wavedrift::waves::WaveSystem;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    surface: Option<WaveSurface>,
    panel: Option<ControlPanel>,

    // Simulation
    params: WaveParams,
    waves: WaveSystem,
    geometry: FrameGeometry,
    viewport: Viewport,
    clock: FrameClock,

    // Configuration
    render_config: RenderConfig,
    panel_starts_hidden: bool,
}

impl App {
    fn new(args: &Args) -> Self {
        let render_config = args.render_config();
        let params = WaveParams::default();
        let waves = WaveSystem::new(&params, args.seed, &args.jitter_config());
        let clock = FrameClock::new(render_config.fps_cap);

        Self {
            window: None,
            surface: None,
            panel: None,
            params,
            waves,
            geometry: FrameGeometry::new(),
            viewport: Viewport::default(),
            clock,
            render_config,
            panel_starts_hidden: args.no_panel,
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };
        let now = Instant::now();
        let deadline = self.clock.next_deadline(now);
        if deadline <= now {
            window.request_redraw();
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        // Create window
        let window_attributes = Window::default_attributes()
            .with_title("Wavedrift")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        let size = window.inner_size();
        self.viewport = Viewport::from_physical(
            (size.width, size.height),
            window.scale_factor(),
            self.render_config.max_pixel_ratio,
        );

        // Initialize rendering system; the swapchain starts at the
        // viewport's capped backing size
        let surface = pollster::block_on(WaveSurface::new(
            Arc::clone(&window),
            &self.render_config,
            &self.viewport,
        ))
        .unwrap();

        let mut panel = ControlPanel::new(&window);
        if self.panel_starts_hidden {
            panel.toggle();
        }

        println!("\nWavedrift is running!");
        println!("Press P to toggle the panel, ESC to quit\n");

        self.window = Some(window);
        self.surface = Some(surface);
        self.panel = Some(panel);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // The panel sees every event first and may claim it
        let mut panel_consumed = false;
        if let (Some(panel), Some(window)) = (&mut self.panel, &self.window) {
            panel_consumed = panel.on_window_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::KeyP),
                        repeat: false,
                        ..
                    },
                ..
            } if !panel_consumed => {
                if let Some(panel) = &mut self.panel {
                    panel.toggle();
                    log::debug!("panel visible: {}", panel.is_visible());
                }
            }
            WindowEvent::Resized(size) => {
                self.handle_resize((size.width, size.height));
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    self.apply_viewport((size.width, size.height), scale_factor);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }
}

impl App {
    /// Recompute the viewport and reconfigure the surface after the
    /// window size changed
    fn handle_resize(&mut self, physical: (u32, u32)) {
        let Some(window) = &self.window else {
            return;
        };
        let scale_factor = window.scale_factor();
        self.apply_viewport(physical, scale_factor);
    }

    /// Rebuild the viewport and bring the swapchain to its capped
    /// backing size
    fn apply_viewport(&mut self, physical: (u32, u32), scale_factor: f64) {
        self.viewport = Viewport::from_physical(
            physical,
            scale_factor,
            self.render_config.max_pixel_ratio,
        );
        if let Some(surface) = &mut self.surface {
            surface.resize(self.viewport.backing_size());
        }
    }

    /// Render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // Frame-rate cap; redraws arriving early are dropped
        if !self.clock.try_tick(Instant::now()) {
            return;
        }

        // Panel pass first so edits land before this frame is sampled
        let mut panel_frame = None;
        if let Some(panel) = &mut self.panel {
            let response = panel.run(&window, &mut self.params);
            if response.rebuild_phases {
                self.waves.rebuild_phases(&self.params);
                log::debug!(
                    "phase table rebuilt: {} lines, factor {}",
                    self.params.lines,
                    self.params.factor
                );
            }
            panel_frame = response.frame;
        }

        self.waves
            .render_frame(&self.params, &self.viewport, &mut self.geometry);

        let Some(surface) = &mut self.surface else {
            return;
        };
        match surface.render(&self.geometry, &self.viewport, panel_frame) {
            Ok(()) => {}
            // stale swapchain, reconfigure and pick up next frame
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                surface.resize(self.viewport.backing_size());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                eprintln!("Render error: surface out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {:?}", e),
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("Wavedrift - flowing noise-wave background");
    println!(
        "  {}x{} window, noise seed {}, {} fps cap",
        args.width,
        args.height,
        args.seed,
        args.fps.max(1)
    );

    let mut app = App::new(&args);
    let event_loop = EventLoop::new().unwrap();
    let _ = event_loop.run_app(&mut app);
}
