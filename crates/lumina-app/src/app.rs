use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use lumina_core::{render_frame, render_frame_scaled, Frame, RenderParams, Scene};
use lumina_gpu::{FramePresenter, GpuContext};
use winit::window::Window;

use crate::config::{render_size, Config};
use crate::input::{step_scale, step_speed, switch_family, InputAction};
use crate::screenshot;

// ---------------------------------------------------------------------------
// Simple FPS counter, logs to console once per second
// ---------------------------------------------------------------------------

struct FpsCounter {
    frames: u32,
    last_report: Instant,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            frames: 0,
            last_report: Instant::now(),
        }
    }

    /// Increment the frame count.  Returns the FPS value if a full second has
    /// elapsed since the last report (so the caller can log it).
    fn tick(&mut self) -> Option<f32> {
        self.frames += 1;
        let elapsed = self.last_report.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            let fps = self.frames as f32 / elapsed;
            self.frames = 0;
            self.last_report = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    surface: wgpu::Surface<'static>,
    gpu: GpuContext,
    surface_config: wgpu::SurfaceConfiguration,
    presenter: FramePresenter,

    scene: Scene,
    /// Parameters restored by `Reset`.
    initial: RenderParams,
    render_scale: u32,
    /// Last CPU frame, re-presented while the scene is unchanged.
    frame: Option<Frame>,
    /// `frame` has not reached the GPU texture yet.
    needs_upload: bool,

    last_frame: Instant,
    fps: FpsCounter,
}

impl App {
    /// Initialise wgpu for a given window.  The window is wrapped in `Arc` so
    /// that the surface can safely hold a `'static` reference to it.
    pub fn new(window: Arc<Window>, config: Config) -> anyhow::Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(Arc::clone(&window))
            .context("failed to create wgpu surface")?;
        let gpu = pollster::block_on(GpuContext::for_surface(instance, &surface))?;

        let surface_config = gpu.surface_config(&surface, size.width, size.height);
        surface.configure(&gpu.device, &surface_config);
        log::info!(
            "Surface configured: {}×{} {:?} Fifo",
            surface_config.width,
            surface_config.height,
            surface_config.format
        );

        let presenter = FramePresenter::new(&gpu.device, surface_config.format);

        let mut scene = Scene::new(config.params.clone());
        let (w, h) = render_size(surface_config.width, surface_config.height, config.render_scale);
        scene.resize(w, h);
        log::info!("Mode: {}  render resolution {}×{}", scene.params().mode, w, h);

        Ok(Self {
            surface,
            gpu,
            surface_config,
            presenter,
            scene,
            initial: config.params,
            render_scale: config.render_scale,
            frame: None,
            needs_upload: false,
            last_frame: Instant::now(),
            fps: FpsCounter::new(),
        })
    }

    // -------------------------------------------------------------------------
    // Resize
    // -------------------------------------------------------------------------

    /// Reconfigure the surface; the next frame is re-rendered at the new size.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width == 0 || new_height == 0 {
            return;
        }
        self.surface_config.width = new_width;
        self.surface_config.height = new_height;
        self.surface.configure(&self.gpu.device, &self.surface_config);

        let (w, h) = render_size(new_width, new_height, self.render_scale);
        self.scene.resize(w, h);

        log::debug!("Surface resized to {}×{}", new_width, new_height);
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Apply an action to the app state.
    ///
    /// Returns `true` if the app should exit (i.e. action was `Quit`).
    /// Parameter edits are staged and take effect at the next frame.
    pub fn handle_action(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::LoadPalette(palette) => {
                log::info!("Palette: {}", palette.name());
                self.scene.update(|p| p.colors = palette.colors());
            }

            InputAction::NextMode => {
                let mode = self.scene.pending_params().mode.next();
                log::info!("Mode: {mode}");
                self.scene.update(|p| p.mode = mode);
            }

            InputAction::SwitchFamily => {
                let mode = switch_family(self.scene.pending_params().mode);
                log::info!("Mode: {mode}");
                self.scene.update(|p| p.mode = mode);
            }

            InputAction::SpeedUp | InputAction::SpeedDown => {
                let steps = if action == InputAction::SpeedUp { 1 } else { -1 };
                self.scene.update(|p| p.speed = step_speed(p.speed, steps));
                log::debug!("speed → {:.2}", self.scene.pending_params().speed);
            }

            InputAction::ScaleUp | InputAction::ScaleDown => {
                let steps = if action == InputAction::ScaleUp { 1 } else { -1 };
                self.scene.update(|p| p.scale = step_scale(p.scale, steps));
                log::debug!("scale → {:.3}", self.scene.pending_params().scale);
            }

            InputAction::ToggleAnimate => {
                self.scene.update(|p| p.animate = !p.animate);
                log::info!(
                    "Animation {}",
                    if self.scene.pending_params().animate { "resumed" } else { "paused" }
                );
            }

            InputAction::Reset => {
                log::info!("Reset to start-up parameters");
                self.scene.stage(self.initial.clone());
                self.scene.reset_clock();
            }

            InputAction::Screenshot => {
                if let Err(e) = self.screenshot() {
                    log::warn!("screenshot failed: {e:#}");
                }
            }

            InputAction::Quit => return true,
        }
        false
    }

    /// Render the current scene at full window resolution and save it.
    fn screenshot(&self) -> anyhow::Result<()> {
        let frame = render_frame(
            self.scene.uniforms(),
            self.scene.time(),
            self.surface_config.width,
            self.surface_config.height,
        )?;
        screenshot::save_png(&frame, &screenshot::screenshot_path(self.scene.params().mode))
    }

    // -------------------------------------------------------------------------
    // Render
    // -------------------------------------------------------------------------

    /// Run one frame: tick the scene, re-rasterize if anything changed, draw.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.scene.tick(dt);

        let (width, height) = render_size(
            self.surface_config.width,
            self.surface_config.height,
            self.render_scale,
        );

        if let Some(fps) = self.fps.tick() {
            log::debug!(
                "FPS: {:.1}  mode: {}  render: {}×{}  t: {:.2}",
                fps,
                self.scene.params().mode,
                width,
                height,
                self.scene.time(),
            );
        }

        if self.scene.take_redraw() || self.frame.is_none() {
            // Grain stays in window pixels, matching full-size screenshots.
            let rendered = render_frame_scaled(
                self.scene.uniforms(),
                self.scene.time(),
                width,
                height,
                self.render_scale as f32,
            );
            match rendered {
                Ok(frame) => {
                    self.frame = Some(frame);
                    self.needs_upload = true;
                }
                Err(e) => log::warn!("frame skipped: {e}"),
            }
        }

        let upload = self.frame.as_ref().filter(|_| self.needs_upload);
        self.presenter
            .present(&self.gpu.device, &self.gpu.queue, &self.surface, upload)?;
        self.needs_upload = false;
        Ok(())
    }
}
