//! A running preview: current parameters, staged edits and the animation clock.

use crate::clock::AnimationClock;
use crate::params::{Degenerate, RenderParams, Uniforms};

/// Frame-driving state: the active parameters, their validated snapshot and
/// the clock. Parameter changes are staged and only take effect at the next
/// `tick`, so a frame never mixes two snapshots.
pub struct Scene {
    params: RenderParams,
    uniforms: Uniforms,
    diagnostics: Vec<Degenerate>,
    staged: Option<RenderParams>,
    clock: AnimationClock,
    size: (u32, u32),
    /// Set whenever the next frame would differ from the last one presented.
    needs_redraw: bool,
}

impl Scene {
    pub fn new(params: RenderParams) -> Self {
        let validated = params.validate();
        Self {
            params,
            uniforms: validated.uniforms,
            diagnostics: validated.diagnostics,
            staged: None,
            clock: AnimationClock::new(),
            size: (0, 0),
            needs_redraw: true,
        }
    }

    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    pub fn uniforms(&self) -> &Uniforms {
        &self.uniforms
    }

    pub fn diagnostics(&self) -> &[Degenerate] {
        &self.diagnostics
    }

    pub fn time(&self) -> f32 {
        self.clock.time()
    }

    /// The parameters the next frame will use: the staged set if any.
    pub fn pending_params(&self) -> &RenderParams {
        self.staged.as_ref().unwrap_or(&self.params)
    }

    /// Queue `params` for the next frame boundary. A later call before the
    /// next `tick` replaces the earlier one.
    pub fn stage(&mut self, params: RenderParams) {
        self.staged = Some(params);
    }

    /// Convenience for edits relative to the pending parameters.
    pub fn update(&mut self, edit: impl FnOnce(&mut RenderParams)) {
        let mut next = self.pending_params().clone();
        edit(&mut next);
        self.stage(next);
    }

    /// Advance one frame: swap in staged parameters, then move the clock.
    pub fn tick(&mut self, dt: f32) {
        if let Some(next) = self.staged.take() {
            if next != self.params {
                let validated = next.validate();
                self.uniforms = validated.uniforms;
                self.diagnostics = validated.diagnostics;
                self.params = next;
                self.needs_redraw = true;
            }
        }
        let before = self.clock.time();
        self.clock
            .advance(dt, self.uniforms.speed, self.uniforms.animate);
        if self.clock.time() != before {
            self.needs_redraw = true;
        }
    }

    /// Returns whether the surface size changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if self.size == (width, height) {
            return false;
        }
        log::debug!("scene resized to {width}x{height}");
        self.size = (width, height);
        self.needs_redraw = true;
        true
    }

    pub fn reset_clock(&mut self) {
        self.clock.reset();
        self.needs_redraw = true;
    }

    /// Returns true once per change: the caller must re-render the frame.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.needs_redraw, false)
    }
}
