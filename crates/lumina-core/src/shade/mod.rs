//! Per-pixel shading.
//!
//! Each mode is a plain `fn(&Fragment) -> Vec3` registered in [`shader_for`].
//! [`shade`] wraps the registry with the family's time scale, its
//! post-process, and the finite/clamp guard, so callers always get a
//! displayable gamma-encoded RGB triple.

pub mod lumina;
pub mod studio;

use glam::{Vec2, Vec3};

use crate::color::{linear_to_srgb, vibrance_boost};
use crate::math::{grain_hash, pow0};
use crate::mode::{Family, LuminaMode, Mode, StudioMode};
use crate::params::Uniforms;

/// Lumina modes read `time = uTime * 0.2` where `uTime` grows by 0.01 per
/// 60 Hz frame, i.e. 0.12 per clock second.
pub const LUMINA_TIME_RATE: f32 = 0.6 * 0.2;
pub const STUDIO_TIME_RATE: f32 = 0.3;

/// Lumina post-process vibrance amount.
pub const VIBRANCE: f32 = 0.3;

/// Frame-coordinate space assumed when a caller supplies only `uv`.
pub const REFERENCE_RESOLUTION: Vec2 = Vec2::new(800.0, 600.0);

/// One evaluation point. `uv` is in [0,1]², origin bottom-left; `pixel` is
/// the fragment coordinate in output pixels, used only by screen-space
/// patterns (the grainy stipple).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub uv: Vec2,
    pub pixel: Vec2,
}

impl Coordinate {
    pub fn normalized(uv: Vec2) -> Self {
        Self {
            uv,
            pixel: uv * REFERENCE_RESOLUTION,
        }
    }

    /// Centre of pixel (`x`, `y`) in a `width`×`height` image whose row 0 is
    /// the top.
    pub fn from_pixel(x: u32, y: u32, width: u32, height: u32) -> Self {
        let w = width.max(1) as f32;
        let h = height.max(1) as f32;
        let uv = Vec2::new((x as f32 + 0.5) / w, 1.0 - (y as f32 + 0.5) / h);
        Self {
            uv,
            pixel: uv * Vec2::new(w, h),
        }
    }

    /// Express `pixel` in units `pixel_scale` times larger, so a frame
    /// rendered below output resolution keeps screen-space patterns sized
    /// in output pixels.
    pub fn with_pixel_scale(self, pixel_scale: f32) -> Self {
        Self {
            pixel: self.pixel * pixel_scale,
            ..self
        }
    }
}

/// Everything a mode function reads.
#[derive(Debug, Clone, Copy)]
pub struct Fragment<'a> {
    pub uv: Vec2,
    pub frag_coord: Vec2,
    /// Family-scaled time.
    pub time: f32,
    pub uniforms: &'a Uniforms,
}

impl Fragment<'_> {
    #[inline]
    pub fn colors(&self) -> [Vec3; 5] {
        self.uniforms.colors
    }
}

pub type ShadeFn = fn(&Fragment) -> Vec3;

/// Registry lookup. Exhaustive, so every mode has exactly one function.
pub fn shader_for(mode: Mode) -> ShadeFn {
    match mode {
        Mode::Lumina(m) => match m {
            LuminaMode::Mesh => lumina::mesh,
            LuminaMode::Aurora => lumina::aurora,
            LuminaMode::Grainy => lumina::grainy,
            LuminaMode::DeepSea => lumina::deep_sea,
            LuminaMode::Holographic => lumina::holographic,
            LuminaMode::Radial => lumina::radial,
            LuminaMode::Cosmic => lumina::cosmic,
            LuminaMode::Plasma => lumina::plasma,
            LuminaMode::Terrain => lumina::terrain,
            LuminaMode::Beam => lumina::beam,
            LuminaMode::Noise => lumina::noise,
        },
        Mode::Studio(m) => match m {
            StudioMode::Mesh => studio::mesh,
            StudioMode::Aurora => studio::aurora,
            StudioMode::DeepSea => studio::deep_sea,
            StudioMode::Galaxy => studio::galaxy,
            StudioMode::Neon => studio::neon,
            StudioMode::Bokeh => studio::bokeh,
            StudioMode::Fire => studio::fire,
            StudioMode::Ice => studio::ice,
            StudioMode::Candy => studio::candy,
            StudioMode::Holographic => studio::holographic,
            StudioMode::Radiant => studio::radiant,
            StudioMode::Kaleidoscope => studio::kaleidoscope,
            StudioMode::Liquid => studio::liquid,
            StudioMode::Spectrum => studio::spectrum,
            StudioMode::Grainy => studio::grainy,
            StudioMode::Noise => studio::noise,
        },
    }
}

pub fn family_time(family: Family, clock_time: f32) -> f32 {
    match family {
        Family::Lumina => clock_time * LUMINA_TIME_RATE,
        Family::Studio => clock_time * STUDIO_TIME_RATE,
    }
}

/// Shade one coordinate at clock time `clock_time`. Pure; the result is
/// finite and every channel lies in [0, 1].
pub fn shade(uniforms: &Uniforms, coord: Coordinate, clock_time: f32) -> Vec3 {
    let family = uniforms.mode.family();
    let fragment = Fragment {
        uv: coord.uv,
        frag_coord: coord.pixel,
        time: family_time(family, clock_time),
        uniforms,
    };
    let raw = shader_for(uniforms.mode)(&fragment);
    let color = match family {
        Family::Lumina => {
            let c = vibrance_boost(raw, VIBRANCE);
            c + Vec3::splat((grain_hash(coord.uv) - 0.5) * uniforms.noise_strength)
        }
        Family::Studio => tone_map(linear_to_srgb(raw.max(Vec3::ZERO))),
    };
    sanitize(color)
}

fn tone_map(c: Vec3) -> Vec3 {
    Vec3::new(pow0(c.x, 0.9), pow0(c.y, 0.9), pow0(c.z, 0.9)) * 0.92 + Vec3::splat(0.08)
}

/// NaN becomes 0, then every channel is clamped to [0, 1].
pub fn sanitize(c: Vec3) -> Vec3 {
    let fix = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
    Vec3::new(fix(c.x), fix(c.y), fix(c.z))
}
