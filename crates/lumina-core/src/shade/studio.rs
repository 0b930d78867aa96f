//! The three-color family. Slots 0..3 hold linear-light colors; every blend
//! goes through OKLab and `shade` tone-maps the result.

use glam::{Vec2, Vec3};

use super::Fragment;
use crate::color::mix_perceptual as mix;
use crate::math::{modulo, pow0, smoothstep};
use crate::noise::{cellular_fract_hash, fbm, simplex};

fn palette(f: &Fragment) -> (Vec3, Vec3, Vec3) {
    let c = f.colors();
    (c[0], c[1], c[2])
}

/// Offset from the centre, its angle and length.
fn polar(uv: Vec2) -> (f32, f32) {
    let c = uv - Vec2::splat(0.5);
    (c.y.atan2(c.x), c.length())
}

/// Domain-warped fbm: two nested warps feed the final lookup.
pub fn mesh(f: &Fragment) -> Vec3 {
    let (uv, t) = (f.uv, f.time);
    let (c1, c2, c3) = palette(f);

    let q = Vec2::new(
        fbm(uv + Vec2::splat(t * 0.1)),
        fbm(uv + Vec2::new(1.7, 9.2) + Vec2::splat(t * 0.08)),
    );
    let r = Vec2::new(
        fbm(uv + 4.0 * q + Vec2::splat(t * 0.15)),
        fbm(uv + 4.0 * q + Vec2::new(8.3, 2.8) + Vec2::splat(t * 0.12)),
    );
    let n = fbm(uv + 0.5 * r);

    let col = mix(c1, c2, n * 0.5 + 0.5);
    mix(col, c3, n * n * 0.5)
}

pub fn aurora(f: &Fragment) -> Vec3 {
    let (uv, t) = (f.uv, f.time);
    let (c1, c2, c3) = palette(f);

    let wave = (uv.x * 6.28 + t).sin() * 0.5 + 0.5 + (uv.x * 12.56 + t * 1.5).sin() * 0.25;
    let wave = wave / 1.25;
    let col = mix(c1, c2, wave * 0.7 + uv.y * 0.3);
    mix(col, c3, (uv.y * 6.28 - t * 0.7).sin() * 0.3 + 0.5)
}

pub fn deep_sea(f: &Fragment) -> Vec3 {
    let (uv, t) = (f.uv, f.time);
    let (c1, c2, c3) = palette(f);

    let v1 = cellular_fract_hash(uv * 4.0, t * 0.5);
    let v2 = cellular_fract_hash(uv * 6.0, (t + 1.0) * 0.5);
    let caustic = v1 * v2;
    let col = mix(c1, c2, caustic);
    mix(col, c3, pow0(caustic, 0.5))
}

pub fn galaxy(f: &Fragment) -> Vec3 {
    let (uv, t) = (f.uv, f.time);
    let (c1, c2, c3) = palette(f);

    let n = fbm(uv * 3.0 + Vec2::splat(t * 0.2));
    let col = mix(c1, c2, n * 0.5 + 0.5);
    mix(col, c3, fbm(uv * 5.0 - Vec2::splat(t * 0.1)) * 0.5 + 0.3)
}

pub fn neon(f: &Fragment) -> Vec3 {
    let (uv, t) = (f.uv, f.time);
    let (c1, c2, c3) = palette(f);

    let line1 = smoothstep(0.03, 0.0, ((uv.x * 10.0 + t).sin() * 0.3 + uv.y - 0.5).abs());
    let line2 = smoothstep(0.03, 0.0, ((uv.y * 8.0 - t * 0.8).sin() * 0.25 + uv.x - 0.5).abs());
    c1 * line1 + c2 * line2 + c3 * 0.15
}

pub fn bokeh(f: &Fragment) -> Vec3 {
    let (uv, t) = (f.uv, f.time);
    let (c1, c2, c3) = palette(f);

    let mut col = c1 * 0.3 + c2 * 0.2;
    for i in 0..4 {
        let i = i as f32;
        let pos = Vec2::new(
            (t * 0.4 + i * 1.6).sin() * 0.35 + 0.5,
            (t * 0.3 + i * 2.0).cos() * 0.35 + 0.5,
        );
        col += c3 * smoothstep(0.12, 0.02, uv.distance(pos)) * 0.35;
    }
    col
}

pub fn fire(f: &Fragment) -> Vec3 {
    let (uv, t) = (f.uv, f.time);
    let (c1, c2, c3) = palette(f);

    let n = fbm(uv * 4.0 + Vec2::new(0.0, -t * 0.8));
    let col = mix(c1, c2, 1.0 - uv.y + n * 0.4);
    mix(col, c3, pow0(1.0 - uv.y, 1.5) * n)
}

pub fn ice(f: &Fragment) -> Vec3 {
    let (uv, t) = (f.uv, f.time);
    let (c1, c2, c3) = palette(f);

    let n = simplex(uv * 6.0 + Vec2::splat(t * 0.15));
    let col = mix(c1, c2, uv.y + n * 0.15);
    mix(col, c3, simplex(uv * 8.0 - Vec2::splat(t * 0.1)).abs() * 0.5 + 0.2)
}

pub fn candy(f: &Fragment) -> Vec3 {
    let (c1, c2, c3) = palette(f);
    let (angle, dist) = polar(f.uv);

    let swirl = (angle * 3.0 + dist * 6.0 - f.time * 2.0).sin();
    let col = mix(c1, c2, swirl * 0.5 + 0.5);
    mix(col, c3, dist * 1.2)
}

pub fn holographic(f: &Fragment) -> Vec3 {
    let (uv, t) = (f.uv, f.time);
    let (c1, c2, c3) = palette(f);
    let (angle, dist) = polar(uv);

    let irid = (angle * 2.5 + t + dist * 8.0).sin();
    let col = mix(c1, c2, irid * 0.5 + 0.5);
    mix(col, c3, uv.x + simplex(uv * 3.0 + Vec2::splat(t * 0.1)) * 0.2)
}

pub fn radiant(f: &Fragment) -> Vec3 {
    let (c1, c2, c3) = palette(f);
    let (angle, dist) = polar(f.uv);

    let rays = (angle * 5.0 + f.time).sin() * (1.0 - dist) * 0.6 + 0.4;
    let col = mix(c1, c2, rays);
    mix(col, c3, 1.0 - dist)
}

pub fn kaleidoscope(f: &Fragment) -> Vec3 {
    let (c1, c2, c3) = palette(f);
    let (angle, dist) = polar(f.uv);

    let a = modulo(angle * 5.0 + f.time * 0.4, 6.28) / 6.28 - 0.5;
    let col = mix(c1, c2, a.abs() * 2.0);
    mix(col, c3, dist + simplex(f.uv * 4.0) * 0.15)
}

pub fn liquid(f: &Fragment) -> Vec3 {
    let (uv, t) = (f.uv, f.time);
    let (c1, c2, c3) = palette(f);

    let n = fbm(uv * 3.0 + Vec2::splat(t * 0.25));
    let col = mix(c1, c2, n * 0.5 + 0.5);
    mix(col, c3, (n * 6.28 + t).sin() * 0.25 + 0.5)
}

pub fn spectrum(f: &Fragment) -> Vec3 {
    let (uv, t) = (f.uv, f.time);
    let (c1, c2, c3) = palette(f);

    let n = simplex(uv * 3.5 + Vec2::splat(t * 0.2));
    let col = mix(c1, c2, (uv.x * 6.28 + n).sin() * 0.5 + 0.5);
    mix(col, c3, (uv.y * 6.28 - n + t * 0.3).sin() * 0.5 + 0.5)
}

/// Static; only the noise amount varies it.
pub fn grainy(f: &Fragment) -> Vec3 {
    let (c1, c2, c3) = palette(f);

    let n = fbm(f.uv * 5.0);
    let col = mix(c1, c2, n * 0.5 + 0.5);
    mix(col, c3, simplex(f.uv * 40.0) * f.uniforms.noise_strength)
}

pub fn noise(f: &Fragment) -> Vec3 {
    let (c1, c2, c3) = palette(f);

    let n = simplex(f.uv * 15.0 + Vec2::splat(f.time * 0.5));
    let col = mix(c1, c2, n * 0.5 + 0.5);
    mix(col, c3, f.uniforms.noise_strength)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{Mode, StudioMode};
    use crate::params::{RenderParams, Uniforms};

    fn uniforms(mode: StudioMode) -> Uniforms {
        RenderParams::default()
            .with_mode(Mode::Studio(mode))
            .validate()
            .uniforms
    }

    fn at(u: &Uniforms, x: f32, y: f32, time: f32) -> Fragment<'_> {
        let uv = Vec2::new(x, y);
        Fragment {
            uv,
            frag_coord: uv * crate::shade::REFERENCE_RESOLUTION,
            time,
            uniforms: u,
        }
    }

    #[test]
    fn single_color_palette_is_flat_for_mixing_modes() {
        let grey = Vec3::splat(0.25);
        for mode in [
            StudioMode::Mesh,
            StudioMode::Aurora,
            StudioMode::Galaxy,
            StudioMode::Fire,
            StudioMode::Liquid,
            StudioMode::Spectrum,
        ] {
            let mut u = uniforms(mode);
            u.colors = [grey, grey, grey, Vec3::ZERO, Vec3::ZERO];
            let c = crate::shade::shader_for(Mode::Studio(mode))(&at(&u, 0.3, 0.6, 1.0));
            assert!((c - grey).abs().max_element() < 1e-4, "{mode:?} gave {c}");
        }
    }

    #[test]
    fn neon_background_is_third_color_scaled() {
        let mut u = uniforms(StudioMode::Neon);
        u.colors = [Vec3::ONE, Vec3::ONE, Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO, Vec3::ZERO];
        // Far from both lines at t = 0.
        let c = neon(&at(&u, 0.05, 0.95, 0.0));
        assert!((c - Vec3::new(0.0, 0.0, 0.15)).abs().max_element() < 1e-5, "{c}");
    }

    #[test]
    fn bokeh_adds_light_near_an_orb() {
        let mut u = uniforms(StudioMode::Bokeh);
        u.colors = [Vec3::ZERO, Vec3::ZERO, Vec3::ONE, Vec3::ZERO, Vec3::ZERO];
        // Orb 0 at t = 0 sits at (0.5, 0.85).
        let on = bokeh(&at(&u, 0.5, 0.85, 0.0));
        assert!(on.x >= 0.35 - 1e-5, "{on}");
    }

    #[test]
    fn noise_mode_follows_noise_strength() {
        let mut u = uniforms(StudioMode::Noise);
        u.colors = [Vec3::ZERO, Vec3::ZERO, Vec3::ONE, Vec3::ZERO, Vec3::ZERO];
        u.noise_strength = 0.0;
        let none = noise(&at(&u, 0.4, 0.4, 0.0));
        u.noise_strength = 1.0;
        let full = noise(&at(&u, 0.4, 0.4, 0.0));
        assert!(none.max_element() < 1e-4, "{none}");
        assert!((full - Vec3::ONE).abs().max_element() < 1e-3, "{full}");
    }

    #[test]
    fn grainy_ignores_time() {
        let u = uniforms(StudioMode::Grainy);
        assert_eq!(grainy(&at(&u, 0.2, 0.7, 0.0)), grainy(&at(&u, 0.2, 0.7, 50.0)));
    }

    #[test]
    fn kaleidoscope_is_finite_on_the_centre() {
        let u = uniforms(StudioMode::Kaleidoscope);
        assert!(kaleidoscope(&at(&u, 0.5, 0.5, 0.0)).is_finite());
    }
}
