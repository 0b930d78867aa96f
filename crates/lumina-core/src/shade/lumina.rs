//! The five-color family. Colors are gamma-encoded sRGB and mixed
//! component-wise; `shade` adds vibrance and grain afterwards.

use glam::{Vec2, Vec3};

use super::Fragment;
use crate::color::hue_shift;
use crate::math::{fract, fract2, hash12, mix3, pow0, smoothstep};
use crate::noise::{cellular, fbm, simplex};

const CENTER: Vec2 = Vec2::new(0.5, 0.5);

// ---------------------------------------------------------------------------
// Inverse-distance weighting
// ---------------------------------------------------------------------------

/// Normalised weights `1 / (|p - anchor|² + falloff)` for five anchors.
pub fn idw_weights(p: Vec2, anchors: &[Vec2; 5], falloff: f32) -> [f32; 5] {
    let mut w = anchors.map(|a| 1.0 / (p.distance_squared(a) + falloff));
    let total: f32 = w.iter().sum();
    for wi in &mut w {
        *wi /= total;
    }
    w
}

fn idw_blend(p: Vec2, anchors: &[Vec2; 5], falloff: f32, colors: &[Vec3; 5]) -> Vec3 {
    idw_weights(p, anchors, falloff)
        .iter()
        .zip(colors)
        .fold(Vec3::ZERO, |acc, (&w, &c)| acc + c * w)
}

/// Anchors of the mesh gradient: a fixed centre plus four corners orbiting
/// at distinct frequencies.
pub fn mesh_anchors(time: f32) -> [Vec2; 5] {
    let m = 0.1;
    [
        CENTER,
        Vec2::new(0.2, 0.2) + Vec2::new((time * 0.5).sin(), (time * 0.6).cos()) * m,
        Vec2::new(0.8, 0.2) + Vec2::new((time * 0.7).cos(), (time * 0.4).sin()) * m,
        Vec2::new(0.2, 0.8) + Vec2::new((time * 0.3).sin(), (time * 0.5).cos()) * m,
        Vec2::new(0.8, 0.8) + Vec2::new((time * 0.4).cos(), (time * 0.6).sin()) * m,
    ]
}

pub const MESH_FALLOFF: f32 = 0.1;

/// Domain position after the single-sample noise warp.
fn mesh_warp(f: &Fragment) -> Vec2 {
    let u = f.uniforms;
    let s = 1.5 * u.scale;
    let n = simplex(Vec2::new(f.uv.x * s + f.time, f.uv.y * s - f.time));
    f.uv + Vec2::splat(n * 0.2 * u.distortion)
}

fn mesh_gradient(f: &Fragment) -> Vec3 {
    idw_blend(mesh_warp(f), &mesh_anchors(f.time), MESH_FALLOFF, &f.colors())
}

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

pub fn mesh(f: &Fragment) -> Vec3 {
    mesh_gradient(f)
}

pub fn aurora(f: &Fragment) -> Vec3 {
    let (uv, t, u) = (f.uv, f.time, f.uniforms);
    let [_, c2, c3, c4, c5] = f.colors();

    let field = simplex(Vec2::new(uv.x * 1.2 * u.scale + t * 0.1, uv.y * 0.5)) * 0.5
        + simplex(Vec2::new(uv.x * 2.5 * u.scale - t * 0.15, uv.y * 0.8 + t * 0.05)) * 0.25;
    let dy = uv.y + field * 0.15 * u.distortion;
    let band = |a: f32, b: f32, c: f32, d: f32| smoothstep(a, b, dy) * smoothstep(c, d, dy);
    let b1 = band(0.0, 0.35, 0.65, 0.25);
    let b2 = band(0.15, 0.50, 0.80, 0.40);
    let b3 = band(0.30, 0.60, 0.90, 0.55);
    let b4 = band(0.45, 0.70, 1.0, 0.65);

    let shimmer = simplex(Vec2::new(uv.x * 3.0 + t * 0.4, uv.y * 1.5 - t * 0.1)) * 0.5 + 0.5;
    let shimmer = shimmer * 0.6 + 0.4;

    let m = 0.2;
    let anchors = [
        CENTER,
        Vec2::new(0.2, 0.3) + Vec2::new((t * 0.3).sin(), (t * 0.4).cos()) * m,
        Vec2::new(0.8, 0.3) + Vec2::new((t * 0.5).cos(), (t * 0.3).sin()) * m,
        Vec2::new(0.2, 0.7) + Vec2::new((t * 0.2).sin(), (t * 0.3).cos()) * m,
        Vec2::new(0.8, 0.7) + Vec2::new((t * 0.3).cos(), (t * 0.4).sin()) * m,
    ];
    let base = idw_blend(uv + Vec2::splat(field * 0.1), &anchors, 0.3, &f.colors());

    let glow = (c2 * b1 * 0.6 + c3 * b2 * 0.5 + c4 * b3 * 0.45 + c5 * b4 * 0.4) * shimmer;
    base * 0.6 + glow * aurora_fade(uv.y) + base * glow * 0.5
}

/// Curtain opacity: zero at the top and bottom edges, full across the
/// middle half.
fn aurora_fade(y: f32) -> f32 {
    smoothstep(0.0, 0.25, y) * smoothstep(1.0, 0.75, y)
}

pub fn grainy(f: &Fragment) -> Vec3 {
    let smooth = mesh_gradient(f);
    let [c1, c2, c3, c4, c5] = f.colors();

    let gt = f.time * 0.3;
    let drift = Vec2::new(
        (gt * 0.7).sin() * 30.0 + gt * 8.0,
        (gt * 0.5).cos() * 25.0 + gt * 5.0,
    );
    let p = (f.frag_coord + drift) / (200.0 * f.uniforms.scale);
    let cell = p.floor();
    let local = fract2(p);

    let r = hash12(cell, Vec2::new(127.1, 311.7));
    let chosen = match r {
        r if r > 0.8 => c5,
        r if r > 0.6 => c4,
        r if r > 0.4 => c3,
        r if r > 0.2 => c2,
        _ => c1,
    };
    let stipple = mix3(chosen, smooth, 0.5);

    let dot = Vec2::new(
        hash12(cell, Vec2::new(269.5, 183.3)),
        hash12(cell, Vec2::new(419.2, 371.9)),
    );
    let radius = 0.2 + r * 0.15;
    let mask = smoothstep(radius, radius - 0.05, local.distance(dot));
    mix3(smooth, stipple, mask * 0.3)
}

pub fn deep_sea(f: &Fragment) -> Vec3 {
    let (uv, t, s) = (f.uv, f.time, f.uniforms.scale);
    let [c1, c2, c3, c4, c5] = f.colors();

    let swell = simplex(Vec2::new(uv.x * 1.5 * s + t * 0.3, uv.y - t * 0.2));
    let base = mix3(c1, c2, swell * 0.5 + 0.5);
    let base = mix3(base, c5, uv.y * 0.6);

    let v1 = cellular(uv * 4.0 * s, t * 0.8);
    let v2 = cellular(uv * 6.0 * s + Vec2::splat(t), t * 1.2);
    let color = base + c3 * pow0(1.0 - v1, 4.0) * 0.8 + c4 * pow0(1.0 - v2, 3.0) * 0.4;
    color * (1.0 - uv.distance(CENTER) * 0.6)
}

pub fn holographic(f: &Fragment) -> Vec3 {
    let (uv, t, u) = (f.uv, f.time, f.uniforms);

    let m = 0.15 * u.distortion;
    let anchors = [
        CENTER,
        Vec2::new(0.2, 0.25) + Vec2::new((t * 0.4).sin(), (t * 0.5).cos()) * m,
        Vec2::new(0.8, 0.25) + Vec2::new((t * 0.6).cos(), (t * 0.35).sin()) * m,
        Vec2::new(0.2, 0.75) + Vec2::new((t * 0.25).sin(), (t * 0.45).cos()) * m,
        Vec2::new(0.8, 0.75) + Vec2::new((t * 0.35).cos(), (t * 0.55).sin()) * m,
    ];
    let base = idw_blend(uv, &anchors, 0.15, &f.colors());

    let film1 = simplex(uv * 3.0 * u.scale + Vec2::new(t * 0.06, t * 0.04));
    let film2 = simplex(uv * 5.5 * u.scale - Vec2::new(t * 0.08, -t * 0.05));
    let opd = (uv.x * 4.0 + uv.y * 3.0) * 1.8 + film1 * 2.2 + film2 * 1.1;
    let phase = opd * 6.28;
    let thin_film = Vec3::new(
        phase.sin() * 0.5 + 0.5,
        (phase + 2.094).sin() * 0.5 + 0.5,
        (phase + 4.189).sin() * 0.5 + 0.5,
    );
    let film = mix3(hue_shift(base, opd * 1.8 + t * 0.25), thin_film, 0.35);

    let patch = simplex(uv * 2.5 * u.scale + Vec2::new(t * 0.1, t * 0.08)) * 0.5 + 0.5;
    let intensity = smoothstep(0.2, 0.8, patch);
    let view = (uv - CENTER).extend(0.8).normalize().z.abs();
    let fresnel = pow0(1.0 - view, 1.8);
    let strength = intensity * (fresnel * 0.5 + 0.5) * 0.55;
    mix3(base, film, strength)
}

pub fn radial(f: &Fragment) -> Vec3 {
    let (t, u) = (f.time, f.uniforms);
    let [c1, c2, c3, c4, c5] = f.colors();

    let c = f.uv - CENTER;
    let d = c.length() * u.scale;
    let angle = c.y.atan2(c.x);
    let wave = (angle * 6.0 * u.complexity + d * 10.0 - t * 2.0).sin() * 0.5 + 0.5;
    let rings = (d * 15.0 - t * 3.0).sin() * 0.5 + 0.5;
    let color = mix3(c1, c2, wave);
    let color = mix3(color, c3, rings);
    let color = mix3(color, c4, 1.0 - d * 0.5);
    color + c5 * (-d * 3.0).exp() * 0.5
}

pub fn cosmic(f: &Fragment) -> Vec3 {
    let (uv, t, u) = (f.uv, f.time, f.uniforms);
    let [c1, c2, c3, c4, _] = f.colors();

    let threshold = 0.97 - u.distortion * 0.02;
    let mut stars = 0.0;
    for i in 1..=3 {
        let p = uv * (100.0 + i as f32 * 50.0) * u.scale;
        let id = p.floor();
        let r = hash12(id, Vec2::new(12.9898, 78.233));
        if r > threshold {
            let twinkle = (t * 3.0 + r * 6.28).sin() * 0.5 + 0.5;
            stars += smoothstep(0.1, 0.0, (fract2(p) - 0.5).length()) * twinkle;
        }
    }

    let nebula = fbm(uv * 3.0 * u.scale + Vec2::splat(t * 0.05)) * 0.5 + 0.5;
    let nebula = pow0(nebula, u.complexity);
    let cloud = mix3(c1, c2, nebula);
    let cloud = mix3(cloud, c3, pow0(nebula, 2.0));
    (cloud + c4 * stars) * (1.0 - (uv - CENTER).length() * 0.8)
}

pub fn plasma(f: &Fragment) -> Vec3 {
    let (uv, t, u) = (f.uv, f.time, f.uniforms);
    let [c1, c2, c3, c4, c5] = f.colors();

    let k = 10.0 * u.scale;
    let sum = (uv.x * k + t).sin()
        + (uv.y * k + t).sin()
        + ((uv.x + uv.y) * k + t).sin()
        + (uv.length() * k + t).sin();
    let pl = pow0(sum * 0.25 * 0.5 + 0.5, u.complexity);

    let color = mix3(c1, c2, pl);
    let color = mix3(color, c3, (pl * 6.28).sin() * 0.5 + 0.5);
    let color = mix3(color, c4, (pl * 12.56 + t).sin() * 0.3 + 0.5);

    let spoke = ((uv.y - 0.5).atan2(uv.x - 0.5) * 20.0 + pl * 10.0 - t * 5.0).sin();
    let lines = smoothstep(0.9, 1.0, spoke.abs());
    color + c5 * lines * 0.3 * u.distortion
}

pub fn terrain(f: &Fragment) -> Vec3 {
    let u = f.uniforms;
    let [c1, c2, c3, c4, c5] = f.colors();

    let h = fbm(f.uv * 4.0 * u.scale + Vec2::new(0.0, -f.time * 0.1)) * 0.5 + 0.5;
    let color = if h < 0.3 {
        mix3(c1, c2, h / 0.3)
    } else if h < 0.6 {
        mix3(c2, c3, (h - 0.3) / 0.3)
    } else {
        mix3(c3, c4, (h - 0.6) / 0.4)
    };
    let contour = smoothstep(0.02, 0.0, (fract(h * 10.0 * u.complexity) - 0.5).abs());
    mix3(color, c5, contour * 0.2)
}

pub fn beam(f: &Fragment) -> Vec3 {
    let (t, u) = (f.time, f.uniforms);
    let [c1, c2, c3, c4, _] = f.colors();

    let to = f.uv - Vec2::new(0.5, 1.0);
    let a = to.y.atan2(to.x);
    let d = to.length();
    let cx = u.complexity;
    let b1 = smoothstep(0.15, 0.0, ((a * 3.0 * cx + t * 0.5).sin() * 0.3 * u.distortion + d - 0.3).abs());
    let b2 = smoothstep(0.1, 0.0, ((a * 5.0 * cx - t * 0.3).sin() * 0.2 + d - 0.5).abs());
    let b3 = smoothstep(0.12, 0.0, ((a * 7.0 * cx + t * 0.4).sin() * 0.25 + d - 0.7).abs());
    let fade = 1.0 - smoothstep(0.0, 1.0, d);
    c1 * b1 * fade * 0.8 + c2 * b2 * fade * 0.6 + c3 * b3 * fade * 0.4 + c4 * (-d * 2.0).exp() * 0.5
}

pub fn noise(f: &Fragment) -> Vec3 {
    let u = f.uniforms;
    let [c1, c2, c3, _, _] = f.colors();

    let n = fbm(f.uv * 5.0 * u.scale + Vec2::splat(f.time * 0.1)) * 0.5 + 0.5;
    let n = pow0(n, u.complexity);
    let color = mix3(c1, c2, n);
    mix3(color, c3, simplex(f.uv * 20.0 * u.scale) * 0.5 + 0.5)
}
