//! Procedural noise primitives shared by every shading mode.
//!
//! All functions are pure and deterministic. `simplex` is the classic
//! permutation-polynomial 2D simplex noise; its output lies in roughly
//! [-1, 1] and is continuous across lattice cells.

use glam::{Vec2, Vec3};

use crate::math::{fract, fract2, fract3};

// Skew/unskew constants: (3 - sqrt 3) / 6, (sqrt 3 - 1) / 2, -1 + 2 * C.x, 1 / 41.
const C: [f32; 4] = [
    0.211_324_87,
    0.366_025_42,
    -0.577_350_26,
    0.024_390_243,
];

#[inline]
fn mod289(x: Vec3) -> Vec3 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn mod289_2(x: Vec2) -> Vec2 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn permute(x: Vec3) -> Vec3 {
    mod289((x * 34.0 + 1.0) * x)
}

// ---------------------------------------------------------------------------
// Simplex
// ---------------------------------------------------------------------------

/// 2D gradient (simplex) noise in roughly [-1, 1].
pub fn simplex(v: Vec2) -> f32 {
    let i = (v + Vec2::splat(v.dot(Vec2::splat(C[1])))).floor();
    let x0 = v - i + Vec2::splat(i.dot(Vec2::splat(C[0])));

    let i1 = if x0.x > x0.y {
        Vec2::new(1.0, 0.0)
    } else {
        Vec2::new(0.0, 1.0)
    };

    // Offsets of the middle and far corners.
    let x1 = x0 + Vec2::splat(C[0]) - i1;
    let x2 = x0 + Vec2::splat(C[2]);

    let i = mod289_2(i);
    let p = permute(
        permute(Vec3::splat(i.y) + Vec3::new(0.0, i1.y, 1.0))
            + Vec3::splat(i.x)
            + Vec3::new(0.0, i1.x, 1.0),
    );

    let mut m = (Vec3::splat(0.5) - Vec3::new(x0.dot(x0), x1.dot(x1), x2.dot(x2))).max(Vec3::ZERO);
    m *= m;
    m *= m;

    // Gradients from 41 points on a line, mapped onto a diamond.
    let x = 2.0 * fract3(p * C[3]) - 1.0;
    let h = x.abs() - 0.5;
    let ox = (x + 0.5).floor();
    let a0 = x - ox;

    // Normalise gradients implicitly by scaling m.
    m *= Vec3::splat(1.792_842_9) - 0.853_734_7 * (a0 * a0 + h * h);

    let g = Vec3::new(
        a0.x * x0.x + h.x * x0.y,
        a0.y * x1.x + h.y * x1.y,
        a0.z * x2.x + h.z * x2.y,
    );
    130.0 * m.dot(g)
}

// ---------------------------------------------------------------------------
// Fractal Brownian motion
// ---------------------------------------------------------------------------

pub const FBM_OCTAVES: usize = 5;

/// Five octaves of `simplex`, amplitude halving and frequency doubling from
/// an initial amplitude of 0.5.
pub fn fbm(p: Vec2) -> f32 {
    let mut p = p;
    let mut value = 0.0;
    let mut amplitude = 0.5;
    for _ in 0..FBM_OCTAVES {
        value += amplitude * simplex(p);
        p *= 2.0;
        amplitude *= 0.5;
    }
    value
}

// ---------------------------------------------------------------------------
// Cellular (Voronoi) distance
// ---------------------------------------------------------------------------

fn sine_hash2(p: Vec2) -> Vec2 {
    let q = Vec2::new(
        p.dot(Vec2::new(127.1, 311.7)),
        p.dot(Vec2::new(269.5, 183.3)),
    );
    fract2(Vec2::new(q.x.sin(), q.y.sin()) * 43758.5453)
}

// Sine-free hash; stable for large cell coordinates.
fn fract_hash2(p: Vec2) -> Vec2 {
    let mut p3 = fract3(Vec3::new(p.x, p.y, p.x) * Vec3::new(0.1031, 0.1030, 0.0973));
    p3 += Vec3::splat(p3.dot(Vec3::new(p3.y, p3.z, p3.x) + 33.33));
    Vec2::new(
        fract((p3.x + p3.y) * p3.z),
        fract((p3.x + p3.z) * p3.y),
    )
}

fn cellular_with(p: Vec2, phase: f32, hash: fn(Vec2) -> Vec2, cap: f32) -> f32 {
    let n = p.floor();
    let f = p - n;
    let mut min_sq = cap;
    for j in -1..=1 {
        for i in -1..=1 {
            let g = Vec2::new(i as f32, j as f32);
            let o = hash(n + g);
            let o = Vec2::new(
                0.5 + 0.5 * (phase + 6.2831 * o.x).sin(),
                0.5 + 0.5 * (phase + 6.2831 * o.y).sin(),
            );
            let r = g + o - f;
            min_sq = min_sq.min(r.dot(r));
        }
    }
    min_sq.sqrt()
}

/// Distance from `p` to the nearest animated feature point of the 3×3 cell
/// neighbourhood. Each cell's point oscillates as
/// `0.5 + 0.5 * sin(time + 2π * hash(cell))`. The squared distance is capped
/// at 1, so the result never exceeds 1.
pub fn cellular(p: Vec2, time: f32) -> f32 {
    cellular_with(p, time, sine_hash2, 1.0)
}

/// Same field as [`cellular`] but with the sine-free cell hash and no
/// distance cap; used by the compact-palette caustics.
pub fn cellular_fract_hash(p: Vec2, phase: f32) -> f32 {
    cellular_with(p, phase, fract_hash2, 8.0)
}
