//! Shader-language numeric helpers.
//!
//! Every mode formula is written against these so it reads like the fragment
//! shader it reproduces. Semantics follow GLSL, not Rust: `modulo` is
//! floored (`x - y * floor(x / y)`), and `smoothstep` accepts reversed edges.

use glam::{Vec2, Vec3};

/// `x - floor(x)`, always in [0, 1).
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
pub fn fract2(v: Vec2) -> Vec2 {
    v - v.floor()
}

#[inline]
pub fn fract3(v: Vec3) -> Vec3 {
    v - v.floor()
}

/// GLSL `mod`: the result takes the sign of `y`.
#[inline]
pub fn modulo(x: f32, y: f32) -> f32 {
    x - y * (x / y).floor()
}

#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Component-wise `mix(a, b, t)` with an unclamped scalar `t`.
#[inline]
pub fn mix3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Hermite falloff between two edges. `edge0 > edge1` yields the mirrored
/// curve, which many modes rely on for "fade out past edge1" masks.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// `pow` with the base clamped at zero. GLSL leaves negative bases undefined;
/// here they collapse to `0^e`.
#[inline]
pub fn pow0(x: f32, e: f32) -> f32 {
    x.max(0.0).powf(e)
}

/// Classic `fract(sin(dot(p, k)) * 43758.5453)` hash.
#[inline]
pub fn hash12(p: Vec2, k: Vec2) -> f32 {
    fract(p.dot(k).sin() * 43758.5453)
}

/// Hash used for the per-pixel grain and the star field.
#[inline]
pub fn grain_hash(p: Vec2) -> f32 {
    hash12(p, Vec2::new(12.9898, 78.233))
}
