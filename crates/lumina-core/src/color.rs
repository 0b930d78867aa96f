//! Color-space utilities and the `ColorStop` input type.
//!
//! Colors are plain `Vec3` RGB triples. Conversions are component-wise or
//! fixed-matrix and never branch except at the sRGB transfer threshold.

use std::fmt;
use std::str::FromStr;

use glam::{Mat3, Vec3};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// sRGB transfer curve
// ---------------------------------------------------------------------------

#[inline]
fn srgb_channel_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn linear_channel_to_srgb(c: f32) -> f32 {
    if c < 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Decode gamma-encoded sRGB to linear light. Negative input stays on the
/// linear segment.
pub fn srgb_to_linear(c: Vec3) -> Vec3 {
    Vec3::new(
        srgb_channel_to_linear(c.x),
        srgb_channel_to_linear(c.y),
        srgb_channel_to_linear(c.z),
    )
}

/// Encode linear light as sRGB.
pub fn linear_to_srgb(c: Vec3) -> Vec3 {
    Vec3::new(
        linear_channel_to_srgb(c.x),
        linear_channel_to_srgb(c.y),
        linear_channel_to_srgb(c.z),
    )
}

// ---------------------------------------------------------------------------
// OKLab
// ---------------------------------------------------------------------------

// glam matrices are column-major; each constant below is written as its
// three columns.
const LINEAR_TO_LMS: Mat3 = Mat3::from_cols_array(&[
    0.412_221_46, 0.211_903_5, 0.088_302_46,
    0.536_332_55, 0.680_699_5, 0.281_718_85,
    0.051_445_995, 0.107_396_96, 0.629_978_7,
]);

const LMS_TO_LAB: Mat3 = Mat3::from_cols_array(&[
    0.210_454_26, 1.977_998_5, 0.025_904_037,
    0.793_617_8, -2.428_592_2, 0.782_771_77,
    -0.004_072_047, 0.450_593_7, -0.808_675_77,
]);

const LAB_TO_LMS: Mat3 = Mat3::from_cols_array(&[
    1.0, 1.0, 1.0,
    0.396_337_78, -0.105_561_346, -0.089_484_18,
    0.215_803_76, -0.063_854_17, -1.291_485_5,
]);

const LMS_TO_LINEAR: Mat3 = Mat3::from_cols_array(&[
    4.076_741_7, -1.268_438, -0.004_196_086_3,
    -3.307_711_6, 2.609_757_4, -0.703_418_6,
    0.230_969_94, -0.341_319_38, 1.707_614_7,
]);

/// Linear RGB to OKLab `(L, a, b)`.
pub fn linear_to_oklab(c: Vec3) -> Vec3 {
    let lms = LINEAR_TO_LMS * c;
    let lms = Vec3::new(lms.x.cbrt(), lms.y.cbrt(), lms.z.cbrt());
    LMS_TO_LAB * lms
}

/// OKLab `(L, a, b)` back to linear RGB.
pub fn oklab_to_linear(lab: Vec3) -> Vec3 {
    let lms = LAB_TO_LMS * lab;
    LMS_TO_LINEAR * (lms * lms * lms)
}

/// Blend two linear-light colors through OKLab. Complementary hues pass
/// through a chromatic midpoint instead of the grey a plain RGB lerp gives.
pub fn mix_perceptual(c1: Vec3, c2: Vec3, t: f32) -> Vec3 {
    let a = linear_to_oklab(c1);
    let b = linear_to_oklab(c2);
    oklab_to_linear(a + (b - a) * t)
}

// ---------------------------------------------------------------------------
// Stylistic adjustments
// ---------------------------------------------------------------------------

const GREY_AXIS: f32 = 0.577_35;

/// Rotate `color` about the achromatic axis by `angle` radians (Rodrigues'
/// formula in RGB space).
pub fn hue_shift(color: Vec3, angle: f32) -> Vec3 {
    let k = Vec3::splat(GREY_AXIS);
    let (sin, cos) = angle.sin_cos();
    color * cos + k.cross(color) * sin + k * k.dot(color) * (1.0 - cos)
}

const REC709_LUMA: Vec3 = Vec3::new(0.2126, 0.7152, 0.0722);

/// Push `c` away from its Rec.709 luma. The push is strongest for
/// near-grey input and vanishes for fully saturated colors.
pub fn vibrance_boost(c: Vec3, amount: f32) -> Vec3 {
    let luma = c.dot(REC709_LUMA);
    let max_c = c.max_element();
    let min_c = c.min_element();
    let sat = if max_c > 0.001 { (max_c - min_c) / max_c } else { 0.0 };
    let boost = amount * (1.0 - sat);
    Vec3::splat(luma) + (c - Vec3::splat(luma)) * (1.0 + boost)
}

// ---------------------------------------------------------------------------
// ColorStop
// ---------------------------------------------------------------------------

/// One gamma-encoded sRGB color of a gradient palette, channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop(Vec3);

impl ColorStop {
    pub const BLACK: ColorStop = ColorStop(Vec3::ZERO);

    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self(Vec3::new(r, g, b).clamp(Vec3::ZERO, Vec3::ONE))
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self(Vec3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0))
    }

    /// Parse `#rrggbb` or `#rgb` (case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor {
            value: hex.to_string(),
        };
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map_err(|_| invalid());
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        match digits.len() {
            3 => Ok(Self::from_rgb8(
                nibble(0)? * 17,
                nibble(1)? * 17,
                nibble(2)? * 17,
            )),
            6 => Ok(Self::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
            _ => Err(invalid()),
        }
    }

    /// Gamma-encoded channels.
    pub fn srgb(self) -> Vec3 {
        self.0
    }

    /// Linear-light channels.
    pub fn linear(self) -> Vec3 {
        srgb_to_linear(self.0)
    }

    pub fn to_rgb8(self) -> [u8; 3] {
        let c = (self.0 * 255.0).round();
        [c.x as u8, c.y as u8, c.z as u8]
    }

    /// `#rrggbb`, lower-case.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// CSS functional notation, e.g. `rgb(17,34,51)`.
    pub fn to_css_rgb(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("rgb({r},{g},{b})")
    }
}

impl FromStr for ColorStop {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s.trim())
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
