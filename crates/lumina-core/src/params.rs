//! The parameter contract: what callers hand in, and the validated snapshot
//! the shaders read.
//!
//! Validation runs once per parameter change. Structural problems (unknown
//! mode, malformed color) are errors raised while building `RenderParams`;
//! numeric knobs that produce odd but finite images are reported as
//! [`Degenerate`] diagnostics and rendering proceeds.

use std::fmt;

use glam::Vec3;
use serde::Deserialize;

use crate::color::ColorStop;
use crate::error::{Error, Result};
use crate::mode::{Family, Mode};
use crate::palette::Palette;

pub const DEFAULT_COLORS: [&str; 5] = ["#8b5cf6", "#ec4899", "#3b82f6", "#10b981", "#f59e0b"];

/// Studio-family slots missing from the caller's list take these.
const STUDIO_FALLBACK: [&str; 3] = ["#8b5cf6", "#ec4899", "#3b82f6"];

pub const MAX_COLORS: usize = 5;

/// Grain amount when a request leaves `noiseStrength` out. The Studio
/// family's tone mapping already lifts the blacks, so it uses less.
pub fn default_noise_strength(family: Family) -> f32 {
    match family {
        Family::Lumina => 0.2,
        Family::Studio => 0.05,
    }
}

fn parse_colors<S: AsRef<str>>(hex: &[S]) -> Result<Vec<ColorStop>> {
    hex.iter().map(|h| ColorStop::from_hex(h.as_ref())).collect()
}

// ---------------------------------------------------------------------------
// RenderParams
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    pub mode: Mode,
    pub colors: Vec<ColorStop>,
    /// Domain-frequency multiplier.
    pub scale: f32,
    /// Exponent / repetition modifier.
    pub complexity: f32,
    /// Domain-warp or angular-frequency strength.
    pub distortion: f32,
    /// Grain amount; 0 disables it.
    pub noise_strength: f32,
    /// Clock seconds advanced per wall-clock second.
    pub speed: f32,
    /// Accepted and carried through, not read by any mode.
    pub seed: f32,
    pub animate: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            colors: parse_colors(&DEFAULT_COLORS).unwrap_or_default(),
            scale: 1.0,
            complexity: 1.0,
            distortion: 1.0,
            noise_strength: default_noise_strength(Family::Lumina),
            speed: 1.0,
            seed: 0.0,
            animate: true,
        }
    }
}

impl RenderParams {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_colors(mut self, colors: Vec<ColorStop>) -> Self {
        self.colors = colors;
        self
    }

    /// Normalise into the immutable per-frame snapshot.
    pub fn validate(&self) -> Validated {
        let mut diagnostics = Vec::new();
        let defaults = RenderParams::default();

        let mut finite = |knob: &'static str, value: f32, fallback: f32| {
            if value.is_finite() {
                value
            } else {
                diagnostics.push(Degenerate::NonFinite { knob, value });
                fallback
            }
        };
        let scale = finite("scale", self.scale, defaults.scale);
        let complexity = finite("complexity", self.complexity, defaults.complexity);
        let distortion = finite("distortion", self.distortion, defaults.distortion);
        let noise_strength = finite(
            "noiseStrength",
            self.noise_strength,
            default_noise_strength(self.mode.family()),
        );
        let speed = finite("speed", self.speed, defaults.speed);
        let seed = finite("seed", self.seed, defaults.seed);

        if scale <= 0.0 {
            diagnostics.push(Degenerate::NonPositiveScale(scale));
        }
        if complexity <= 0.0 {
            diagnostics.push(Degenerate::NonPositiveComplexity(complexity));
        }
        if !(0.0..=1.0).contains(&noise_strength) {
            diagnostics.push(Degenerate::NoiseStrengthOutOfRange(noise_strength));
        }
        if speed < 0.0 {
            diagnostics.push(Degenerate::NegativeSpeed(speed));
        }

        for d in &diagnostics {
            log::warn!("degenerate parameter: {d}");
        }

        let uniforms = Uniforms {
            mode: self.mode,
            colors: resolve_palette(self.mode.family(), &self.colors),
            scale,
            complexity,
            distortion,
            noise_strength,
            speed: speed.max(0.0),
            seed,
            animate: self.animate,
        };
        Validated {
            uniforms,
            diagnostics,
        }
    }
}

/// Fill the five color slots for `family`. Lumina reads gamma-encoded values
/// and pads with black; Studio reads linear light, takes at most three stops
/// and fills gaps from its fallback palette.
fn resolve_palette(family: Family, colors: &[ColorStop]) -> [Vec3; MAX_COLORS] {
    let mut slots = [Vec3::ZERO; MAX_COLORS];
    match family {
        Family::Lumina => {
            for (slot, c) in slots.iter_mut().zip(colors) {
                *slot = c.srgb();
            }
        }
        Family::Studio => {
            for (i, slot) in slots.iter_mut().take(family.palette_size()).enumerate() {
                let stop = match colors.get(i) {
                    Some(c) => *c,
                    None => ColorStop::from_hex(STUDIO_FALLBACK[i]).unwrap_or(ColorStop::BLACK),
                };
                *slot = stop.linear();
            }
        }
    }
    slots
}

// ---------------------------------------------------------------------------
// Validated snapshot
// ---------------------------------------------------------------------------

/// Immutable per-frame parameter bundle shared by every pixel evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniforms {
    pub mode: Mode,
    /// Slots beyond the family's palette size are black.
    pub colors: [Vec3; MAX_COLORS],
    pub scale: f32,
    pub complexity: f32,
    pub distortion: f32,
    pub noise_strength: f32,
    /// Never negative.
    pub speed: f32,
    pub seed: f32,
    pub animate: bool,
}

impl Default for Uniforms {
    fn default() -> Self {
        RenderParams::default().validate().uniforms
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    pub uniforms: Uniforms,
    pub diagnostics: Vec<Degenerate>,
}

/// A knob value that renders, but not the way its name suggests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Degenerate {
    NonPositiveScale(f32),
    NonPositiveComplexity(f32),
    NoiseStrengthOutOfRange(f32),
    NegativeSpeed(f32),
    NonFinite { knob: &'static str, value: f32 },
}

impl fmt::Display for Degenerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degenerate::NonPositiveScale(v) => write!(
                f,
                "scale {v} <= 0 collapses every pattern to its value at the origin (or mirrors it)"
            ),
            Degenerate::NonPositiveComplexity(v) => write!(
                f,
                "complexity {v} <= 0 flattens pow(x, complexity) to 1 and removes angular repetition"
            ),
            Degenerate::NoiseStrengthOutOfRange(v) => {
                write!(f, "noiseStrength {v} outside [0, 1] pushes grain past the display range")
            }
            Degenerate::NegativeSpeed(v) => {
                write!(f, "speed {v} < 0 would run the clock backwards; treated as 0")
            }
            Degenerate::NonFinite { knob, value } => {
                write!(f, "{knob} is {value}; using its default instead")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// RenderRequest
// ---------------------------------------------------------------------------

/// A mode given either by name or by its index within the family.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ModeRef {
    Index(i64),
    Name(String),
}

/// Textual form of [`RenderParams`]; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderRequest {
    pub family: Option<String>,
    pub mode: Option<ModeRef>,
    pub colors: Option<Vec<String>>,
    /// Overrides `colors` when present.
    pub palette: Option<String>,
    pub scale: Option<f32>,
    pub complexity: Option<f32>,
    pub distortion: Option<f32>,
    pub noise_strength: Option<f32>,
    pub speed: Option<f32>,
    pub seed: Option<f32>,
    pub animate: Option<bool>,
}

impl RenderRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidRequest(e.to_string()))
    }

    /// Resolve names and hex strings. Fails on the first unknown mode,
    /// family, palette or malformed color.
    pub fn into_params(self) -> Result<RenderParams> {
        let defaults = RenderParams::default();

        let family = match (&self.family, &self.mode) {
            (Some(f), _) => f.parse()?,
            (None, Some(ModeRef::Name(name))) => match name.parse::<Mode>() {
                Ok(mode) => mode.family(),
                Err(_) => Family::Lumina,
            },
            _ => Family::Lumina,
        };
        let mode = match self.mode {
            None => family.modes()[0],
            Some(ModeRef::Index(i)) => Mode::from_index(family, i)?,
            Some(ModeRef::Name(name)) if self.family.is_some() => match name.split_once('/') {
                Some((prefix, bare)) if prefix == family.name() => Mode::parse(family, bare)?,
                _ => Mode::parse(family, &name)?,
            },
            Some(ModeRef::Name(name)) => name.parse()?,
        };

        let colors = match (self.palette, self.colors) {
            (Some(p), _) => p.parse::<Palette>()?.colors(),
            (None, Some(hex)) => parse_colors(&hex)?,
            (None, None) => defaults.colors,
        };

        Ok(RenderParams {
            mode,
            colors,
            scale: self.scale.unwrap_or(defaults.scale),
            complexity: self.complexity.unwrap_or(defaults.complexity),
            distortion: self.distortion.unwrap_or(defaults.distortion),
            noise_strength: self
                .noise_strength
                .unwrap_or_else(|| default_noise_strength(mode.family())),
            speed: self.speed.unwrap_or(defaults.speed),
            seed: self.seed.unwrap_or(defaults.seed),
            animate: self.animate.unwrap_or(defaults.animate),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{LuminaMode, StudioMode};

    #[test]
    fn defaults_validate_cleanly() {
        let v = RenderParams::default().validate();
        assert!(v.diagnostics.is_empty(), "{:?}", v.diagnostics);
        assert_eq!(v.uniforms.mode, Mode::Lumina(LuminaMode::Mesh));
        assert!((v.uniforms.noise_strength - 0.2).abs() < 1e-6);
    }

    #[test]
    fn lumina_pads_short_palette_with_black() {
        let params = RenderParams::default().with_colors(vec![
            ColorStop::from_rgb8(255, 0, 0),
            ColorStop::from_rgb8(0, 255, 0),
        ]);
        let u = params.validate().uniforms;
        assert_eq!(u.colors[0], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(u.colors[1], Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(&u.colors[2..], &[Vec3::ZERO; 3]);
    }

    #[test]
    fn lumina_ignores_extra_colors() {
        let params = RenderParams::default().with_colors(Palette::Monochrome.colors());
        let u = params.validate().uniforms;
        // Sixth stop (#ffffff) is dropped; the fifth is #cccccc.
        assert!((u.colors[4].x - 0.8).abs() < 1e-6);
    }

    #[test]
    fn studio_takes_three_linear_colors_with_fallback() {
        let params = RenderParams::default()
            .with_mode(Mode::Studio(StudioMode::Fire))
            .with_colors(vec![ColorStop::from_rgb8(255, 255, 255)]);
        let u = params.validate().uniforms;
        assert_eq!(u.colors[0], Vec3::ONE);
        let fallback = ColorStop::from_hex("#ec4899").unwrap().linear();
        assert_eq!(u.colors[1], fallback);
        assert_eq!(u.colors[3], Vec3::ZERO);
        assert_eq!(u.colors[4], Vec3::ZERO);
    }

    #[test]
    fn degenerate_knobs_are_reported_not_rejected() {
        let params = RenderParams {
            scale: 0.0,
            complexity: -1.0,
            noise_strength: 1.5,
            speed: -2.0,
            ..RenderParams::default()
        };
        let v = params.validate();
        assert_eq!(v.diagnostics.len(), 4, "{:?}", v.diagnostics);
        assert_eq!(v.uniforms.scale, 0.0);
        assert_eq!(v.uniforms.speed, 0.0);
    }

    #[test]
    fn non_finite_knobs_fall_back_to_defaults() {
        let params = RenderParams {
            scale: f32::NAN,
            distortion: f32::INFINITY,
            ..RenderParams::default()
        };
        let v = params.validate();
        assert_eq!(v.uniforms.scale, 1.0);
        assert_eq!(v.uniforms.distortion, 1.0);
        assert!(v
            .diagnostics
            .iter()
            .all(|d| matches!(d, Degenerate::NonFinite { .. })));
    }

    #[test]
    fn seed_is_carried_through() {
        let params = RenderParams {
            seed: 42.0,
            ..RenderParams::default()
        };
        assert_eq!(params.validate().uniforms.seed, 42.0);
    }

    #[test]
    fn request_from_json_with_name_and_palette() {
        let req = RenderRequest::from_json(
            r#"{"mode":"studio/neon","palette":"ocean","speed":0.5,"noiseStrength":0.1}"#,
        )
        .unwrap();
        let params = req.into_params().unwrap();
        assert_eq!(params.mode, Mode::Studio(StudioMode::Neon));
        assert_eq!(params.colors, Palette::Ocean.colors());
        assert_eq!(params.speed, 0.5);
        assert_eq!(params.noise_strength, 0.1);
    }

    #[test]
    fn request_with_family_and_index() {
        let req = RenderRequest::from_json(r#"{"family":"studio","mode":3}"#).unwrap();
        assert_eq!(
            req.into_params().unwrap().mode,
            Mode::Studio(StudioMode::Galaxy)
        );
    }

    #[test]
    fn request_with_family_and_bare_name() {
        let req = RenderRequest::from_json(r#"{"family":"studio","mode":"radiant"}"#).unwrap();
        assert_eq!(
            req.into_params().unwrap().mode,
            Mode::Studio(StudioMode::Radiant)
        );
    }

    #[test]
    fn request_with_family_accepts_matching_qualified_name() {
        let req = RenderRequest::from_json(r#"{"family":"studio","mode":"studio/neon"}"#).unwrap();
        assert_eq!(req.into_params().unwrap().mode, Mode::Studio(StudioMode::Neon));

        let req = RenderRequest::from_json(r#"{"family":"studio","mode":"lumina/plasma"}"#).unwrap();
        assert!(matches!(req.into_params(), Err(Error::InvalidMode { .. })));
    }

    #[test]
    fn request_rejects_unknown_family() {
        let req = RenderRequest::from_json(r#"{"family":"vapor","mode":"mesh"}"#).unwrap();
        let err = req.into_params().unwrap_err();
        assert!(matches!(err, Error::InvalidFamily { ref name, .. } if name == "vapor"));
        assert!(err.to_string().starts_with("Invalid family: vapor."));
    }

    #[test]
    fn noise_default_follows_family() {
        let studio = RenderRequest::from_json(r#"{"family":"studio"}"#)
            .unwrap()
            .into_params()
            .unwrap();
        assert_eq!(studio.noise_strength, 0.05);

        let qualified = RenderRequest::from_json(r#"{"mode":"studio/galaxy"}"#)
            .unwrap()
            .into_params()
            .unwrap();
        assert_eq!(qualified.noise_strength, 0.05);

        let lumina = RenderRequest::from_json(r#"{"mode":"grainy"}"#)
            .unwrap()
            .into_params()
            .unwrap();
        assert_eq!(lumina.noise_strength, 0.2);

        let explicit = RenderRequest::from_json(r#"{"family":"studio","noiseStrength":0.4}"#)
            .unwrap()
            .into_params()
            .unwrap();
        assert_eq!(explicit.noise_strength, 0.4);
    }

    #[test]
    fn non_finite_noise_falls_back_to_family_default() {
        let params = RenderParams {
            mode: Mode::Studio(StudioMode::Mesh),
            noise_strength: f32::NAN,
            ..RenderParams::default()
        };
        let v = params.validate();
        assert_eq!(v.uniforms.noise_strength, 0.05);
        assert!(matches!(
            v.diagnostics.as_slice(),
            [Degenerate::NonFinite { knob: "noiseStrength", .. }]
        ));
    }

    #[test]
    fn request_rejects_unknown_mode() {
        let req = RenderRequest::from_json(r#"{"mode":"vaporwave"}"#).unwrap();
        assert!(matches!(req.into_params(), Err(Error::InvalidMode { .. })));
        let req = RenderRequest::from_json(r#"{"mode":42}"#).unwrap();
        assert!(matches!(req.into_params(), Err(Error::InvalidMode { .. })));
    }

    #[test]
    fn request_rejects_bad_color_instead_of_substituting() {
        let req = RenderRequest::from_json(r##"{"colors":["#ff0000","red"]}"##).unwrap();
        assert_eq!(
            req.into_params(),
            Err(Error::InvalidColor {
                value: "red".to_string()
            })
        );
    }

    #[test]
    fn malformed_json_is_invalid_request() {
        assert!(matches!(
            RenderRequest::from_json("{not json"),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn empty_request_gives_defaults() {
        let params = RenderRequest::from_json("{}").unwrap().into_params().unwrap();
        assert_eq!(params, RenderParams::default());
    }
}
