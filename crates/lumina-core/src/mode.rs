//! Closed enumerations of the shading modes.
//!
//! Two independent mode families exist. They share some names ("mesh",
//! "aurora", "holographic", ...) but not formulas, so a mode is always
//! identified by its family plus an exact name or index.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Family
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Family {
    /// Five-color palette, vibrance and grain post-process.
    #[default]
    Lumina,
    /// Three-color palette mixed in OKLab, tone-mapped output.
    Studio,
}

impl Family {
    pub const ALL: [Family; 2] = [Family::Lumina, Family::Studio];

    pub fn name(self) -> &'static str {
        match self {
            Family::Lumina => "lumina",
            Family::Studio => "studio",
        }
    }

    /// Number of color slots the family's shaders read.
    pub fn palette_size(self) -> usize {
        match self {
            Family::Lumina => 5,
            Family::Studio => 3,
        }
    }

    pub fn modes(self) -> Vec<Mode> {
        match self {
            Family::Lumina => LuminaMode::ALL.iter().map(|&m| Mode::Lumina(m)).collect(),
            Family::Studio => StudioMode::ALL.iter().map(|&m| Mode::Studio(m)).collect(),
        }
    }

    fn mode_names(self) -> Vec<String> {
        self.modes().iter().map(|m| m.name().to_string()).collect()
    }
}

impl FromStr for Family {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Family::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| Error::InvalidFamily {
                name: s.to_string(),
                valid: Family::ALL.iter().map(|f| f.name().to_string()).collect(),
            })
    }
}

// ---------------------------------------------------------------------------
// LuminaMode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LuminaMode {
    Mesh,
    Aurora,
    Grainy,
    DeepSea,
    Holographic,
    Radial,
    Cosmic,
    Plasma,
    Terrain,
    Beam,
    Noise,
}

impl LuminaMode {
    /// In index order.
    pub const ALL: [LuminaMode; 11] = [
        LuminaMode::Mesh,
        LuminaMode::Aurora,
        LuminaMode::Grainy,
        LuminaMode::DeepSea,
        LuminaMode::Holographic,
        LuminaMode::Radial,
        LuminaMode::Cosmic,
        LuminaMode::Plasma,
        LuminaMode::Terrain,
        LuminaMode::Beam,
        LuminaMode::Noise,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LuminaMode::Mesh => "mesh",
            LuminaMode::Aurora => "aurora",
            LuminaMode::Grainy => "grainy",
            LuminaMode::DeepSea => "deep-sea",
            LuminaMode::Holographic => "holographic",
            LuminaMode::Radial => "radial",
            LuminaMode::Cosmic => "cosmic",
            LuminaMode::Plasma => "plasma",
            LuminaMode::Terrain => "terrain",
            LuminaMode::Beam => "beam",
            LuminaMode::Noise => "noise",
        }
    }

    pub fn index(self) -> u32 {
        self as u32
    }
}

// ---------------------------------------------------------------------------
// StudioMode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudioMode {
    Mesh,
    Aurora,
    DeepSea,
    Galaxy,
    Neon,
    Bokeh,
    Fire,
    Ice,
    Candy,
    Holographic,
    Radiant,
    Kaleidoscope,
    Liquid,
    Spectrum,
    Grainy,
    Noise,
}

impl StudioMode {
    /// In index order.
    pub const ALL: [StudioMode; 16] = [
        StudioMode::Mesh,
        StudioMode::Aurora,
        StudioMode::DeepSea,
        StudioMode::Galaxy,
        StudioMode::Neon,
        StudioMode::Bokeh,
        StudioMode::Fire,
        StudioMode::Ice,
        StudioMode::Candy,
        StudioMode::Holographic,
        StudioMode::Radiant,
        StudioMode::Kaleidoscope,
        StudioMode::Liquid,
        StudioMode::Spectrum,
        StudioMode::Grainy,
        StudioMode::Noise,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StudioMode::Mesh => "mesh",
            StudioMode::Aurora => "aurora",
            StudioMode::DeepSea => "deep-sea",
            StudioMode::Galaxy => "galaxy",
            StudioMode::Neon => "neon",
            StudioMode::Bokeh => "bokeh",
            StudioMode::Fire => "fire",
            StudioMode::Ice => "ice",
            StudioMode::Candy => "candy",
            StudioMode::Holographic => "holographic",
            StudioMode::Radiant => "radiant",
            StudioMode::Kaleidoscope => "kaleidoscope",
            StudioMode::Liquid => "liquid",
            StudioMode::Spectrum => "spectrum",
            StudioMode::Grainy => "grainy",
            StudioMode::Noise => "noise",
        }
    }

    pub fn index(self) -> u32 {
        self as u32
    }
}

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Lumina(LuminaMode),
    Studio(StudioMode),
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Lumina(LuminaMode::Mesh)
    }
}

impl Mode {
    pub fn family(self) -> Family {
        match self {
            Mode::Lumina(_) => Family::Lumina,
            Mode::Studio(_) => Family::Studio,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Lumina(m) => m.name(),
            Mode::Studio(m) => m.name(),
        }
    }

    pub fn index(self) -> u32 {
        match self {
            Mode::Lumina(m) => m.index(),
            Mode::Studio(m) => m.index(),
        }
    }

    /// Every mode of both families.
    pub fn all() -> impl Iterator<Item = Mode> {
        Family::ALL.into_iter().flat_map(Family::modes)
    }

    /// Exact, case-sensitive name lookup within `family`.
    pub fn parse(family: Family, name: &str) -> Result<Mode> {
        family
            .modes()
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| Error::InvalidMode {
                name: name.to_string(),
                valid: family.mode_names(),
            })
    }

    /// Exact integer lookup within `family`. Out-of-range values are
    /// rejected, never mapped onto a neighbouring mode.
    pub fn from_index(family: Family, index: i64) -> Result<Mode> {
        usize::try_from(index)
            .ok()
            .and_then(|i| family.modes().get(i).copied())
            .ok_or_else(|| Error::InvalidMode {
                name: index.to_string(),
                valid: family.mode_names(),
            })
    }

    /// The next mode of the same family, wrapping around.
    pub fn next(self) -> Mode {
        let modes = self.family().modes();
        let i = self.index() as usize;
        modes[(i + 1) % modes.len()]
    }
}

/// Accepts `family/name` or a bare name, which resolves in the Lumina family.
impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((family, name)) => Mode::parse(family.parse()?, name),
            None => Mode::parse(Family::Lumina, s),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.family().name(), self.name())
    }
}
