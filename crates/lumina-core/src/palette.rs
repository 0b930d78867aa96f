use std::str::FromStr;

use crate::color::ColorStop;
use crate::error::Error;

/// Named color palettes offered by the studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Sunset,
    Ocean,
    Forest,
    Neon,
    Pastel,
    Monochrome,
    Fire,
    Aurora,
}

impl Palette {
    pub const ALL: [Palette; 8] = [
        Palette::Sunset,
        Palette::Ocean,
        Palette::Forest,
        Palette::Neon,
        Palette::Pastel,
        Palette::Monochrome,
        Palette::Fire,
        Palette::Aurora,
    ];

    /// Lookup key used in requests.
    pub fn id(self) -> &'static str {
        match self {
            Palette::Sunset => "sunset",
            Palette::Ocean => "ocean",
            Palette::Forest => "forest",
            Palette::Neon => "neon",
            Palette::Pastel => "pastel",
            Palette::Monochrome => "monochrome",
            Palette::Fire => "fire",
            Palette::Aurora => "aurora",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Palette::Sunset => "Sunset",
            Palette::Ocean => "Ocean",
            Palette::Forest => "Forest",
            Palette::Neon => "Neon",
            Palette::Pastel => "Pastel",
            Palette::Monochrome => "Monochrome",
            Palette::Fire => "Fire",
            Palette::Aurora => "Aurora",
        }
    }

    pub fn hex(self) -> &'static [&'static str] {
        match self {
            Palette::Sunset => &["#ff6b6b", "#feca57", "#ff9ff3", "#54a0ff", "#5f27cd"],
            Palette::Ocean => &["#0077b6", "#00b4d8", "#90e0ef", "#caf0f8", "#03045e"],
            Palette::Forest => &["#2d6a4f", "#40916c", "#52b788", "#74c69d", "#95d5b2"],
            Palette::Neon => &["#f72585", "#7209b7", "#3a0ca3", "#4361ee", "#4cc9f0"],
            Palette::Pastel => &["#ffadad", "#ffd6a5", "#fdffb6", "#caffbf", "#9bf6ff"],
            Palette::Monochrome => &[
                "#000000", "#333333", "#666666", "#999999", "#cccccc", "#ffffff",
            ],
            Palette::Fire => &["#ff0000", "#ff3300", "#ff6600", "#ff9900", "#ffcc00"],
            Palette::Aurora => &["#00ff87", "#60efff", "#ff00ff", "#bd00ff", "#00ff00"],
        }
    }

    pub fn colors(self) -> Vec<ColorStop> {
        self.hex()
            .iter()
            .filter_map(|h| ColorStop::from_hex(h).ok())
            .collect()
    }
}

impl FromStr for Palette {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Palette::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| Error::UnknownPalette {
                name: s.to_string(),
                valid: Palette::ALL.iter().map(|p| p.id().to_string()).collect(),
            })
    }
}
