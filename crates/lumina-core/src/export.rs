//! Static export: a compact CSS/SVG description of a gradient.
//!
//! This path does no per-pixel work. It needs only the ordered color list and
//! the export mode, which picks one of three gradient shapes.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::color::ColorStop;
use crate::error::{Error, Result};
use crate::palette::Palette;

pub const FORMAT_VERSION: &str = "0.1.0";

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    MeshGradient,
    DotOrbit,
    DotGrid,
    Warp,
    Halftone,
    HalftoneCmyk,
    Heatmap,
    LiquidMetal,
    ImageDithering,
    PaperTexture,
    FlutedGlass,
    Water,
    GrainGradient,
    StaticMeshGradient,
    StaticRadialGradient,
}

/// Which knobs an export mode responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub has_colors: bool,
    pub has_speed: bool,
    pub has_distortion: bool,
    pub has_swirl: bool,
    pub has_scale: bool,
}

const fn caps(colors: bool, speed: bool, distortion: bool, swirl: bool) -> Capabilities {
    Capabilities {
        has_colors: colors,
        has_speed: speed,
        has_distortion: distortion,
        has_swirl: swirl,
        has_scale: true,
    }
}

/// Gradient geometry used for the CSS/SVG rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportShape {
    /// Centred circle through every stop.
    Radial,
    /// Two stops along the 135° diagonal.
    Linear,
    /// Every stop swept around the centre.
    Conic,
}

impl ExportMode {
    pub const ALL: [ExportMode; 15] = [
        ExportMode::MeshGradient,
        ExportMode::DotOrbit,
        ExportMode::DotGrid,
        ExportMode::Warp,
        ExportMode::Halftone,
        ExportMode::HalftoneCmyk,
        ExportMode::Heatmap,
        ExportMode::LiquidMetal,
        ExportMode::ImageDithering,
        ExportMode::PaperTexture,
        ExportMode::FlutedGlass,
        ExportMode::Water,
        ExportMode::GrainGradient,
        ExportMode::StaticMeshGradient,
        ExportMode::StaticRadialGradient,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ExportMode::MeshGradient => "meshGradient",
            ExportMode::DotOrbit => "dotOrbit",
            ExportMode::DotGrid => "dotGrid",
            ExportMode::Warp => "warp",
            ExportMode::Halftone => "halftone",
            ExportMode::HalftoneCmyk => "halftoneCmyk",
            ExportMode::Heatmap => "heatmap",
            ExportMode::LiquidMetal => "liquidMetal",
            ExportMode::ImageDithering => "imageDithering",
            ExportMode::PaperTexture => "paperTexture",
            ExportMode::FlutedGlass => "flutedGlass",
            ExportMode::Water => "water",
            ExportMode::GrainGradient => "grainGradient",
            ExportMode::StaticMeshGradient => "staticMeshGradient",
            ExportMode::StaticRadialGradient => "staticRadialGradient",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ExportMode::MeshGradient => "Mesh Gradient",
            ExportMode::DotOrbit => "Dot Orbit",
            ExportMode::DotGrid => "Dot Grid",
            ExportMode::Warp => "Warp",
            ExportMode::Halftone => "Halftone",
            ExportMode::HalftoneCmyk => "Halftone CMYK",
            ExportMode::Heatmap => "Heatmap",
            ExportMode::LiquidMetal => "Liquid Metal",
            ExportMode::ImageDithering => "Image Dithering",
            ExportMode::PaperTexture => "Paper Texture",
            ExportMode::FlutedGlass => "Fluted Glass",
            ExportMode::Water => "Water",
            ExportMode::GrainGradient => "Grain Gradient",
            ExportMode::StaticMeshGradient => "Static Mesh Gradient",
            ExportMode::StaticRadialGradient => "Static Radial Gradient",
        }
    }

    pub fn capabilities(self) -> Capabilities {
        match self {
            ExportMode::MeshGradient | ExportMode::Warp => caps(true, true, true, true),
            ExportMode::DotOrbit
            | ExportMode::DotGrid
            | ExportMode::Halftone
            | ExportMode::Heatmap
            | ExportMode::ImageDithering
            | ExportMode::GrainGradient => caps(true, true, false, false),
            ExportMode::HalftoneCmyk | ExportMode::PaperTexture | ExportMode::Water => {
                caps(false, true, false, false)
            }
            ExportMode::LiquidMetal | ExportMode::FlutedGlass => caps(false, true, true, false),
            ExportMode::StaticMeshGradient => caps(true, false, true, true),
            ExportMode::StaticRadialGradient => caps(true, false, false, false),
        }
    }

    pub fn shape(self) -> ExportShape {
        match self {
            ExportMode::GrainGradient | ExportMode::StaticRadialGradient => ExportShape::Radial,
            ExportMode::DotGrid | ExportMode::DotOrbit => ExportShape::Linear,
            _ => ExportShape::Conic,
        }
    }

    /// Mode-specific parameters published alongside the request's knobs.
    pub fn default_params(self) -> Value {
        match self {
            ExportMode::MeshGradient => json!({
                "colors": ["#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#ffeaa7"],
                "distortion": 0.5, "swirl": 0.3, "grainMixer": 0.2, "grainOverlay": 0.1,
                "speed": 0.5, "scale": 1,
            }),
            ExportMode::DotOrbit => json!({
                "colors": ["#667eea", "#764ba2", "#f093fb", "#f5576c"],
                "dotCount": 20, "dotSize": 0.4, "spacing": 2.5, "speed": 0.8,
                "orbitSpeed": 1.2, "chaos": 0.3, "scale": 1,
            }),
            ExportMode::DotGrid => json!({
                "colors": ["#ffffff", "#cccccc"],
                "shape": "circle", "spacing": 20, "dotSize": 0.5, "speed": 0.3, "scale": 1,
            }),
            ExportMode::Warp => json!({
                "colors": ["#ee9ca7", "#ffdde1", "#8ec5fc", "#e0c3fc"],
                "pattern": "checks", "distortion": 0.6, "swirl": 0.4, "softness": 0.5,
                "speed": 0.7, "scale": 1,
            }),
            ExportMode::Halftone => json!({
                "colors": ["#000000", "#ffffff"],
                "type": "standard", "grid": "square", "scale": 1, "dotSize": 0.5,
                "contrast": 0.5, "speed": 0.5,
            }),
            ExportMode::HalftoneCmyk => json!({
                "type": "standard", "scale": 1, "dotSize": 0.5, "contrast": 0.5,
                "angleC": 15, "angleM": 75, "angleY": 0, "angleK": 45, "speed": 0.5,
            }),
            ExportMode::Heatmap => json!({
                "colors": ["#0000ff", "#00ffff", "#00ff00", "#ffff00", "#ff0000"],
                "speed": 0.6, "intensity": 0.7, "scale": 1,
            }),
            ExportMode::LiquidMetal => json!({
                "shape": "sphere", "speed": 0.8, "reflection": 0.6, "distortion": 0.4, "scale": 1,
            }),
            ExportMode::ImageDithering => json!({
                "ditherType": "floydSteinberg", "paletteType": "twoColor",
                "colors": ["#000000", "#ffffff"], "speed": 0.3, "scale": 1,
            }),
            ExportMode::PaperTexture => json!({
                "paperType": "cardboard", "grainIntensity": 0.5, "fiberIntensity": 0.3,
                "speed": 0.2, "scale": 1,
            }),
            ExportMode::FlutedGlass => json!({
                "distortionShape": "vertical", "gridShape": "regular", "distortion": 0.5,
                "speed": 0.4, "scale": 1,
            }),
            ExportMode::Water => json!({
                "speed": 0.7, "amplitude": 0.3, "frequency": 2, "scale": 1,
            }),
            ExportMode::GrainGradient => json!({
                "colors": ["#ff9a9e", "#fecfef", "#a18cd1", "#fbc2eb"],
                "shape": "linear", "grainAmount": 0.3, "speed": 0.5, "scale": 1,
            }),
            ExportMode::StaticMeshGradient => json!({
                "colors": ["#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4"],
                "distortion": 0.3, "swirl": 0.2, "grainMixer": 0.1, "grainOverlay": 0.05,
                "scale": 1,
            }),
            ExportMode::StaticRadialGradient => json!({
                "colors": ["#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#ffeaa7"],
                "focalX": 0.5, "focalY": 0.5, "radius": 1, "grainMixer": 0.1,
                "grainOverlay": 0.05, "scale": 1,
            }),
        }
    }
}

impl FromStr for ExportMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ExportMode::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| Error::InvalidMode {
                name: s.to_string(),
                valid: ExportMode::ALL.iter().map(|m| m.id().to_string()).collect(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(flatten)]
    pub capabilities: Capabilities,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

/// Everything a client needs to build a request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discovery {
    pub available_modes: Vec<CatalogEntry>,
    pub available_palettes: Vec<PaletteEntry>,
}

pub fn discovery() -> Discovery {
    Discovery {
        available_modes: ExportMode::ALL
            .iter()
            .map(|&m| CatalogEntry {
                id: m.id(),
                name: m.name(),
                capabilities: m.capabilities(),
            })
            .collect(),
        available_palettes: Palette::ALL
            .iter()
            .map(|&p| PaletteEntry {
                id: p.id(),
                name: p.name(),
                colors: p.hex(),
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// CSS / SVG
// ---------------------------------------------------------------------------

/// CSS `background` value for `colors` drawn as `shape`.
pub fn css_gradient(colors: &[ColorStop], shape: ExportShape) -> String {
    let css: Vec<String> = colors.iter().map(|c| c.to_css_rgb()).collect();
    match shape {
        ExportShape::Radial => format!("radial-gradient(circle at 50% 50%, {})", css.join(", ")),
        ExportShape::Linear => {
            let first = css.first().map(String::as_str).unwrap_or("transparent");
            let second = css.get(1).map(String::as_str).unwrap_or(first);
            format!("linear-gradient(135deg, {first}, {second})")
        }
        ExportShape::Conic => format!(
            "conic-gradient(from 0deg at 50% 50%, {})",
            css.join(", ")
        ),
    }
}

fn stop_offset(i: usize, n: usize) -> f32 {
    if n < 2 {
        0.0
    } else {
        i as f32 / (n - 1) as f32 * 100.0
    }
}

/// Standalone SVG document filling `width`×`height` with the gradient.
/// Radial shapes map to `<radialGradient>`, everything else to a diagonal
/// `<linearGradient>`.
pub fn svg_gradient(colors: &[ColorStop], shape: ExportShape, width: u32, height: u32) -> String {
    let open = match shape {
        ExportShape::Radial => r#"<radialGradient id="grad" cx="50%" cy="50%" r="50%">"#,
        _ => r#"<linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">"#,
    };
    let close = match shape {
        ExportShape::Radial => "</radialGradient>",
        _ => "</linearGradient>",
    };

    let mut stops = String::new();
    for (i, c) in colors.iter().enumerate() {
        let _ = write!(
            stops,
            "\n        <stop offset=\"{}%\" stop-color=\"{}\" />",
            stop_offset(i, colors.len()),
            c.to_hex()
        );
    }

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n    <defs>\n    {open}{stops}\n    {close}\n    </defs>\n    <rect width=\"100%\" height=\"100%\" fill=\"url(#grad)\" />\n</svg>"
    )
}

// ---------------------------------------------------------------------------
// Request / description
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Css,
    Svg,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "css" => Ok(OutputFormat::Css),
            "svg" => Ok(OutputFormat::Svg),
            other => Err(Error::InvalidRequest(format!(
                "unknown output format {other:?}; expected json, css or svg"
            ))),
        }
    }
}

fn default_export_colors() -> Vec<String> {
    ["#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#ffeaa7"]
        .map(String::from)
        .to_vec()
}

fn default_export_mode() -> String {
    ExportMode::MeshGradient.id().to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportRequest {
    pub colors: Vec<String>,
    pub mode: String,
    /// Overrides `colors` when present.
    pub palette: Option<String>,
    pub speed: f32,
    pub scale: f32,
    pub distortion: f32,
    pub swirl: f32,
    pub width: u32,
    pub height: u32,
    pub output_format: OutputFormat,
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self {
            colors: default_export_colors(),
            mode: default_export_mode(),
            palette: None,
            speed: 0.5,
            scale: 1.0,
            distortion: 0.5,
            swirl: 0.3,
            width: 800,
            height: 600,
            output_format: OutputFormat::Json,
        }
    }
}

impl ExportRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidRequest(e.to_string()))
    }

    /// Validate and build the full description.
    pub fn describe(&self) -> Result<GradientDescription> {
        let mode: ExportMode = self.mode.parse()?;
        let colors = match &self.palette {
            Some(name) => name.parse::<Palette>()?.colors(),
            None => self
                .colors
                .iter()
                .map(|c| ColorStop::from_hex(c))
                .collect::<Result<Vec<_>>>()?,
        };
        if colors.is_empty() {
            return Err(Error::InvalidRequest("colors must not be empty".to_string()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        // Mode defaults first, request knobs on top.
        let mut params = mode.default_params();
        if let Value::Object(map) = &mut params {
            map.insert("speed".into(), json!(self.speed));
            map.insert("scale".into(), json!(self.scale));
            map.insert("distortion".into(), json!(self.distortion));
            map.insert("swirl".into(), json!(self.swirl));
        }

        let shape = mode.shape();
        let css = css_gradient(&colors, shape);
        log::info!("exporting {} with {} colors", mode.id(), colors.len());
        Ok(GradientDescription {
            success: true,
            gradient: Gradient {
                colors: colors.iter().map(|c| c.to_hex()).collect(),
                mode: mode.id().to_string(),
                params,
                dimensions: Dimensions {
                    width: self.width,
                    height: self.height,
                },
            },
            css: Css {
                background: css.clone(),
                background_image: css,
            },
            svg: svg_gradient(&colors, shape, self.width, self.height),
            metadata: Metadata {
                version: FORMAT_VERSION.to_string(),
                description: format!("A {} gradient with {} colors", mode.name(), colors.len()),
            },
        })
    }

    /// The document for `output_format`: the JSON description, or the bare
    /// CSS or SVG text.
    pub fn render(&self) -> Result<String> {
        let description = self.describe()?;
        match self.output_format {
            OutputFormat::Json => serde_json::to_string_pretty(&description)
                .map_err(|e| Error::InvalidRequest(e.to_string())),
            OutputFormat::Css => Ok(description.css.background),
            OutputFormat::Svg => Ok(description.svg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientDescription {
    pub success: bool,
    pub gradient: Gradient,
    pub css: Css,
    pub svg: String,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    pub colors: Vec<String>,
    pub mode: String,
    pub params: Value,
    pub dimensions: Dimensions,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Css {
    pub background: String,
    pub background_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub version: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(hex: &[&str]) -> Vec<ColorStop> {
        hex.iter().map(|h| ColorStop::from_hex(h).unwrap()).collect()
    }

    #[test]
    fn catalog_has_fifteen_unique_ids() {
        let mut seen = std::collections::HashSet::new();
        for m in ExportMode::ALL {
            assert!(seen.insert(m.id()), "duplicate {}", m.id());
            assert_eq!(m.id().parse::<ExportMode>(), Ok(m));
        }
        assert_eq!(seen.len(), 15);
    }

    #[test]
    fn shape_table() {
        assert_eq!(ExportMode::GrainGradient.shape(), ExportShape::Radial);
        assert_eq!(ExportMode::StaticRadialGradient.shape(), ExportShape::Radial);
        assert_eq!(ExportMode::DotGrid.shape(), ExportShape::Linear);
        assert_eq!(ExportMode::DotOrbit.shape(), ExportShape::Linear);
        assert_eq!(ExportMode::MeshGradient.shape(), ExportShape::Conic);
        assert_eq!(ExportMode::Water.shape(), ExportShape::Conic);
    }

    #[test]
    fn linear_uses_first_two_colors() {
        let css = css_gradient(&stops(&["#ff0000", "#00ff00", "#0000ff"]), ExportShape::Linear);
        assert_eq!(css, "linear-gradient(135deg, rgb(255,0,0), rgb(0,255,0))");
    }

    #[test]
    fn linear_repeats_a_single_color() {
        let css = css_gradient(&stops(&["#abc"]), ExportShape::Linear);
        assert_eq!(css, "linear-gradient(135deg, rgb(170,187,204), rgb(170,187,204))");
    }

    #[test]
    fn radial_and_conic_use_every_color() {
        let colors = stops(&["#000000", "#ffffff", "#ff0000"]);
        assert_eq!(
            css_gradient(&colors, ExportShape::Radial),
            "radial-gradient(circle at 50% 50%, rgb(0,0,0), rgb(255,255,255), rgb(255,0,0))"
        );
        assert_eq!(
            css_gradient(&colors, ExportShape::Conic),
            "conic-gradient(from 0deg at 50% 50%, rgb(0,0,0), rgb(255,255,255), rgb(255,0,0))"
        );
    }

    #[test]
    fn svg_spreads_stops_evenly() {
        let svg = svg_gradient(&stops(&["#000000", "#808080", "#ffffff"]), ExportShape::Radial, 40, 30);
        assert!(svg.contains(r#"width="40" height="30" viewBox="0 0 40 30""#), "{svg}");
        assert!(svg.contains("<radialGradient"));
        assert!(svg.contains(r##"<stop offset="0%" stop-color="#000000" />"##));
        assert!(svg.contains(r##"<stop offset="50%" stop-color="#808080" />"##));
        assert!(svg.contains(r##"<stop offset="100%" stop-color="#ffffff" />"##));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn svg_non_radial_is_diagonal_linear() {
        let svg = svg_gradient(&stops(&["#112233"]), ExportShape::Conic, 10, 10);
        assert!(svg.contains(r#"<linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">"#));
        assert!(svg.contains(r##"<stop offset="0%" stop-color="#112233" />"##));
    }

    #[test]
    fn default_request_describes_mesh_gradient() {
        let d = ExportRequest::default().describe().unwrap();
        assert_eq!(d.gradient.mode, "meshGradient");
        assert_eq!(d.gradient.colors.len(), 5);
        assert_eq!(d.metadata.description, "A Mesh Gradient gradient with 5 colors");
        assert!(d.css.background.starts_with("conic-gradient("));
        assert_eq!(d.css.background, d.css.background_image);
    }

    #[test]
    fn request_knobs_override_mode_defaults() {
        let req = ExportRequest::from_json(r#"{"mode":"warp","speed":2.0}"#).unwrap();
        let d = req.describe().unwrap();
        assert_eq!(d.gradient.params["speed"], json!(2.0));
        assert_eq!(d.gradient.params["pattern"], json!("checks"));
    }

    #[test]
    fn palette_overrides_colors() {
        let req = ExportRequest::from_json(r#"{"palette":"monochrome"}"#).unwrap();
        assert_eq!(req.describe().unwrap().gradient.colors.len(), 6);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let bad_mode = ExportRequest::from_json(r#"{"mode":"spiral"}"#).unwrap();
        let err = bad_mode.describe().unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Invalid mode: spiral. Valid modes: meshGradient, dotOrbit"));

        let bad_color = ExportRequest::from_json(r##"{"colors":["#12345"]}"##).unwrap();
        assert_eq!(
            bad_color.describe().unwrap_err().to_string(),
            "Invalid color: #12345. Use hex format like #ff0000"
        );

        let bad_palette = ExportRequest::from_json(r#"{"palette":"vapor"}"#).unwrap();
        assert!(matches!(
            bad_palette.describe(),
            Err(Error::UnknownPalette { .. })
        ));

        let empty = ExportRequest::from_json(r#"{"colors":[]}"#).unwrap();
        assert!(empty.describe().is_err());

        assert!(ExportRequest::from_json("[1,2").is_err());
    }

    #[test]
    fn render_by_output_format() {
        let css = ExportRequest::from_json(
            r##"{"mode":"dotGrid","colors":["#112233","#445566"],"outputFormat":"css"}"##,
        )
        .unwrap()
        .render()
        .unwrap();
        assert_eq!(css, "linear-gradient(135deg, rgb(17,34,51), rgb(68,85,102))");

        let svg = ExportRequest::from_json(r#"{"outputFormat":"svg"}"#)
            .unwrap()
            .render()
            .unwrap();
        assert!(svg.starts_with("<svg"));

        let json = ExportRequest::default().render().unwrap();
        let v: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["success"], json!(true));
        assert_eq!(v["gradient"]["dimensions"]["width"], json!(800));
        assert_eq!(v["metadata"]["version"], json!(FORMAT_VERSION));
        assert!(v["css"]["backgroundImage"].is_string());
    }

    #[test]
    fn discovery_lists_modes_and_palettes() {
        let v = serde_json::to_value(discovery()).unwrap();
        assert_eq!(v["availableModes"].as_array().unwrap().len(), 15);
        assert_eq!(v["availableModes"][0]["id"], json!("meshGradient"));
        assert_eq!(v["availableModes"][0]["hasSwirl"], json!(true));
        assert_eq!(v["availablePalettes"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn output_format_parses() {
        assert_eq!("svg".parse::<OutputFormat>(), Ok(OutputFormat::Svg));
        assert!("pdf".parse::<OutputFormat>().is_err());
    }
}
