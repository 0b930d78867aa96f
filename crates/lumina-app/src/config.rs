use anyhow::Context;
use lumina_core::{RenderParams, RenderRequest};

pub const CONFIG_VAR: &str = "LUMINA_CONFIG";
pub const RENDER_SCALE_VAR: &str = "LUMINA_RENDER_SCALE";
pub const DEFAULT_RENDER_SCALE: u32 = 2;

/// Start-up settings gathered from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub params: RenderParams,
    /// Window pixels per rendered pixel along each axis.
    pub render_scale: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let params = match std::env::var(CONFIG_VAR) {
            Ok(path) => load_params(&path)?,
            Err(_) => RenderParams::default(),
        };
        let render_scale = parse_render_scale(std::env::var(RENDER_SCALE_VAR).ok().as_deref());
        Ok(Self {
            params,
            render_scale,
        })
    }
}

/// Read a JSON render request from `path`.
pub fn load_params(path: &str) -> anyhow::Result<RenderParams> {
    let json = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let params = parse_params(&json).with_context(|| format!("loading {path}"))?;
    log::info!("config loaded from {path}: {}", params.mode);
    Ok(params)
}

pub fn parse_params(json: &str) -> lumina_core::Result<RenderParams> {
    RenderRequest::from_json(json)?.into_params()
}

/// Missing, unparsable or zero values fall back to the default.
pub fn parse_render_scale(value: Option<&str>) -> u32 {
    match value.map(|v| v.trim().parse::<u32>()) {
        None => DEFAULT_RENDER_SCALE,
        Some(Ok(n)) if n >= 1 => n,
        Some(_) => {
            log::warn!("ignoring invalid {RENDER_SCALE_VAR}, using {DEFAULT_RENDER_SCALE}");
            DEFAULT_RENDER_SCALE
        }
    }
}

/// Render resolution for a window of `width`×`height` at `scale`.
pub fn render_size(width: u32, height: u32, scale: u32) -> (u32, u32) {
    let scale = scale.max(1);
    ((width / scale).max(1), (height / scale).max(1))
}
