use thiserror::Error;

/// Configuration errors. All of them are raised while validating a request,
/// before any pixel is shaded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Invalid mode: {name}. Valid modes: {}", valid.join(", "))]
    InvalidMode { name: String, valid: Vec<String> },

    #[error("Invalid family: {name}. Valid families: {}", valid.join(", "))]
    InvalidFamily { name: String, valid: Vec<String> },

    #[error("Invalid color: {value}. Use hex format like #ff0000")]
    InvalidColor { value: String },

    #[error("Unknown palette: {name}. Available palettes: {}", valid.join(", "))]
    UnknownPalette { name: String, valid: Vec<String> },

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid request body: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, Error>;
