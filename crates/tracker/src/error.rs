// ---------------------------------------------------------------------------
// Error types for configuration loading and image attachment
// ---------------------------------------------------------------------------

use std::fmt;

use crate::projection::BoundingBox;

/// Errors raised while loading a [`crate::config::TrackerConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    Io(std::io::Error),
    /// Config file is not valid JSON for the expected shape.
    Parse(String),
    /// A configured box has non-finite bounds or a non-positive span.
    InvalidBoundingBox(BoundingBox),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Parse(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::InvalidBoundingBox(b) => write!(
                f,
                "Invalid bounding box: lat {}..{}, lng {}..{}",
                b.min_lat, b.max_lat, b.min_lng, b.max_lng
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// Errors from reading an image attachment. These never reach the store:
/// a failed read is logged and the result discarded.
#[derive(Debug)]
pub enum ImageReadError {
    /// File extension is not one of the accepted image types.
    UnsupportedType(String),
    /// File could not be read.
    Io(std::io::Error),
    /// Bytes could not be decoded as an image.
    Decode(String),
}

impl fmt::Display for ImageReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageReadError::UnsupportedType(ext) => {
                write!(f, "Unsupported image type: {ext}")
            }
            ImageReadError::Io(e) => write!(f, "I/O error: {e}"),
            ImageReadError::Decode(msg) => write!(f, "Decoding error: {msg}"),
        }
    }
}

impl std::error::Error for ImageReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageReadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ImageReadError {
    fn from(e: std::io::Error) -> Self {
        ImageReadError::Io(e)
    }
}
