//! Crate-level error types.

use std::fmt;

/// Errors produced by the map-controls crate.
#[derive(Debug)]
pub enum ControlsError {
    /// The camera's look ray never meets the target plane, so no initial
    /// orientation can be established.
    NoPlaneIntersection,
    /// The camera sits on the target plane; the view direction is undefined.
    CameraOnPlane,
    /// Options failed validation.
    InvalidOptions(String),
    /// TOML options or script parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Malformed gesture script.
    Script(String),
}

impl fmt::Display for ControlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPlaneIntersection => write!(
                f,
                "camera does not face the target plane along its normal"
            ),
            Self::CameraOnPlane => {
                write!(f, "camera lies on the target plane")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Script(msg) => write!(f, "script error: {msg}"),
        }
    }
}

impl std::error::Error for ControlsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ControlsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
