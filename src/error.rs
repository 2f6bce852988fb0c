//! Crate-level error types.

use std::fmt;

/// Errors produced by the roam crate.
#[derive(Debug)]
pub enum RoamError {
    /// A camera transition was requested while another is in flight.
    TransitionBusy,
    /// A camera transition destination contained NaN or infinite values.
    NonFinitePose,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for RoamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransitionBusy => {
                write!(f, "a camera transition is already in flight")
            }
            Self::NonFinitePose => {
                write!(f, "camera transition destination is not finite")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for RoamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RoamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
