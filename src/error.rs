//! Crate-level error types.

use std::fmt;

/// Errors produced by the resicolor crate.
#[derive(Debug)]
pub enum ThemeError {
    /// A color string is not `#rgb`, `#rrggbb`, `rgb(..)` or `rgba(..)`.
    InvalidColorFormat(String),
    /// Gradient anchors/steps that cannot produce a palette.
    InvalidGradient(String),
    /// Metadata table shape or content failure.
    TableParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorFormat(color) => {
                write!(f, "invalid color format: '{color}'")
            }
            Self::InvalidGradient(msg) => write!(f, "invalid gradient: {msg}"),
            Self::TableParse(msg) => {
                write!(f, "metadata table error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ThemeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
