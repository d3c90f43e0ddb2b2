//! Error types
//!
//! Neither error is fatal to the page: setup failures turn the affected
//! behavior into a no-op, settings failures fall back to defaults.

use std::fmt;

/// Failures while wiring a behavior to the DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// No `window` (running outside a browser main thread).
    NoWindow,
    /// No `document` on the window.
    NoDocument,
    /// Element with the given id is not in the page.
    MissingElement(String),
    /// Element exists but is not of the expected type.
    WrongElementType { id: String, expected: &'static str },
    /// Canvas has no 2D rendering context.
    NoContext,
    /// A browser API call threw.
    Js(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NoWindow => write!(f, "No window available"),
            SetupError::NoDocument => write!(f, "No document available"),
            SetupError::MissingElement(id) => write!(f, "Element #{} not found", id),
            SetupError::WrongElementType { id, expected } => {
                write!(f, "Element #{} is not a {}", id, expected)
            }
            SetupError::NoContext => write!(f, "Canvas has no 2d context"),
            SetupError::Js(msg) => write!(f, "Browser call failed: {}", msg),
        }
    }
}

impl std::error::Error for SetupError {}

/// Failures while loading backdrop settings overrides.
#[derive(Debug)]
pub enum SettingsError {
    /// Override was not valid JSON for the settings shape.
    Parse(serde_json::Error),
    /// Override parsed but a value is out of range.
    Invalid { field: &'static str, reason: String },
    /// Override file could not be read (native only).
    Io(std::io::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(e) => write!(f, "Failed to parse settings: {}", e),
            SettingsError::Invalid { field, reason } => {
                write!(f, "Invalid setting `{}`: {}", field, reason)
            }
            SettingsError::Io(e) => write!(f, "Failed to read settings file: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(e) => Some(e),
            SettingsError::Io(e) => Some(e),
            SettingsError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}
