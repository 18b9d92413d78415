//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes elapsed since a reference point (midnight for schedule times).
///
/// Used for the schedule's start time, the per-slot duration, and every
/// time-lookup result. Rendering as wall-clock text is a consumer concern.
pub type Minutes = i64;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The color literal was not a hex color.
    #[error("invalid color literal: {value}")]
    InvalidColor { value: String },
}

/// A hex color literal (`#RRGGBB` or `#AARRGGBB`).
///
/// Colors are opaque labels to the core: equality is textual, and no color
/// math is performed. Validation only guards the shape so that downstream
/// renderers can rely on it parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Creates a color after validating the hex literal shape.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let digits = match value.strip_prefix('#') {
            Some(rest) => rest,
            None => {
                return Err(ValidationError::InvalidColor { value });
            }
        };
        let valid = matches!(digits.len(), 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit());
        if valid {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidColor { value })
        }
    }

    /// Returns the color as a string slice, including the leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Color {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
