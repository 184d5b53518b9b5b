//! Validated tag name type for labeling entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default display color assigned to auto-created tags.
pub const DEFAULT_TAG_COLOR: &str = "#3498db";

/// A tag name for labeling entries.
///
/// Tags are flat labels attached to entries in a many-to-many fashion.
/// Names are trimmed but otherwise stored as given; uniqueness in the
/// store is case-sensitive, so `Rust` and `rust` are distinct tags.
/// Any non-empty name is acceptable, `c++` and `needs review` included.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TagName(String);

/// Error returned when parsing an invalid tag name.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl TagName {
    /// Creates a new TagName from a string.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the name is empty or whitespace-only.
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseTagError("tag name cannot be empty".to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the tag name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagName(\"{}\")", self.0)
    }
}

impl FromStr for TagName {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for TagName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TagName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
