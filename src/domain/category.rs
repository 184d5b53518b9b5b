//! Validated category name type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The name of a category grouping entries.
///
/// Every entry belongs to exactly one category. Categories are auto-created
/// the first time a name is referenced, so any non-empty name is acceptable.
/// Names are trimmed but stored as given; uniqueness is case-sensitive.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CategoryName(String);

/// Error returned when parsing an invalid category name.
#[derive(Debug, Clone)]
pub struct ParseCategoryError(String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl CategoryName {
    /// Creates a new CategoryName from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseCategoryError` if the name is empty or whitespace-only.
    pub fn new(s: &str) -> Result<Self, ParseCategoryError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseCategoryError(
                "category name cannot be empty".to_string(),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the category name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryName(\"{}\")", self.0)
    }
}

impl FromStr for CategoryName {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for CategoryName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CategoryName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
