//! Field specifications read from a survey dictionary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared storage type of a dictionary field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Free text (`str12`, `str`).
    String,
    /// Whole numbers (`byte`, `int`, `long`).
    Integer,
    /// Real numbers (`float`, `double`).
    Float,
}

impl FieldType {
    /// Map a dictionary type token to a field type.
    ///
    /// Returns `None` for tokens outside the supported vocabulary.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "byte" | "int" | "long" => Some(Self::Integer),
            "float" | "double" => Some(Self::Float),
            other => {
                let width = other.strip_prefix("str")?;
                width
                    .chars()
                    .all(|ch| ch.is_ascii_digit())
                    .then_some(Self::String)
            }
        }
    }

    /// Short lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fixed-width field of a record layout.
///
/// Offsets are zero-based byte positions; the dictionary file stores them
/// one-based and the parser converts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub offset: usize,
    pub width: usize,
    pub field_type: FieldType,
    /// Display format token as written in the dictionary, e.g. `%2f`.
    pub format_code: String,
    pub description: String,
}

impl FieldSpec {
    /// Exclusive end position of the field within a record.
    pub fn end(&self) -> usize {
        self.offset + self.width
    }
}
