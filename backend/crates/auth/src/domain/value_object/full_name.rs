//! Full Name Value Object
//!
//! 表示用の氏名。smart capitalization を適用して保存する。

use std::fmt;

use kernel::name::capitalize_smart;

/// Maximum length for a full name (in characters)
pub const FULL_NAME_MAX_LENGTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullNameError {
    Empty,
    TooLong { length: usize, max: usize },
}

impl fmt::Display for FullNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Full name is required"),
            Self::TooLong { max, .. } => write!(f, "Full name must be at most {max} characters"),
        }
    }
}

impl std::error::Error for FullNameError {}

/// Trimmed, smart-capitalized full name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    pub fn new(input: impl AsRef<str>) -> Result<Self, FullNameError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FullNameError::Empty);
        }
        let length = trimmed.chars().count();
        if length > FULL_NAME_MAX_LENGTH {
            return Err(FullNameError::TooLong {
                length,
                max: FULL_NAME_MAX_LENGTH,
            });
        }
        Ok(Self(capitalize_smart(trimmed)))
    }

    /// Create from database values (assumes already validated)
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
