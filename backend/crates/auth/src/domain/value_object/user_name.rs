//! User Name Value Object
//!
//! ユーザー名はログインに使用する識別子。
//!
//! ## 設計方針
//! - NFKC正規化 → trim → 検証 の順で処理
//! - 入力の大文字小文字は表示用に保持し、canonical（正規形）は小文字
//! - 一意性は canonical で判定する（大文字小文字を区別しない）
//!
//! ## 不変条件
//! - 空でない
//! - 長さ: 最大64文字（正規化後）
//! - 制御文字を含まない

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is empty after normalization
    Empty,

    /// User name is too long (maximum: USER_NAME_MAX_LENGTH)
    TooLong { length: usize, max: usize },

    /// User name contains a control character
    ControlCharacter { position: usize },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Username is required"),
            Self::TooLong { max, .. } => {
                write!(f, "Username must be at most {max} characters")
            }
            Self::ControlCharacter { .. } => {
                write!(f, "Username contains invalid characters")
            }
        }
    }
}

impl std::error::Error for UserNameError {}

// ============================================================================
// UserName Value Object
// ============================================================================

/// Validated, normalized user name
///
/// # Storage
/// - `original`: The user's input (trimmed, NFKC normalized, preserves case)
/// - `canonical`: Lowercase form for uniqueness checks and lookup
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName {
    original: String,
    canonical: String,
}

impl UserName {
    /// Create a new UserName from raw input
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let original = Self::normalize_original(input.as_ref());
        Self::validate(&original)?;
        let canonical = original.to_lowercase();
        Ok(Self {
            original,
            canonical,
        })
    }

    /// Get the original user name (preserves case)
    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Get the canonical (normalized, lowercase) user name
    #[inline]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Create from database values (assumes already validated)
    pub fn from_db(original: &str) -> Self {
        Self {
            original: original.to_string(),
            canonical: original.to_lowercase(),
        }
    }

    /// Normalize input string (NFKC and trim, preserve case)
    fn normalize_original(input: &str) -> String {
        input.nfkc().collect::<String>().trim().to_string()
    }

    fn validate(normalized: &str) -> Result<(), UserNameError> {
        if normalized.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = normalized.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if let Some(position) = normalized.chars().position(|c| c.is_control()) {
            return Err(UserNameError::ControlCharacter { position });
        }

        Ok(())
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserName")
            .field("original", &self.original)
            .field("canonical", &self.canonical)
            .finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.original
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod normalization {
        use super::*;

        #[test]
        fn test_trim_whitespace() {
            let name = UserName::new("  alice  ").unwrap();
            assert_eq!(name.canonical(), "alice");
            assert_eq!(name.original(), "alice");
        }

        #[test]
        fn test_case_preserved_but_canonical_lowercase() {
            let name = UserName::new("AlIcE_123").unwrap();
            assert_eq!(name.original(), "AlIcE_123");
            assert_eq!(name.canonical(), "alice_123");
            assert_eq!(name.to_string(), "AlIcE_123");
        }

        #[test]
        fn test_nfkc_normalization() {
            // Full-width 'Ａ' (U+FF21) becomes ASCII 'A'
            let name = UserName::new("Ａlice").unwrap();
            assert_eq!(name.canonical(), "alice");
        }

        #[test]
        fn test_case_insensitive_equality_of_canonical() {
            let a = UserName::new("Admin").unwrap();
            let b = UserName::new("ADMIN").unwrap();
            assert_eq!(a.canonical(), b.canonical());
        }

        #[test]
        fn test_from_db() {
            let name = UserName::from_db("Bob.Smith");
            assert_eq!(name.canonical(), "bob.smith");
            assert_eq!(name.original(), "Bob.Smith");
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn test_empty_fails() {
            assert_eq!(UserName::new(""), Err(UserNameError::Empty));
            assert_eq!(UserName::new("   "), Err(UserNameError::Empty));
        }

        #[test]
        fn test_too_long() {
            let long = "a".repeat(USER_NAME_MAX_LENGTH + 1);
            assert!(matches!(
                UserName::new(long),
                Err(UserNameError::TooLong { .. })
            ));
            assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
        }

        #[test]
        fn test_control_character() {
            assert_eq!(
                UserName::new("ali\u{0000}ce"),
                Err(UserNameError::ControlCharacter { position: 3 })
            );
        }

        #[test]
        fn test_message() {
            assert_eq!(UserNameError::Empty.to_string(), "Username is required");
        }
    }
}
