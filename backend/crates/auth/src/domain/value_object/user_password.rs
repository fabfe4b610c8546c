//! User Password Value Object
//!
//! Domain wrapper over `platform::password`. Clear text is zeroized on drop;
//! stored hashes are Argon2id PHC strings.

use platform::password::{ClearTextPassword, HashedPassword};
use std::fmt;

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate a new password (registration).
    ///
    /// Policy violations become `AuthError::Validation` with the policy
    /// message.
    pub fn new(raw: String) -> AuthResult<Self> {
        ClearTextPassword::new(raw)
            .map(Self)
            .map_err(|e| AuthError::Validation(e.to_string()))
    }

    /// Wrap a login attempt without applying the policy
    pub fn candidate(raw: String) -> Self {
        Self(ClearTextPassword::for_verification(raw))
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a validated raw password
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AuthResult<Self> {
        raw.0
            .hash(pepper)
            .map(Self)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Create from PHC string (from database)
    pub fn from_db(phc_string: impl Into<String>) -> AuthResult<Self> {
        HashedPassword::from_phc_string(phc_string)
            .map(Self)
            .map_err(|_| AuthError::Internal("Invalid password hash in database".to_string()))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    ///
    /// `pepper` must match the pepper used during hashing.
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&raw.0, pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_message_surfaces_as_validation() {
        let err = RawPassword::new("a".repeat(129)).unwrap_err();
        match err {
            AuthError::Validation(msg) => {
                assert_eq!(msg, "Password must be at most 128 characters")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_candidate_skips_policy() {
        let hashed = UserPassword::from_raw(&RawPassword::new("secret1".into()).unwrap(), None)
            .unwrap();
        // control characters fail the policy, still checkable
        assert!(!hashed.verify(&RawPassword::candidate("abc\u{0007}".into()), None));
        assert!(hashed.verify(&RawPassword::candidate("secret1".into()), None));
    }

    #[test]
    fn test_from_db_rejects_garbage() {
        assert!(matches!(
            UserPassword::from_db("plaintext"),
            Err(AuthError::Internal(_))
        ));
    }
}
