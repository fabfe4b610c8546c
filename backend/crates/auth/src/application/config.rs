//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

/// Session token lifetime
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key for session tokens
    pub token_secret: Vec<u8>,
    /// Session token lifetime (1 hour)
    pub token_ttl: Duration,
    /// Secret required to register accounts. `None` rejects every registration.
    pub admin_key: Option<String>,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    pub fn new(token_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: token_secret.into(),
            token_ttl: DEFAULT_TOKEN_TTL,
            admin_key: None,
            password_pepper: None,
        }
    }

    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        Self::new(platform::crypto::random_bytes(32))
    }

    pub fn with_admin_key(mut self, admin_key: impl Into<String>) -> Self {
        self.admin_key = Some(admin_key.into());
        self
    }

    pub fn with_pepper(mut self, pepper: impl Into<Vec<u8>>) -> Self {
        self.password_pepper = Some(pepper.into());
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        i64::try_from(self.token_ttl.as_secs()).unwrap_or(i64::MAX)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("admin_key", &self.admin_key.as_ref().map(|_| "[REDACTED]"))
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AuthConfig::new(b"topsecret".to_vec())
            .with_admin_key("K1")
            .with_pepper(b"pep".to_vec());
        let debug = format!("{config:?}");
        assert!(!debug.contains("topsecret"));
        assert!(!debug.contains("K1"));
        assert!(!debug.contains("pep\""));
        assert!(debug.contains("3600"));
    }

    #[test]
    fn test_random_secrets_differ() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_eq!(a.token_secret.len(), 32);
        assert_ne!(a.token_secret, b.token_secret);
        assert_eq!(a.token_ttl_secs(), 3600);
    }
}
