//! Client Session
//!
//! The bearer token lives in an explicit [`Session`] instead of ambient
//! global state. Lifecycle: [`Session::init`] restores a persisted token,
//! [`Session::login`] stores a fresh one, [`Session::logout`] clears it.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

// ============================================================================
// Token stores
// ============================================================================

/// Persistence for the session token
pub trait TokenStore {
    fn load(&self) -> ClientResult<Option<String>>;
    fn save(&self, token: &str) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;
}

/// Token kept in memory, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned slot still holds a plain string
        self.token.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> ClientResult<Option<String>> {
        Ok(self.slot().clone())
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        *self.slot() = None;
        Ok(())
    }
}

/// Token persisted in a single file
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> ClientResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// Claims the client reads from its token
///
/// Read without signature verification; the server verifies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub user_id: AccountId,
    pub full_name: String,
    /// Expiry, unix seconds
    pub exp: i64,
}

impl TokenClaims {
    pub fn decode(token: &str) -> ClientResult<Self> {
        platform::token::decode_unverified(token).map_err(|_| ClientError::InvalidToken)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// Logged-in state backed by a token store
pub struct Session<S: TokenStore> {
    store: S,
    current: Option<(String, TokenClaims)>,
}

impl<S: TokenStore> std::fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.current.as_ref().map(|_| "[REDACTED]"))
            .field("claims", &self.claims())
            .finish_non_exhaustive()
    }
}

impl<S: TokenStore> Session<S> {
    /// Restore the persisted token.
    ///
    /// A malformed or expired token is cleared from the store and the
    /// session starts logged out.
    pub fn init(store: S) -> ClientResult<Self> {
        Self::init_at(store, Utc::now())
    }

    pub fn init_at(store: S, now: DateTime<Utc>) -> ClientResult<Self> {
        let mut session = Self {
            store,
            current: None,
        };

        let Some(token) = session.store.load()? else {
            return Ok(session);
        };

        match TokenClaims::decode(&token) {
            Ok(claims) if !claims.is_expired_at(now) => {
                tracing::debug!(user_id = %claims.user_id, "Session restored");
                session.current = Some((token, claims));
            }
            Ok(_) => {
                tracing::info!("Stored session token expired, clearing");
                session.store.clear()?;
            }
            Err(_) => {
                tracing::warn!("Stored session token malformed, clearing");
                session.store.clear()?;
            }
        }

        Ok(session)
    }

    /// Adopt and persist a freshly issued token
    pub fn login(&mut self, token: impl Into<String>) -> ClientResult<&TokenClaims> {
        let token = token.into();
        let claims = TokenClaims::decode(&token)?;
        self.store.save(&token)?;
        let (_, claims) = self.current.insert((token, claims));
        Ok(claims)
    }

    pub fn logout(&mut self) -> ClientResult<()> {
        self.current = None;
        self.store.clear()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|(token, _)| token.as_str())
    }

    pub fn claims(&self) -> Option<&TokenClaims> {
        self.current.as_ref().map(|(_, claims)| claims)
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token(exp: i64) -> String {
        let claims = json!({
            "userId": AccountId::new(),
            "fullName": "Grace Hopper",
            "iat": exp - 3600,
            "exp": exp,
        });
        platform::token::sign(&claims, b"client-test-secret").unwrap()
    }

    #[test]
    fn test_login_persists_and_logout_clears() {
        let store = MemoryTokenStore::new();
        let mut session = Session::init(store.clone()).unwrap();
        assert!(!session.is_logged_in());

        let t = token(Utc::now().timestamp() + 3600);
        let claims = session.login(t.clone()).unwrap();
        assert_eq!(claims.full_name, "Grace Hopper");
        assert_eq!(store.load().unwrap().as_deref(), Some(t.as_str()));

        session.logout().unwrap();
        assert!(session.token().is_none());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_init_restores_valid_token() {
        let store = MemoryTokenStore::new();
        let t = token(Utc::now().timestamp() + 3600);
        store.save(&t).unwrap();

        let session = Session::init(store).unwrap();
        assert_eq!(session.token(), Some(t.as_str()));
        assert_eq!(session.claims().unwrap().full_name, "Grace Hopper");
    }

    #[test]
    fn test_init_drops_expired_token() {
        let store = MemoryTokenStore::new();
        let now = Utc::now();
        store.save(&token(now.timestamp())).unwrap();

        let session = Session::init_at(store.clone(), now).unwrap();
        assert!(!session.is_logged_in());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_init_drops_malformed_token() {
        let store = MemoryTokenStore::new();
        store.save("not-a-token").unwrap();

        let session = Session::init(store.clone()).unwrap();
        assert!(!session.is_logged_in());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_login_rejects_malformed_token() {
        let mut session = Session::init(MemoryTokenStore::new()).unwrap();
        assert!(matches!(
            session.login("garbage"),
            Err(ClientError::InvalidToken)
        ));
        assert!(session.store().load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested").join("token"));

        assert!(store.load().unwrap().is_none());
        store.save("abc").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc"));
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }
}
