//! Server Configuration
//!
//! Read once from the process environment at startup.

use std::fmt;

use anyhow::{Context, bail};
use auth::AuthConfig;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Server settings from the environment
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// In-memory stores when absent
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub jwt_secret: Option<Vec<u8>>,
    /// Registration is closed when absent
    pub admin_key: Option<String>,
    pub password_pepper: Option<Vec<u8>>,
    pub frontend_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(v) => v.trim().parse().context("PORT must be a port number")?,
            None => DEFAULT_PORT,
        };

        let db_max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse()
                .context("DB_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };
        if db_max_connections == 0 {
            bail!("DB_MAX_CONNECTIONS must be a positive integer");
        }

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            port,
            database_url: get("DATABASE_URL"),
            db_max_connections,
            jwt_secret: get("JWT_SECRET").map(String::into_bytes),
            admin_key: get("ADMIN_KEY"),
            password_pepper: get("PASSWORD_PEPPER").map(String::into_bytes),
            frontend_origins,
        })
    }

    /// Authentication settings.
    ///
    /// Without `JWT_SECRET`, debug builds sign with a per-process random key
    /// and release builds refuse to start.
    pub fn auth_config(&self) -> anyhow::Result<AuthConfig> {
        let config = match &self.jwt_secret {
            Some(secret) => AuthConfig::new(secret.clone()),
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using a random secret for this process");
                AuthConfig::with_random_secret()
            }
            None => bail!("JWT_SECRET must be set in production"),
        };

        let config = match &self.admin_key {
            Some(key) => config.with_admin_key(key.clone()),
            None => {
                tracing::warn!("ADMIN_KEY not set, registration is disabled");
                config
            }
        };

        Ok(match &self.password_pepper {
            Some(pepper) => config.with_pepper(pepper.clone()),
            None => config,
        })
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |set: bool| if set { "[REDACTED]" } else { "<unset>" };
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("database_url", &redact(self.database_url.is_some()))
            .field("db_max_connections", &self.db_max_connections)
            .field("jwt_secret", &redact(self.jwt_secret.is_some()))
            .field("admin_key", &redact(self.admin_key.is_some()))
            .field("password_pepper", &redact(self.password_pepper.is_some()))
            .field("frontend_origins", &self.frontend_origins)
            .finish()
    }
}
