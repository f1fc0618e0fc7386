use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Prefix for server settings read from the environment, e.g. `DBMS_LISTEN_ADDR`.
pub const ENV_PREFIX: &str = "DBMS_";

/// Minimum length of `DBMS_COOKIE_SECRET`; shorter secrets are ignored.
pub const MIN_COOKIE_SECRET_LEN: usize = 64;

/// Server settings. Database credentials are not part of this; they are read
/// per operation by [`crate::db::DbCredentials`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub listen_addr: String,
    pub loglevel: String,
    #[serde(default)]
    pub cookie_secret: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8501".to_string(),
            loglevel: "info".to_string(),
            cookie_secret: None,
        }
    }
}

impl Config {
    /// Defaults overlaid with `DBMS_*` environment variables.
    pub fn load() -> Result<Self, AppError> {
        Self::from_figment(
            Figment::from(Serialized::defaults(Config::default()))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self, AppError> {
        Ok(figment.extract()?)
    }

    /// The configured cookie secret, if it is long enough to derive a key from.
    pub fn usable_cookie_secret(&self) -> Option<&[u8]> {
        self.cookie_secret
            .as_deref()
            .map(str::as_bytes)
            .filter(|s| s.len() >= MIN_COOKIE_SECRET_LEN)
    }
}
