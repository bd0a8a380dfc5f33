use std::env;

use crate::error::ConfigError;

/// Default token lifetime: one day.
pub const DEFAULT_TOKEN_EXPIRY: i64 = 86_400;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub token_expiry: i64,
}

impl JwtConfig {
    /// Reads `ACCESS_TOKEN` (required) and `JWT_EXPIRY` (seconds, defaults
    /// to one day).
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = env::var("ACCESS_TOKEN")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("ACCESS_TOKEN"))?;

        let token_expiry = match env::var("JWT_EXPIRY") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "JWT_EXPIRY",
                value: raw,
            })?,
            Err(_) => DEFAULT_TOKEN_EXPIRY,
        };

        Ok(Self {
            secret,
            token_expiry,
        })
    }
}
