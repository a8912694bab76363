//! Server configuration read from the environment.
//!
//! | variable           | default          |
//! |--------------------|------------------|
//! | `HOST`             | `127.0.0.1`      |
//! | `PORT`             | `8080`           |
//! | `DATABASE_PATH`    | `recruit.sqlite` |
//! | `ADMIN_SECRET_KEY` | unset            |
//! | `JSON_LIMIT_BYTES` | `65536`          |
//!
//! Without `ADMIN_SECRET_KEY` every admin request is refused.

use crate::error::AppError;
use log::{info, warn};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub admin_secret: Option<String>,
    pub json_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let admin_secret = lookup("ADMIN_SECRET_KEY").filter(|s| !s.trim().is_empty());
        if admin_secret.is_none() {
            warn!("ADMIN_SECRET_KEY not set, admin endpoints are disabled");
        }

        Ok(Self {
            host: try_load(&lookup, "HOST", "127.0.0.1")?,
            port: try_load(&lookup, "PORT", "8080")?,
            database_path: try_load(&lookup, "DATABASE_PATH", "recruit.sqlite")?,
            admin_secret,
            json_limit: try_load(&lookup, "JSON_LIMIT_BYTES", "65536")?,
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse()
        .map_err(|e| AppError::Config(format!("invalid {key} value '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_path, PathBuf::from("recruit.sqlite"));
        assert_eq!(config.admin_secret, None);
        assert_eq!(config.json_limit, 65536);
    }

    #[test]
    fn values_are_read_and_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "3000"),
            ("ADMIN_SECRET_KEY", "hops"),
            ("DATABASE_PATH", "/tmp/x.sqlite"),
        ]))
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.admin_secret.as_deref(), Some("hops"));
        assert_eq!(config.database_path, PathBuf::from("/tmp/x.sqlite"));
    }

    #[test]
    fn blank_secret_counts_as_unset() {
        let config = Config::from_lookup(lookup_from(&[("ADMIN_SECRET_KEY", "  ")])).unwrap();
        assert_eq!(config.admin_secret, None);
    }

    #[test]
    fn unparsable_port_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.contains("PORT")));
    }
}
