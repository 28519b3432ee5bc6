//! Viewer configuration, read from the environment (and `.env` via dotenvy).

use std::{env, time::Duration};

use thiserror::Error;
use url::Url;

use crate::models::{
    Selection,
    selection::{DEFAULT_SYMBOL, DEFAULT_TIMEFRAME},
};

pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:5000";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("SIGNAL_API_ORIGIN is not a valid URL ({value}): {source}")]
    InvalidOrigin {
        value: String,
        source: url::ParseError,
    },

    #[error("SIGNAL_API_ORIGIN must be an http(s) origin, got scheme {0:?}")]
    UnsupportedScheme(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub origin: Url,
    pub selection: Selection,
    pub http_timeout: Duration,
}

impl ViewerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_origin = lookup("SIGNAL_API_ORIGIN").unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        let origin = Url::parse(raw_origin.trim()).map_err(|source| ConfigError::InvalidOrigin {
            value: raw_origin.clone(),
            source,
        })?;
        if !matches!(origin.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(origin.scheme().to_string()));
        }

        let symbol = non_empty(&lookup, "SIGNAL_SYMBOL", DEFAULT_SYMBOL)?;
        let timeframe = non_empty(&lookup, "SIGNAL_TIMEFRAME", DEFAULT_TIMEFRAME)?;

        let http_timeout = match lookup("SIGNAL_HTTP_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        name: "SIGNAL_HTTP_TIMEOUT_SECS",
                        value,
                    });
                }
            },
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Self {
            origin,
            selection: Selection::new(symbol, timeframe),
            http_timeout,
        })
    }
}

fn non_empty<F>(lookup: &F, name: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(name)),
        Some(value) => Ok(value.trim().to_string()),
        None => Ok(default.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.origin.as_str(), "http://127.0.0.1:5000/");
        assert_eq!(config.selection, Selection::new("BTC-USDT", "1hour"));
        assert_eq!(config.http_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = ViewerConfig::from_lookup(lookup_from(&[
            ("SIGNAL_API_ORIGIN", "https://signals.example.com"),
            ("SIGNAL_SYMBOL", " ETH-USDT "),
            ("SIGNAL_TIMEFRAME", "4hour"),
            ("SIGNAL_HTTP_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.origin.host_str(), Some("signals.example.com"));
        assert_eq!(config.selection, Selection::new("ETH-USDT", "4hour"));
        assert_eq!(config.http_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_rejects_bad_origin() {
        let err = ViewerConfig::from_lookup(lookup_from(&[("SIGNAL_API_ORIGIN", "not a url")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOrigin { .. }));

        let err = ViewerConfig::from_lookup(lookup_from(&[("SIGNAL_API_ORIGIN", "ftp://host")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(_)));
    }

    #[test]
    fn test_rejects_empty_symbol() {
        let err = ViewerConfig::from_lookup(lookup_from(&[("SIGNAL_SYMBOL", "  ")])).unwrap_err();
        assert_eq!(err.to_string(), "SIGNAL_SYMBOL must not be empty");
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = ViewerConfig::from_lookup(lookup_from(&[("SIGNAL_HTTP_TIMEOUT_SECS", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }
}
