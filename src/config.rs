// src/config.rs

use std::{env, fmt::Display, net::SocketAddr, str::FromStr};

use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the orchestra REST backend, e.g. "http://localhost:4000/api/"
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub workers: usize,
    pub api: ApiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            workers: 8,
            api: ApiConfig {
                base_url: "http://localhost:4000/api/".to_string(),
                timeout_secs: 30,
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or invalid values fall back to the
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();
        Self {
            bind: try_load(&lookup, "ORQUESTA_BIND", d.bind),
            workers: try_load(&lookup, "ORQUESTA_WORKERS", d.workers).max(1),
            api: ApiConfig {
                base_url: try_load(&lookup, "ORQUESTA_API_URL", d.api.base_url),
                timeout_secs: try_load(&lookup, "ORQUESTA_API_TIMEOUT_SECS", d.api.timeout_secs),
            },
        }
    }
}

fn try_load<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
            default
        }),
    }
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
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        assert_eq!(AppConfig::from_lookup(|_| None), AppConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("ORQUESTA_BIND", "0.0.0.0:8080"),
            ("ORQUESTA_WORKERS", "2"),
            ("ORQUESTA_API_URL", "https://api.orquesta.example/v1/"),
            ("ORQUESTA_API_TIMEOUT_SECS", "5"),
        ]));

        assert_eq!(cfg.bind, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(cfg.workers, 2);
        assert_eq!(cfg.api.base_url, "https://api.orquesta.example/v1/");
        assert_eq!(cfg.api.timeout_secs, 5);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("ORQUESTA_BIND", "localhost"),
            ("ORQUESTA_WORKERS", "0"),
            ("ORQUESTA_API_TIMEOUT_SECS", "-1"),
        ]));
        let d = AppConfig::default();

        assert_eq!(cfg.bind, d.bind);
        assert_eq!(cfg.workers, 1);
        assert_eq!(cfg.api.timeout_secs, d.api.timeout_secs);
    }
}
