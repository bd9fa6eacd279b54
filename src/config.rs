use std::env;
use std::fmt;

use crate::store::IdAllocation;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub id_allocation: IdAllocation,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ConfigError {
    pub variable: &'static str,
    pub reason: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.variable, self.reason)
    }
}

impl std::error::Error for ConfigError {}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: split_origins(DEFAULT_ALLOWED_ORIGINS),
            id_allocation: IdAllocation::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable source. Unset variables fall
    /// back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError {
                variable: "PORT",
                reason: e.to_string(),
            })?,
            None => defaults.port,
        };

        let allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| split_origins(&raw))
            .unwrap_or(defaults.allowed_origins);

        let id_allocation = match lookup("ID_ALLOCATION") {
            Some(raw) => raw.parse::<IdAllocation>().map_err(|reason| ConfigError {
                variable: "ID_ALLOCATION",
                reason,
            })?,
            None => defaults.id_allocation,
        };

        Ok(Self {
            host,
            port,
            allowed_origins,
            id_allocation,
        })
    }

    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let settings = settings_from(&[]).expect("Should load defaults");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.port, 4000);
        assert_eq!(settings.id_allocation, IdAllocation::Length);
    }

    #[test]
    fn test_reads_overrides() {
        let settings = settings_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
            ("ID_ALLOCATION", "monotonic"),
        ])
        .expect("Should load overrides");

        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 8081);
        assert_eq!(
            settings.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert_eq!(settings.id_allocation, IdAllocation::Monotonic);
        assert!(settings.is_origin_allowed("http://b.test"));
        assert!(!settings.is_origin_allowed("http://c.test"));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = settings_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert_eq!(err.variable, "PORT");
    }

    #[test]
    fn test_invalid_id_allocation_is_rejected() {
        let err = settings_from(&[("ID_ALLOCATION", "uuid")]).unwrap_err();
        assert_eq!(err.variable, "ID_ALLOCATION");
        assert!(err.reason.contains("uuid"));
    }
}
