use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub database: FileDatabaseConfig,
    #[serde(default)]
    pub auth: FileAuthConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
    pub dev_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileDatabaseConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_connections: Option<u32>,
    /// Humantime string, e.g. `30s`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquire_timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileAuthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_pepper: Option<String>,
    /// Humantime string, e.g. `8h`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_ttl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_secure: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
}

/// Values read from the process environment.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub database_url: Option<String>,
    pub db_max_connections: Option<u32>,
    pub db_min_connections: Option<u32>,
    pub session_secret: Option<String>,
    pub password_pepper: Option<String>,
    pub session_ttl: Option<String>,
    pub cookie_secure: Option<bool>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub dev_mode: Option<bool>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            config_path: var("GARTH_CONFIG").map(PathBuf::from),
            server_host: var("SERVER_HOST"),
            server_port: var("SERVER_PORT").and_then(|s| s.trim().parse().ok()),
            database_url: var("DATABASE_URL"),
            db_max_connections: var("DB_MAX_CONNECTIONS").and_then(|s| s.trim().parse().ok()),
            db_min_connections: var("DB_MIN_CONNECTIONS").and_then(|s| s.trim().parse().ok()),
            session_secret: var("SESSION_SECRET"),
            password_pepper: var("PASSWORD_PEPPER"),
            session_ttl: var("SESSION_TTL"),
            cookie_secure: var("COOKIE_SECURE").and_then(|raw| parse_bool(&raw)),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS").map(|raw| parse_csv(&raw)),
            dev_mode: var("DEV_MODE").and_then(|raw| parse_bool(&raw)),
        }
    }
}

fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> EnvConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn reads_typed_values() {
        let env = env(&[
            ("SERVER_PORT", "8080"),
            ("DB_MAX_CONNECTIONS", "25"),
            ("COOKIE_SECURE", "yes"),
            ("DEV_MODE", "0"),
            ("CORS_ALLOWED_ORIGINS", "https://a.mx, ,https://b.mx"),
        ]);

        assert_eq!(env.server_port, Some(8080));
        assert_eq!(env.db_max_connections, Some(25));
        assert_eq!(env.cookie_secure, Some(true));
        assert_eq!(env.dev_mode, Some(false));
        assert_eq!(
            env.cors_allowed_origins,
            Some(vec!["https://a.mx".to_string(), "https://b.mx".to_string()])
        );
    }

    #[test]
    fn blank_and_malformed_values_are_ignored() {
        let env = env(&[
            ("DATABASE_URL", "   "),
            ("SERVER_PORT", "http"),
            ("DEV_MODE", "maybe"),
        ]);

        assert!(env.database_url.is_none());
        assert!(env.server_port.is_none());
        assert!(env.dev_mode.is_none());
    }

    #[test]
    fn file_sections_are_optional() {
        let file: FileConfig = toml::from_str(
            r#"
            dev_mode = true

            [server]
            port = 9000

            [auth]
            session_ttl = "12h"
            "#,
        )
        .unwrap();

        assert_eq!(file.server.port, Some(9000));
        assert_eq!(file.auth.session_ttl.as_deref(), Some("12h"));
        assert!(file.database.url.is_none());
        assert_eq!(file.dev_mode, Some(true));
    }
}
