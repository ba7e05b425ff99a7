use axum::http::HeaderValue;
use thiserror::Error;

use super::models::{AuthConfig, Config, CorsConfig};
use crate::infra::constants::{DEV_PASSWORD_PEPPER, DEV_SESSION_SECRET};

pub const MIN_SECRET_LENGTH: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("authentication secret {field} {reason}")]
    WeakSecret { field: &'static str, reason: String },
    #[error("CORS wildcard origins are not allowed when DEV_MODE is false")]
    DangerousCorsWildcard,
    #[error("invalid CORS origin `{origin}`")]
    InvalidCorsOrigin { origin: String },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(&mut self, message: S, hint: H) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(config: &Config) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.dev_mode {
        if config.auth.session_secret == DEV_SESSION_SECRET {
            warnings.push_with_hint(
                "SESSION_SECRET not set; using the built-in development secret",
                "Set SESSION_SECRET to a random value of at least 32 bytes before deploying",
            );
        }
        if config.auth.password_pepper == DEV_PASSWORD_PEPPER {
            warnings.push(
                "PASSWORD_PEPPER not set; using the built-in development pepper",
            );
        }
    } else {
        enforce_secrets(&config.auth)?;
        if config.cors.is_wildcard_included() {
            return Err(ConfigGuardRailError::DangerousCorsWildcard);
        }
        if !config.auth.cookie_secure {
            warnings.push_with_hint(
                "COOKIE_SECURE is false; the session cookie will travel over plain HTTP",
                "Enable COOKIE_SECURE when the server sits behind TLS",
            );
        }
    }

    validate_cors(&config.cors)?;

    Ok(warnings)
}

fn enforce_secrets(auth: &AuthConfig) -> Result<(), ConfigGuardRailError> {
    if auth.session_secret == DEV_SESSION_SECRET {
        return Err(ConfigGuardRailError::WeakSecret {
            field: "SESSION_SECRET",
            reason: "uses the development placeholder value".into(),
        });
    }

    if auth.session_secret.len() < MIN_SECRET_LENGTH {
        return Err(ConfigGuardRailError::WeakSecret {
            field: "SESSION_SECRET",
            reason: format!("must be at least {MIN_SECRET_LENGTH} bytes"),
        });
    }

    if auth.password_pepper == DEV_PASSWORD_PEPPER {
        return Err(ConfigGuardRailError::WeakSecret {
            field: "PASSWORD_PEPPER",
            reason: "uses the development placeholder value".into(),
        });
    }

    Ok(())
}

fn validate_cors(cors: &CorsConfig) -> Result<(), ConfigGuardRailError> {
    for origin in cors.allowed_origins.iter().filter(|o| o.as_str() != "*") {
        HeaderValue::from_str(origin).map_err(|_| ConfigGuardRailError::InvalidCorsOrigin {
            origin: origin.clone(),
        })?;
    }
    Ok(())
}
