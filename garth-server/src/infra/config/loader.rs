use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use super::{
    models::{AuthConfig, Config, ConfigMetadata, CorsConfig, DatabaseConfig, ServerConfig},
    sources::{EnvConfig, FileConfig},
    validation::{self, ConfigGuardRailError, ConfigWarnings},
};
use crate::infra::constants::{
    DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_PORT, DEFAULT_SESSION_TTL, DEV_PASSWORD_PEPPER,
    DEV_SESSION_SECRET,
};

const DEFAULT_CONFIG_LOCATIONS: [&str; 2] = ["garth.toml", "config/garth.toml"];

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Load `.env`, the optional TOML file and the process environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(|err| match err {
                dotenvy::Error::Io(_) => Ok(false),
                _ => Err(err),
            })?,
            None => dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                dotenvy::Error::Io(_) => Ok(false),
                _ => Err(err),
            })?,
        };

        self.load_with_env(EnvConfig::gather(), env_file_loaded)
    }

    /// Compose configuration from already gathered environment values.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file, config_path) = self.load_file_config(&env)?;
        let mut warnings = ConfigWarnings::default();
        if config_path.is_none() {
            warnings.push("No garth.toml detected; using environment variables only");
        }

        let config = compose(
            file.unwrap_or_default(),
            env,
            ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        )?;

        warnings.extend(validation::apply_guard_rails(&config)?);
        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => return Err(ConfigLoadError::MissingConfig { path }),
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
            {
                Some(path) => path,
                None => return Ok((None, None)),
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| ConfigLoadError::Io {
            path: path.clone(),
            source,
        })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
                path: path.clone(),
                source,
            })?;

        Ok((Some(file_config), Some(path)))
    }
}

fn compose(
    file: FileConfig,
    env: EnvConfig,
    metadata: ConfigMetadata,
) -> Result<Config, ConfigLoadError> {
    let FileConfig {
        server: file_server,
        database: file_database,
        auth: file_auth,
        cors: file_cors,
        dev_mode: file_dev_mode,
    } = file;

    let dev_mode = env.dev_mode.or(file_dev_mode).unwrap_or(false);

    let server = ServerConfig {
        host: env
            .server_host
            .or(file_server.host)
            .unwrap_or_else(|| "0.0.0.0".to_string()),
        port: env.server_port.or(file_server.port).unwrap_or(DEFAULT_PORT),
    };

    let database = DatabaseConfig {
        url: env
            .database_url
            .or(file_database.url.filter(|url| !url.trim().is_empty()))
            .ok_or(ConfigLoadError::MissingSetting {
                name: "DATABASE_URL",
            })?,
        max_connections: env
            .db_max_connections
            .or(file_database.max_connections)
            .unwrap_or(10),
        min_connections: env
            .db_min_connections
            .or(file_database.min_connections)
            .unwrap_or(1),
        acquire_timeout: parse_duration(
            "acquire_timeout",
            file_database
                .acquire_timeout
                .as_deref()
                .unwrap_or(DEFAULT_ACQUIRE_TIMEOUT),
        )?,
    };

    let auth = AuthConfig {
        session_secret: env
            .session_secret
            .or(file_auth.session_secret)
            .or_else(|| dev_mode.then(|| DEV_SESSION_SECRET.to_string()))
            .ok_or(ConfigLoadError::MissingSetting {
                name: "SESSION_SECRET",
            })?,
        password_pepper: env
            .password_pepper
            .or(file_auth.password_pepper)
            .or_else(|| dev_mode.then(|| DEV_PASSWORD_PEPPER.to_string()))
            .ok_or(ConfigLoadError::MissingSetting {
                name: "PASSWORD_PEPPER",
            })?,
        session_ttl: parse_duration(
            "SESSION_TTL",
            env.session_ttl
                .as_deref()
                .or(file_auth.session_ttl.as_deref())
                .unwrap_or(DEFAULT_SESSION_TTL),
        )?,
        cookie_secure: env
            .cookie_secure
            .or(file_auth.cookie_secure)
            .unwrap_or(!dev_mode),
    };

    let cors = CorsConfig {
        allowed_origins: env
            .cors_allowed_origins
            .or(file_cors.allowed_origins)
            .unwrap_or_default(),
    };

    Ok(Config {
        server,
        database,
        auth,
        cors,
        dev_mode,
        metadata,
    })
}

fn parse_duration(name: &'static str, raw: &str) -> Result<Duration, ConfigLoadError> {
    let duration =
        humantime::parse_duration(raw.trim()).map_err(|source| ConfigLoadError::InvalidDuration {
            name,
            value: raw.to_string(),
            source,
        })?;
    if duration.is_zero() {
        return Err(ConfigLoadError::InvalidDuration {
            name,
            value: raw.to_string(),
            source: humantime::DurationError::Empty,
        });
    }
    Ok(duration)
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{name} must be set")]
    MissingSetting { name: &'static str },
    #[error("invalid duration for {name}: `{value}`")]
    InvalidDuration {
        name: &'static str,
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

impl ConfigLoad {
    pub fn config_path(&self) -> Option<&Path> {
        self.config.metadata.config_path.as_deref()
    }
}
