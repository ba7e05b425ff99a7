//! Server configuration: optional TOML file, `.env`, then environment
//! overrides, checked by guard rails before startup.

pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use models::{AuthConfig, Config, ConfigMetadata, CorsConfig, DatabaseConfig, ServerConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
