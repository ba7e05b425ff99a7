use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use tracing::info;

use garth_core::{
    application::{AppServices, AppUnitOfWork},
    auth::AuthCrypto,
    database::PostgresDatabase,
};

use crate::{
    auth::session::SessionManager,
    infra::{app_state::AppState, config::Config},
};

/// Connect to PostgreSQL and wire every service over it.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let postgres = PostgresDatabase::connect(&config.database.url, config.database.pool_settings())
        .await
        .context("failed to connect to PostgreSQL")?;
    let postgres = Arc::new(postgres);

    let unit_of_work = AppUnitOfWork::from_postgres(&postgres)
        .map_err(|missing| anyhow!("failed to assemble repositories: {missing}"))?;

    let crypto = AuthCrypto::new(config.auth.password_pepper.as_bytes())
        .context("failed to initialise password hashing")?;
    let sessions = SessionManager::new(
        config.auth.session_secret.as_bytes(),
        config.auth.session_ttl,
        config.auth.cookie_secure,
    )
    .context("failed to initialise session signing")?;

    let services = AppServices::new(&unit_of_work, Arc::new(crypto));
    info!(
        session_ttl = %humantime::format_duration(config.auth.session_ttl),
        cookie_secure = config.auth.cookie_secure,
        "application services ready"
    );

    Ok(AppState::new(services, sessions, postgres))
}
