use std::{fmt, sync::Arc};

use garth_core::{application::AppServices, database::PostgresDatabase};

use crate::auth::session::SessionManager;

#[derive(Clone)]
pub struct AppState {
    pub services: Arc<AppServices>,
    pub sessions: Arc<SessionManager>,
    pub postgres: Arc<PostgresDatabase>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("sessions", &self.sessions)
            .field("postgres", &self.postgres)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        services: AppServices,
        sessions: SessionManager,
        postgres: Arc<PostgresDatabase>,
    ) -> Self {
        Self {
            services: Arc::new(services),
            sessions: Arc::new(sessions),
            postgres,
        }
    }
}
