//! Session cookie handling and the auth/permission middleware.

pub mod middleware;
pub mod permission_middleware;
pub mod session;

pub use middleware::auth_middleware;
pub use permission_middleware::require_permission;
pub use session::{SESSION_COOKIE, SessionError, SessionManager};
