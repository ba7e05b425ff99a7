/// Session signing secret used only when `DEV_MODE` is on and none is set.
pub const DEV_SESSION_SECRET: &str = "garth-dev-session-secret-change-me-0000";

/// Password pepper used only when `DEV_MODE` is on and none is set.
pub const DEV_PASSWORD_PEPPER: &str = "garth-dev-password-pepper";

pub const DEFAULT_SESSION_TTL: &str = "8h";
pub const DEFAULT_ACQUIRE_TIMEOUT: &str = "30s";
pub const DEFAULT_PORT: u16 = 5000;
