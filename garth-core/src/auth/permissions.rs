//! Permission codes checked by the router.
//!
//! Codes are `<module>.<action>` and must match the rows returned by
//! `permission_get_all`.

use std::collections::HashSet;

/// Name of the built-in role that bypasses permission checks when it is
/// also flagged as a system role.
pub const ADMIN_ROLE_NAME: &str = "Administrador";

pub const DASHBOARD_VIEW: &str = "dashboard.view";

pub const GUESTS_VIEW: &str = "guests.view";
pub const GUESTS_CREATE: &str = "guests.create";
pub const GUESTS_UPDATE: &str = "guests.update";
pub const GUESTS_DELETE: &str = "guests.delete";
pub const GUESTS_BLACKLIST: &str = "guests.blacklist";

pub const SETTINGS_VIEW: &str = "settings.view";
pub const SETTINGS_UPDATE: &str = "settings.update";

pub const ROOM_TYPES_VIEW: &str = "room_types.view";
pub const ROOM_TYPES_CREATE: &str = "room_types.create";
pub const ROOM_TYPES_UPDATE: &str = "room_types.update";
pub const ROOM_TYPES_DELETE: &str = "room_types.delete";

pub const ROOMS_VIEW: &str = "rooms.view";
pub const ROOMS_CREATE: &str = "rooms.create";
pub const ROOMS_UPDATE: &str = "rooms.update";
pub const ROOMS_DELETE: &str = "rooms.delete";
pub const ROOMS_CHANGE_STATUS: &str = "rooms.change_status";

pub const HOUR_PACKAGES_VIEW: &str = "hour_packages.view";
pub const HOUR_PACKAGES_CREATE: &str = "hour_packages.create";
pub const HOUR_PACKAGES_UPDATE: &str = "hour_packages.update";
pub const HOUR_PACKAGES_DELETE: &str = "hour_packages.delete";

pub const ROLES_VIEW: &str = "roles.view";
pub const ROLES_CREATE: &str = "roles.create";
pub const ROLES_UPDATE: &str = "roles.update";
pub const ROLES_DELETE: &str = "roles.delete";
pub const ROLES_PERMISSIONS: &str = "roles.permissions";

pub const USERS_VIEW: &str = "users.view";
pub const USERS_CREATE: &str = "users.create";
pub const USERS_UPDATE: &str = "users.update";
pub const USERS_DELETE: &str = "users.delete";
pub const USERS_RESET_PASSWORD: &str = "users.reset_password";

/// Permissions granted to the current session's role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionPermissions {
    codes: HashSet<String>,
    grants_all: bool,
}

impl SessionPermissions {
    pub fn new(codes: impl IntoIterator<Item = String>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
            grants_all: false,
        }
    }

    /// Every check passes.
    pub fn all() -> Self {
        Self {
            codes: HashSet::new(),
            grants_all: true,
        }
    }

    pub fn has(&self, code: &str) -> bool {
        self.grants_all || self.codes.contains(code)
    }

    pub fn grants_all(&self) -> bool {
        self.grants_all
    }

    /// Granted codes, sorted.
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.codes.iter().cloned().collect();
        codes.sort();
        codes
    }
}
