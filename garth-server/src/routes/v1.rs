use axum::{
    Router, middleware,
    routing::{MethodRouter, delete, get, post, put},
};

use garth_core::auth::permissions::*;

use crate::{
    AppState,
    auth::{auth_middleware, require_permission},
    handlers::{auth, dashboard, guests, hotel, hour_packages, roles, room_types, rooms, users},
};

/// Create all v1 API routes
pub fn create_v1_router(state: AppState) -> Router<AppState> {
    Router::new()
        // Public authentication endpoints
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .merge(create_protected_routes(state))
}

/// Gate a method router behind one permission code.
fn guarded(route: MethodRouter<AppState>, permission: &'static str) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn(require_permission(permission)))
}

/// Routes that require a session
fn create_protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(auth::me))
        .route("/auth/change-password", post(auth::change_password))
        .merge(create_dashboard_routes())
        .merge(create_guest_routes())
        .merge(create_settings_routes())
        .merge(create_room_type_routes())
        .merge(create_room_routes())
        .merge(create_hour_package_routes())
        .merge(create_role_routes())
        .merge(create_user_routes())
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

fn create_dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", guarded(get(dashboard::get_dashboard), DASHBOARD_VIEW))
        .route(
            "/dashboard/metrics",
            guarded(get(dashboard::get_metrics), DASHBOARD_VIEW),
        )
}

fn create_guest_routes() -> Router<AppState> {
    Router::new()
        .route("/guests", guarded(get(guests::list_guests), GUESTS_VIEW))
        .route("/guests", guarded(post(guests::create_guest), GUESTS_CREATE))
        .route("/guests/{id}", guarded(get(guests::get_guest), GUESTS_VIEW))
        .route("/guests/{id}", guarded(put(guests::update_guest), GUESTS_UPDATE))
        .route(
            "/guests/{id}",
            guarded(delete(guests::delete_guest), GUESTS_DELETE),
        )
        .route(
            "/guests/{id}/blacklist",
            guarded(put(guests::set_blacklist), GUESTS_BLACKLIST),
        )
}

fn create_settings_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/hotel/settings",
            guarded(get(hotel::get_settings), SETTINGS_VIEW),
        )
        .route(
            "/hotel/settings",
            guarded(put(hotel::update_settings), SETTINGS_UPDATE),
        )
}

fn create_room_type_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/room-types",
            guarded(get(room_types::list_room_types), ROOM_TYPES_VIEW),
        )
        .route(
            "/room-types",
            guarded(post(room_types::create_room_type), ROOM_TYPES_CREATE),
        )
        .route(
            "/room-types/{id}",
            guarded(get(room_types::get_room_type), ROOM_TYPES_VIEW),
        )
        .route(
            "/room-types/{id}",
            guarded(put(room_types::update_room_type), ROOM_TYPES_UPDATE),
        )
        .route(
            "/room-types/{id}",
            guarded(delete(room_types::delete_room_type), ROOM_TYPES_DELETE),
        )
        .route(
            "/room-types/{id}/hour-packages",
            guarded(get(hour_packages::list_by_room_type), HOUR_PACKAGES_VIEW),
        )
}

fn create_room_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", guarded(get(rooms::list_rooms), ROOMS_VIEW))
        .route("/rooms", guarded(post(rooms::create_room), ROOMS_CREATE))
        .route(
            "/rooms/form-options",
            guarded(get(rooms::form_options), ROOMS_VIEW),
        )
        .route("/rooms/{id}", guarded(get(rooms::get_room), ROOMS_VIEW))
        .route("/rooms/{id}", guarded(put(rooms::update_room), ROOMS_UPDATE))
        .route("/rooms/{id}", guarded(delete(rooms::delete_room), ROOMS_DELETE))
        .route(
            "/rooms/{id}/status",
            guarded(put(rooms::change_status), ROOMS_CHANGE_STATUS),
        )
}

fn create_hour_package_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/hour-packages",
            guarded(get(hour_packages::list_hour_packages), HOUR_PACKAGES_VIEW),
        )
        .route(
            "/hour-packages",
            guarded(post(hour_packages::create_hour_package), HOUR_PACKAGES_CREATE),
        )
        .route(
            "/hour-packages/{id}",
            guarded(get(hour_packages::get_hour_package), HOUR_PACKAGES_VIEW),
        )
        .route(
            "/hour-packages/{id}",
            guarded(put(hour_packages::update_hour_package), HOUR_PACKAGES_UPDATE),
        )
        .route(
            "/hour-packages/{id}",
            guarded(delete(hour_packages::delete_hour_package), HOUR_PACKAGES_DELETE),
        )
}

fn create_role_routes() -> Router<AppState> {
    Router::new()
        .route("/roles", guarded(get(roles::list_roles), ROLES_VIEW))
        .route("/roles", guarded(post(roles::create_role), ROLES_CREATE))
        .route("/roles/{id}", guarded(get(roles::get_role), ROLES_VIEW))
        .route("/roles/{id}", guarded(put(roles::update_role), ROLES_UPDATE))
        .route("/roles/{id}", guarded(delete(roles::delete_role), ROLES_DELETE))
        .route(
            "/roles/{id}/permissions",
            guarded(get(roles::get_role_permissions), ROLES_VIEW),
        )
        .route(
            "/roles/{id}/permissions",
            guarded(put(roles::set_role_permissions), ROLES_PERMISSIONS),
        )
        .route(
            "/permissions",
            guarded(get(roles::list_permissions), ROLES_VIEW),
        )
}

fn create_user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", guarded(get(users::list_users), USERS_VIEW))
        .route("/users", guarded(post(users::create_user), USERS_CREATE))
        .route(
            "/users/form-options",
            guarded(get(users::form_options), USERS_VIEW),
        )
        .route("/users/{id}", guarded(get(users::get_user), USERS_VIEW))
        .route("/users/{id}", guarded(put(users::update_user), USERS_UPDATE))
        .route("/users/{id}", guarded(delete(users::delete_user), USERS_DELETE))
        .route(
            "/users/{id}/password",
            guarded(put(users::reset_password), USERS_RESET_PASSWORD),
        )
}
