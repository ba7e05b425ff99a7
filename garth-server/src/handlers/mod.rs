//! JSON handlers. Tenancy always comes from the session claims.

pub mod auth;
pub mod dashboard;
pub mod guests;
pub mod health;
pub mod hotel;
pub mod hour_packages;
pub mod roles;
pub mod room_types;
pub mod rooms;
pub mod users;
