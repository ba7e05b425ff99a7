//! PostgreSQL-backed repository implementations. Each method is a single
//! stored-function call; no SQL beyond the call itself lives here.

pub mod dashboard;
pub mod guests;
pub mod hotels;
pub mod hour_packages;
pub mod roles;
pub mod room_types;
pub mod rooms;
pub mod users;
