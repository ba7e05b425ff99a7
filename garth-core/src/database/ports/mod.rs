//! Repository ports consumed by the application services.
//!
//! Every tenant-scoped method takes the caller's `hotel_id`; adapters must
//! never return rows belonging to another hotel.

pub mod dashboard;
pub mod guests;
pub mod hotels;
pub mod hour_packages;
pub mod roles;
pub mod room_types;
pub mod rooms;
pub mod users;
