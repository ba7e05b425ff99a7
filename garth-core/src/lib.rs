//! Core library for GarthHMS: error type, API shapes, authentication
//! primitives, repository ports with their PostgreSQL adapters, and the
//! application services built on top of them.

pub mod api_types;
pub mod application;
pub mod auth;
pub mod database;
pub mod error;

pub use error::{HmsError, Result};
