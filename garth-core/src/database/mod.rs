//! Database access: repository ports and their PostgreSQL adapters.

pub mod infrastructure;
pub mod ports;
pub mod postgres;
pub mod procedure;

pub use postgres::{PoolSettings, PoolStats, PostgresDatabase};
pub use procedure::ProcedureCall;
