//! Persisted entity records for GarthHMS.
//!
//! Every record here mirrors the row shape returned by the hotel database
//! functions. Status-like columns stay as text on the record and decode into
//! typed enums on access, so an unexpected value in the database never breaks
//! a whole listing.

pub mod cash_cut;
pub mod dashboard;
pub mod error;
pub mod guest;
pub mod hotel;
pub mod hour_package;
pub mod json_list;
pub mod reservation;
pub mod role;
pub mod room;
pub mod room_type;
pub mod stay;
pub mod transaction;
pub mod user;

pub use cash_cut::CashCut;
pub use dashboard::{
    DashboardComplete, DashboardMetrics, RecentActivity, RoomStatusCount,
    UpcomingCheckout,
};
pub use error::{ModelError, Result as ModelResult};
pub use guest::Guest;
pub use hotel::Hotel;
pub use hour_package::HourPackage;
pub use reservation::{Reservation, ReservationStatus};
pub use role::{Permission, Role};
pub use room::{Room, RoomStatus};
pub use room_type::RoomType;
pub use stay::{Stay, StayKind, StayStatus};
pub use transaction::{PaymentMethod, Transaction, TransactionKind};
pub use user::{LoginRecord, User};
