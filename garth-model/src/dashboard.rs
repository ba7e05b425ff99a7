//! Read models returned by the dashboard functions.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct DashboardMetrics {
    pub total_rooms: i64,
    pub available_rooms: i64,
    pub occupied_rooms: i64,
    pub dirty_rooms: i64,
    pub out_of_service_rooms: i64,
    pub arrivals_today: i64,
    pub departures_today: i64,
    pub active_stays: i64,
    pub revenue_today: Decimal,
    pub revenue_month: Decimal,
}

impl DashboardMetrics {
    /// Occupied rooms over sellable rooms, as a percentage with two decimals.
    /// Zero when nothing is sellable.
    pub fn occupancy_percent(&self) -> Decimal {
        let sellable = self.total_rooms - self.out_of_service_rooms;
        if sellable <= 0 {
            return Decimal::ZERO;
        }

        (Decimal::from(self.occupied_rooms) * Decimal::ONE_HUNDRED
            / Decimal::from(sellable))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RoomStatusCount {
    pub status: String,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct UpcomingCheckout {
    pub stay_id: Uuid,
    pub room_number: String,
    pub guest_name: Option<String>,
    pub kind: String,
    pub expected_check_out_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RecentActivity {
    pub id: Uuid,
    pub activity_type: String,
    pub description: String,
    pub amount: Option<Decimal>,
    pub user_name: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Everything the dashboard screen renders, gathered in one response.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashboardComplete {
    pub metrics: DashboardMetrics,
    pub occupancy_percent: Decimal,
    pub room_status: Vec<RoomStatusCount>,
    pub upcoming_checkouts: Vec<UpcomingCheckout>,
    pub recent_activity: Vec<RecentActivity>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(total: i64, occupied: i64, out_of_service: i64) -> DashboardMetrics {
        DashboardMetrics {
            total_rooms: total,
            occupied_rooms: occupied,
            out_of_service_rooms: out_of_service,
            ..Default::default()
        }
    }

    #[test]
    fn occupancy_excludes_out_of_service_rooms() {
        assert_eq!(metrics(12, 5, 2).occupancy_percent(), Decimal::new(5000, 2));
    }

    #[test]
    fn occupancy_rounds_to_two_decimals() {
        assert_eq!(metrics(3, 1, 0).occupancy_percent(), Decimal::new(3333, 2));
    }

    #[test]
    fn occupancy_is_zero_without_sellable_rooms() {
        assert_eq!(metrics(0, 0, 0).occupancy_percent(), Decimal::ZERO);
        assert_eq!(metrics(2, 0, 2).occupancy_percent(), Decimal::ZERO);
    }
}
