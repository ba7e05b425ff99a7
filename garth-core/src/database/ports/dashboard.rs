use async_trait::async_trait;
use garth_model::{DashboardMetrics, RecentActivity, RoomStatusCount, UpcomingCheckout};
use uuid::Uuid;

use crate::error::Result;

/// Read-only dashboard queries. Each method is independent of the others.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn get_metrics(&self, hotel_id: Uuid) -> Result<DashboardMetrics>;
    async fn get_room_status(&self, hotel_id: Uuid) -> Result<Vec<RoomStatusCount>>;
    async fn get_upcoming_checkouts(
        &self,
        hotel_id: Uuid,
        limit: i32,
    ) -> Result<Vec<UpcomingCheckout>>;
    async fn get_recent_activity(&self, hotel_id: Uuid, limit: i32)
    -> Result<Vec<RecentActivity>>;
}
