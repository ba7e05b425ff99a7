use async_trait::async_trait;
use garth_model::{DashboardMetrics, RecentActivity, RoomStatusCount, UpcomingCheckout};
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::ports::dashboard::DashboardRepository;
use crate::database::procedure::ProcedureCall;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct PostgresDashboardRepository {
    pool: PgPool,
}

impl PostgresDashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardRepository for PostgresDashboardRepository {
    async fn get_metrics(&self, hotel_id: Uuid) -> Result<DashboardMetrics> {
        let metrics = ProcedureCall::new("sp_dashboard_get_metrics")
            .arg("p_hotel_id", hotel_id)
            .fetch_optional::<DashboardMetrics>(&self.pool)
            .await?;
        Ok(metrics.unwrap_or_default())
    }

    async fn get_room_status(&self, hotel_id: Uuid) -> Result<Vec<RoomStatusCount>> {
        let rows = ProcedureCall::new("sp_dashboard_get_room_status")
            .arg("p_hotel_id", hotel_id)
            .fetch_all::<RoomStatusCount>(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_upcoming_checkouts(
        &self,
        hotel_id: Uuid,
        limit: i32,
    ) -> Result<Vec<UpcomingCheckout>> {
        let rows = ProcedureCall::new("sp_dashboard_get_upcoming_checkouts")
            .arg("p_hotel_id", hotel_id)
            .arg("p_limit", limit)
            .fetch_all::<UpcomingCheckout>(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_recent_activity(&self, hotel_id: Uuid, limit: i32) -> Result<Vec<RecentActivity>> {
        let rows = ProcedureCall::new("sp_dashboard_get_recent_activity")
            .arg("p_hotel_id", hotel_id)
            .arg("p_limit", limit)
            .fetch_all::<RecentActivity>(&self.pool)
            .await?;
        Ok(rows)
    }
}
