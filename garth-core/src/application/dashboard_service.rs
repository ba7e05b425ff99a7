use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use garth_model::{
    DashboardComplete, DashboardMetrics, RecentActivity, RoomStatusCount, UpcomingCheckout,
};
use tracing::debug;
use uuid::Uuid;

use crate::database::ports::dashboard::DashboardRepository;
use crate::error::Result;

/// Rows shown in the upcoming check-out and recent activity panels.
pub const PANEL_LIMIT: i32 = 10;

const LOAD_FAILED: &str = "Error al cargar el dashboard";

#[derive(Clone)]
pub struct DashboardService {
    dashboard: Arc<dyn DashboardRepository>,
}

impl fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardService")
            .field("dashboard_repo", &Arc::strong_count(&self.dashboard))
            .finish()
    }
}

impl DashboardService {
    pub fn new(dashboard: Arc<dyn DashboardRepository>) -> Self {
        Self { dashboard }
    }

    pub async fn get_metrics(&self, hotel_id: Uuid) -> Result<DashboardMetrics> {
        self.dashboard
            .get_metrics(hotel_id)
            .await
            .map_err(|e| e.or_internal(LOAD_FAILED))
    }

    pub async fn get_room_status(&self, hotel_id: Uuid) -> Result<Vec<RoomStatusCount>> {
        self.dashboard
            .get_room_status(hotel_id)
            .await
            .map_err(|e| e.or_internal(LOAD_FAILED))
    }

    pub async fn get_upcoming_checkouts(&self, hotel_id: Uuid) -> Result<Vec<UpcomingCheckout>> {
        self.dashboard
            .get_upcoming_checkouts(hotel_id, PANEL_LIMIT)
            .await
            .map_err(|e| e.or_internal(LOAD_FAILED))
    }

    pub async fn get_recent_activity(&self, hotel_id: Uuid) -> Result<Vec<RecentActivity>> {
        self.dashboard
            .get_recent_activity(hotel_id, PANEL_LIMIT)
            .await
            .map_err(|e| e.or_internal(LOAD_FAILED))
    }

    /// Run the four panel reads concurrently. Any failure fails the whole
    /// dashboard.
    pub async fn get_dashboard_complete(&self, hotel_id: Uuid) -> Result<DashboardComplete> {
        let (metrics, room_status, upcoming_checkouts, recent_activity) = tokio::try_join!(
            self.get_metrics(hotel_id),
            self.get_room_status(hotel_id),
            self.get_upcoming_checkouts(hotel_id),
            self.get_recent_activity(hotel_id),
        )?;

        debug!(
            %hotel_id,
            rooms = metrics.total_rooms,
            checkouts = upcoming_checkouts.len(),
            "dashboard loaded"
        );

        Ok(DashboardComplete {
            occupancy_percent: metrics.occupancy_percent(),
            metrics,
            room_status,
            upcoming_checkouts,
            recent_activity,
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::ports::dashboard::MockDashboardRepository;
    use crate::error::HmsError;
    use rust_decimal::Decimal;

    fn metrics() -> DashboardMetrics {
        DashboardMetrics {
            total_rooms: 20,
            occupied_rooms: 6,
            out_of_service_rooms: 2,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn complete_dashboard_merges_every_panel() {
        let mut repo = MockDashboardRepository::new();
        repo.expect_get_metrics().returning(|_| Ok(metrics()));
        repo.expect_get_room_status().returning(|_| {
            Ok(vec![RoomStatusCount {
                status: "occupied".into(),
                total: 6,
            }])
        });
        repo.expect_get_upcoming_checkouts()
            .withf(|_, limit| *limit == PANEL_LIMIT)
            .returning(|_, _| Ok(Vec::new()));
        repo.expect_get_recent_activity()
            .withf(|_, limit| *limit == PANEL_LIMIT)
            .returning(|_, _| Ok(Vec::new()));

        let dashboard = DashboardService::new(Arc::new(repo))
            .get_dashboard_complete(Uuid::now_v7())
            .await
            .unwrap();

        assert_eq!(dashboard.occupancy_percent, Decimal::new(3333, 2));
        assert_eq!(dashboard.room_status.len(), 1);
    }

    #[tokio::test]
    async fn one_failed_read_fails_the_dashboard() {
        let mut repo = MockDashboardRepository::new();
        repo.expect_get_metrics().returning(|_| Ok(metrics()));
        repo.expect_get_room_status()
            .returning(|_| Err(HmsError::Database(sqlx::Error::PoolTimedOut)));
        repo.expect_get_upcoming_checkouts()
            .returning(|_, _| Ok(Vec::new()));
        repo.expect_get_recent_activity()
            .returning(|_, _| Ok(Vec::new()));

        let err = DashboardService::new(Arc::new(repo))
            .get_dashboard_complete(Uuid::now_v7())
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::Internal(ref m) if m == LOAD_FAILED));
    }
}
