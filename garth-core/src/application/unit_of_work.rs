use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use crate::database::infrastructure::postgres::{
    PostgresDashboardRepository, PostgresGuestRepository, PostgresHotelRepository,
    PostgresHourPackageRepository, PostgresRoleRepository, PostgresRoomRepository,
    PostgresRoomTypeRepository, PostgresUserRepository,
};
use crate::database::ports::{
    dashboard::DashboardRepository, guests::GuestRepository, hotels::HotelRepository,
    hour_packages::HourPackageRepository, roles::RoleRepository,
    room_types::RoomTypeRepository, rooms::RoomRepository, users::UserRepository,
};
use crate::database::postgres::PostgresDatabase;

/// Aggregates every repository port used by the application services.
#[derive(Clone)]
pub struct AppUnitOfWork {
    pub hotels: Arc<dyn HotelRepository>,
    pub guests: Arc<dyn GuestRepository>,
    pub room_types: Arc<dyn RoomTypeRepository>,
    pub rooms: Arc<dyn RoomRepository>,
    pub hour_packages: Arc<dyn HourPackageRepository>,
    pub roles: Arc<dyn RoleRepository>,
    pub users: Arc<dyn UserRepository>,
    pub dashboard: Arc<dyn DashboardRepository>,
}

impl fmt::Debug for AppUnitOfWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppUnitOfWork")
            .field("hotels", &type_name_of_val(self.hotels.as_ref()))
            .field("guests", &type_name_of_val(self.guests.as_ref()))
            .field("room_types", &type_name_of_val(self.room_types.as_ref()))
            .field("rooms", &type_name_of_val(self.rooms.as_ref()))
            .field(
                "hour_packages",
                &type_name_of_val(self.hour_packages.as_ref()),
            )
            .field("roles", &type_name_of_val(self.roles.as_ref()))
            .field("users", &type_name_of_val(self.users.as_ref()))
            .field("dashboard", &type_name_of_val(self.dashboard.as_ref()))
            .finish()
    }
}

#[derive(Default)]
pub struct AppUnitOfWorkBuilder {
    hotels: Option<Arc<dyn HotelRepository>>,
    guests: Option<Arc<dyn GuestRepository>>,
    room_types: Option<Arc<dyn RoomTypeRepository>>,
    rooms: Option<Arc<dyn RoomRepository>>,
    hour_packages: Option<Arc<dyn HourPackageRepository>>,
    roles: Option<Arc<dyn RoleRepository>>,
    users: Option<Arc<dyn UserRepository>>,
    dashboard: Option<Arc<dyn DashboardRepository>>,
}

impl fmt::Debug for AppUnitOfWorkBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppUnitOfWorkBuilder")
            .field("hotels", &self.hotels.is_some())
            .field("guests", &self.guests.is_some())
            .field("room_types", &self.room_types.is_some())
            .field("rooms", &self.rooms.is_some())
            .field("hour_packages", &self.hour_packages.is_some())
            .field("roles", &self.roles.is_some())
            .field("users", &self.users.is_some())
            .field("dashboard", &self.dashboard.is_some())
            .finish()
    }
}

impl AppUnitOfWorkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hotels(mut self, repo: Arc<dyn HotelRepository>) -> Self {
        self.hotels = Some(repo);
        self
    }
    pub fn with_guests(mut self, repo: Arc<dyn GuestRepository>) -> Self {
        self.guests = Some(repo);
        self
    }
    pub fn with_room_types(mut self, repo: Arc<dyn RoomTypeRepository>) -> Self {
        self.room_types = Some(repo);
        self
    }
    pub fn with_rooms(mut self, repo: Arc<dyn RoomRepository>) -> Self {
        self.rooms = Some(repo);
        self
    }
    pub fn with_hour_packages(mut self, repo: Arc<dyn HourPackageRepository>) -> Self {
        self.hour_packages = Some(repo);
        self
    }
    pub fn with_roles(mut self, repo: Arc<dyn RoleRepository>) -> Self {
        self.roles = Some(repo);
        self
    }
    pub fn with_users(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.users = Some(repo);
        self
    }
    pub fn with_dashboard(mut self, repo: Arc<dyn DashboardRepository>) -> Self {
        self.dashboard = Some(repo);
        self
    }

    /// Populate the builder with Postgres-backed adapters sharing one pool.
    pub fn with_postgres(mut self, db: &PostgresDatabase) -> Self {
        let pool = db.pool().clone();

        self.hotels = Some(Arc::new(PostgresHotelRepository::new(pool.clone())));
        self.guests = Some(Arc::new(PostgresGuestRepository::new(pool.clone())));
        self.room_types = Some(Arc::new(PostgresRoomTypeRepository::new(pool.clone())));
        self.rooms = Some(Arc::new(PostgresRoomRepository::new(pool.clone())));
        self.hour_packages = Some(Arc::new(PostgresHourPackageRepository::new(pool.clone())));
        self.roles = Some(Arc::new(PostgresRoleRepository::new(pool.clone())));
        self.users = Some(Arc::new(PostgresUserRepository::new(pool.clone())));
        self.dashboard = Some(Arc::new(PostgresDashboardRepository::new(pool)));

        self
    }

    /// Returns a string error naming the first missing repository.
    pub fn build(self) -> Result<AppUnitOfWork, String> {
        Ok(AppUnitOfWork {
            hotels: self
                .hotels
                .ok_or_else(|| "missing HotelRepository".to_string())?,
            guests: self
                .guests
                .ok_or_else(|| "missing GuestRepository".to_string())?,
            room_types: self
                .room_types
                .ok_or_else(|| "missing RoomTypeRepository".to_string())?,
            rooms: self
                .rooms
                .ok_or_else(|| "missing RoomRepository".to_string())?,
            hour_packages: self
                .hour_packages
                .ok_or_else(|| "missing HourPackageRepository".to_string())?,
            roles: self
                .roles
                .ok_or_else(|| "missing RoleRepository".to_string())?,
            users: self
                .users
                .ok_or_else(|| "missing UserRepository".to_string())?,
            dashboard: self
                .dashboard
                .ok_or_else(|| "missing DashboardRepository".to_string())?,
        })
    }
}

impl AppUnitOfWork {
    pub fn from_postgres(db: &PostgresDatabase) -> Result<Self, String> {
        AppUnitOfWorkBuilder::new().with_postgres(db).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::ports::hotels::MockHotelRepository;

    #[test]
    fn build_reports_the_missing_port() {
        let err = AppUnitOfWorkBuilder::new()
            .with_hotels(Arc::new(MockHotelRepository::new()))
            .build()
            .unwrap_err();
        assert_eq!(err, "missing GuestRepository");
    }
}
