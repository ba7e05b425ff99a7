//! Application services. Each one validates input, calls its repository
//! ports and maps entities to DTOs.

pub mod auth_service;
pub mod dashboard_service;
pub mod guest_service;
pub mod hotel_service;
pub mod hour_package_service;
pub mod role_service;
pub mod room_service;
pub mod room_type_service;
pub mod unit_of_work;
pub mod user_service;

mod validation;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

pub use auth_service::AuthService;
pub use dashboard_service::DashboardService;
pub use guest_service::GuestService;
pub use hotel_service::HotelService;
pub use hour_package_service::HourPackageService;
pub use role_service::RoleService;
pub use room_service::RoomService;
pub use room_type_service::RoomTypeService;
pub use unit_of_work::{AppUnitOfWork, AppUnitOfWorkBuilder};
pub use user_service::UserService;

use crate::auth::AuthCrypto;

/// Every service wired over one unit of work.
#[derive(Debug, Clone)]
pub struct AppServices {
    pub auth: AuthService,
    pub guests: GuestService,
    pub hotel: HotelService,
    pub room_types: RoomTypeService,
    pub rooms: RoomService,
    pub hour_packages: HourPackageService,
    pub roles: RoleService,
    pub users: UserService,
    pub dashboard: DashboardService,
}

impl AppServices {
    pub fn new(uow: &AppUnitOfWork, crypto: Arc<AuthCrypto>) -> Self {
        let auth = AuthService::new(
            uow.users.clone(),
            uow.roles.clone(),
            uow.hotels.clone(),
            crypto,
        );

        Self {
            guests: GuestService::new(uow.guests.clone()),
            hotel: HotelService::new(uow.hotels.clone()),
            room_types: RoomTypeService::new(uow.room_types.clone()),
            rooms: RoomService::new(uow.rooms.clone(), uow.room_types.clone()),
            hour_packages: HourPackageService::new(
                uow.hour_packages.clone(),
                uow.room_types.clone(),
            ),
            roles: RoleService::new(uow.roles.clone()),
            users: UserService::new(uow.users.clone(), uow.roles.clone(), auth.clone()),
            dashboard: DashboardService::new(uow.dashboard.clone()),
            auth,
        }
    }
}
