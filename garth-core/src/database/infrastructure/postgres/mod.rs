//! PostgreSQL infrastructure adapters implementing the database ports.

pub mod repositories;

pub use repositories::dashboard::PostgresDashboardRepository;
pub use repositories::guests::PostgresGuestRepository;
pub use repositories::hotels::PostgresHotelRepository;
pub use repositories::hour_packages::PostgresHourPackageRepository;
pub use repositories::roles::PostgresRoleRepository;
pub use repositories::room_types::PostgresRoomTypeRepository;
pub use repositories::rooms::PostgresRoomRepository;
pub use repositories::users::PostgresUserRepository;
