//! Router harness over mocked repository ports.

// Each test binary uses a different subset of the helpers.
#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum_test::TestServer;
use chrono::{NaiveTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use garth_core::{
    api_types::auth::AuthenticatedUser,
    application::{AppServices, AppUnitOfWorkBuilder},
    auth::AuthCrypto,
    database::{
        PostgresDatabase,
        ports::{
            dashboard::MockDashboardRepository, guests::MockGuestRepository,
            hotels::MockHotelRepository, hour_packages::MockHourPackageRepository,
            roles::MockRoleRepository, room_types::MockRoomTypeRepository,
            rooms::MockRoomRepository, users::MockUserRepository,
        },
    },
};
use garth_model::{Guest, Hotel, Role, Room, User};
use garth_server::{
    AppState,
    auth::{SESSION_COOKIE, SessionManager},
    create_app,
    infra::config::CorsConfig,
};

pub const PEPPER: &str = "router-test-pepper";
const SECRET: &[u8] = b"router-tests-session-secret-0123456789";

/// Identity carried by the test session.
#[derive(Debug, Clone, Copy)]
pub struct Tenant {
    pub hotel_id: Uuid,
    pub role_id: Uuid,
    pub user_id: Uuid,
}

impl Tenant {
    pub fn new() -> Self {
        Self {
            hotel_id: Uuid::now_v7(),
            role_id: Uuid::now_v7(),
            user_id: Uuid::now_v7(),
        }
    }

    pub fn user(&self) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: self.user_id,
            hotel_id: self.hotel_id,
            role_id: self.role_id,
            username: "recepcion".into(),
            role_name: "Recepcionista".into(),
            full_name: "Ana López".into(),
            max_discount: Decimal::new(10, 0),
        }
    }
}

#[derive(Default)]
pub struct Mocks {
    pub hotels: MockHotelRepository,
    pub guests: MockGuestRepository,
    pub room_types: MockRoomTypeRepository,
    pub rooms: MockRoomRepository,
    pub hour_packages: MockHourPackageRepository,
    pub roles: MockRoleRepository,
    pub users: MockUserRepository,
    pub dashboard: MockDashboardRepository,
}

impl Mocks {
    /// Keep the tenant's user and hotel active for session checks.
    pub fn sign_in(&mut self, tenant: &Tenant) {
        let staff = staff(tenant);
        let (hotel_id, user_id) = (tenant.hotel_id, tenant.user_id);
        self.users
            .expect_get_by_id()
            .withf(move |h, u| *h == hotel_id && *u == user_id)
            .returning(move |_, _| Ok(Some(staff.clone())));
        self.hotels
            .expect_get_by_id()
            .withf(move |h| *h == hotel_id)
            .returning(|h| Ok(Some(hotel(h))));
    }

    /// Give the tenant's role exactly `codes`.
    pub fn grant(&mut self, tenant: &Tenant, codes: &[&str]) {
        self.sign_in(tenant);
        let role = role(tenant, "Recepcionista", false);
        let (hotel_id, role_id) = (tenant.hotel_id, tenant.role_id);
        self.roles
            .expect_get_by_id()
            .withf(move |h, r| *h == hotel_id && *r == role_id)
            .returning(move |_, _| Ok(Some(role.clone())));

        let codes: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        self.roles
            .expect_get_permissions()
            .withf(move |h, r| *h == hotel_id && *r == role_id)
            .returning(move |_, _| Ok(codes.clone()));
    }

    /// Make the tenant's role the seeded administrator.
    pub fn grant_admin(&mut self, tenant: &Tenant) {
        self.sign_in(tenant);
        let role = role(tenant, "Administrador", true);
        let (hotel_id, role_id) = (tenant.hotel_id, tenant.role_id);
        self.roles
            .expect_get_by_id()
            .withf(move |h, r| *h == hotel_id && *r == role_id)
            .returning(move |_, _| Ok(Some(role.clone())));
        self.roles.expect_get_permissions().never();
    }
}

pub fn crypto() -> AuthCrypto {
    AuthCrypto::new(PEPPER).expect("crypto")
}

pub fn sessions() -> SessionManager {
    SessionManager::new(SECRET, Duration::from_secs(3600), false).expect("sessions")
}

/// `Cookie` header value for a signed-in tenant user.
pub fn session_cookie(tenant: &Tenant) -> String {
    let (token, _) = sessions().issue(&tenant.user()).expect("token");
    format!("{SESSION_COOKIE}={token}")
}

pub fn server(mocks: Mocks) -> TestServer {
    let unit_of_work = AppUnitOfWorkBuilder::new()
        .with_hotels(Arc::new(mocks.hotels))
        .with_guests(Arc::new(mocks.guests))
        .with_room_types(Arc::new(mocks.room_types))
        .with_rooms(Arc::new(mocks.rooms))
        .with_hour_packages(Arc::new(mocks.hour_packages))
        .with_roles(Arc::new(mocks.roles))
        .with_users(Arc::new(mocks.users))
        .with_dashboard(Arc::new(mocks.dashboard))
        .build()
        .expect("unit of work");

    let services = AppServices::new(&unit_of_work, Arc::new(crypto()));
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://garth@127.0.0.1:1/garth")
        .expect("lazy pool");
    let state = AppState::new(
        services,
        sessions(),
        Arc::new(PostgresDatabase::from_pool(pool)),
    );

    TestServer::builder()
        .build(create_app(state, &CorsConfig::default()))
        .expect("test server")
}

pub fn role(tenant: &Tenant, name: &str, is_system: bool) -> Role {
    let now = Utc::now();
    Role {
        id: tenant.role_id,
        hotel_id: tenant.hotel_id,
        name: name.into(),
        description: None,
        max_discount_percent: Decimal::new(10, 0),
        is_system,
        is_active: true,
        created_at: now,
        updated_at: now,
        created_by: None,
        user_count: None,
    }
}

pub fn staff(tenant: &Tenant) -> User {
    let now = Utc::now();
    User {
        id: tenant.user_id,
        hotel_id: tenant.hotel_id,
        role_id: tenant.role_id,
        username: "recepcion".into(),
        email: None,
        full_name: "Ana López".into(),
        password_hash: String::new(),
        is_active: true,
        last_login_at: None,
        created_at: now,
        updated_at: now,
        created_by: None,
        role_name: Some("Recepcionista".into()),
    }
}

pub fn guest(hotel_id: Uuid) -> Guest {
    let now = Utc::now();
    Guest {
        id: Uuid::now_v7(),
        hotel_id,
        first_name: "Ana".into(),
        last_name: "López".into(),
        email: None,
        phone: None,
        document_type: Some("INE".into()),
        document_number: Some("ABC123".into()),
        nationality: None,
        birth_date: None,
        address: None,
        notes: None,
        is_vip: false,
        is_blacklisted: false,
        blacklist_reason: None,
        total_stays: 2,
        is_active: true,
        created_at: now,
        updated_at: now,
        created_by: None,
    }
}

pub fn room(hotel_id: Uuid, status: &str) -> Room {
    let now = Utc::now();
    Room {
        id: Uuid::now_v7(),
        hotel_id,
        room_type_id: Uuid::now_v7(),
        room_number: "204".into(),
        floor: Some(2),
        status: status.into(),
        notes: None,
        is_active: true,
        created_at: now,
        updated_at: now,
        created_by: None,
        room_type_name: Some("Estándar".into()),
    }
}

pub fn hotel(hotel_id: Uuid) -> Hotel {
    let now = Utc::now();
    Hotel {
        id: hotel_id,
        name: "Hotel Garth".into(),
        legal_name: None,
        tax_id: None,
        address: None,
        city: None,
        state: None,
        country: Some("MX".into()),
        postal_code: None,
        phone: None,
        email: None,
        timezone: "America/Mexico_City".into(),
        currency: "MXN".into(),
        check_in_time: NaiveTime::from_hms_opt(15, 0, 0).expect("time"),
        check_out_time: NaiveTime::from_hms_opt(12, 0, 0).expect("time"),
        tax_rate: Decimal::new(16, 0),
        lodging_tax_rate: Decimal::new(3, 0),
        max_hourly_stay_hours: 12,
        logo_url: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}
