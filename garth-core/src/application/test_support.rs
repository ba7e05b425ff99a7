//! Entity fixtures for service tests.

use chrono::{NaiveTime, Utc};
use garth_model::{Guest, Hotel, HourPackage, Role, Room, RoomType, User};
use rust_decimal::Decimal;
use uuid::Uuid;

pub(crate) fn hotel(id: Uuid) -> Hotel {
    let now = Utc::now();
    Hotel {
        id,
        name: "Hotel Garth".into(),
        legal_name: None,
        tax_id: None,
        address: None,
        city: Some("Guadalajara".into()),
        state: None,
        country: Some("MX".into()),
        postal_code: None,
        phone: None,
        email: None,
        timezone: "America/Mexico_City".into(),
        currency: "MXN".into(),
        check_in_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        check_out_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        tax_rate: Decimal::new(16, 0),
        lodging_tax_rate: Decimal::new(3, 0),
        max_hourly_stay_hours: 12,
        logo_url: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn guest(hotel_id: Uuid) -> Guest {
    let now = Utc::now();
    Guest {
        id: Uuid::now_v7(),
        hotel_id,
        first_name: "Ana".into(),
        last_name: "López".into(),
        email: Some("ana@example.com".into()),
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
        total_stays: 0,
        is_active: true,
        created_at: now,
        updated_at: now,
        created_by: None,
    }
}

pub(crate) fn room_type(hotel_id: Uuid) -> RoomType {
    let now = Utc::now();
    RoomType {
        id: Uuid::now_v7(),
        hotel_id,
        code: "STD".into(),
        name: "Estándar".into(),
        description: None,
        base_capacity: 2,
        max_capacity: 3,
        base_price_night: Decimal::new(90000, 2),
        extra_person_price: Decimal::new(15000, 2),
        allows_hourly: true,
        allows_nightly: true,
        sort_order: 0,
        amenities: Some(r#"["wifi","tv"]"#.into()),
        photo_urls: None,
        is_active: true,
        created_at: now,
        updated_at: now,
        created_by: None,
    }
}

pub(crate) fn room(hotel_id: Uuid, room_type_id: Uuid, status: &str) -> Room {
    let now = Utc::now();
    Room {
        id: Uuid::now_v7(),
        hotel_id,
        room_type_id,
        room_number: "101".into(),
        floor: Some(1),
        status: status.into(),
        notes: None,
        is_active: true,
        created_at: now,
        updated_at: now,
        created_by: None,
        room_type_name: Some("Estándar".into()),
    }
}

pub(crate) fn hour_package(hotel_id: Uuid, room_type_id: Uuid) -> HourPackage {
    let now = Utc::now();
    HourPackage {
        id: Uuid::now_v7(),
        hotel_id,
        room_type_id,
        name: "3 horas".into(),
        hours: 3,
        price: Decimal::new(35000, 2),
        extra_hour_price: Decimal::new(10000, 2),
        is_active: true,
        created_at: now,
        updated_at: now,
        created_by: None,
        room_type_name: None,
    }
}

pub(crate) fn role(hotel_id: Uuid, name: &str, is_system: bool) -> Role {
    let now = Utc::now();
    Role {
        id: Uuid::now_v7(),
        hotel_id,
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

pub(crate) fn user(hotel_id: Uuid, role_id: Uuid, password_hash: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::now_v7(),
        hotel_id,
        role_id,
        username: "recepcion".into(),
        email: None,
        full_name: "Ana López".into(),
        password_hash: password_hash.into(),
        is_active: true,
        last_login_at: None,
        created_at: now,
        updated_at: now,
        created_by: None,
        role_name: Some("Recepcionista".into()),
    }
}
