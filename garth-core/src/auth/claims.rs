use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api_types::auth::AuthenticatedUser;

/// Claims carried by the signed session cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User id.
    pub sub: Uuid,
    pub hotel_id: Uuid,
    pub role_id: Uuid,
    /// Role name at login time.
    pub role: String,
    pub max_discount: Decimal,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn for_user(user: &AuthenticatedUser, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: user.user_id,
            hotel_id: user.hotel_id,
            role_id: user.role_id,
            role: user.role_name.clone(),
            max_discount: user.max_discount,
            name: user.full_name.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Uuid::now_v7(),
            hotel_id: Uuid::now_v7(),
            role_id: Uuid::now_v7(),
            username: "recepcion".into(),
            role_name: "Recepcionista".into(),
            full_name: "Ana López".into(),
            max_discount: Decimal::new(10, 0),
        }
    }

    #[test]
    fn claims_mirror_the_authenticated_user() {
        let user = user();
        let now = Utc::now();
        let claims = SessionClaims::for_user(&user, now, Duration::hours(8));

        assert_eq!(claims.user_id(), user.user_id);
        assert_eq!(claims.hotel_id, user.hotel_id);
        assert_eq!(claims.role, "Recepcionista");
        assert_eq!(claims.exp - claims.iat, 8 * 3600);
    }

    #[test]
    fn claims_survive_json() {
        let claims = SessionClaims::for_user(&user(), Utc::now(), Duration::minutes(30));
        let json = serde_json::to_string(&claims).unwrap();
        let back: SessionClaims = serde_json::from_str(&json).unwrap();
        assert_eq!(back, claims);
    }
}
