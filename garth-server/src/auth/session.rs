use std::{fmt, time::Duration};

use axum::http::{HeaderMap, header};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use garth_core::{api_types::auth::AuthenticatedUser, auth::SessionClaims};

pub const SESSION_COOKIE: &str = "garth_session";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session lifetime is out of range")]
    InvalidTtl,
    #[error("failed to sign session token")]
    Encode(#[source] jsonwebtoken::errors::Error),
    #[error("invalid session token")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies the HS256-signed session cookie.
#[derive(Clone)]
pub struct SessionManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: chrono::Duration,
    cookie_secure: bool,
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("ttl", &self.ttl)
            .field("cookie_secure", &self.cookie_secure)
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    pub fn new(secret: &[u8], ttl: Duration, cookie_secure: bool) -> Result<Self, SessionError> {
        let ttl = chrono::Duration::from_std(ttl).map_err(|_| SessionError::InvalidTtl)?;
        if ttl <= chrono::Duration::zero() {
            return Err(SessionError::InvalidTtl);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
            cookie_secure,
        })
    }

    /// Sign a token for a freshly authenticated user.
    pub fn issue(&self, user: &AuthenticatedUser) -> Result<(String, SessionClaims), SessionError> {
        let claims = SessionClaims::for_user(user, Utc::now(), self.ttl);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(SessionError::Encode)?;
        Ok((token, claims))
    }

    pub fn verify(&self, token: &str) -> Result<SessionClaims, SessionError> {
        decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(SessionError::Invalid)
    }

    pub fn session_cookie(&self, token: &str) -> String {
        let mut cookie = format!(
            "{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
            self.ttl.num_seconds()
        );
        if self.cookie_secure {
            cookie.push_str("; Secure");
        }
        cookie
    }

    pub fn clear_cookie(&self) -> String {
        let mut cookie = format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0");
        if self.cookie_secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

/// Pull the session token out of the `Cookie` header.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (name, value) = cookie.trim().split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Uuid::now_v7(),
            hotel_id: Uuid::now_v7(),
            role_id: Uuid::now_v7(),
            username: "recepcion".into(),
            role_name: "Recepcionista".into(),
            full_name: "Ana López".into(),
            max_discount: Decimal::new(15, 0),
        }
    }

    #[test]
    fn issued_token_verifies() {
        let sessions = SessionManager::new(SECRET, Duration::from_secs(3600), false).unwrap();
        let user = user();

        let (token, claims) = sessions.issue(&user).unwrap();
        let verified = sessions.verify(&token).unwrap();

        assert_eq!(verified, claims);
        assert_eq!(verified.hotel_id, user.hotel_id);
        assert_eq!(verified.max_discount, Decimal::new(15, 0));
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let issuer =
            SessionManager::new(b"another-secret-another-secret-xx", Duration::from_secs(60), false)
                .unwrap();
        let verifier = SessionManager::new(SECRET, Duration::from_secs(60), false).unwrap();

        let (token, _) = issuer.issue(&user()).unwrap();
        assert!(matches!(verifier.verify(&token), Err(SessionError::Invalid(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        let sessions = SessionManager::new(SECRET, Duration::from_secs(60), false).unwrap();
        let now = Utc::now();
        let mut claims = SessionClaims::for_user(&user(), now, chrono::Duration::minutes(1));
        claims.iat = (now - chrono::Duration::hours(2)).timestamp();
        claims.exp = (now - chrono::Duration::hours(1)).timestamp();
        let token = encode(&Header::new(Algorithm::HS256), &claims, &sessions.encoding).unwrap();

        assert!(sessions.verify(&token).is_err());
    }

    #[test]
    fn cookie_attributes_follow_settings() {
        let sessions = SessionManager::new(SECRET, Duration::from_secs(8 * 3600), true).unwrap();
        let cookie = sessions.session_cookie("abc");

        assert!(cookie.starts_with("garth_session=abc;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=28800"));
        assert!(cookie.ends_with("; Secure"));
        assert!(sessions.clear_cookie().contains("Max-Age=0"));
    }

    #[test]
    fn token_is_found_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; garth_session=tok.en.sig; lang=es"),
        );
        assert_eq!(extract_session_token(&headers).as_deref(), Some("tok.en.sig"));

        headers.insert(header::COOKIE, HeaderValue::from_static("garth_session="));
        assert!(extract_session_token(&headers).is_none());
    }

    #[test]
    fn zero_ttl_is_refused() {
        assert!(matches!(
            SessionManager::new(SECRET, Duration::ZERO, false),
            Err(SessionError::InvalidTtl)
        ));
    }
}
