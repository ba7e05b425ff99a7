use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::api_types::auth::{AuthenticatedUser, ChangePasswordRequest, LoginRequest};
use crate::application::validation::required;
use crate::auth::permissions::ADMIN_ROLE_NAME;
use crate::auth::{AuthCrypto, SessionPermissions};
use crate::database::ports::{
    hotels::HotelRepository, roles::RoleRepository, users::UserRepository,
};
use crate::error::{HmsError, Result};

const INVALID_CREDENTIALS: &str = "Usuario o contraseña incorrectos";
const INVALID_SESSION: &str = "Sesión inválida";
const SESSION_CHECK_FAILED: &str = "Error al validar la sesión";

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
    hotels: Arc<dyn HotelRepository>,
    crypto: Arc<AuthCrypto>,
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService")
            .field("users_repo", &Arc::strong_count(&self.users))
            .field("roles_repo", &Arc::strong_count(&self.roles))
            .field("hotels_repo", &Arc::strong_count(&self.hotels))
            .finish()
    }
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
        hotels: Arc<dyn HotelRepository>,
        crypto: Arc<AuthCrypto>,
    ) -> Self {
        Self {
            users,
            roles,
            hotels,
            crypto,
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthenticatedUser> {
        let username = required(&request.username, "El usuario es requerido")?.to_lowercase();
        if request.password.is_empty() {
            return Err(HmsError::validation("La contraseña es requerida"));
        }

        let record = self
            .users
            .get_login_record(&username)
            .await
            .map_err(|e| e.or_internal("Error al iniciar sesión"))?
            .ok_or_else(|| HmsError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        let valid = self
            .crypto
            .verify_password(&request.password, &record.password_hash)
            .unwrap_or_else(|err| {
                warn!(
                    user_id = %record.user_id,
                    error = %err,
                    "stored password hash is unreadable"
                );
                false
            });
        if !valid {
            info!(%username, "rejected login attempt");
            return Err(HmsError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        if !record.user_active {
            return Err(HmsError::Unauthorized("El usuario está inactivo".to_string()));
        }
        if !record.role_active {
            return Err(HmsError::Unauthorized(
                "El rol del usuario está inactivo".to_string(),
            ));
        }
        if !record.hotel_active {
            return Err(HmsError::Unauthorized("El hotel está inactivo".to_string()));
        }

        if let Err(err) = self.users.update_last_login(record.user_id).await {
            warn!(user_id = %record.user_id, error = %err, "failed to record last login");
        }

        info!(user_id = %record.user_id, hotel_id = %record.hotel_id, "user logged in");

        Ok(AuthenticatedUser {
            user_id: record.user_id,
            hotel_id: record.hotel_id,
            role_id: record.role_id,
            username: record.username,
            role_name: record.role_name,
            full_name: record.full_name,
            max_discount: record.max_discount_percent,
        })
    }

    pub async fn change_password(
        &self,
        hotel_id: Uuid,
        user_id: Uuid,
        request: ChangePasswordRequest,
    ) -> Result<()> {
        request.validate()?;
        if request.new_password == request.current_password {
            return Err(HmsError::validation(
                "La nueva contraseña debe ser diferente a la actual",
            ));
        }

        let user = self
            .users
            .get_by_id(hotel_id, user_id)
            .await
            .map_err(|e| e.or_internal("Error al cambiar la contraseña"))?
            .ok_or_else(|| HmsError::not_found("Usuario no encontrado"))?;

        let current_ok = self
            .crypto
            .verify_password(&request.current_password, &user.password_hash)
            .map_err(|err| {
                HmsError::Internal(err.to_string()).or_internal("Error al cambiar la contraseña")
            })?;
        if !current_ok {
            return Err(HmsError::validation("La contraseña actual es incorrecta"));
        }

        let hash = self.hash_password(&request.new_password)?;
        let updated = self
            .users
            .update_password(user_id, &hash)
            .await
            .map_err(|e| e.or_internal("Error al cambiar la contraseña"))?;
        if !updated {
            return Err(HmsError::not_found("Usuario no encontrado"));
        }

        info!(%user_id, %hotel_id, "password changed");
        Ok(())
    }

    pub fn hash_password(&self, plain: &str) -> Result<String> {
        self.crypto.hash_password(plain).map_err(|err| {
            HmsError::Internal(err.to_string()).or_internal("Error al procesar la contraseña")
        })
    }

    /// Resolve what the session may do. The user must still be active and
    /// hold `role_id`; the hotel and the role must still be active.
    pub async fn session_permissions(
        &self,
        hotel_id: Uuid,
        user_id: Uuid,
        role_id: Uuid,
    ) -> Result<SessionPermissions> {
        self.users
            .get_by_id(hotel_id, user_id)
            .await
            .map_err(|e| e.or_internal(SESSION_CHECK_FAILED))?
            .filter(|user| user.is_active && user.role_id == role_id)
            .ok_or_else(|| HmsError::Unauthorized(INVALID_SESSION.to_string()))?;

        self.hotels
            .get_by_id(hotel_id)
            .await
            .map_err(|e| e.or_internal(SESSION_CHECK_FAILED))?
            .filter(|hotel| hotel.is_active)
            .ok_or_else(|| HmsError::Unauthorized(INVALID_SESSION.to_string()))?;

        let role = self
            .roles
            .get_by_id(hotel_id, role_id)
            .await
            .map_err(|e| e.or_internal(SESSION_CHECK_FAILED))?
            .filter(|role| role.is_active)
            .ok_or_else(|| HmsError::Unauthorized(INVALID_SESSION.to_string()))?;

        if role.is_system && role.name == ADMIN_ROLE_NAME {
            return Ok(SessionPermissions::all());
        }

        let codes = self
            .roles
            .get_permissions(hotel_id, role_id)
            .await
            .map_err(|e| e.or_internal(SESSION_CHECK_FAILED))?;
        Ok(SessionPermissions::new(codes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support;
    use crate::auth::crypto::test_crypto;
    use crate::database::ports::hotels::MockHotelRepository;
    use crate::database::ports::roles::MockRoleRepository;
    use crate::database::ports::users::MockUserRepository;
    use garth_model::{LoginRecord, Role};
    use rust_decimal::Decimal;

    fn login_record(crypto: &AuthCrypto, password: &str) -> LoginRecord {
        LoginRecord {
            user_id: Uuid::now_v7(),
            hotel_id: Uuid::now_v7(),
            role_id: Uuid::now_v7(),
            username: "recepcion".into(),
            full_name: "Ana López".into(),
            password_hash: crypto.hash_password(password).unwrap(),
            user_active: true,
            role_name: "Recepcionista".into(),
            role_active: true,
            max_discount_percent: Decimal::new(10, 0),
            hotel_active: true,
        }
    }

    fn service(users: MockUserRepository, roles: MockRoleRepository) -> AuthService {
        service_with_hotels(users, roles, MockHotelRepository::new())
    }

    fn service_with_hotels(
        users: MockUserRepository,
        roles: MockRoleRepository,
        hotels: MockHotelRepository,
    ) -> AuthService {
        AuthService::new(
            Arc::new(users),
            Arc::new(roles),
            Arc::new(hotels),
            Arc::new(test_crypto()),
        )
    }

    /// Repositories for a session whose user and hotel are active and whose
    /// role is `role`.
    fn session_repos(
        role: &Role,
    ) -> (Uuid, MockUserRepository, MockRoleRepository, MockHotelRepository) {
        let (hotel_id, role_id) = (role.hotel_id, role.id);
        let user = test_support::user(hotel_id, role_id, "hash");
        let user_id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_get_by_id()
            .withf(move |h, id| *h == hotel_id && *id == user_id)
            .returning(move |_, _| Ok(Some(user.clone())));

        let mut hotels = MockHotelRepository::new();
        hotels
            .expect_get_by_id()
            .returning(move |id| Ok(Some(test_support::hotel(id))));

        let mut roles = MockRoleRepository::new();
        let role = role.clone();
        roles
            .expect_get_by_id()
            .returning(move |_, _| Ok(Some(role.clone())));

        (user_id, users, roles, hotels)
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn login_succeeds_and_records_last_login() {
        let record = login_record(&test_crypto(), "clave-segura");
        let user_id = record.user_id;

        let mut users = MockUserRepository::new();
        let returned = record.clone();
        users
            .expect_get_login_record()
            .withf(|u| u == "recepcion")
            .returning(move |_| Ok(Some(returned.clone())));
        users
            .expect_update_last_login()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(|_| Ok(()));

        let user = service(users, MockRoleRepository::new())
            .login(login("  Recepcion ", "clave-segura"))
            .await
            .unwrap();

        assert_eq!(user.user_id, user_id);
        assert_eq!(user.role_name, "Recepcionista");
        assert_eq!(user.max_discount, Decimal::new(10, 0));
    }

    #[tokio::test]
    async fn unknown_user_and_bad_password_look_the_same() {
        let record = login_record(&test_crypto(), "clave-segura");

        let mut users = MockUserRepository::new();
        users
            .expect_get_login_record()
            .withf(|u| u == "nadie")
            .returning(|_| Ok(None));
        users
            .expect_get_login_record()
            .withf(|u| u == "recepcion")
            .returning(move |_| Ok(Some(record.clone())));
        users.expect_update_last_login().never();

        let svc = service(users, MockRoleRepository::new());

        let unknown = svc.login(login("nadie", "x")).await.unwrap_err();
        let wrong = svc.login(login("recepcion", "otra")).await.unwrap_err();

        assert!(matches!(unknown, HmsError::Unauthorized(ref m) if m == INVALID_CREDENTIALS));
        assert!(matches!(wrong, HmsError::Unauthorized(ref m) if m == INVALID_CREDENTIALS));
    }

    #[tokio::test]
    async fn inactive_user_cannot_log_in() {
        let mut record = login_record(&test_crypto(), "clave-segura");
        record.user_active = false;

        let mut users = MockUserRepository::new();
        users
            .expect_get_login_record()
            .returning(move |_| Ok(Some(record.clone())));
        users.expect_update_last_login().never();

        let err = service(users, MockRoleRepository::new())
            .login(login("recepcion", "clave-segura"))
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::Unauthorized(ref m) if m == "El usuario está inactivo"));
    }

    #[tokio::test]
    async fn inactive_role_cannot_log_in() {
        let mut record = login_record(&test_crypto(), "clave-segura");
        record.role_active = false;

        let mut users = MockUserRepository::new();
        users
            .expect_get_login_record()
            .returning(move |_| Ok(Some(record.clone())));
        users.expect_update_last_login().never();

        let err = service(users, MockRoleRepository::new())
            .login(login("recepcion", "clave-segura"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, HmsError::Unauthorized(ref m) if m == "El rol del usuario está inactivo")
        );
    }

    #[tokio::test]
    async fn inactive_hotel_cannot_log_in() {
        let mut record = login_record(&test_crypto(), "clave-segura");
        record.hotel_active = false;

        let mut users = MockUserRepository::new();
        users
            .expect_get_login_record()
            .returning(move |_| Ok(Some(record.clone())));
        users.expect_update_last_login().never();

        let err = service(users, MockRoleRepository::new())
            .login(login("recepcion", "clave-segura"))
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::Unauthorized(ref m) if m == "El hotel está inactivo"));
    }

    #[tokio::test]
    async fn blank_username_is_a_validation_error() {
        let mut users = MockUserRepository::new();
        users.expect_get_login_record().never();

        let err = service(users, MockRoleRepository::new())
            .login(login("   ", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::Validation(_)));
    }

    #[tokio::test]
    async fn change_password_requires_the_current_one() {
        let crypto = test_crypto();
        let hotel_id = Uuid::now_v7();
        let hash = crypto.hash_password("actual-123").unwrap();
        let user = test_support::user(hotel_id, Uuid::now_v7(), &hash);
        let user_id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_get_by_id()
            .returning(move |_, _| Ok(Some(user.clone())));
        users.expect_update_password().never();

        let err = service(users, MockRoleRepository::new())
            .change_password(
                hotel_id,
                user_id,
                ChangePasswordRequest {
                    current_password: "equivocada".into(),
                    new_password: "nueva-clave-1".into(),
                },
            )
            .await
            .unwrap_err();
        assert!(
            matches!(err, HmsError::Validation(ref m) if m == "La contraseña actual es incorrecta")
        );
    }

    #[tokio::test]
    async fn change_password_stores_a_new_hash() {
        let crypto = test_crypto();
        let hotel_id = Uuid::now_v7();
        let hash = crypto.hash_password("actual-123").unwrap();
        let user = test_support::user(hotel_id, Uuid::now_v7(), &hash);
        let user_id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_get_by_id()
            .returning(move |_, _| Ok(Some(user.clone())));
        users
            .expect_update_password()
            .withf(move |id, hash| *id == user_id && hash.starts_with("$argon2id$"))
            .times(1)
            .returning(|_, _| Ok(true));

        service(users, MockRoleRepository::new())
            .change_password(
                hotel_id,
                user_id,
                ChangePasswordRequest {
                    current_password: "actual-123".into(),
                    new_password: "nueva-clave-1".into(),
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn new_password_must_differ_and_be_long_enough() {
        let svc = service(MockUserRepository::new(), MockRoleRepository::new());

        let same = svc
            .change_password(
                Uuid::now_v7(),
                Uuid::now_v7(),
                ChangePasswordRequest {
                    current_password: "misma-clave".into(),
                    new_password: "misma-clave".into(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(same, HmsError::Validation(_)));

        let short = svc
            .change_password(
                Uuid::now_v7(),
                Uuid::now_v7(),
                ChangePasswordRequest {
                    current_password: "actual-123".into(),
                    new_password: "corta".into(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(short, HmsError::Validation(_)));
    }

    #[tokio::test]
    async fn system_admin_role_gets_every_permission() {
        let admin = test_support::role(Uuid::now_v7(), ADMIN_ROLE_NAME, true);
        let (hotel_id, role_id) = (admin.hotel_id, admin.id);
        let (user_id, users, mut roles, hotels) = session_repos(&admin);
        roles.expect_get_permissions().never();

        let perms = service_with_hotels(users, roles, hotels)
            .session_permissions(hotel_id, user_id, role_id)
            .await
            .unwrap();
        assert!(perms.grants_all());
    }

    #[tokio::test]
    async fn custom_role_named_like_admin_is_not_special() {
        let impostor = test_support::role(Uuid::now_v7(), ADMIN_ROLE_NAME, false);
        let (hotel_id, role_id) = (impostor.hotel_id, impostor.id);
        let (user_id, users, mut roles, hotels) = session_repos(&impostor);
        roles
            .expect_get_permissions()
            .returning(|_, _| Ok(vec!["guests.view".to_string()]));

        let perms = service_with_hotels(users, roles, hotels)
            .session_permissions(hotel_id, user_id, role_id)
            .await
            .unwrap();
        assert!(!perms.grants_all());
        assert!(perms.has("guests.view"));
        assert!(!perms.has("users.delete"));
    }

    #[tokio::test]
    async fn inactive_role_invalidates_the_session() {
        let mut role = test_support::role(Uuid::now_v7(), "Recepcionista", false);
        role.is_active = false;
        let (hotel_id, role_id) = (role.hotel_id, role.id);
        let (user_id, users, roles, hotels) = session_repos(&role);

        let err = service_with_hotels(users, roles, hotels)
            .session_permissions(hotel_id, user_id, role_id)
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::Unauthorized(ref m) if m == INVALID_SESSION));
    }

    #[tokio::test]
    async fn deactivated_user_invalidates_the_session() {
        let hotel_id = Uuid::now_v7();
        let role_id = Uuid::now_v7();
        let mut user = test_support::user(hotel_id, role_id, "hash");
        user.is_active = false;
        let user_id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_get_by_id()
            .returning(move |_, _| Ok(Some(user.clone())));
        let mut roles = MockRoleRepository::new();
        roles.expect_get_by_id().never();

        let err = service(users, roles)
            .session_permissions(hotel_id, user_id, role_id)
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::Unauthorized(ref m) if m == INVALID_SESSION));
    }

    #[tokio::test]
    async fn reassigned_role_invalidates_the_session() {
        let hotel_id = Uuid::now_v7();
        let user = test_support::user(hotel_id, Uuid::now_v7(), "hash");
        let user_id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_get_by_id()
            .returning(move |_, _| Ok(Some(user.clone())));

        let err = service(users, MockRoleRepository::new())
            .session_permissions(hotel_id, user_id, Uuid::now_v7())
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn inactive_hotel_invalidates_the_session() {
        let role = test_support::role(Uuid::now_v7(), "Recepcionista", false);
        let (hotel_id, role_id) = (role.hotel_id, role.id);
        let (user_id, users, _, _) = session_repos(&role);
        let mut roles = MockRoleRepository::new();
        roles.expect_get_by_id().never();

        let mut hotels = MockHotelRepository::new();
        hotels.expect_get_by_id().returning(|id| {
            let mut hotel = test_support::hotel(id);
            hotel.is_active = false;
            Ok(Some(hotel))
        });

        let err = service_with_hotels(users, roles, hotels)
            .session_permissions(hotel_id, user_id, role_id)
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::Unauthorized(ref m) if m == INVALID_SESSION));
    }
}
