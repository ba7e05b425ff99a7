use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use garth_model::User;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api_types::clean;
use crate::api_types::users::{
    CreateUserRequest, ResetPasswordRequest, UpdateUserRequest, UserDto, UserFormOptions,
};
use crate::application::auth_service::AuthService;
use crate::application::validation::{required, username};
use crate::database::ports::{roles::RoleRepository, users::UserRepository};
use crate::error::{HmsError, Result};

const NOT_FOUND: &str = "Usuario no encontrado";

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
    auth: AuthService,
}

impl fmt::Debug for UserService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserService")
            .field("users_repo", &Arc::strong_count(&self.users))
            .field("roles_repo", &Arc::strong_count(&self.roles))
            .finish()
    }
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
        auth: AuthService,
    ) -> Self {
        Self { users, roles, auth }
    }

    pub async fn create(
        &self,
        hotel_id: Uuid,
        actor: Uuid,
        mut request: CreateUserRequest,
    ) -> Result<UserDto> {
        request.email = clean(request.email);
        request.validate()?;
        let username = username(&request.username)?;
        let full_name = required(&request.full_name, "El nombre completo es requerido")?;
        let role_name = self.active_role(hotel_id, request.role_id).await?;

        let taken = self
            .users
            .exists_by_username(&username, None)
            .await
            .map_err(|e| e.or_internal("Error al crear el usuario"))?;
        if taken {
            return Err(HmsError::conflict(format!(
                "El nombre de usuario {username} ya está en uso"
            )));
        }

        let password_hash = self.auth.hash_password(&request.password)?;
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            hotel_id,
            role_id: request.role_id,
            username,
            email: request.email,
            full_name,
            password_hash,
            is_active: true,
            last_login_at: None,
            created_at: now,
            updated_at: now,
            created_by: Some(actor),
            role_name: Some(role_name),
        };

        self.users
            .create(&user)
            .await
            .map_err(|e| e.or_internal("Error al crear el usuario"))?;

        info!(%hotel_id, id = %user.id, username = %user.username, "user created");
        Ok(user.into())
    }

    pub async fn update(
        &self,
        hotel_id: Uuid,
        actor: Uuid,
        id: Uuid,
        mut request: UpdateUserRequest,
    ) -> Result<UserDto> {
        request.email = clean(request.email);
        request.validate()?;
        let full_name = required(&request.full_name, "El nombre completo es requerido")?;
        if id == actor && !request.is_active {
            return Err(HmsError::validation(
                "No puedes desactivar tu propio usuario",
            ));
        }

        let mut user = self.find(hotel_id, id).await?;
        let role_name = self.active_role(hotel_id, request.role_id).await?;

        user.role_id = request.role_id;
        user.role_name = Some(role_name);
        user.email = request.email;
        user.full_name = full_name;
        user.is_active = request.is_active;
        user.updated_at = Utc::now();

        let updated = self
            .users
            .update(&user)
            .await
            .map_err(|e| e.or_internal("Error al actualizar el usuario"))?;
        if !updated {
            return Err(HmsError::not_found(NOT_FOUND));
        }

        info!(%hotel_id, %id, "user updated");
        Ok(user.into())
    }

    pub async fn delete(&self, hotel_id: Uuid, actor: Uuid, id: Uuid) -> Result<()> {
        if id == actor {
            return Err(HmsError::validation("No puedes eliminar tu propio usuario"));
        }

        let deleted = self
            .users
            .soft_delete(hotel_id, id)
            .await
            .map_err(|e| e.or_internal("Error al eliminar el usuario"))?;
        if !deleted {
            return Err(HmsError::not_found(NOT_FOUND));
        }

        info!(%hotel_id, %id, %actor, "user deactivated");
        Ok(())
    }

    pub async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<UserDto> {
        Ok(self.find(hotel_id, id).await?.into())
    }

    pub async fn get_all(&self, hotel_id: Uuid, include_inactive: bool) -> Result<Vec<UserDto>> {
        let users = self
            .users
            .get_all(hotel_id, include_inactive)
            .await
            .map_err(|e| e.or_internal("Error al obtener los usuarios"))?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Administrative password reset; the old password is not required.
    pub async fn reset_password(
        &self,
        hotel_id: Uuid,
        id: Uuid,
        request: ResetPasswordRequest,
    ) -> Result<()> {
        request.validate()?;
        let user = self.find(hotel_id, id).await?;

        let hash = self.auth.hash_password(&request.new_password)?;
        let updated = self
            .users
            .update_password(user.id, &hash)
            .await
            .map_err(|e| e.or_internal("Error al restablecer la contraseña"))?;
        if !updated {
            return Err(HmsError::not_found(NOT_FOUND));
        }

        info!(%hotel_id, %id, "password reset");
        Ok(())
    }

    pub async fn form_options(&self, hotel_id: Uuid) -> Result<UserFormOptions> {
        let roles = self
            .roles
            .get_all(hotel_id, false)
            .await
            .map_err(|e| e.or_internal("Error al obtener los roles"))?;

        Ok(UserFormOptions {
            roles: roles
                .into_iter()
                .map(|role| crate::api_types::LookupItem {
                    id: role.id,
                    name: role.name,
                })
                .collect(),
        })
    }

    async fn find(&self, hotel_id: Uuid, id: Uuid) -> Result<User> {
        self.users
            .get_by_id(hotel_id, id)
            .await
            .map_err(|e| e.or_internal("Error al obtener el usuario"))?
            .ok_or_else(|| HmsError::not_found(NOT_FOUND))
    }

    async fn active_role(&self, hotel_id: Uuid, role_id: Uuid) -> Result<String> {
        let role = self
            .roles
            .get_by_id(hotel_id, role_id)
            .await
            .map_err(|e| e.or_internal("Error al validar el rol"))?
            .filter(|role| role.is_active)
            .ok_or_else(|| HmsError::validation("El rol seleccionado no existe o está inactivo"))?;
        Ok(role.name)
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

    fn service(users: MockUserRepository, roles: MockRoleRepository) -> UserService {
        let users: Arc<dyn UserRepository> = Arc::new(users);
        let roles: Arc<dyn RoleRepository> = Arc::new(roles);
        let auth = AuthService::new(
            users.clone(),
            roles.clone(),
            Arc::new(MockHotelRepository::new()),
            Arc::new(test_crypto()),
        );
        UserService::new(users, roles, auth)
    }

    fn create_request(role_id: Uuid) -> CreateUserRequest {
        CreateUserRequest {
            role_id,
            username: " Recepcion.Noche ".into(),
            email: Some("".into()),
            full_name: "Luis Pérez".into(),
            password: "clave-segura".into(),
        }
    }

    fn roles_with(role: garth_model::Role) -> MockRoleRepository {
        let mut roles = MockRoleRepository::new();
        roles
            .expect_get_by_id()
            .returning(move |_, _| Ok(Some(role.clone())));
        roles
    }

    #[tokio::test]
    async fn create_normalizes_username_and_hashes_password() {
        let hotel_id = Uuid::now_v7();
        let role = test_support::role(hotel_id, "Recepcionista", false);
        let role_id = role.id;

        let mut users = MockUserRepository::new();
        users
            .expect_exists_by_username()
            .withf(|u, ex| u == "recepcion.noche" && ex.is_none())
            .returning(|_, _| Ok(false));
        users
            .expect_create()
            .withf(|u| u.password_hash.starts_with("$argon2id$") && u.email.is_none())
            .times(1)
            .returning(|_| Ok(()));

        let dto = service(users, roles_with(role))
            .create(hotel_id, Uuid::now_v7(), create_request(role_id))
            .await
            .unwrap();
        assert_eq!(dto.username, "recepcion.noche");
        assert_eq!(dto.role_name.as_deref(), Some("Recepcionista"));

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("password_hash").is_none());
    }

    #[tokio::test]
    async fn taken_username_is_a_conflict() {
        let hotel_id = Uuid::now_v7();
        let role = test_support::role(hotel_id, "Recepcionista", false);
        let role_id = role.id;

        let mut users = MockUserRepository::new();
        users
            .expect_exists_by_username()
            .returning(|_, _| Ok(true));
        users.expect_create().never();

        let err = service(users, roles_with(role))
            .create(hotel_id, Uuid::now_v7(), create_request(role_id))
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::Conflict(_)));
    }

    #[tokio::test]
    async fn inactive_role_cannot_be_assigned() {
        let hotel_id = Uuid::now_v7();
        let mut role = test_support::role(hotel_id, "Temporal", false);
        role.is_active = false;
        let role_id = role.id;

        let mut users = MockUserRepository::new();
        users.expect_create().never();

        let err = service(users, roles_with(role))
            .create(hotel_id, Uuid::now_v7(), create_request(role_id))
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::Validation(_)));
    }

    #[tokio::test]
    async fn short_password_and_bad_username_are_rejected() {
        let svc = service(MockUserRepository::new(), MockRoleRepository::new());

        let mut short = create_request(Uuid::now_v7());
        short.password = "1234567".into();
        assert!(matches!(
            svc.create(Uuid::now_v7(), Uuid::now_v7(), short).await,
            Err(HmsError::Validation(_))
        ));

        let mut spaced = create_request(Uuid::now_v7());
        spaced.username = "luis perez".into();
        assert!(matches!(
            svc.create(Uuid::now_v7(), Uuid::now_v7(), spaced).await,
            Err(HmsError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn users_cannot_delete_themselves() {
        let mut users = MockUserRepository::new();
        users.expect_soft_delete().never();

        let me = Uuid::now_v7();
        let err = service(users, MockRoleRepository::new())
            .delete(Uuid::now_v7(), me, me)
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::Validation(_)));
    }

    #[tokio::test]
    async fn users_cannot_deactivate_themselves() {
        let me = Uuid::now_v7();
        let err = service(MockUserRepository::new(), MockRoleRepository::new())
            .update(
                Uuid::now_v7(),
                me,
                me,
                UpdateUserRequest {
                    role_id: Uuid::now_v7(),
                    email: None,
                    full_name: "Yo".into(),
                    is_active: false,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, HmsError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_other_user_is_soft() {
        let hotel_id = Uuid::now_v7();
        let target = Uuid::now_v7();

        let mut users = MockUserRepository::new();
        users
            .expect_soft_delete()
            .withf(move |h, id| *h == hotel_id && *id == target)
            .times(1)
            .returning(|_, _| Ok(true));

        service(users, MockRoleRepository::new())
            .delete(hotel_id, Uuid::now_v7(), target)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn reset_password_stores_a_fresh_hash() {
        let hotel_id = Uuid::now_v7();
        let user = test_support::user(hotel_id, Uuid::now_v7(), "$argon2id$old");
        let id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_get_by_id()
            .returning(move |_, _| Ok(Some(user.clone())));
        users
            .expect_update_password()
            .withf(move |uid, hash| *uid == id && hash != "$argon2id$old")
            .times(1)
            .returning(|_, _| Ok(true));

        service(users, MockRoleRepository::new())
            .reset_password(
                hotel_id,
                id,
                ResetPasswordRequest {
                    new_password: "nueva-clave-1".into(),
                },
            )
            .await
            .unwrap();
    }
}
