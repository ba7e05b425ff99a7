use async_trait::async_trait;
use garth_model::{LoginRecord, User};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::database::ports::users::UserRepository;
use crate::database::procedure::ProcedureCall;
use crate::error::Result;

/// PostgreSQL-backed implementation of the `UserRepository` port.
#[derive(Clone, Debug)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &User) -> Result<()> {
        ProcedureCall::new("user_create")
            .arg("p_id", user.id)
            .arg("p_hotel_id", user.hotel_id)
            .arg("p_role_id", user.role_id)
            .arg("p_username", user.username.clone())
            .arg("p_email", user.email.clone())
            .arg("p_full_name", user.full_name.clone())
            .arg("p_password_hash", user.password_hash.clone())
            .arg("p_created_by", user.created_by)
            .execute(self.pool())
            .await?;

        info!(hotel_id = %user.hotel_id, "Created user: {} ({})", user.username, user.id);
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<bool> {
        let updated = ProcedureCall::new("user_update")
            .arg("p_id", user.id)
            .arg("p_hotel_id", user.hotel_id)
            .arg("p_role_id", user.role_id)
            .arg("p_email", user.email.clone())
            .arg("p_full_name", user.full_name.clone())
            .arg("p_is_active", user.is_active)
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(updated)
    }

    async fn soft_delete(&self, hotel_id: Uuid, id: Uuid) -> Result<bool> {
        let deleted = ProcedureCall::new("user_soft_delete")
            .arg("p_hotel_id", hotel_id)
            .arg("p_id", id)
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(deleted)
    }

    async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<Option<User>> {
        let user = ProcedureCall::new("user_get_by_id")
            .arg("p_hotel_id", hotel_id)
            .arg("p_id", id)
            .fetch_optional::<User>(self.pool())
            .await?;
        Ok(user)
    }

    async fn get_all(&self, hotel_id: Uuid, include_inactive: bool) -> Result<Vec<User>> {
        let users = ProcedureCall::new("user_get_all")
            .arg("p_hotel_id", hotel_id)
            .arg("p_include_inactive", include_inactive)
            .fetch_all::<User>(self.pool())
            .await?;
        Ok(users)
    }

    async fn exists_by_username(&self, username: &str, exclude_id: Option<Uuid>) -> Result<bool> {
        let exists = ProcedureCall::new("user_exists_by_username")
            .arg("p_username", username.to_string())
            .arg("p_exclude_id", exclude_id)
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(exists)
    }

    async fn update_password(&self, user_id: Uuid, password_hash: &str) -> Result<bool> {
        let updated = ProcedureCall::new("user_update_password")
            .arg("p_id", user_id)
            .arg("p_password_hash", password_hash.to_string())
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(updated)
    }

    async fn get_login_record(&self, username: &str) -> Result<Option<LoginRecord>> {
        let record = ProcedureCall::new("auth_get_user_by_username")
            .arg("p_username", username.to_string())
            .fetch_optional::<LoginRecord>(self.pool())
            .await?;
        Ok(record)
    }

    async fn update_last_login(&self, user_id: Uuid) -> Result<()> {
        ProcedureCall::new("auth_update_last_login")
            .arg("p_user_id", user_id)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
