use async_trait::async_trait;
use garth_model::{Permission, Role};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::database::ports::roles::RoleRepository;
use crate::database::procedure::ProcedureCall;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct PostgresRoleRepository {
    pool: PgPool,
}

impl PostgresRoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl RoleRepository for PostgresRoleRepository {
    async fn create(&self, role: &Role) -> Result<()> {
        ProcedureCall::new("role_create")
            .arg("p_id", role.id)
            .arg("p_hotel_id", role.hotel_id)
            .arg("p_name", role.name.clone())
            .arg("p_description", role.description.clone())
            .arg("p_max_discount_percent", role.max_discount_percent)
            .arg("p_created_by", role.created_by)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    async fn update(&self, role: &Role) -> Result<bool> {
        let updated = ProcedureCall::new("role_update")
            .arg("p_id", role.id)
            .arg("p_hotel_id", role.hotel_id)
            .arg("p_name", role.name.clone())
            .arg("p_description", role.description.clone())
            .arg("p_max_discount_percent", role.max_discount_percent)
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(updated)
    }

    async fn soft_delete(&self, hotel_id: Uuid, id: Uuid) -> Result<bool> {
        let deleted = ProcedureCall::new("role_soft_delete")
            .arg("p_hotel_id", hotel_id)
            .arg("p_id", id)
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(deleted)
    }

    async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<Option<Role>> {
        let role = ProcedureCall::new("role_get_by_id")
            .arg("p_hotel_id", hotel_id)
            .arg("p_id", id)
            .fetch_optional::<Role>(self.pool())
            .await?;
        Ok(role)
    }

    async fn get_all(&self, hotel_id: Uuid, include_inactive: bool) -> Result<Vec<Role>> {
        let roles = ProcedureCall::new("role_get_all")
            .arg("p_hotel_id", hotel_id)
            .arg("p_include_inactive", include_inactive)
            .fetch_all::<Role>(self.pool())
            .await?;
        Ok(roles)
    }

    async fn exists_by_name(
        &self,
        hotel_id: Uuid,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool> {
        let exists = ProcedureCall::new("role_exists_by_name")
            .arg("p_hotel_id", hotel_id)
            .arg("p_name", name.to_string())
            .arg("p_exclude_id", exclude_id)
            .fetch_scalar::<bool>(self.pool())
            .await?;
        Ok(exists)
    }

    async fn count_users(&self, hotel_id: Uuid, role_id: Uuid) -> Result<i64> {
        let count = ProcedureCall::new("role_count_users")
            .arg("p_hotel_id", hotel_id)
            .arg("p_role_id", role_id)
            .fetch_scalar::<i64>(self.pool())
            .await?;
        Ok(count)
    }

    async fn get_permissions(&self, hotel_id: Uuid, role_id: Uuid) -> Result<Vec<String>> {
        let codes: Vec<(String,)> = ProcedureCall::new("role_get_permissions")
            .arg("p_hotel_id", hotel_id)
            .arg("p_role_id", role_id)
            .fetch_all(self.pool())
            .await?;
        Ok(codes.into_iter().map(|(code,)| code).collect())
    }

    async fn set_permissions(
        &self,
        hotel_id: Uuid,
        role_id: Uuid,
        codes: Vec<String>,
    ) -> Result<()> {
        let count = codes.len();
        ProcedureCall::new("role_set_permissions")
            .arg("p_hotel_id", hotel_id)
            .arg("p_role_id", role_id)
            .arg("p_permission_codes", codes)
            .execute(self.pool())
            .await?;

        info!(%hotel_id, %role_id, count, "role permissions replaced");
        Ok(())
    }

    async fn get_all_permissions(&self) -> Result<Vec<Permission>> {
        let permissions = ProcedureCall::new("permission_get_all")
            .fetch_all::<Permission>(self.pool())
            .await?;
        Ok(permissions)
    }
}
