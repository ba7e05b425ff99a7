use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use garth_model::Role;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api_types::roles::{
    CreateRoleRequest, PermissionDto, PermissionModuleDto, RoleDto, UpdateRoleRequest,
};
use crate::api_types::{LookupItem, clean};
use crate::application::validation::{percent, required};
use crate::database::ports::roles::RoleRepository;
use crate::error::{HmsError, Result};

const NOT_FOUND: &str = "Rol no encontrado";

#[derive(Clone)]
pub struct RoleService {
    roles: Arc<dyn RoleRepository>,
}

impl fmt::Debug for RoleService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoleService")
            .field("roles_repo", &Arc::strong_count(&self.roles))
            .finish()
    }
}

impl RoleService {
    pub fn new(roles: Arc<dyn RoleRepository>) -> Self {
        Self { roles }
    }

    pub async fn create(
        &self,
        hotel_id: Uuid,
        actor: Uuid,
        request: CreateRoleRequest,
    ) -> Result<RoleDto> {
        let name = Self::check(&request)?;
        self.ensure_unique_name(hotel_id, &name, None).await?;

        let now = Utc::now();
        let role = Role {
            id: Uuid::now_v7(),
            hotel_id,
            name,
            description: clean(request.description),
            max_discount_percent: request.max_discount_percent,
            is_system: false,
            is_active: true,
            created_at: now,
            updated_at: now,
            created_by: Some(actor),
            user_count: Some(0),
        };

        self.roles
            .create(&role)
            .await
            .map_err(|e| e.or_internal("Error al crear el rol"))?;

        info!(%hotel_id, id = %role.id, name = %role.name, "role created");
        Ok(role.into())
    }

    /// System roles keep their name; description and discount stay editable.
    pub async fn update(
        &self,
        hotel_id: Uuid,
        id: Uuid,
        request: UpdateRoleRequest,
    ) -> Result<RoleDto> {
        let name = Self::check(&request)?;
        let mut role = self.find(hotel_id, id).await?;

        if role.is_system && role.name != name {
            return Err(HmsError::conflict(
                "No se puede cambiar el nombre de un rol del sistema",
            ));
        }
        self.ensure_unique_name(hotel_id, &name, Some(id)).await?;

        role.name = name;
        role.description = clean(request.description);
        role.max_discount_percent = request.max_discount_percent;
        role.updated_at = Utc::now();

        let updated = self
            .roles
            .update(&role)
            .await
            .map_err(|e| e.or_internal("Error al actualizar el rol"))?;
        if !updated {
            return Err(HmsError::not_found(NOT_FOUND));
        }

        info!(%hotel_id, %id, "role updated");
        Ok(role.into())
    }

    pub async fn delete(&self, hotel_id: Uuid, id: Uuid) -> Result<()> {
        let role = self.find(hotel_id, id).await?;
        if role.is_system {
            return Err(HmsError::conflict(
                "No se puede eliminar un rol del sistema",
            ));
        }

        let users = self
            .roles
            .count_users(hotel_id, id)
            .await
            .map_err(|e| e.or_internal("Error al eliminar el rol"))?;
        if users > 0 {
            return Err(HmsError::conflict(format!(
                "No se puede eliminar el rol porque tiene {users} usuario(s) asignado(s)"
            )));
        }

        let deleted = self
            .roles
            .soft_delete(hotel_id, id)
            .await
            .map_err(|e| e.or_internal("Error al eliminar el rol"))?;
        if !deleted {
            return Err(HmsError::not_found(NOT_FOUND));
        }

        info!(%hotel_id, %id, "role deactivated");
        Ok(())
    }

    pub async fn get_by_id(&self, hotel_id: Uuid, id: Uuid) -> Result<RoleDto> {
        Ok(self.find(hotel_id, id).await?.into())
    }

    pub async fn get_all(&self, hotel_id: Uuid, include_inactive: bool) -> Result<Vec<RoleDto>> {
        let roles = self
            .roles
            .get_all(hotel_id, include_inactive)
            .await
            .map_err(|e| e.or_internal("Error al obtener los roles"))?;
        Ok(roles.into_iter().map(RoleDto::from).collect())
    }

    /// Active roles for form selects.
    pub async fn lookup(&self, hotel_id: Uuid) -> Result<Vec<LookupItem>> {
        let roles = self
            .roles
            .get_all(hotel_id, false)
            .await
            .map_err(|e| e.or_internal("Error al obtener los roles"))?;
        Ok(roles
            .into_iter()
            .map(|role| LookupItem {
                id: role.id,
                name: role.name,
            })
            .collect())
    }

    /// The global permission catalog, grouped by module in name order.
    pub async fn get_permission_catalog(&self) -> Result<Vec<PermissionModuleDto>> {
        let permissions = self
            .roles
            .get_all_permissions()
            .await
            .map_err(|e| e.or_internal("Error al obtener los permisos"))?;

        let mut modules: BTreeMap<String, Vec<PermissionDto>> = BTreeMap::new();
        for permission in permissions {
            modules
                .entry(permission.module.clone())
                .or_default()
                .push(permission.into());
        }

        Ok(modules
            .into_iter()
            .map(|(module, mut permissions)| {
                permissions.sort_by(|a, b| a.code.cmp(&b.code));
                PermissionModuleDto {
                    module,
                    permissions,
                }
            })
            .collect())
    }

    pub async fn get_role_permissions(&self, hotel_id: Uuid, role_id: Uuid) -> Result<Vec<String>> {
        self.find(hotel_id, role_id).await?;

        let mut codes = self
            .roles
            .get_permissions(hotel_id, role_id)
            .await
            .map_err(|e| e.or_internal("Error al obtener los permisos del rol"))?;
        codes.sort();
        Ok(codes)
    }

    /// Replace the role's permissions. Every code must exist in the catalog.
    pub async fn set_role_permissions(
        &self,
        hotel_id: Uuid,
        role_id: Uuid,
        codes: Vec<String>,
    ) -> Result<()> {
        self.find(hotel_id, role_id).await?;

        let requested: BTreeSet<String> = codes
            .into_iter()
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .collect();

        let catalog: HashSet<String> = self
            .roles
            .get_all_permissions()
            .await
            .map_err(|e| e.or_internal("Error al asignar los permisos"))?
            .into_iter()
            .map(|p| p.code)
            .collect();

        let unknown: Vec<&str> = requested
            .iter()
            .filter(|code| !catalog.contains(*code))
            .map(String::as_str)
            .collect();
        if !unknown.is_empty() {
            return Err(HmsError::validation(format!(
                "Permisos desconocidos: {}",
                unknown.join(", ")
            )));
        }

        let count = requested.len();
        self.roles
            .set_permissions(hotel_id, role_id, requested.into_iter().collect())
            .await
            .map_err(|e| e.or_internal("Error al asignar los permisos"))?;

        info!(%hotel_id, %role_id, count, "role permissions updated");
        Ok(())
    }

    async fn find(&self, hotel_id: Uuid, id: Uuid) -> Result<Role> {
        self.roles
            .get_by_id(hotel_id, id)
            .await
            .map_err(|e| e.or_internal("Error al obtener el rol"))?
            .ok_or_else(|| HmsError::not_found(NOT_FOUND))
    }

    fn check(request: &CreateRoleRequest) -> Result<String> {
        request.validate()?;
        let name = required(&request.name, "El nombre del rol es requerido")?;
        percent(
            request.max_discount_percent,
            "El descuento máximo debe estar entre 0 y 100",
        )?;
        Ok(name)
    }

    async fn ensure_unique_name(
        &self,
        hotel_id: Uuid,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<()> {
        let exists = self
            .roles
            .exists_by_name(hotel_id, name, exclude_id)
            .await
            .map_err(|e| e.or_internal("Error al validar el nombre del rol"))?;
        if exists {
            return Err(HmsError::conflict(format!(
                "Ya existe un rol con el nombre {name}"
            )));
        }
        Ok(())
    }
}
