use log::info;
use std::sync::Arc;

use crate::api::server::permission::{Grant, OperationType, PermissionChecker, RolePermissionTable};
use crate::api::server::{validation, visibility};
use crate::config::Config;
use crate::core::error::ServiceResult;
use crate::core::{NewUser, User, UserId, UserPatch};
use crate::storage::{MemoryUserStore, UserStore};

/// 用户目录服务
///
/// 每个业务操作都要求传入由 `authorize` 签发、且与该操作匹配的 `Grant`，
/// 未经鉴权无法触达存储
pub struct DirectoryService<S: UserStore> {
    store: Arc<S>,
    checker: PermissionChecker<S>,
}

impl DirectoryService<MemoryUserStore> {
    /// 按配置创建内存目录服务
    pub fn from_config(config: &Config) -> Self {
        let store = if config.directory.seed_predefined_users {
            MemoryUserStore::with_predefined_users()
        } else {
            MemoryUserStore::new()
        };
        info!(
            "User directory initialized with {} users, {} role definitions",
            store.len(),
            config.roles.len()
        );
        Self::new(Arc::new(store), Arc::new(config.role_table()))
    }
}

impl<S: UserStore> DirectoryService<S> {
    pub fn new(store: Arc<S>, role_table: Arc<RolePermissionTable>) -> Self {
        let checker = PermissionChecker::new(store.clone(), role_table);
        Self::with_checker(store, checker)
    }

    pub fn with_checker(store: Arc<S>, checker: PermissionChecker<S>) -> Self {
        Self { store, checker }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn checker(&self) -> &PermissionChecker<S> {
        &self.checker
    }

    /// 鉴权入口：按操作声明的权限检查凭证
    pub fn authorize(&self, credential: Option<&str>, operation: OperationType) -> ServiceResult<Grant> {
        Ok(self.checker.check(credential, operation)?)
    }

    pub fn list_users(&self, grant: &Grant) -> ServiceResult<Vec<User>> {
        grant.ensure(OperationType::ListUsers)?;
        Ok(self.store.find_all())
    }

    pub fn create_user(&self, grant: &Grant, candidate: NewUser) -> ServiceResult<User> {
        grant.ensure(OperationType::CreateUser)?;
        validation::validate_new_user(&candidate)?;

        let user = self.store.create(candidate)?;
        info!("User {} created by {:?}", user.id, grant.caller().map(|u| u.id));
        Ok(user)
    }

    pub fn update_user(&self, grant: &Grant, id: UserId, patch: UserPatch) -> ServiceResult<User> {
        grant.ensure(OperationType::UpdateUser)?;
        validation::validate_patch(&patch)?;

        let user = self.store.update(id, patch)?;
        info!("User {} updated by {:?}", id, grant.caller().map(|u| u.id));
        Ok(user)
    }

    pub fn delete_user(&self, grant: &Grant, id: UserId) -> ServiceResult<()> {
        grant.ensure(OperationType::DeleteUser)?;

        self.store.remove(id)?;
        info!("User {} deleted by {:?}", id, grant.caller().map(|u| u.id));
        Ok(())
    }

    /// 列出指定用户可管理的用户
    pub fn managed_users(&self, grant: &Grant, id: UserId) -> ServiceResult<Vec<User>> {
        grant.ensure(OperationType::ListManagedUsers)?;
        Ok(visibility::managed_users_of(self.store.as_ref(), id)?)
    }
}
