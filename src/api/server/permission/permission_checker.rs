use std::sync::Arc;

use crate::api::server::auth::{CredentialExtractor, HeaderCredentialExtractor};
use crate::api::server::permission::RolePermissionTable;
use crate::core::error::{PermissionError, PermissionResult};
use crate::core::{Permission, User};
use crate::storage::UserStore;

/// 操作类型 - 每个操作声明所需的权限
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    ListUsers,        // GET /users
    CreateUser,       // POST /users
    UpdateUser,       // PATCH /users/{id}
    DeleteUser,       // DELETE /users/{id}
    ListManagedUsers, // GET /users/managed/{id}
    Health,           // GET /health
}

impl OperationType {
    /// 操作所需的权限，`None` 表示公开操作
    pub fn required_permission(&self) -> Option<Permission> {
        match self {
            OperationType::ListUsers => Some(Permission::View),
            OperationType::CreateUser => Some(Permission::Create),
            OperationType::UpdateUser => Some(Permission::Edit),
            OperationType::DeleteUser => Some(Permission::Delete),
            OperationType::ListManagedUsers => Some(Permission::View),
            OperationType::Health => None,
        }
    }
}

/// 授权凭据
///
/// 只能由 `PermissionChecker::check` 产生，证明某个操作已通过鉴权
#[derive(Debug, Clone)]
pub struct Grant {
    operation: OperationType,
    caller: Option<User>,
}

impl Grant {
    pub fn operation(&self) -> OperationType {
        self.operation
    }

    /// 通过鉴权的调用者，公开操作为 `None`
    pub fn caller(&self) -> Option<&User> {
        self.caller.as_ref()
    }

    /// 确认凭据是为指定操作签发的
    pub(crate) fn ensure(&self, operation: OperationType) -> PermissionResult<()> {
        if self.operation == operation {
            Ok(())
        } else {
            Err(PermissionError::InsufficientPermissions)
        }
    }
}

/// 权限检查器
///
/// 职责：
/// 1. 从凭证中识别调用者
/// 2. 经目录存储取得调用者记录
/// 3. 经角色权限表计算有效权限并与所需权限比较
///
/// 所有拒绝都返回同一个 `InsufficientPermissions`，不区分原因
pub struct PermissionChecker<S: UserStore> {
    store: Arc<S>,
    role_table: Arc<RolePermissionTable>,
    extractor: Arc<dyn CredentialExtractor>,
}

impl<S: UserStore> PermissionChecker<S> {
    /// 使用默认的请求头凭证提取器
    pub fn new(store: Arc<S>, role_table: Arc<RolePermissionTable>) -> Self {
        Self::with_extractor(store, role_table, Arc::new(HeaderCredentialExtractor))
    }

    pub fn with_extractor(
        store: Arc<S>,
        role_table: Arc<RolePermissionTable>,
        extractor: Arc<dyn CredentialExtractor>,
    ) -> Self {
        Self {
            store,
            role_table,
            extractor,
        }
    }

    pub fn role_table(&self) -> &RolePermissionTable {
        &self.role_table
    }

    // ==================== 统一权限检查入口 ====================

    /// 检查调用者是否具备所需权限
    ///
    /// 未声明所需权限时直接放行，返回 `Ok(None)`；
    /// 放行受保护操作时返回调用者记录
    pub fn authorize(
        &self,
        credential: Option<&str>,
        required: Option<Permission>,
    ) -> PermissionResult<Option<User>> {
        let Some(required) = required else {
            return Ok(None);
        };

        let caller_id = self
            .extractor
            .extract(credential)
            .ok_or(PermissionError::InsufficientPermissions)?;

        let caller = self
            .store
            .find_one(caller_id)
            .ok_or(PermissionError::InsufficientPermissions)?;

        let effective = self.role_table.permissions_for(&caller.roles);
        if effective.contains(&required) {
            Ok(Some(caller))
        } else {
            Err(PermissionError::InsufficientPermissions)
        }
    }

    /// 按操作的权限声明检查，成功时签发该操作的授权凭据
    pub fn check(&self, credential: Option<&str>, operation: OperationType) -> PermissionResult<Grant> {
        let caller = self.authorize(credential, operation.required_permission())?;
        Ok(Grant { operation, caller })
    }
}
