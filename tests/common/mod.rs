//! 集成测试共享工具模块
//!
//! 提供测试基础设施和辅助函数，供所有集成测试使用

#![allow(dead_code)]

use std::sync::Arc;

use userdir::api::server::{DirectoryService, Grant, OperationType, RolePermissionTable};
use userdir::core::{GroupId, NewUser, Role, User, UserId};
use userdir::storage::MemoryUserStore;

/// 预置用户中的管理员（GROUP_1、GROUP_2）
pub const ADMIN: &str = "1";
/// 预置用户中只有 PERSONAL 角色的用户
pub const PERSONAL: &str = "2";
/// 预置用户中的 VIEWER
pub const VIEWER: &str = "6";

/// 使用预置用户和内置角色表创建目录服务
pub fn seeded_service() -> DirectoryService<MemoryUserStore> {
    DirectoryService::new(
        Arc::new(MemoryUserStore::with_predefined_users()),
        Arc::new(RolePermissionTable::default()),
    )
}

/// 使用给定用户创建目录服务
pub fn service_with(users: Vec<User>) -> DirectoryService<MemoryUserStore> {
    DirectoryService::new(
        Arc::new(MemoryUserStore::with_users(users)),
        Arc::new(RolePermissionTable::default()),
    )
}

/// 以指定凭证申请授权，失败时让测试直接失败
pub fn grant(
    service: &DirectoryService<MemoryUserStore>,
    credential: &str,
    operation: OperationType,
) -> Grant {
    service
        .authorize(Some(credential), operation)
        .unwrap_or_else(|e| panic!("授权 {:?} 应该成功: {}", operation, e))
}

pub fn new_user(name: &str, roles: &[Role], groups: &[GroupId]) -> NewUser {
    NewUser::new(name, roles.iter().copied(), groups.iter().copied())
}

pub fn ids(users: &[User]) -> Vec<UserId> {
    users.iter().map(|u| u.id).collect()
}
