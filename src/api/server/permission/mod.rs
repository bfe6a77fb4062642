//! 权限管理模块
//!
//! 提供角色权限解析和操作鉴权功能

pub mod permission_checker;
pub mod role_table;

// 从 core 层重新导出权限类型
pub use crate::core::{Permission, Role};

pub use permission_checker::{Grant, OperationType, PermissionChecker};
pub use role_table::RolePermissionTable;
