//! 权限类型定义
//!
//! 提供核心的权限模型、角色类型和分组标识定义。
//! 三者都是封闭枚举，对外以大写代码（如 `ADMIN`、`GROUP_1`）序列化。

use serde::{Deserialize, Serialize};

/// 权限类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    Create,
    View,
    Edit,
    Delete,
}

impl Permission {
    /// 全部权限，按声明顺序
    pub const ALL: [Permission; 4] = [
        Permission::Create,
        Permission::View,
        Permission::Edit,
        Permission::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Create => "CREATE",
            Permission::View => "VIEW",
            Permission::Edit => "EDIT",
            Permission::Delete => "DELETE",
        }
    }
}

/// 角色类型
/// - Admin: 管理员，拥有全部权限，并可管理同组用户
/// - Personal: 普通个人账号，不授予任何权限
/// - Viewer: 只读用户
///
/// 角色本身不携带权限，权限由 `RolePermissionTable` 的静态配置决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Personal,
    Viewer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Personal, Role::Viewer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Personal => "PERSONAL",
            Role::Viewer => "VIEWER",
        }
    }
}

/// 分组标识
///
/// 分组只决定管理可见性，不授予任何权限
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GroupId {
    #[serde(rename = "GROUP_1")]
    Group1,
    #[serde(rename = "GROUP_2")]
    Group2,
}

impl GroupId {
    pub const ALL: [GroupId; 2] = [GroupId::Group1, GroupId::Group2];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupId::Group1 => "GROUP_1",
            GroupId::Group2 => "GROUP_2",
        }
    }
}

/// 角色定义 - 角色权限表的静态配置单元
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    /// 展示名称
    pub name: String,
    /// 角色代码
    pub code: Role,
    /// 该角色授予的权限
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl RoleDefinition {
    pub fn new(name: impl Into<String>, code: Role, permissions: Vec<Permission>) -> Self {
        Self {
            name: name.into(),
            code,
            permissions,
        }
    }

    /// 内置角色定义
    pub fn builtin() -> Vec<RoleDefinition> {
        vec![
            RoleDefinition::new("Admin", Role::Admin, Permission::ALL.to_vec()),
            RoleDefinition::new("Personal", Role::Personal, Vec::new()),
            RoleDefinition::new("Viewer", Role::Viewer, vec![Permission::View]),
        ]
    }
}

macro_rules! impl_code_display {
    ($ty:ident, $label:expr) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| format!("Unknown {}: {}", $label, s))
            }
        }
    };
}

impl_code_display!(Permission, "permission");
impl_code_display!(Role, "role type");
impl_code_display!(GroupId, "group");
