use std::collections::{HashMap, HashSet};

use crate::core::{Permission, Role, RoleDefinition};

/// 角色权限表
///
/// 启动时由静态角色定义构建一次，之后只读。
/// 通过 `Arc` 在各组件间共享，读取无需加锁
#[derive(Debug, Clone)]
pub struct RolePermissionTable {
    definitions: Vec<RoleDefinition>,
    grants: HashMap<Role, HashSet<Permission>>,
}

impl RolePermissionTable {
    /// 由角色定义构建权限表
    ///
    /// 同一角色代码出现多次时，权限取并集
    pub fn from_definitions(definitions: &[RoleDefinition]) -> Self {
        let mut grants: HashMap<Role, HashSet<Permission>> = HashMap::new();
        for def in definitions {
            grants
                .entry(def.code)
                .or_default()
                .extend(def.permissions.iter().copied());
        }

        Self {
            definitions: definitions.to_vec(),
            grants,
        }
    }

    /// 单个角色授予的权限，未配置的角色返回空集
    pub fn permissions_of(&self, role: Role) -> HashSet<Permission> {
        self.grants.get(&role).cloned().unwrap_or_default()
    }

    /// 计算有效权限集：各角色权限的并集
    ///
    /// 未配置的角色不贡献权限，也不报错
    pub fn permissions_for<'a, I>(&self, roles: I) -> HashSet<Permission>
    where
        I: IntoIterator<Item = &'a Role>,
    {
        roles
            .into_iter()
            .filter_map(|role| self.grants.get(role))
            .flat_map(|perms| perms.iter().copied())
            .collect()
    }

    pub fn definitions(&self) -> &[RoleDefinition] {
        &self.definitions
    }
}

impl Default for RolePermissionTable {
    fn default() -> Self {
        Self::from_definitions(&RoleDefinition::builtin())
    }
}
