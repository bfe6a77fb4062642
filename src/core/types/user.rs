//! 用户目录实体
//!
//! `User` 由目录存储独占持有，对外只交付副本

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

use crate::core::permission::{GroupId, Role};

/// 用户 ID，目录存储的连接键
pub type UserId = i64;

/// 用户记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub roles: BTreeSet<Role>,
    pub groups: BTreeSet<GroupId>,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        roles: impl IntoIterator<Item = Role>,
        groups: impl IntoIterator<Item = GroupId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            roles: roles.into_iter().collect(),
            groups: groups.into_iter().collect(),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// 两个用户是否至少共享一个分组
    pub fn shares_group_with(&self, other: &User) -> bool {
        !self.groups.is_disjoint(&other.groups)
    }
}

/// 新建用户的候选数据，ID 由存储分配
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "must contain at least 1 elements"))]
    pub roles: BTreeSet<Role>,
    #[validate(length(min = 1, message = "must contain at least 1 elements"))]
    pub groups: BTreeSet<GroupId>,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        roles: impl IntoIterator<Item = Role>,
        groups: impl IntoIterator<Item = GroupId>,
    ) -> Self {
        Self {
            name: name.into(),
            roles: roles.into_iter().collect(),
            groups: groups.into_iter().collect(),
        }
    }

    pub(crate) fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            roles: self.roles,
            groups: self.groups,
        }
    }
}

/// 部分更新
///
/// 出现的字段整体替换原值，集合不做逐元素合并；缺省字段不参与验证
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "must contain at least 1 elements"))]
    pub roles: Option<BTreeSet<Role>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "must contain at least 1 elements"))]
    pub groups: Option<BTreeSet<GroupId>>,
}

impl UserPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles = Some(roles.into_iter().collect());
        self
    }

    pub fn groups(mut self, groups: impl IntoIterator<Item = GroupId>) -> Self {
        self.groups = Some(groups.into_iter().collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.roles.is_none() && self.groups.is_none()
    }

    /// 将补丁应用到用户上，返回新的记录
    pub fn apply_to(self, user: &User) -> User {
        User {
            id: user.id,
            name: self.name.unwrap_or_else(|| user.name.clone()),
            roles: self.roles.unwrap_or_else(|| user.roles.clone()),
            groups: self.groups.unwrap_or_else(|| user.groups.clone()),
        }
    }
}
