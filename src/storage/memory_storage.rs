use log::debug;
use parking_lot::RwLock;

use super::UserStore;
use crate::core::error::{DirectoryError, DirectoryResult};
use crate::core::types::{NewUser, User, UserId, UserPatch};

/// 内存用户存储
///
/// 整个集合由一把读写锁保护：写操作独占，读操作共享并返回副本
#[derive(Debug)]
pub struct MemoryUserStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    users: Vec<User>,
    /// 下一个待分配的 ID，只增不减；`None` 表示 ID 已用尽
    next_id: Option<UserId>,
}

impl StoreInner {
    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

impl MemoryUserStore {
    /// 创建空存储，首个 ID 为 1
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// 使用已有用户初始化，下一个 ID 为现有最大 ID + 1
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = match users.iter().map(|u| u.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self {
            inner: RwLock::new(StoreInner { users, next_id }),
        }
    }

    /// 使用预置用户初始化
    pub fn with_predefined_users() -> Self {
        Self::with_users(super::seed::predefined_users())
    }

    /// 下一个将被分配的 ID
    pub fn next_id(&self) -> Option<UserId> {
        self.inner.read().next_id
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for MemoryUserStore {
    fn find_all(&self) -> Vec<User> {
        self.inner.read().users.clone()
    }

    fn find_one(&self, id: UserId) -> Option<User> {
        self.inner.read().users.iter().find(|u| u.id == id).cloned()
    }

    fn create(&self, candidate: NewUser) -> DirectoryResult<User> {
        let mut inner = self.inner.write();
        let id = inner.next_id.ok_or(DirectoryError::IdsExhausted)?;
        inner.next_id = id.checked_add(1);

        let user = candidate.into_user(id);
        inner.users.push(user.clone());
        debug!("Created user {} ({})", user.id, user.name);
        Ok(user)
    }

    fn update(&self, id: UserId, patch: UserPatch) -> DirectoryResult<User> {
        let mut inner = self.inner.write();
        let idx = inner.position(id).ok_or(DirectoryError::UserNotFound(id))?;

        let updated = patch.apply_to(&inner.users[idx]);
        inner.users[idx] = updated.clone();
        debug!("Updated user {}", id);
        Ok(updated)
    }

    fn remove(&self, id: UserId) -> DirectoryResult<()> {
        let mut inner = self.inner.write();
        let idx = inner.position(id).ok_or(DirectoryError::UserNotFound(id))?;

        inner.users.remove(idx);
        debug!("Removed user {}", id);
        Ok(())
    }

    fn len(&self) -> usize {
        self.inner.read().users.len()
    }
}
