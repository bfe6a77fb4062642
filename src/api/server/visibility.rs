//! 管理可见性
//!
//! 管理员可管理与其至少共享一个分组的其他用户；非管理员不管理任何人。
//! 复杂度为 O(n·g)，目录规模较大时可在存储侧增加 分组 -> 用户ID 索引

use crate::core::error::{DirectoryError, DirectoryResult};
use crate::core::{User, UserId};
use crate::storage::UserStore;

/// 计算指定用户可管理的用户列表
///
/// 在同一份 `find_all` 快照上定位主体并筛选候选，结果保持存储的插入顺序
pub fn managed_users_of<S>(store: &S, id: UserId) -> DirectoryResult<Vec<User>>
where
    S: UserStore + ?Sized,
{
    let snapshot = store.find_all();
    let subject = snapshot
        .iter()
        .find(|u| u.id == id)
        .ok_or(DirectoryError::UserNotFound(id))?;

    if !subject.is_admin() {
        return Ok(Vec::new());
    }

    let managed = snapshot
        .iter()
        .filter(|u| u.id != subject.id && u.shares_group_with(subject))
        .cloned()
        .collect();
    Ok(managed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GroupId, Role};
    use crate::storage::MemoryUserStore;

    fn ids(users: &[User]) -> Vec<UserId> {
        users.iter().map(|u| u.id).collect()
    }

    #[test]
    fn test_admin_manages_overlapping_groups() {
        let store = MemoryUserStore::with_users(vec![
            User::new(1, "A", [Role::Admin], [GroupId::Group1, GroupId::Group2]),
            User::new(2, "B", [Role::Personal], [GroupId::Group2]),
            User::new(3, "C", [Role::Personal], [GroupId::Group1]),
        ]);

        let managed = managed_users_of(&store, 1).unwrap();
        assert_eq!(ids(&managed), vec![2, 3]);
    }

    #[test]
    fn test_no_overlap_is_excluded() {
        let store = MemoryUserStore::with_users(vec![
            User::new(1, "A", [Role::Admin], [GroupId::Group2]),
            User::new(2, "B", [Role::Personal], [GroupId::Group2]),
            User::new(3, "C", [Role::Admin, Role::Personal], [GroupId::Group1]),
        ]);

        assert_eq!(ids(&managed_users_of(&store, 1).unwrap()), vec![2]);
        assert!(managed_users_of(&store, 3).unwrap().is_empty());
    }

    #[test]
    fn test_non_admin_manages_nobody() {
        let store = MemoryUserStore::with_predefined_users();
        for id in [2, 3, 6] {
            assert!(managed_users_of(&store, id).unwrap().is_empty());
        }
    }

    #[test]
    fn test_predefined_admins() {
        let store = MemoryUserStore::with_predefined_users();

        assert_eq!(ids(&managed_users_of(&store, 1).unwrap()), vec![2, 3, 4, 5, 6]);
        assert_eq!(ids(&managed_users_of(&store, 4).unwrap()), vec![1, 2, 3]);
        assert_eq!(ids(&managed_users_of(&store, 5).unwrap()), vec![1, 2, 6]);
    }

    #[test]
    fn test_missing_subject() {
        let store = MemoryUserStore::new();
        assert_eq!(
            managed_users_of(&store, 7),
            Err(DirectoryError::UserNotFound(7))
        );
    }
}
