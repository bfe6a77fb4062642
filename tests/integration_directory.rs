//! 用户目录集成测试
//!
//! 测试范围:
//! - MemoryUserStore - 增删改查与 ID 分配
//! - 部分更新语义
//! - 管理可见性
//! - 并发访问

mod common;

use std::sync::Arc;
use std::thread;

use common::{grant, ids, new_user, seeded_service, service_with, ADMIN};
use userdir::api::server::{managed_users_of, OperationType};
use userdir::core::{DirectoryError, GroupId, Role, ServiceError, User, UserPatch};
use userdir::storage::{predefined_users, MemoryUserStore, UserStore};

// ==================== 存储测试 ====================

#[test]
fn test_seeded_directory() {
    let store = MemoryUserStore::with_predefined_users();
    let users = store.find_all();

    assert_eq!(ids(&users), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(users, predefined_users());
    assert_eq!(store.next_id(), Some(7));
}

#[test]
fn test_find_all_is_idempotent() {
    let store = MemoryUserStore::with_predefined_users();
    assert_eq!(store.find_all(), store.find_all());
}

#[test]
fn test_ids_are_never_reused() {
    let service = seeded_service();
    let create = grant(&service, ADMIN, OperationType::CreateUser);
    let delete = grant(&service, ADMIN, OperationType::DeleteUser);

    let first = service
        .create_user(&create, new_user("First", &[Role::Personal], &[GroupId::Group1]))
        .unwrap();
    assert_eq!(first.id, 7);

    service.delete_user(&delete, first.id).unwrap();
    service.delete_user(&delete, 6).unwrap();

    let second = service
        .create_user(&create, new_user("Second", &[Role::Personal], &[GroupId::Group1]))
        .unwrap();
    assert_eq!(second.id, 8);
}

// ==================== 部分更新测试 ====================

#[test]
fn test_update_name_only_keeps_sets() {
    let service = seeded_service();
    let update = grant(&service, ADMIN, OperationType::UpdateUser);
    let before = service.store().find_one(4).unwrap();

    let after = service
        .update_user(&update, 4, UserPatch::default().name("Jarvis K."))
        .unwrap();

    assert_eq!(after.name, "Jarvis K.");
    assert_eq!(after.roles, before.roles);
    assert_eq!(after.groups, before.groups);
    assert_eq!(service.store().find_one(4), Some(after));
}

#[test]
fn test_update_roles_replaces_entire_set() {
    let service = seeded_service();
    let update = grant(&service, ADMIN, OperationType::UpdateUser);

    let after = service
        .update_user(&update, 1, UserPatch::default().roles([Role::Viewer]))
        .unwrap();

    assert_eq!(after.roles.iter().copied().collect::<Vec<_>>(), vec![Role::Viewer]);
    assert!(!after.is_admin());
}

#[test]
fn test_update_missing_user() {
    let service = seeded_service();
    let update = grant(&service, ADMIN, OperationType::UpdateUser);

    let result = service.update_user(&update, 100, UserPatch::default().name("x"));
    assert_eq!(
        result,
        Err(ServiceError::Directory(DirectoryError::UserNotFound(100)))
    );
}

// ==================== 管理可见性测试 ====================

#[test]
fn test_admin_manages_overlapping_users_only() {
    let service = service_with(vec![
        User::new(1, "A", [Role::Admin], [GroupId::Group1, GroupId::Group2]),
        User::new(2, "B", [Role::Personal], [GroupId::Group2]),
        User::new(3, "C", [Role::Admin], [GroupId::Group1]),
    ]);
    let managed = grant(&service, "1", OperationType::ListManagedUsers);

    assert_eq!(ids(&service.managed_users(&managed, 1).unwrap()), vec![2, 3]);
    // C 只在 GROUP_1，B 只在 GROUP_2，没有交集
    assert_eq!(ids(&service.managed_users(&managed, 3).unwrap()), vec![1]);
    assert!(service.managed_users(&managed, 2).unwrap().is_empty());
}

#[test]
fn test_visibility_ignores_group_order() {
    let forward = MemoryUserStore::with_users(vec![
        User::new(1, "A", [Role::Admin], [GroupId::Group1, GroupId::Group2]),
        User::new(2, "B", [Role::Personal], [GroupId::Group2, GroupId::Group1]),
    ]);
    let reversed = MemoryUserStore::with_users(vec![
        User::new(1, "A", [Role::Admin], [GroupId::Group2, GroupId::Group1]),
        User::new(2, "B", [Role::Personal], [GroupId::Group1, GroupId::Group2]),
    ]);

    assert_eq!(
        managed_users_of(&forward, 1).unwrap(),
        managed_users_of(&reversed, 1).unwrap()
    );
}

#[test]
fn test_non_admin_with_shared_groups_manages_nobody() {
    let store = MemoryUserStore::with_predefined_users();
    // 用户 2 与所有人共享分组，但不是管理员
    assert!(managed_users_of(&store, 2).unwrap().is_empty());
}

#[test]
fn test_managed_users_are_copies() {
    let store = MemoryUserStore::with_predefined_users();
    let mut managed = managed_users_of(&store, 1).unwrap();
    managed[0].name = "changed".to_string();

    assert_eq!(store.find_one(2).unwrap().name, "Grabriel Monroe");
}

// ==================== 并发测试 ====================

#[test]
fn test_concurrent_creates_get_unique_ids() {
    let store = Arc::new(MemoryUserStore::new());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = store.clone();
            thread::spawn(move || {
                (0..50)
                    .map(|i| {
                        store
                            .create(new_user(&format!("u{}-{}", t, i), &[Role::Personal], &[GroupId::Group1]))
                            .expect("ID 不应耗尽")
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut all_ids: Vec<_> = handles
        .into_iter()
        .flat_map(|h| h.join().expect("线程不应 panic"))
        .collect();
    all_ids.sort_unstable();
    all_ids.dedup();

    assert_eq!(all_ids.len(), 400);
    assert_eq!(store.len(), 400);
    assert_eq!(all_ids.first(), Some(&1));
    assert_eq!(all_ids.last(), Some(&400));
}
