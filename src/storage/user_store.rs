use crate::core::error::DirectoryResult;
use crate::core::types::{NewUser, User, UserId, UserPatch};

/// 用户目录存储接口
///
/// 存储独占持有用户记录，所有读取返回独立副本，写入只能经由本接口。
/// 每个写操作要么完整生效，要么不改变存储
pub trait UserStore: Send + Sync + std::fmt::Debug {
    /// 按插入顺序返回全部用户
    fn find_all(&self) -> Vec<User>;

    /// 查找单个用户，不存在时返回 `None`
    fn find_one(&self, id: UserId) -> Option<User>;

    /// 创建用户并分配新的 ID，ID 空间耗尽时失败
    fn create(&self, candidate: NewUser) -> DirectoryResult<User>;

    /// 部分更新，出现的字段整体替换
    fn update(&self, id: UserId, patch: UserPatch) -> DirectoryResult<User>;

    /// 删除用户，ID 不会被重用
    fn remove(&self, id: UserId) -> DirectoryResult<()>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
