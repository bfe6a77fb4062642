pub mod error;
pub mod permission;
pub mod types;

// 错误和结果类型
pub use error::{
    DirectoryError, DirectoryResult, PermissionError, PermissionResult, ServiceError,
    ServiceResult, ValidationError,
};

// 核心数据类型
pub use permission::{GroupId, Permission, Role, RoleDefinition};
pub use types::{NewUser, User, UserId, UserPatch};
