//! 权限错误类型
//!
//! 鉴权失败只有一个对外类别：无论是凭证无法解析、调用者不存在，
//! 还是权限不足，都返回同一条消息，调用方无法区分具体原因

use thiserror::Error;

use crate::core::error::codes::{ErrorCode, ToPublicError};

/// 权限操作结果类型别名
pub type PermissionResult<T> = Result<T, PermissionError>;

/// 权限相关错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    #[error("ERROR: Not allowed to perform action due to insufficient permissions.")]
    InsufficientPermissions,
}

impl ToPublicError for PermissionError {
    fn to_error_code(&self) -> ErrorCode {
        ErrorCode::PermissionDenied
    }

    fn to_public_message(&self) -> String {
        self.to_string()
    }
}
