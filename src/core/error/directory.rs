//! 目录存储错误类型

use thiserror::Error;

use crate::core::error::codes::{ErrorCode, ToPublicError};
use crate::core::types::UserId;

/// 目录操作结果类型别名
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// 目录存储相关错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("User {0} not found")]
    UserNotFound(UserId),

    #[error("User id space exhausted")]
    IdsExhausted,
}

impl ToPublicError for DirectoryError {
    fn to_error_code(&self) -> ErrorCode {
        match self {
            DirectoryError::UserNotFound(_) => ErrorCode::ResourceNotFound,
            DirectoryError::IdsExhausted => ErrorCode::InternalError,
        }
    }

    fn to_public_message(&self) -> String {
        self.to_string()
    }
}
