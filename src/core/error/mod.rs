//! 统一错误处理
//!
//! 各子模块定义各自的错误枚举，`ServiceError` 通过 `#[from]` 汇总，
//! `ServiceResult<T>` 作为服务层的统一返回类型

use thiserror::Error;

pub mod codes;
pub mod directory;
pub mod permission;
pub mod validation;

pub use codes::{ErrorCategory, ErrorCode, ToPublicError};
pub use directory::{DirectoryError, DirectoryResult};
pub use permission::{PermissionError, PermissionResult};
pub use validation::ValidationError;

/// 服务层统一错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Permission(#[from] PermissionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// 统一的结果类型
pub type ServiceResult<T> = Result<T, ServiceError>;

impl ToPublicError for ServiceError {
    fn to_error_code(&self) -> ErrorCode {
        match self {
            ServiceError::Directory(e) => e.to_error_code(),
            ServiceError::Permission(e) => e.to_error_code(),
            ServiceError::Validation(e) => e.to_error_code(),
        }
    }

    fn to_public_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_keeps_inner_message() {
        let err: ServiceError = DirectoryError::UserNotFound(42).into();
        assert_eq!(err.to_string(), "User 42 not found");
        assert_eq!(err.to_error_code(), ErrorCode::ResourceNotFound);

        let err: ServiceError = PermissionError::InsufficientPermissions.into();
        assert_eq!(
            err.to_string(),
            "ERROR: Not allowed to perform action due to insufficient permissions."
        );
        assert_eq!(err.to_error_code().category(), ErrorCategory::Permission);
    }

    #[test]
    fn test_validation_error_public_form() {
        let err: ServiceError = ValidationError::new("name", "must not be empty").into();
        assert_eq!(err.to_error_code(), ErrorCode::InvalidInput);
        assert_eq!(err.to_public_message(), "name: must not be empty");
        assert_eq!(err.to_error_code().category().to_http_status(), 400);
    }
}
