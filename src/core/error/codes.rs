//! 对外错误码定义
//!
//! 错误码格式: XXYY
//! - XX: 错误类别 (03=验证, 04=权限, 05=资源, 09=系统)
//! - YY: 具体错误

/// 对外错误码 - 用于客户端响应
///
/// 错误码一旦定义不应随意修改，保证客户端兼容性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // ==================== 验证错误 (03xx) ====================
    /// 无效输入
    InvalidInput = 302,

    // ==================== 权限错误 (04xx) ====================
    /// 权限不足
    PermissionDenied = 400,

    // ==================== 资源错误 (05xx) ====================
    /// 资源未找到
    ResourceNotFound = 500,

    // ==================== 系统错误 (09xx) ====================
    /// 内部服务器错误
    InternalError = 900,
}

impl ErrorCode {
    /// 获取错误码的 i32 值
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// 获取错误类别
    pub fn category(&self) -> ErrorCategory {
        match self.as_i32() {
            300..=399 => ErrorCategory::Validation,
            400..=499 => ErrorCategory::Permission,
            500..=599 => ErrorCategory::Resource,
            _ => ErrorCategory::System,
        }
    }
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Validation,
    Permission,
    Resource,
    System,
}

impl ErrorCategory {
    /// 获取类别的 HTTP 状态码映射
    pub fn to_http_status(&self) -> u16 {
        match self {
            ErrorCategory::Validation => 400,
            ErrorCategory::Permission => 403,
            ErrorCategory::Resource => 404,
            ErrorCategory::System => 500,
        }
    }
}

/// 转换为对外错误的 trait
pub trait ToPublicError {
    fn to_error_code(&self) -> ErrorCode;

    fn to_public_message(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ErrorCode::InvalidInput.as_i32(), 302);
        assert_eq!(ErrorCode::PermissionDenied.as_i32(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.as_i32(), 500);
        assert_eq!(ErrorCode::InternalError.as_i32(), 900);
    }

    #[test]
    fn test_category_http_status() {
        assert_eq!(ErrorCode::InvalidInput.category().to_http_status(), 400);
        assert_eq!(ErrorCode::PermissionDenied.category().to_http_status(), 403);
        assert_eq!(ErrorCode::ResourceNotFound.category().to_http_status(), 404);
        assert_eq!(ErrorCode::InternalError.category().to_http_status(), 500);
    }
}
