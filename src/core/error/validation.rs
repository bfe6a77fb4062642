//! 输入验证错误类型

use thiserror::Error;

use crate::core::error::codes::{ErrorCode, ToPublicError};

/// 输入验证错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 取按字段名排序后的第一个失败字段，保证同一载荷的报错稳定
impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        match fields.into_iter().next() {
            Some((field, field_errors)) => {
                let message = field_errors
                    .first()
                    .map(|e| e.message.clone().unwrap_or_else(|| e.code.clone()).into_owned())
                    .unwrap_or_else(|| "is invalid".to_string());
                ValidationError::new(field.to_string(), message)
            }
            None => ValidationError::new("payload", errors.to_string()),
        }
    }
}

impl ToPublicError for ValidationError {
    fn to_error_code(&self) -> ErrorCode {
        ErrorCode::InvalidInput
    }

    fn to_public_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn test_from_validation_errors_uses_message() {
        let mut errors = validator::ValidationErrors::new();
        let mut err = validator::ValidationError::new("length");
        err.message = Some(Cow::Borrowed("must contain at least 1 elements"));
        errors.add("roles", err);

        let converted = ValidationError::from(errors);
        assert_eq!(converted.field, "roles");
        assert_eq!(converted.message, "must contain at least 1 elements");
    }

    #[test]
    fn test_from_validation_errors_is_deterministic() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("roles", validator::ValidationError::new("length"));
        errors.add("groups", validator::ValidationError::new("length"));

        let converted = ValidationError::from(errors);
        assert_eq!(converted.field, "groups");
        assert_eq!(converted.message, "length");
    }
}
