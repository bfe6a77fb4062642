use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::{ErrorCode, ServiceError, ToPublicError};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Forbidden(String),
    NotFound(String),
    InternalError(String),
}

impl HttpError {
    fn parts(self) -> (ErrorCode, String) {
        match self {
            HttpError::BadRequest(msg) => (ErrorCode::InvalidInput, msg),
            HttpError::Forbidden(msg) => (ErrorCode::PermissionDenied, msg),
            HttpError::NotFound(msg) => (ErrorCode::ResourceNotFound, msg),
            HttpError::InternalError(msg) => (ErrorCode::InternalError, msg),
        }
    }
}

/// HTTP 状态码由错误码类别决定
fn status_of(code: ErrorCode) -> StatusCode {
    StatusCode::from_u16(code.category().to_http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (code, message) = self.parts();
        let status = status_of(code);

        let body = Json(json!({
            "error": message,
            "code": code.as_i32(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        let message = err.to_public_message();
        match err.to_error_code() {
            ErrorCode::InvalidInput => HttpError::BadRequest(message),
            ErrorCode::PermissionDenied => HttpError::Forbidden(message),
            ErrorCode::ResourceNotFound => HttpError::NotFound(message),
            ErrorCode::InternalError => HttpError::InternalError(message),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        HttpError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        HttpError::BadRequest(rejection.body_text())
    }
}
