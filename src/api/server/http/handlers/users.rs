//! 用户目录接口
//!
//! 每个处理函数先鉴权，再处理路径和请求体的提取结果：
//! 未授权的调用者总是得到 403，与请求体是否合法无关

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Json, Path, State,
    },
    http::StatusCode,
    response::Json as JsonResponse,
};
use serde_json::json;

use crate::api::server::http::{
    error::HttpError,
    middleware::auth::Credential,
    state::AppState,
};
use crate::api::server::permission::OperationType;
use crate::core::{NewUser, User, UserId, UserPatch};
use crate::storage::UserStore;

/// GET /users
pub async fn list<S: UserStore + 'static>(
    State(state): State<AppState<S>>,
    Extension(credential): Extension<Credential>,
) -> Result<JsonResponse<Vec<User>>, HttpError> {
    let service = state.service();
    let grant = service.authorize(credential.as_deref(), OperationType::ListUsers)?;

    Ok(JsonResponse(service.list_users(&grant)?))
}

/// POST /users
pub async fn create<S: UserStore + 'static>(
    State(state): State<AppState<S>>,
    Extension(credential): Extension<Credential>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, JsonResponse<User>), HttpError> {
    let service = state.service();
    let grant = service.authorize(credential.as_deref(), OperationType::CreateUser)?;
    let Json(candidate) = payload?;

    let user = service.create_user(&grant, candidate)?;
    Ok((StatusCode::CREATED, JsonResponse(user)))
}

/// PATCH /users/{id}
pub async fn update<S: UserStore + 'static>(
    State(state): State<AppState<S>>,
    Extension(credential): Extension<Credential>,
    id: Result<Path<UserId>, PathRejection>,
    payload: Result<Json<UserPatch>, JsonRejection>,
) -> Result<JsonResponse<User>, HttpError> {
    let service = state.service();
    let grant = service.authorize(credential.as_deref(), OperationType::UpdateUser)?;
    let Path(id) = id?;
    let Json(patch) = payload?;

    Ok(JsonResponse(service.update_user(&grant, id, patch)?))
}

/// DELETE /users/{id}
pub async fn remove<S: UserStore + 'static>(
    State(state): State<AppState<S>>,
    Extension(credential): Extension<Credential>,
    id: Result<Path<UserId>, PathRejection>,
) -> Result<JsonResponse<serde_json::Value>, HttpError> {
    let service = state.service();
    let grant = service.authorize(credential.as_deref(), OperationType::DeleteUser)?;
    let Path(id) = id?;

    service.delete_user(&grant, id)?;
    Ok(JsonResponse(json!({ "success": true })))
}

/// GET /users/managed/{id}
pub async fn managed<S: UserStore + 'static>(
    State(state): State<AppState<S>>,
    Extension(credential): Extension<Credential>,
    id: Result<Path<UserId>, PathRejection>,
) -> Result<JsonResponse<Vec<User>>, HttpError> {
    let service = state.service();
    let grant = service.authorize(credential.as_deref(), OperationType::ListManagedUsers)?;
    let Path(id) = id?;

    Ok(JsonResponse(service.managed_users(&grant, id)?))
}
