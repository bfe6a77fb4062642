//! 服务层
//!
//! 鉴权、管理可见性和目录服务，以及可选的 HTTP 接口

pub mod auth;
pub mod directory_service;
#[cfg(feature = "server")]
pub mod http;
pub mod permission;
pub mod validation;
pub mod visibility;

pub use auth::{CredentialExtractor, HeaderCredentialExtractor};
pub use directory_service::DirectoryService;
#[cfg(feature = "server")]
pub use http::HttpServer;
pub use permission::{Grant, OperationType, PermissionChecker, RolePermissionTable};
pub use visibility::managed_users_of;
