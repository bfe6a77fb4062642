//! HTTP 服务模块
//!
//! 提供基于 HTTP 协议的用户目录服务接口

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;
pub mod state;

pub use error::HttpError;
pub use router::create_router;
pub use server::HttpServer;
pub use state::AppState;
