//! HTTP 服务器
//!
//! 把目录服务挂载到 axum 路由上并监听配置的地址

use axum::Router;
use log::info;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::api::server::http::{router::create_router, state::AppState};
use crate::api::server::DirectoryService;
use crate::config::ServerConfig;
use crate::storage::UserStore;

/// HTTP 服务器
pub struct HttpServer<S: UserStore + 'static> {
    config: ServerConfig,
    state: AppState<S>,
}

impl<S: UserStore + 'static> HttpServer<S> {
    pub fn new(config: ServerConfig, service: Arc<DirectoryService<S>>) -> Self {
        Self {
            config,
            state: AppState::new(service),
        }
    }

    /// 构建路由，测试中可直接驱动
    pub fn router(&self) -> Router {
        create_router(self.state.clone())
    }

    /// 监听并处理请求，直到 `shutdown` 完成
    pub async fn run<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr).await?;
        info!("HTTP server listening on {}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
    }
}
