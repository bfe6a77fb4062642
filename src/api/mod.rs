pub mod server;

use crate::config::Config;

#[cfg(feature = "server")]
pub async fn start_service(config_path: String) -> std::io::Result<()> {
    use crate::api::server::{DirectoryService, HttpServer};
    use log::info;
    use std::sync::Arc;

    let config = load_config(&config_path);
    if let Err(e) = crate::utils::logging::init(&config.log) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    info!("Configuration loaded: {:?}", config);

    let service = Arc::new(DirectoryService::from_config(&config));
    let server = HttpServer::new(config.server.clone(), service);

    println!("Starting HTTP server on {}", config.server.bind_addr());
    let result = server.run(shutdown_signal()).await;

    info!("User directory service stopped");
    crate::utils::logging::shutdown();
    result
}

/// 加载配置，失败时回退到默认配置
pub fn load_config(config_path: &str) -> Config {
    match Config::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Failed to load config from '{}': {}, using default config",
                config_path, e
            );
            Config::default()
        }
    }
}

#[cfg(feature = "server")]
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    println!("Received shutdown signal");
}
