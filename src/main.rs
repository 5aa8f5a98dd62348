use anyhow::Context;
use product_service::{
    app::product::repository::{InMemoryProductRepository, ProductRepository},
    config::{self, StorageBackend},
    core::auth::policy_for,
    create_router,
    infrastructure::{database::DatabaseManager, logger::Logger, product_store::PgProductRepository},
    AppState,
};
use std::{sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config().context("加载配置失败")?;
    let _log_guard = Logger::init(&config.logging)?;

    info!("Starting product service...");

    let repository: Arc<dyn ProductRepository> = match config.database.backend {
        StorageBackend::Postgres => {
            let db = DatabaseManager::new(&config.database)
                .await
                .context("连接数据库失败")?;
            if config.database.create_schema {
                db.ensure_schema().await.context("创建数据表失败")?;
            }
            Arc::new(PgProductRepository::new(db.get_pool().clone()))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage, data is lost on shutdown");
            Arc::new(InMemoryProductRepository::new())
        }
    };

    let state = AppState::new(repository, policy_for(config.auth.mode));

    let app = create_router(state).layer(
        ServiceBuilder::new()
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.timeout_seconds,
            ))),
    );

    let listener = TcpListener::bind(config.listen_addr()).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Product service running on http://{}", addr);
    info!("   GET    /health           - Health check");
    info!("   GET    /products         - List products");
    info!("   POST   /products         - Create product (admin)");
    info!("   GET    /products/:id     - Get product by ID");
    info!("   PUT    /products/:id     - Update product (admin)");
    info!("   DELETE /products/:id     - Delete product (admin)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Product service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
