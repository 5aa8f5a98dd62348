//! 应用层：路由与共享状态

pub mod product;

use axum::{
    extract::{FromRef, State},
    middleware,
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::core::{
    auth::SharedAdminPolicy, error::CoreError, middleware::request_logging_middleware,
    response::StatusMessage,
};
use product::{repository::ProductRepository, service::ProductService};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    pub admin_policy: SharedAdminPolicy,
}

impl AppState {
    pub fn new(repository: Arc<dyn ProductRepository>, admin_policy: SharedAdminPolicy) -> Self {
        Self {
            product_service: ProductService::new(repository),
            admin_policy,
        }
    }
}

impl FromRef<AppState> for SharedAdminPolicy {
    fn from_ref(state: &AppState) -> Self {
        state.admin_policy.clone()
    }
}

async fn health_check(State(state): State<AppState>) -> Result<Json<StatusMessage>, CoreError> {
    state.product_service.health().await?;
    Ok(Json(StatusMessage::new("ok")))
}

/// 组装全部路由与请求日志中间件
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(product::routes())
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
