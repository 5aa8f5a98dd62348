//! 产品资源

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

use axum::{routing::get, Router};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/products/:id",
            get(handler::show_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
}
