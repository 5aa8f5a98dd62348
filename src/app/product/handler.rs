//! 产品处理器

use axum::{extract::State, http::StatusCode, response::Json};

use super::{
    dto::{CreateProductRequest, UpdateProductRequest},
    model::ProductView,
};
use crate::app::AppState;
use crate::core::{
    auth::RequireAdmin,
    error::CoreError,
    extract::{JsonPayload, LenientJson, ProductId},
    response::StatusMessage,
};

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductView>>, CoreError> {
    let products = state.product_service.list().await?;
    Ok(Json(products.into_iter().map(ProductView::from).collect()))
}

pub async fn create_product(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    JsonPayload(payload): JsonPayload<CreateProductRequest>,
) -> Result<(StatusCode, Json<StatusMessage>), CoreError> {
    let product = payload.into_new_product()?;
    state.product_service.create(product).await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusMessage::new("Product created!")),
    ))
}

pub async fn show_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<ProductView>, CoreError> {
    let product = state.product_service.get(id).await?;
    Ok(Json(product.into()))
}

pub async fn update_product(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ProductId(id): ProductId,
    LenientJson(payload): LenientJson<UpdateProductRequest>,
) -> Result<Json<StatusMessage>, CoreError> {
    state
        .product_service
        .update(id, payload.into_changes())
        .await?;
    Ok(Json(StatusMessage::new("Product updated!")))
}

pub async fn delete_product(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ProductId(id): ProductId,
) -> Result<Json<StatusMessage>, CoreError> {
    state.product_service.delete(id).await?;
    Ok(Json(StatusMessage::new("Product deleted!")))
}
