//! 请求提取器，把 axum 的默认拒绝转换为 `CoreError`

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::CoreError;

/// JSON 请求体；格式错误或字段类型不符时返回 400 `Invalid data`
#[derive(Debug)]
pub struct JsonPayload<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonPayload(value)),
            Err(rejection) => {
                debug!("rejected request body: {}", rejection.body_text());
                Err(CoreError::invalid_data())
            }
        }
    }
}

/// 宽松的 JSON 请求体；缺失、`null` 或无法解析时取 `T::default()`
#[derive(Debug)]
pub struct LenientJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Option<T>>::from_request(req, state).await {
            Ok(Json(value)) => Ok(LenientJson(value.unwrap_or_default())),
            Err(rejection) => {
                debug!("ignored request body: {}", rejection.body_text());
                Ok(LenientJson(T::default()))
            }
        }
    }
}

/// 路径中的产品 ID；非整数 ID 视为不存在
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i64);

#[axum::async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(ProductId(id)),
            Err(rejection) => {
                debug!("rejected product id: {}", rejection.body_text());
                Err(CoreError::product_not_found())
            }
        }
    }
}
