//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
}

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Access denied")]
    Forbidden,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    ServiceUnavailable(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CoreError {
    pub fn invalid_data() -> Self {
        CoreError::BadRequest("Invalid data".to_string())
    }

    pub fn product_not_found() -> Self {
        CoreError::NotFound("Product not found".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::Forbidden => StatusCode::FORBIDDEN,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            CoreError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            CoreError::Repository(e) => {
                error!("Repository error: {}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(CoreError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(CoreError::invalid_data().status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(CoreError::product_not_found().status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            CoreError::from(RepositoryError::from(sqlx::Error::PoolTimedOut)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(CoreError::Forbidden.to_string(), "Access denied");
        assert_eq!(CoreError::invalid_data().to_string(), "Invalid data");
        assert_eq!(CoreError::product_not_found().to_string(), "Product not found");
    }

    #[tokio::test]
    async fn test_repository_error_hides_details() {
        let response =
            CoreError::from(RepositoryError::from(sqlx::Error::PoolTimedOut)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Internal server error");
    }
}
