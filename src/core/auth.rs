//! 管理员权限校验
//!
//! 认证服务不在本服务内实现，这里只定义注入点。

use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, HeaderMap},
};
use std::sync::Arc;
use tracing::warn;

use super::error::CoreError;
use crate::config::AuthMode;

/// 管理员能力校验
#[async_trait]
pub trait AdminPolicy: Send + Sync {
    async fn is_admin(&self, headers: &HeaderMap) -> bool;
}

pub type SharedAdminPolicy = Arc<dyn AdminPolicy>;

/// 占位实现：所有调用者都是管理员
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

#[async_trait]
impl AdminPolicy for AllowAll {
    async fn is_admin(&self, _headers: &HeaderMap) -> bool {
        true
    }
}

/// 只读模式：拒绝所有写操作
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

#[async_trait]
impl AdminPolicy for DenyAll {
    async fn is_admin(&self, _headers: &HeaderMap) -> bool {
        false
    }
}

pub fn policy_for(mode: AuthMode) -> SharedAdminPolicy {
    match mode {
        AuthMode::AllowAll => Arc::new(AllowAll),
        AuthMode::ReadOnly => Arc::new(DenyAll),
    }
}

/// 写操作前置提取器，非管理员直接返回 403
///
/// 放在请求体提取器之前，保证权限校验先于请求体解析。
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

#[axum::async_trait]
impl<S> FromRequestParts<S> for RequireAdmin
where
    SharedAdminPolicy: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let policy = SharedAdminPolicy::from_ref(state);

        if policy.is_admin(&parts.headers).await {
            Ok(RequireAdmin)
        } else {
            warn!("{} {} rejected: caller is not admin", parts.method, parts.uri);
            Err(CoreError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_policy_for_mode() {
        let headers = HeaderMap::new();
        assert!(policy_for(AuthMode::AllowAll).is_admin(&headers).await);
        assert!(!policy_for(AuthMode::ReadOnly).is_admin(&headers).await);
    }
}
