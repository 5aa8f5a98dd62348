//! 核心层：错误、响应、中间件、提取器与权限校验

pub mod auth;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
