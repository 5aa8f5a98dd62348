//! # 产品服务
//!
//! 单一 REST 资源 Product 的增删改查：
//! - `app`：路由、处理器、业务服务与 Repository
//! - `core`：错误、响应、中间件、提取器与管理员校验
//! - `infrastructure`：PostgreSQL 连接、存储实现与日志
//! - `config`：TOML 配置与环境变量覆盖

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{create_router, AppState};
