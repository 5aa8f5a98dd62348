//! 基础设施层：数据库连接、存储实现、日志

pub mod database;
pub mod logger;
pub mod product_store;
