//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// 写操作返回的状态消息，如 `{"status": "Product created!"}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusMessage {
    pub status: String,
}

impl StatusMessage {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}
