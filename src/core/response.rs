//! 核心响应处理模块

use serde::Serialize;

/// 纯消息响应体，删除确认和兜底 404 共用
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
