// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::ForwardError;
use async_trait::async_trait;

/// Webhook 响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    /// HTTP 状态码
    pub status_code: u16,
    /// 原始响应体（按 UTF-8 宽松解码）
    pub body: String,
}

/// Webhook客户端特质
///
/// 定义向 Webhook 发送原始字节的核心逻辑
#[async_trait]
pub trait WebhookClient: Send + Sync {
    /// 发送 POST 请求
    ///
    /// # 参数
    ///
    /// * `url` - 目标地址
    /// * `body` - 请求体
    ///
    /// # 返回值
    ///
    /// * `Ok(WebhookResponse)` - 收到响应，状态码可以是任意值
    /// * `Err(ForwardError::Transport)` - 连接失败
    async fn post(&self, url: &str, body: Vec<u8>) -> Result<WebhookResponse, ForwardError>;
}
