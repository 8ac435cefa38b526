// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// Webhook 负载
///
/// 聊天 Webhook 接受的单字段消息 `{"text": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    pub text: String,
}

impl WebhookPayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// 序列化为 UTF-8 JSON 字节
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
