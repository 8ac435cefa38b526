// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::webhook_client::{WebhookClient, WebhookResponse};
use crate::utils::errors::ForwardError;
use async_trait::async_trait;

/// 基于 reqwest 的 Webhook 客户端
///
/// 客户端在进程内复用，连接池跨调用共享
#[derive(Debug, Clone)]
pub struct HttpWebhookClient {
    /// HTTP 客户端
    client: reqwest::Client,
}

impl HttpWebhookClient {
    /// 创建新的 Webhook 客户端
    ///
    /// 不设置超时和默认请求头，调用时长由宿主环境限制
    pub fn new() -> Result<Self, ForwardError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl WebhookClient for HttpWebhookClient {
    async fn post(&self, url: &str, body: Vec<u8>) -> Result<WebhookResponse, ForwardError> {
        let response = self.client.post(url).body(body).send().await?;

        let status_code = response.status().as_u16();
        let bytes = response.bytes().await?;

        Ok(WebhookResponse {
            status_code,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
