// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::SnsEvent;
use crate::domain::models::payload::WebhookPayload;
use crate::domain::services::webhook_client::WebhookClient;
use crate::utils::errors::ForwardError;
use serde_json::Value;
use tracing::info;

/// 单次转发的结果，与写入日志的字段一致
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    /// 原始消息文本
    pub message: String,
    /// Webhook 返回的 HTTP 状态码
    pub status_code: u16,
    /// Webhook 返回的原始响应体
    pub response: String,
}

/// 通知转发器
///
/// 把 SNS 事件中的第一条消息包装为 `{"text": ...}` 并 POST 到固定的 Webhook 地址。
/// 不重试，非 2xx 状态码只记录日志。
pub struct Forwarder<C: WebhookClient> {
    /// Webhook 地址，启动时从配置读取
    webhook_url: String,
    /// HTTP 客户端
    client: C,
}

impl<C: WebhookClient> Forwarder<C> {
    /// 创建新的转发器
    ///
    /// # 参数
    ///
    /// * `webhook_url` - 目标 Webhook 地址
    /// * `client` - Webhook 客户端
    pub fn new(webhook_url: impl Into<String>, client: C) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            client,
        }
    }

    /// 返回本转发器 POST 的目标地址
    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// 处理一次调用事件
    ///
    /// # 返回值
    ///
    /// * `Ok(DeliveryReport)` - 已收到 Webhook 响应（任意状态码）
    /// * `Err(ForwardError)` - 事件结构错误、编码失败或连接失败
    pub async fn handle(&self, event: Value) -> Result<DeliveryReport, ForwardError> {
        // Validate the whole shape before touching the network
        let event = SnsEvent::from_value(event)?;
        let sns = event.first_message()?;

        let body = WebhookPayload::new(sns.message.as_str()).to_bytes()?;

        let response = self.client.post(&self.webhook_url, body).await?;

        // The only log record of an invocation
        info!(
            message = %sns.message,
            status_code = response.status_code,
            response = %response.body,
            subject = sns.subject.as_deref(),
            topic_arn = sns.topic_arn.as_deref(),
            message_id = sns.message_id.as_deref()
        );

        Ok(DeliveryReport {
            message: sns.message.clone(),
            status_code: response.status_code,
            response: response.body,
        })
    }
}
