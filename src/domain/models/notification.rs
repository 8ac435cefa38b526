// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::ForwardError;
use serde::Deserialize;
use serde_json::Value;

/// SNS 调用事件
///
/// 宿主环境投递的事件结构：`{ "Records": [ { "Sns": { "Message": "..." } } ] }`。
/// 只读取第一条记录，其余字段和记录都被忽略。
#[derive(Debug, Clone, Deserialize)]
pub struct SnsEvent {
    #[serde(rename = "Records")]
    pub records: Vec<SnsEventRecord>,
}

/// 单条事件记录
#[derive(Debug, Clone, Deserialize)]
pub struct SnsEventRecord {
    #[serde(rename = "Sns")]
    pub sns: SnsMessage,
}

/// SNS 消息体
#[derive(Debug, Clone, Deserialize)]
pub struct SnsMessage {
    /// 转发给 Webhook 的文本
    #[serde(rename = "Message")]
    pub message: String,
    /// 以下字段仅作为日志上下文
    #[serde(rename = "Subject", default)]
    pub subject: Option<String>,
    #[serde(rename = "TopicArn", default)]
    pub topic_arn: Option<String>,
    #[serde(rename = "MessageId", default)]
    pub message_id: Option<String>,
}

impl SnsEvent {
    /// 从原始 JSON 解析事件
    ///
    /// # 返回值
    ///
    /// * `Ok(SnsEvent)` - 结构完整
    /// * `Err(ForwardError::MalformedEvent)` - 缺少 `Records`、`Sns` 或 `Message`，或类型不符
    pub fn from_value(value: Value) -> Result<Self, ForwardError> {
        serde_json::from_value(value).map_err(|e| ForwardError::MalformedEvent(e.to_string()))
    }

    /// 返回第一条记录的 SNS 消息
    pub fn first_message(&self) -> Result<&SnsMessage, ForwardError> {
        self.records
            .first()
            .map(|record| &record.sns)
            .ok_or_else(|| ForwardError::MalformedEvent("Records is empty".to_string()))
    }
}
