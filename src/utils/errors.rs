// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 转发错误类型
///
/// 所有变体都会让本次调用失败，由宿主环境负责重试
#[derive(Error, Debug)]
pub enum ForwardError {
    /// 事件结构不符合 `Records[0].Sns.Message`
    #[error("malformed event: {0}")]
    MalformedEvent(String),

    #[error("failed to encode webhook payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 连接或传输失败；非 2xx 状态码不属于此类
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
