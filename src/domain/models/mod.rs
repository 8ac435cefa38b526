// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 通知（notification）：宿主环境投递的 SNS 事件
/// - 负载（payload）：发往聊天 Webhook 的 JSON 消息
pub mod notification;
pub mod payload;
