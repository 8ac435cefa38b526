// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心逻辑，包括：
/// - 领域模型（models）：SNS 通知事件和 Webhook 负载
/// - 服务（services）：Webhook 客户端接口和转发器
///
/// 领域层不依赖具体的 HTTP 实现。
pub mod models;
pub mod services;
