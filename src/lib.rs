// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含通知事件模型、Webhook 负载和转发服务
pub mod domain;

/// 基础设施模块
///
/// 提供外部服务集成，目前为 Webhook HTTP 客户端
pub mod infrastructure;

/// 工具模块
///
/// 提供错误类型和日志初始化
pub mod utils;
