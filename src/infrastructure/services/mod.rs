// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施服务模块
///
/// 提供基于 reqwest 的 Webhook 客户端
pub mod webhook_client_impl;
