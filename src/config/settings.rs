// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::collections::HashMap;

/// 旧部署使用的 Webhook 地址环境变量
pub const LEGACY_WEBHOOK_VAR: &str = "WebHookTeams";

/// 应用程序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Webhook 配置
    pub webhook: WebhookSettings,
}

/// Webhook配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookSettings {
    /// 聊天 Webhook 地址，不做格式校验
    pub url: String,
}

impl Settings {
    /// 从进程环境变量加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 缺少 Webhook 地址
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// 从给定的变量表加载配置
    ///
    /// 支持 `SNSRELAY__WEBHOOK__URL`，旧变量 `WebHookTeams` 优先级更高
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let legacy_url = vars.get(LEGACY_WEBHOOK_VAR).cloned();

        let builder = Config::builder()
            .add_source(
                Environment::with_prefix("SNSRELAY")
                    .separator("__")
                    .source(Some(vars.into_iter().collect())),
            )
            .set_override_option("webhook.url", legacy_url)?;

        builder.build()?.try_deserialize()
    }
}
