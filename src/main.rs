// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use snsrelay::config::settings::Settings;
use snsrelay::domain::services::forwarder::Forwarder;
use snsrelay::infrastructure::services::webhook_client_impl::HttpWebhookClient;
use snsrelay::utils::telemetry;
use std::sync::Arc;
use tracing::info;

/// 主函数
///
/// 初始化日志和配置后，把每次 Lambda 调用交给转发器处理
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();

    // 2. Load configuration, a missing webhook URL aborts startup
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Build the forwarder once and share it across invocations
    let client = HttpWebhookClient::new()?;
    let forwarder = Arc::new(Forwarder::new(settings.webhook.url, client));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let forwarder = forwarder.clone();
        async move {
            forwarder.handle(event.payload).await?;
            Ok::<(), lambda_runtime::Error>(())
        }
    }))
    .await
    .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}
