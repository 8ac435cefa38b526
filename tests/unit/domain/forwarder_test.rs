// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::{json, Value};
use snsrelay::domain::services::forwarder::Forwarder;
use snsrelay::domain::services::webhook_client::{WebhookClient, WebhookResponse};
use snsrelay::utils::errors::ForwardError;
use snsrelay::utils::telemetry::{json_subscriber, DEFAULT_FILTER};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

type Calls = Arc<Mutex<Vec<(String, Vec<u8>)>>>;

/// 记录所有请求的内存客户端
struct RecordingClient {
    calls: Calls,
    response: WebhookResponse,
}

impl RecordingClient {
    fn new(status_code: u16, body: &str) -> (Self, Calls) {
        let calls = Calls::default();
        let client = Self {
            calls: calls.clone(),
            response: WebhookResponse {
                status_code,
                body: body.to_string(),
            },
        };
        (client, calls)
    }
}

#[async_trait]
impl WebhookClient for RecordingClient {
    async fn post(&self, url: &str, body: Vec<u8>) -> Result<WebhookResponse, ForwardError> {
        self.calls.lock().unwrap().push((url.to_string(), body));
        Ok(self.response.clone())
    }
}

fn event(message: &str) -> Value {
    json!({ "Records": [{ "Sns": { "Message": message } }] })
}

#[tokio::test]
async fn test_posts_text_payload_to_configured_url() {
    let (client, calls) = RecordingClient::new(200, "1");
    let forwarder = Forwarder::new("https://hooks.example.com/x", client);

    let report = forwarder.handle(event("Build failed")).await.unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "https://hooks.example.com/x");
    let body: Value = serde_json::from_slice(&calls[0].1).unwrap();
    assert_eq!(body, json!({ "text": "Build failed" }));

    assert_eq!(report.message, "Build failed");
    assert_eq!(report.status_code, 200);
    assert_eq!(report.response, "1");
}

#[tokio::test]
async fn test_non_success_status_is_reported_not_failed() {
    let (client, _calls) = RecordingClient::new(400, "Bad payload");
    let forwarder = Forwarder::new("https://hooks.example.com/x", client);

    let report = forwarder.handle(event("Disk full")).await.unwrap();

    assert_eq!(report.status_code, 400);
    assert_eq!(report.response, "Bad payload");
    assert_eq!(report.message, "Disk full");
}

#[tokio::test]
async fn test_malformed_events_never_reach_the_client() {
    let cases = [
        json!({ "Records": [] }),
        json!({}),
        json!({ "Records": [{}] }),
        json!({ "Records": [{ "Sns": {} }] }),
    ];

    for case in cases {
        let (client, calls) = RecordingClient::new(200, "1");
        let forwarder = Forwarder::new("https://hooks.example.com/x", client);

        let result = forwarder.handle(case).await;

        assert!(matches!(result, Err(ForwardError::MalformedEvent(_))));
        assert!(calls.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_only_first_record_is_forwarded() {
    let (client, calls) = RecordingClient::new(200, "1");
    let forwarder = Forwarder::new("https://hooks.example.com/x", client);

    let report = forwarder
        .handle(json!({
            "Records": [
                { "Sns": { "Message": "first" } },
                { "Sns": { "Message": "second" } }
            ]
        }))
        .await
        .unwrap();

    assert_eq!(report.message, "first");
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_same_event_twice_posts_twice() {
    let (client, calls) = RecordingClient::new(200, "1");
    let forwarder = Forwarder::new("https://hooks.example.com/x", client);

    forwarder.handle(event("Deploy done")).await.unwrap();
    forwarder.handle(event("Deploy done")).await.unwrap();

    assert_eq!(calls.lock().unwrap().len(), 2);
}

/// 写入内存缓冲区的日志输出
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    fn records(&self) -> Vec<Value> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

async fn logged_records(status_code: u16, body: &str, message: &str) -> Vec<Value> {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = json_subscriber(EnvFilter::new(DEFAULT_FILTER), move || writer.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let (client, _calls) = RecordingClient::new(status_code, body);
    let forwarder = Forwarder::new("https://hooks.example.com/x", client);
    forwarder.handle(event(message)).await.unwrap();

    buffer.records()
}

#[tokio::test]
async fn test_logs_single_record_for_success() {
    let records = logged_records(200, "1", "Build failed").await;

    assert_eq!(records.len(), 1, "unexpected log records: {:?}", records);
    assert_eq!(records[0]["message"], "Build failed");
    assert_eq!(records[0]["status_code"], 200);
    assert_eq!(records[0]["response"], "1");
}

#[tokio::test]
async fn test_logs_single_record_for_error_status() {
    let records = logged_records(500, "upstream exploded", "Disk full: \"db-1\"").await;

    assert_eq!(records.len(), 1, "unexpected log records: {:?}", records);
    assert_eq!(records[0]["message"], "Disk full: \"db-1\"");
    assert_eq!(records[0]["status_code"], 500);
    assert_eq!(records[0]["response"], "upstream exploded");
}
