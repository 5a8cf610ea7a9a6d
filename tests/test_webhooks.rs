// Baserow Rust SDK for the Baserow no-code database REST API
// Copyright 2025 the baserow-rs contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use baserow::types::{WebhookCreate, WebhookTestCall, WebhookUpdate};
use baserow_common::{CannedResponse, TestContext};

fn webhook_json() -> &'static str {
    r#"{
        "id": 15,
        "url": "https://hooks.example.com/baserow",
        "name": "notify",
        "request_method": "POST",
        "include_all_events": false,
        "events": ["rows.created"],
        "headers": {"X-Secret": "s"},
        "active": true,
        "use_user_field_names": true,
        "failed_triggers": 0,
        "calls": []
    }"#
}

#[tokio::test]
async fn create_posts_the_webhook_config() {
    let ctx = TestContext::with_response(CannedResponse::json(webhook_json())).await;

    let payload = WebhookCreate::builder()
        .url("https://hooks.example.com/baserow")
        .name("notify")
        .events(vec!["rows.created".into()])
        .use_user_field_names(true)
        .build();
    let webhook = ctx.client.webhooks().create(1, &payload).await.unwrap();
    assert_eq!(webhook.events, vec!["rows.created"]);

    let req = ctx.server.last_request();
    assert_eq!(req.path, "/api/database/webhooks/table/1/");
    let body = req.json();
    assert_eq!(body["url"], "https://hooks.example.com/baserow");
    assert!(body.get("request_method").is_none());
}

#[tokio::test]
async fn update_and_delete_address_the_webhook_id() {
    let ctx = TestContext::with_responses(vec![
        CannedResponse::json(webhook_json()),
        CannedResponse::no_content(),
    ])
    .await;

    ctx.client
        .webhooks()
        .update(15, &WebhookUpdate::builder().active(false).build())
        .await
        .unwrap();
    let req = ctx.server.last_request();
    assert_eq!(req.method, "PATCH");
    assert_eq!(req.path, "/api/database/webhooks/15/");
    assert_eq!(req.json(), serde_json::json!({"active": false}));

    ctx.client.webhooks().delete(15).await.unwrap();
    assert_eq!(ctx.server.last_request().method, "DELETE");
}

#[tokio::test]
async fn test_call_returns_the_captured_exchange() {
    let ctx = TestContext::with_response(CannedResponse::json(
        r#"{"request": "POST / HTTP/1.1", "response": "HTTP/1.1 200 OK", "status_code": 200}"#,
    ))
    .await;

    let payload = WebhookTestCall::builder()
        .url("https://hooks.example.com/baserow")
        .event_type("rows.created")
        .build();
    let result = ctx.client.webhooks().test_call(1, &payload).await.unwrap();
    assert_eq!(result.status_code, Some(200));
    assert!(!result.is_unreachable);
    assert_eq!(
        ctx.server.last_request().path,
        "/api/database/webhooks/table/1/test-call/"
    );
}
