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

use baserow::types::CeleryQueue;
use baserow_common::{CannedResponse, TestContext};

#[tokio::test]
async fn full_health_check_parses_individual_checks() {
    let ctx = TestContext::with_response(CannedResponse::json(
        r#"{
            "passing": true,
            "checks": {
                "DatabaseBackend": "working",
                "EmailBackend": "working"
            },
            "celery_queue_size": 0,
            "celery_export_queue_size": 2
        }"#,
    ))
    .await;

    let health = ctx.client.health().full_health_check().await.unwrap();
    assert!(health.passing);
    assert_eq!(health.checks["DatabaseBackend"], "working");
    assert_eq!(health.celery_export_queue_size, 2);
    assert_eq!(ctx.server.last_request().path, "/api/_health/full/");
}

#[tokio::test]
async fn email_test_posts_the_target_address() {
    let ctx = TestContext::with_response(CannedResponse::json(
        r#"{"succeeded": false, "error_type": "SMTPConnectError", "error": "connection refused"}"#,
    ))
    .await;

    let result = ctx
        .client
        .health()
        .test_email("ops@example.com")
        .await
        .unwrap();
    assert!(!result.succeeded);
    assert_eq!(result.error_type.as_deref(), Some("SMTPConnectError"));

    let req = ctx.server.last_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api/_health/email/");
    assert_eq!(req.json(), serde_json::json!({"target_email": "ops@example.com"}));
}

#[tokio::test]
async fn celery_queue_check_repeats_the_queue_parameter() {
    let ctx = TestContext::with_response(CannedResponse::no_content()).await;

    ctx.client
        .health()
        .check_celery_queue_size(&[CeleryQueue::Celery, CeleryQueue::Export])
        .await
        .unwrap();

    let req = ctx.server.last_request();
    assert_eq!(req.path, "/api/_health/celery-queue/");
    assert_eq!(req.query.as_deref(), Some("queue=celery&queue=export"));
}

#[tokio::test]
async fn overloaded_queues_surface_as_api_error() {
    let ctx = TestContext::with_response(
        CannedResponse::json(r#"{"error":"ERROR_CELERY_QUEUE_TOO_LARGE","detail":""}"#).status(503),
    )
    .await;

    let err = ctx
        .client
        .health()
        .check_celery_queue_size(&[CeleryQueue::Celery])
        .await
        .unwrap_err();
    let api = err.as_api().unwrap();
    assert_eq!(api.status(), 503);
    assert_eq!(api.code(), Some("ERROR_CELERY_QUEUE_TOO_LARGE"));
}
