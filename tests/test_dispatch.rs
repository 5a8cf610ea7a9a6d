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

//! End-to-end tests of the request dispatcher against an in-process server.

use baserow::error::Error;
use baserow::types::{CeleryQueue, ListRowsParams, RequestOptions};
use baserow::{BaserowClient, BaserowClientBuilder, TokenType};
use baserow_common::{CannedResponse, TestContext};

#[tokio::test]
async fn base_url_trailing_slash_is_stripped() {
    let client = BaserowClient::new("https://api.example.com/", "t1").unwrap();
    assert_eq!(client.base_url().as_str(), "https://api.example.com");
}

#[test]
fn missing_token_fails_at_construction() {
    let err = BaserowClient::new("https://api.example.com", "").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn invalid_url_fails_at_construction() {
    let err = BaserowClient::new("", "t1").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn json_success_is_parsed_unchanged() {
    let ctx = TestContext::with_response(CannedResponse::json(
        r#"{"count":2,"next":null,"previous":null,"results":[{"id":1,"order":"1.0"},{"id":2,"order":"2.0"}]}"#,
    ))
    .await;

    let page = ctx
        .client
        .rows()
        .list(1, &ListRowsParams::default())
        .await
        .unwrap();

    assert_eq!(page.count, 2);
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].id, 1);
    assert_eq!(page.results[1].id, 2);

    let req = ctx.server.last_request();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/api/database/rows/table/1/");
}

#[tokio::test]
async fn no_content_yields_empty_result() {
    let ctx = TestContext::with_response(CannedResponse::no_content()).await;

    ctx.client
        .tables()
        .delete(1, &RequestOptions::default())
        .await
        .unwrap();

    let req = ctx.server.last_request();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.path, "/api/database/tables/1/");
}

#[tokio::test]
async fn non_2xx_becomes_api_error_with_code_and_detail() {
    let ctx = TestContext::with_response(
        CannedResponse::json(
            r#"{"error":"ERROR_REQUEST_BODY_VALIDATION","detail":"name is required"}"#,
        )
        .status(400),
    )
    .await;

    let err = ctx
        .client
        .workspaces()
        .create("", &RequestOptions::default())
        .await
        .unwrap_err();

    let api = err.as_api().expect("expected an API error");
    assert_eq!(api.status(), 400);
    assert_eq!(api.code(), Some("ERROR_REQUEST_BODY_VALIDATION"));
    assert_eq!(api.detail_str(), Some("name is required"));
}

#[tokio::test]
async fn error_without_json_body_falls_back_to_status_text() {
    let ctx = TestContext::with_response(
        CannedResponse::with_content_type("text/html", "<html>oops</html>").status(502),
    )
    .await;

    let err = ctx.client.health().full_health_check().await.unwrap_err();
    let api = err.as_api().expect("expected an API error");
    assert_eq!(api.status(), 502);
    assert_eq!(api.code(), None);
}

#[tokio::test]
async fn array_query_parameters_are_repeated_not_joined() {
    let ctx = TestContext::with_response(CannedResponse::no_content()).await;

    ctx.client
        .health()
        .check_celery_queue_size(&[CeleryQueue::Celery, CeleryQueue::Export])
        .await
        .unwrap();

    let req = ctx.server.last_request();
    let pairs = req.query_pairs();
    assert_eq!(
        pairs,
        vec![
            ("queue".to_string(), "celery".to_string()),
            ("queue".to_string(), "export".to_string()),
        ]
    );
}

#[tokio::test]
async fn json_bodies_carry_the_json_content_type() {
    let ctx = TestContext::with_response(CannedResponse::json(
        r#"{"id":1,"name":"w","order":1,"permissions":"ADMIN","users":[],"unread_notifications_count":0}"#,
    ))
    .await;

    ctx.client
        .workspaces()
        .create("w", &RequestOptions::default())
        .await
        .unwrap();

    let req = ctx.server.last_request();
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.json(), serde_json::json!({"name": "w"}));
}

#[tokio::test]
async fn requests_without_body_carry_no_content_type() {
    let ctx = TestContext::with_response(CannedResponse::no_content()).await;

    ctx.client
        .tables()
        .delete(1, &RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(ctx.server.last_request().header("content-type"), None);
}

#[tokio::test]
async fn multipart_bodies_get_a_transport_boundary_not_json() {
    let ctx = TestContext::with_response(CannedResponse::json(
        r#"{
            "url": "http://localhost/media/user_files/x.txt",
            "name": "x_unique.txt",
            "size": 5,
            "mime_type": "text/plain",
            "is_image": false,
            "uploaded_at": "2024-01-01T00:00:00Z",
            "original_name": "x.txt"
        }"#,
    ))
    .await;

    let file = ctx
        .client
        .user_files()
        .upload_file("x.txt", &b"hello"[..])
        .await
        .unwrap();
    assert_eq!(file.original_name, "x.txt");

    let req = ctx.server.last_request();
    let content_type = req.header("content-type").unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
    assert!(content_type.contains("boundary="));
}

#[tokio::test]
async fn authorization_header_uses_the_token_type() {
    let ctx = TestContext::with_response(CannedResponse::json("[]")).await;
    ctx.client.workspaces().list().await.unwrap();
    assert_eq!(
        ctx.server.last_request().header("authorization"),
        Some("Token test-token")
    );

    let jwt_client = BaserowClientBuilder::new(ctx.server.url().parse().unwrap())
        .token("jwt-token")
        .token_type(TokenType::Jwt)
        .build()
        .unwrap();
    jwt_client.workspaces().list().await.unwrap();
    assert_eq!(
        ctx.server.last_request().header("authorization"),
        Some("JWT jwt-token")
    );
}

#[tokio::test]
async fn per_call_headers_win_over_default_headers() {
    let server = baserow_common::MockServer::spawn_one(CannedResponse::json(
        r#"{"id":1,"order":"1.0"}"#,
    ))
    .await;
    let client = BaserowClientBuilder::new(server.url().parse().unwrap())
        .token("t")
        .default_header("ClientSessionId", "default-session")
        .default_header("X-Trace", "trace-1")
        .build()
        .unwrap();

    let options = RequestOptions::builder()
        .client_session_id("call-session")
        .build();
    client
        .rows()
        .create(
            1,
            &serde_json::json!({"field_1": "v"}),
            &Default::default(),
            &options,
        )
        .await
        .unwrap();

    let req = server.last_request();
    assert_eq!(req.header("ClientSessionId"), Some("call-session"));
    assert_eq!(req.header("X-Trace"), Some("trace-1"));
}

#[tokio::test]
async fn session_headers_are_forwarded_verbatim() {
    let ctx = TestContext::with_response(CannedResponse::json(r#"{"id":1,"order":"1.0"}"#)).await;

    let options = RequestOptions::builder()
        .client_session_id("session-abc")
        .client_undo_redo_action_group_id("group-xyz")
        .build();
    ctx.client
        .rows()
        .create(
            7,
            &serde_json::json!({"field_1": 1}),
            &Default::default(),
            &options,
        )
        .await
        .unwrap();

    let req = ctx.server.last_request();
    assert_eq!(req.header("ClientSessionId"), Some("session-abc"));
    assert_eq!(req.header("ClientUndoRedoActionGroupId"), Some("group-xyz"));
}

#[tokio::test]
async fn calendar_responses_come_back_as_text() {
    let feed = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n";
    let ctx = TestContext::with_response(CannedResponse::calendar(feed)).await;

    let body = ctx.client.views().ical_feed("abc123").await.unwrap();
    assert_eq!(body, feed);
    assert_eq!(
        ctx.server.last_request().path,
        "/api/database/views/calendar/abc123/ical.ics"
    );
}

#[tokio::test]
async fn octet_stream_responses_stay_unbuffered_until_read() {
    let payload = b"binary-export-content";
    let ctx = TestContext::with_response(CannedResponse::octet_stream(payload)).await;

    let stream = ctx.client.secure_files().download("signed-data").await.unwrap();
    assert_eq!(stream.content_length(), Some(payload.len() as u64));
    let bytes = stream.bytes().await.unwrap();
    assert_eq!(&bytes[..], payload);
}

#[tokio::test]
async fn unknown_content_types_fall_back_to_text() {
    let ctx =
        TestContext::with_response(CannedResponse::with_content_type("text/plain", "pong")).await;
    let body = ctx.client.views().ical_feed("any").await.unwrap();
    assert_eq!(body, "pong");
}

#[tokio::test]
async fn unreachable_host_yields_a_network_error() {
    // Bind and drop a listener so the port is very likely unused.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = BaserowClient::new(&format!("http://{addr}"), "t1").unwrap();
    let err = client.health().full_health_check().await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
    assert!(err.as_api().is_none());
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let ctx = TestContext::with_response(CannedResponse::json("[]")).await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = ctx.client.clone();
        handles.push(tokio::spawn(async move {
            client.workspaces().list().await.map(|w| w.len())
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), 0);
    }
    assert_eq!(ctx.server.requests().len(), 8);
}
