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

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::response::Response;
use bytes::Bytes;
use tokio::net::TcpListener;

/// One request as the server saw it.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl RecordedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The raw query string split into `key=value` pairs, in wire order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .as_deref()
            .unwrap_or("")
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((k, v)) => (k.to_string(), v.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect()
    }

    /// The request body parsed as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

/// A response the mock server plays back.
#[derive(Clone, Debug)]
pub struct CannedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl CannedResponse {
    /// 200 with an `application/json` body.
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: Some("application/json".into()),
            body: Bytes::copy_from_slice(body.as_bytes()),
        }
    }

    /// 204 with no body.
    pub fn no_content() -> Self {
        Self {
            status: 204,
            content_type: None,
            body: Bytes::new(),
        }
    }

    /// 200 with a `text/calendar` body.
    pub fn calendar(body: &str) -> Self {
        Self {
            status: 200,
            content_type: Some("text/calendar".into()),
            body: Bytes::copy_from_slice(body.as_bytes()),
        }
    }

    /// 200 with an `application/octet-stream` body.
    pub fn octet_stream(body: &[u8]) -> Self {
        Self {
            status: 200,
            content_type: Some("application/octet-stream".into()),
            body: Bytes::copy_from_slice(body),
        }
    }

    /// 200 with an arbitrary content type.
    pub fn with_content_type(content_type: &str, body: &str) -> Self {
        Self {
            status: 200,
            content_type: Some(content_type.into()),
            body: Bytes::copy_from_slice(body.as_bytes()),
        }
    }

    /// Override the status code.
    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}

#[derive(Debug, Default)]
struct ServerState {
    responses: VecDeque<CannedResponse>,
    requests: Vec<RecordedRequest>,
}

type SharedState = Arc<Mutex<ServerState>>;

/// An in-process HTTP server bound to an ephemeral localhost port. Every
/// request is recorded; responses are played back in the order given, the
/// last one repeating indefinitely.
#[derive(Clone, Debug)]
pub struct MockServer {
    addr: SocketAddr,
    state: SharedState,
}

impl MockServer {
    pub async fn spawn(responses: Vec<CannedResponse>) -> Self {
        let state: SharedState = Arc::new(Mutex::new(ServerState {
            responses: responses.into(),
            requests: Vec::new(),
        }));

        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&state));
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock server");
        let addr = listener.local_addr().expect("mock server has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server died");
        });

        Self { addr, state }
    }

    pub async fn spawn_one(response: CannedResponse) -> Self {
        Self::spawn(vec![response]).await
    }

    /// The base URL of the server, e.g. `http://127.0.0.1:49581`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// The most recent request. Panics when none arrived.
    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .last()
            .cloned()
            .expect("mock server received no request")
    }
}

async fn handle(State(state): State<SharedState>, req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();

    let recorded = RecordedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        headers: parts
            .headers
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    v.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect(),
        body: bytes,
    };

    let canned = {
        let mut state = state.lock().unwrap();
        state.requests.push(recorded);
        if state.responses.len() > 1 {
            state.responses.pop_front().unwrap()
        } else {
            state
                .responses
                .front()
                .cloned()
                .unwrap_or_else(|| CannedResponse::json("{}"))
        }
    };

    let mut builder = Response::builder().status(canned.status);
    if let Some(content_type) = &canned.content_type {
        builder = builder.header("content-type", content_type);
    }
    builder
        .body(Body::from(canned.body))
        .expect("failed to build canned response")
}
