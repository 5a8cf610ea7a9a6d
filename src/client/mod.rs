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

//! Baserow client and the request dispatcher every operation routes through.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Error, ValidationErr};
use crate::header_constants::{AUTHORIZATION, CONTENT_TYPE};
use crate::http::BaseUrl;
use crate::multimap_ext::Multimap;
use crate::response::ResponseBody;

mod admin;
mod fields;
mod health;
mod jobs;
mod rows;
mod secure_files;
mod tables;
mod user_files;
mod views;
mod webhooks;
mod workspaces;

pub use admin::AdminOperations;
pub use fields::DatabaseFieldOperations;
pub use health::HealthOperations;
pub use jobs::JobOperations;
pub use rows::DatabaseRowOperations;
pub use secure_files::SecureFileOperations;
pub use tables::DatabaseTableOperations;
pub use user_files::UserFileOperations;
pub use views::DatabaseViewOperations;
pub use webhooks::DatabaseWebhookOperations;
pub use workspaces::WorkspaceOperations;

/// The kind of token placed in the `Authorization` header.
///
/// Database tokens (the default) authorize row-level access; JWT tokens are
/// the short-lived user tokens the web frontend uses and are required for
/// most non-row endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenType {
    Jwt,
    #[default]
    Token,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Jwt => f.write_str("JWT"),
            TokenType::Token => f.write_str("Token"),
        }
    }
}

/// Client builder manufactures a [`BaserowClient`] using given parameters.
#[derive(Debug)]
pub struct BaserowClientBuilder {
    base_url: BaseUrl,
    token: Option<String>,
    token_type: TokenType,
    default_headers: Vec<(String, String)>,
    app_info: Option<(String, String)>,
}

impl BaserowClientBuilder {
    /// Creates a builder given the base URL of a Baserow deployment.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            token: None,
            token_type: TokenType::default(),
            default_headers: Vec::new(),
            app_info: None,
        }
    }

    /// Set the API token. Required.
    pub fn token<S: Into<String>>(mut self, token: S) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the token type placed in front of the token in the
    /// `Authorization` header. Defaults to [`TokenType::Token`].
    pub fn token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Add a header sent with every request. Per-call extra headers win over
    /// these on key collision.
    pub fn default_header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }

    /// Set the app info as an `(app_name, app_version)` pair. This will show
    /// up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Build the client. Fails before any network activity when the token is
    /// missing or empty.
    pub fn build(self) -> Result<BaserowClient, Error> {
        let token = match self.token {
            Some(t) if !t.is_empty() => t,
            _ => return Err(ValidationErr::MissingToken.into()),
        };

        let mut user_agent = String::from("Baserow (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") baserow-rs/"
            + env!("CARGO_PKG_VERSION");
        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }

        let http_client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(ValidationErr::HttpClient)?;

        Ok(BaserowClient {
            http_client,
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                token,
                token_type: self.token_type,
                default_headers: self.default_headers,
            }),
        })
    }
}

/// Baserow API client.
///
/// Holds the immutable configuration (base URL, token, default headers) and
/// the HTTP connection pool. Cloning is cheap and clones share both, so one
/// client can serve arbitrarily many concurrent tasks; nothing is mutated
/// after construction.
#[derive(Clone, Debug)]
pub struct BaserowClient {
    http_client: reqwest::Client,
    shared: Arc<SharedClientItems>,
}

#[derive(Debug)]
struct SharedClientItems {
    base_url: BaseUrl,
    token: String,
    token_type: TokenType,
    default_headers: Vec<(String, String)>,
}

impl BaserowClient {
    /// Returns a client for the given deployment URL and database token.
    ///
    /// # Examples
    ///
    /// ```
    /// use baserow::BaserowClient;
    ///
    /// let client = BaserowClient::new("https://api.baserow.io", "my-token").unwrap();
    /// assert_eq!(client.base_url().as_str(), "https://api.baserow.io");
    /// ```
    pub fn new(url: &str, token: &str) -> Result<Self, Error> {
        BaserowClientBuilder::new(BaseUrl::from_str(url)?)
            .token(token)
            .build()
    }

    /// The normalized base URL this client sends requests to.
    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    /// Dispatches a request: builds the URL, attaches auth and headers,
    /// serializes the body, performs the HTTP round-trip and decodes the
    /// result. Every operation in this crate funnels through here; there is
    /// no retry, timeout or recovery logic by design.
    pub(crate) async fn execute(&self, req: ApiRequest) -> Result<ResponseBody, Error> {
        let url = self.shared.base_url.build_url(&req.path, &req.query_params);

        // Later insertions win on collision: auth first, then configured
        // defaults, then per-call headers, then the JSON content type.
        let mut headers = HeaderMap::new();
        insert_header(
            &mut headers,
            AUTHORIZATION,
            &format!("{} {}", self.shared.token_type, self.shared.token),
        )?;
        for (key, value) in &self.shared.default_headers {
            insert_header(&mut headers, key, value)?;
        }
        for (key, values) in req.headers.iter_all() {
            for value in values {
                insert_header(&mut headers, key, value)?;
            }
        }

        let mut builder = self.http_client.request(req.method, url);
        match req.body {
            Some(RequestBody::Json(value)) => {
                insert_header(&mut headers, CONTENT_TYPE, "application/json")?;
                let body = serde_json::to_string(&value).map_err(ValidationErr::JsonEncode)?;
                builder = builder.body(body);
            }
            // The transport owns the content type here: it must be free to
            // set the multipart boundary.
            Some(RequestBody::Multipart(form)) => builder = builder.multipart(form),
            None => {}
        }

        let resp = builder.headers(headers).send().await.map_err(Error::Network)?;

        let status: StatusCode = resp.status();
        if !status.is_success() {
            let body = resp.bytes().await.map_err(Error::Network)?;
            return Err(Box::new(ApiError::from_response(status, &body)).into());
        }

        ResponseBody::decode(resp).await
    }

    /// Dispatches and deserializes a JSON response.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, req: ApiRequest) -> Result<T, Error> {
        self.execute(req).await?.into_json()
    }

    /// Dispatches and discards any success body. Used for delete-style calls
    /// where 204 and 200-with-body are equally fine.
    pub(crate) async fn send_unit(&self, req: ApiRequest) -> Result<(), Error> {
        self.execute(req).await.map(drop)
    }
}

fn insert_header(headers: &mut HeaderMap, key: &str, value: &str) -> Result<(), ValidationErr> {
    let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
        ValidationErr::InvalidHeaderName {
            key: key.to_string(),
            source: e,
        }
    })?;
    let value = HeaderValue::from_str(value).map_err(|e| ValidationErr::InvalidHeaderValue {
        key: key.to_string(),
        source: e,
    })?;
    headers.insert(name, value);
    Ok(())
}

/// A single outbound request: method, absolute-from-root path, query
/// parameters, extra headers and an optional body. Constructed fresh per
/// call by the operation groups and consumed by
/// [`BaserowClient::execute`].
#[derive(Debug)]
pub(crate) struct ApiRequest {
    method: Method,
    path: String,
    query_params: Multimap,
    headers: Multimap,
    body: Option<RequestBody>,
}

/// Request payload: a JSON document, or a multipart form for file uploads.
#[derive(Debug)]
pub(crate) enum RequestBody {
    Json(serde_json::Value),
    Multipart(reqwest::multipart::Form),
}

impl ApiRequest {
    pub(crate) fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query_params: Multimap::new(),
            headers: Multimap::new(),
            body: None,
        }
    }

    pub(crate) fn query_params(mut self, query_params: Multimap) -> Self {
        self.query_params = query_params;
        self
    }

    pub(crate) fn headers(mut self, headers: Multimap) -> Self {
        self.headers = headers;
        self
    }

    pub(crate) fn body_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, Error> {
        let value = serde_json::to_value(body).map_err(ValidationErr::JsonEncode)?;
        self.body = Some(RequestBody::Json(value));
        Ok(self)
    }

    pub(crate) fn body_multipart(mut self, form: reqwest::multipart::Form) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }
}
