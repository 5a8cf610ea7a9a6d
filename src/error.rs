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

//! Error definitions for Baserow API operations.

use http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// The error type returned by every SDK operation.
///
/// The three variants separate "the server answered with an error"
/// ([`Error::Api`]) from "the server could not be reached"
/// ([`Error::Network`]) and from problems detected before or after the
/// network round-trip ([`Error::Validation`]).
#[derive(Debug, Error)]
pub enum Error {
    /// The server responded with a status outside the 2xx range.
    #[error(transparent)]
    Api(#[from] Box<ApiError>),

    /// The request could not complete at the transport layer (DNS,
    /// connection refused, timeout). No HTTP response was received.
    #[error("network request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// Invalid configuration or an undecodable response.
    #[error(transparent)]
    Validation(#[from] ValidationErr),
}

impl Error {
    /// Returns the structured API error if the server rejected the request.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Validation and decoding errors.
#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("a Baserow API token is required")]
    MissingToken,

    #[error("invalid value for header `{key}`")]
    InvalidHeaderValue {
        key: String,
        #[source]
        source: http::header::InvalidHeaderValue,
    },

    #[error("invalid header name `{key}`")]
    InvalidHeaderName {
        key: String,
        #[source]
        source: http::header::InvalidHeaderName,
    },

    #[error("failed to initialize the HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("failed to serialize request body")]
    JsonEncode(#[source] serde_json::Error),

    #[error("failed to decode response body")]
    JsonDecode(#[source] serde_json::Error),

    /// The server answered with a success status but a body shape the
    /// operation cannot use, e.g. a binary stream where JSON was expected.
    #[error("unexpected response body: expected {expected}, got {got}")]
    UnexpectedResponse {
        expected: &'static str,
        got: &'static str,
    },
}

/// Structured error raised when the Baserow server answers a request with a
/// non-2xx status.
///
/// Carries the numeric HTTP status, the machine-readable error code from the
/// response body (e.g. `ERROR_REQUEST_BODY_VALIDATION`) and the detail
/// payload, which the server sends either as a plain string or as a
/// structured validation object.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
    status: u16,
    code: Option<String>,
    detail: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct RawErrorBody {
    error: Option<String>,
    detail: Option<serde_json::Value>,
}

impl ApiError {
    /// Builds the error from a non-2xx response body. Baserow error bodies
    /// are JSON objects with `error` and `detail` keys; anything else falls
    /// back to the HTTP status reason.
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let reason = status.canonical_reason().unwrap_or("Unknown");

        match serde_json::from_slice::<RawErrorBody>(body) {
            Ok(raw) => {
                let message = format!(
                    "Baserow API error ({}): {}",
                    status.as_u16(),
                    raw.error.as_deref().unwrap_or(reason)
                );
                ApiError {
                    message,
                    status: status.as_u16(),
                    code: raw.error,
                    detail: raw.detail,
                }
            }
            Err(e) => {
                log::warn!(
                    "failed to parse error body for status {}: {e}",
                    status.as_u16()
                );
                ApiError {
                    message: format!("API error: {} {reason}", status.as_u16()),
                    status: status.as_u16(),
                    code: None,
                    detail: None,
                }
            }
        }
    }

    /// Human-readable message combining status and error code.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The HTTP status code of the response.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Machine-readable error identifier from the response body, if present.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Detail payload from the response body, if present.
    pub fn detail(&self) -> Option<&serde_json::Value> {
        self.detail.as_ref()
    }

    /// The detail payload as text, when the server sent it as a string.
    pub fn detail_str(&self) -> Option<&str> {
        self.detail.as_ref().and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_code_and_detail_from_json_body() {
        let body = br#"{"error":"ERROR_REQUEST_BODY_VALIDATION","detail":"name is required"}"#;
        let err = ApiError::from_response(StatusCode::BAD_REQUEST, body);
        assert_eq!(err.status(), 400);
        assert_eq!(err.code(), Some("ERROR_REQUEST_BODY_VALIDATION"));
        assert_eq!(err.detail_str(), Some("name is required"));
        assert_eq!(
            err.message(),
            "Baserow API error (400): ERROR_REQUEST_BODY_VALIDATION"
        );
    }

    #[test]
    fn keeps_structured_detail_payloads() {
        let body = br#"{"error":"ERROR_REQUEST_BODY_VALIDATION","detail":{"name":[{"error":"This field is required.","code":"required"}]}}"#;
        let err = ApiError::from_response(StatusCode::BAD_REQUEST, body);
        assert!(err.detail().unwrap().is_object());
        assert!(err.detail_str().is_none());
    }

    #[test]
    fn falls_back_to_status_reason_on_non_json_body() {
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, b"<html>oops</html>");
        assert_eq!(err.status(), 502);
        assert_eq!(err.code(), None);
        assert_eq!(err.detail(), None);
        assert_eq!(err.message(), "API error: 502 Bad Gateway");
    }

    #[test]
    fn json_body_without_error_key_uses_reason_in_message() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, b"{}");
        assert_eq!(err.message(), "Baserow API error (404): Not Found");
        assert_eq!(err.code(), None);
    }
}
