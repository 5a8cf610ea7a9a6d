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

//! Decoded response bodies.

use bytes::Bytes;
use futures_util::Stream;
use http::StatusCode;
use http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::error::{Error, ValidationErr};

/// A successful response, decoded by status and content type.
///
/// Exactly one variant is produced per dispatched request:
/// - HTTP 204 yields [`ResponseBody::Empty`] without touching the body
/// - an `application/json` content type yields [`ResponseBody::Json`]
/// - `text/calendar` (iCal feeds) and any other text yield
///   [`ResponseBody::Text`]
/// - `application/octet-stream` (file downloads) yields
///   [`ResponseBody::Stream`] with the body left unconsumed, so large files
///   never have to be buffered in memory
#[derive(Debug)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
    Stream(FileStream),
    Empty,
}

impl ResponseBody {
    pub(crate) async fn decode(resp: reqwest::Response) -> Result<Self, Error> {
        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(ResponseBody::Empty);
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.contains("application/json") {
            let bytes = resp.bytes().await.map_err(Error::Network)?;
            let value = serde_json::from_slice(&bytes).map_err(ValidationErr::JsonDecode)?;
            Ok(ResponseBody::Json(value))
        } else if content_type.contains("text/calendar") {
            Ok(ResponseBody::Text(resp.text().await.map_err(Error::Network)?))
        } else if content_type.contains("application/octet-stream") {
            Ok(ResponseBody::Stream(FileStream { inner: resp }))
        } else {
            Ok(ResponseBody::Text(resp.text().await.map_err(Error::Network)?))
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            ResponseBody::Json(_) => "JSON",
            ResponseBody::Text(_) => "text",
            ResponseBody::Stream(_) => "a binary stream",
            ResponseBody::Empty => "an empty body",
        }
    }

    /// Deserializes the JSON variant into `T`.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, Error> {
        match self {
            ResponseBody::Json(value) => {
                Ok(serde_json::from_value(value).map_err(ValidationErr::JsonDecode)?)
            }
            other => Err(ValidationErr::UnexpectedResponse {
                expected: "JSON",
                got: other.variant_name(),
            }
            .into()),
        }
    }

    /// Returns the text variant.
    pub fn into_text(self) -> Result<String, Error> {
        match self {
            ResponseBody::Text(text) => Ok(text),
            other => Err(ValidationErr::UnexpectedResponse {
                expected: "text",
                got: other.variant_name(),
            }
            .into()),
        }
    }

    /// Returns the binary stream variant.
    pub fn into_stream(self) -> Result<FileStream, Error> {
        match self {
            ResponseBody::Stream(stream) => Ok(stream),
            other => Err(ValidationErr::UnexpectedResponse {
                expected: "a binary stream",
                got: other.variant_name(),
            }
            .into()),
        }
    }
}

/// Handle to an unconsumed binary response body.
///
/// Consumption is deferred to the caller: read it incrementally with
/// [`FileStream::bytes_stream`] or collect it with [`FileStream::bytes`].
#[derive(Debug)]
pub struct FileStream {
    inner: reqwest::Response,
}

impl FileStream {
    /// The value of the `Content-Length` response header, if present.
    pub fn content_length(&self) -> Option<u64> {
        self.inner.content_length()
    }

    /// Streams the body chunk by chunk.
    pub fn bytes_stream(self) -> impl Stream<Item = Result<Bytes, Error>> {
        use futures_util::TryStreamExt;
        self.inner.bytes_stream().map_err(Error::Network)
    }

    /// Buffers the whole body in memory.
    pub async fn bytes(self) -> Result<Bytes, Error> {
        self.inner.bytes().await.map_err(Error::Network)
    }
}
