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

use bytes::Bytes;
use http::Method;
use reqwest::multipart::{Form, Part};

use super::{ApiRequest, BaserowClient};
use crate::error::Error;
use crate::types::UserFile;

impl BaserowClient {
    /// User file uploads, referenced from file fields.
    pub fn user_files(&self) -> UserFileOperations<'_> {
        UserFileOperations { client: self }
    }
}

/// Operations for uploading user files.
#[derive(Clone, Copy, Debug)]
pub struct UserFileOperations<'a> {
    client: &'a BaserowClient,
}

impl UserFileOperations<'_> {
    /// Uploads a file as a multipart form. The content type of the upload is
    /// chosen by the transport; the returned metadata carries the generated
    /// unique name to reference from file field values.
    pub async fn upload_file(
        &self,
        file_name: &str,
        content: impl Into<Bytes>,
    ) -> Result<UserFile, Error> {
        let part = Part::stream(reqwest::Body::from(content.into()))
            .file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        self.client
            .send_json(
                ApiRequest::new(Method::POST, "/api/user-files/upload-file/")
                    .body_multipart(form),
            )
            .await
    }

    /// Asks the server to fetch and store a file from a URL.
    pub async fn upload_via_url(&self, url: &str) -> Result<UserFile, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::POST, "/api/user-files/upload-via-url/")
                    .body_json(&serde_json::json!({ "url": url }))?,
            )
            .await
    }
}
