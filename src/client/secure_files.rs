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

use http::Method;

use super::{ApiRequest, BaserowClient};
use crate::error::Error;
use crate::response::FileStream;

impl BaserowClient {
    /// Downloads of files served behind signed URLs.
    pub fn secure_files(&self) -> SecureFileOperations<'_> {
        SecureFileOperations { client: self }
    }
}

/// Operations for downloading secure files.
///
/// Deployments with secure file serving enabled hand out signed data blobs
/// instead of direct storage URLs; the download endpoint exchanges the blob
/// for the file content.
#[derive(Clone, Copy, Debug)]
pub struct SecureFileOperations<'a> {
    client: &'a BaserowClient,
}

impl SecureFileOperations<'_> {
    /// Downloads the file identified by a signed data blob. The body is
    /// returned as an unconsumed stream so large files never need to be
    /// buffered in memory.
    pub async fn download(&self, signed_data: &str) -> Result<FileStream, Error> {
        self.client
            .execute(ApiRequest::new(
                Method::GET,
                format!("/api/files/{signed_data}/"),
            ))
            .await?
            .into_stream()
    }
}
