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
use crate::error::{Error, ValidationErr};
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::types::JobWithPayload;

impl BaserowClient {
    /// Asynchronous jobs started by other operations.
    pub fn jobs(&self) -> JobOperations<'_> {
        JobOperations { client: self }
    }
}

/// Operations for polling asynchronous jobs.
///
/// Endpoints such as table duplication or export return a job id; these
/// methods fetch the job's progress until it reaches a terminal state.
#[derive(Clone, Copy, Debug)]
pub struct JobOperations<'a> {
    client: &'a BaserowClient,
}

impl JobOperations<'_> {
    /// Lists the unfinished and recently finished jobs of the authorized
    /// user, optionally restricted to job ids.
    pub async fn list(&self, job_ids: &[i64]) -> Result<Vec<JobWithPayload>, Error> {
        let mut query = Multimap::new();
        if !job_ids.is_empty() {
            let ids: Vec<String> = job_ids.iter().map(|id| id.to_string()).collect();
            query.add("job_ids", ids.join(","));
        }
        let value: serde_json::Value = self
            .client
            .send_json(ApiRequest::new(Method::GET, "/api/jobs/").query_params(query))
            .await?;
        // The endpoint wraps the list in a `jobs` key.
        serde_json::from_value(value.get("jobs").cloned().unwrap_or(value))
            .map_err(ValidationErr::JsonDecode)
            .map_err(Into::into)
    }

    /// Fetches a single job by id.
    pub async fn get(&self, job_id: i64) -> Result<JobWithPayload, Error> {
        self.client
            .send_json(ApiRequest::new(Method::GET, format!("/api/jobs/{job_id}/")))
            .await
    }
}
