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
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::types::{CeleryQueue, EmailTesterRequest, EmailTesterResponse, FullHealthCheck};

impl BaserowClient {
    /// Health checks of the Baserow deployment.
    pub fn health(&self) -> HealthOperations<'_> {
        HealthOperations { client: self }
    }
}

/// Operations for checking the health of a Baserow deployment.
#[derive(Clone, Copy, Debug)]
pub struct HealthOperations<'a> {
    client: &'a BaserowClient,
}

impl HealthOperations<'_> {
    /// Runs the full health check.
    pub async fn full_health_check(&self) -> Result<FullHealthCheck, Error> {
        self.client
            .send_json(ApiRequest::new(Method::GET, "/api/_health/full/"))
            .await
    }

    /// Sends a test email to the given address and reports how the mail
    /// setup behaved.
    pub async fn test_email(&self, target_email: &str) -> Result<EmailTesterResponse, Error> {
        let payload = EmailTesterRequest {
            target_email: target_email.to_string(),
        };
        self.client
            .send_json(ApiRequest::new(Method::POST, "/api/_health/email/").body_json(&payload)?)
            .await
    }

    /// Checks that the given Celery queues are not backed up. The server
    /// answers 200 when the queues are within bounds and 503 otherwise.
    pub async fn check_celery_queue_size(&self, queues: &[CeleryQueue]) -> Result<(), Error> {
        let mut query = Multimap::new();
        for queue in queues {
            query.add("queue", queue.as_param());
        }
        self.client
            .send_unit(
                ApiRequest::new(Method::GET, "/api/_health/celery-queue/").query_params(query),
            )
            .await
    }
}
