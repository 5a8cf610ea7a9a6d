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
use crate::types::{Webhook, WebhookCreate, WebhookTestCall, WebhookTestResult, WebhookUpdate};

impl BaserowClient {
    /// Webhook operations of a table.
    pub fn webhooks(&self) -> DatabaseWebhookOperations<'_> {
        DatabaseWebhookOperations { client: self }
    }
}

/// Operations on table webhooks.
#[derive(Clone, Copy, Debug)]
pub struct DatabaseWebhookOperations<'a> {
    client: &'a BaserowClient,
}

impl DatabaseWebhookOperations<'_> {
    /// Lists the webhooks of a table.
    pub async fn list(&self, table_id: i64) -> Result<Vec<Webhook>, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::GET,
                format!("/api/database/webhooks/table/{table_id}/"),
            ))
            .await
    }

    /// Creates a webhook on a table.
    pub async fn create(&self, table_id: i64, payload: &WebhookCreate) -> Result<Webhook, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/webhooks/table/{table_id}/"),
                )
                .body_json(payload)?,
            )
            .await
    }

    /// Fetches a webhook by id.
    pub async fn get(&self, webhook_id: i64) -> Result<Webhook, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::GET,
                format!("/api/database/webhooks/{webhook_id}/"),
            ))
            .await
    }

    /// Updates a webhook.
    pub async fn update(&self, webhook_id: i64, payload: &WebhookUpdate) -> Result<Webhook, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::PATCH,
                    format!("/api/database/webhooks/{webhook_id}/"),
                )
                .body_json(payload)?,
            )
            .await
    }

    /// Deletes a webhook.
    pub async fn delete(&self, webhook_id: i64) -> Result<(), Error> {
        self.client
            .send_unit(ApiRequest::new(
                Method::DELETE,
                format!("/api/database/webhooks/{webhook_id}/"),
            ))
            .await
    }

    /// Triggers a test delivery against a target URL without persisting a
    /// webhook, returning the captured request/response pair.
    pub async fn test_call(
        &self,
        table_id: i64,
        payload: &WebhookTestCall,
    ) -> Result<WebhookTestResult, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/webhooks/table/{table_id}/test-call/"),
                )
                .body_json(payload)?,
            )
            .await
    }
}
