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

//! Table webhooks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use typed_builder::TypedBuilder;

/// A webhook configured on a table.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Webhook {
    pub id: i64,
    pub url: String,
    pub name: String,
    pub request_method: String,
    pub include_all_events: bool,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    pub active: bool,
    #[serde(default)]
    pub use_user_field_names: bool,
    #[serde(default)]
    pub failed_triggers: i64,
    #[serde(default)]
    pub calls: Vec<WebhookCall>,
}

/// One recorded delivery attempt of a webhook.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WebhookCall {
    pub id: i64,
    pub event_id: String,
    pub event_type: String,
    #[serde(default)]
    pub called_time: Option<DateTime<Utc>>,
    pub called_url: String,
    #[serde(default)]
    pub request: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub response_status: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Payload for creating a webhook.
#[derive(Clone, Debug, Serialize, TypedBuilder)]
pub struct WebhookCreate {
    #[builder(setter(into))]
    pub url: String,
    #[builder(setter(into))]
    pub name: String,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_method: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_all_events: Option<bool>,
    /// Event types to deliver when `include_all_events` is off, e.g.
    /// `rows.created`.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_user_field_names: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Payload for updating a webhook. All members optional.
#[derive(Clone, Debug, Default, Serialize, TypedBuilder)]
pub struct WebhookUpdate {
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_method: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_all_events: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_user_field_names: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Payload for a webhook test call.
#[derive(Clone, Debug, Serialize, TypedBuilder)]
pub struct WebhookTestCall {
    #[builder(setter(into))]
    pub url: String,
    /// The event type to fake, e.g. `rows.created`.
    #[builder(setter(into))]
    pub event_type: String,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_method: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_user_field_names: Option<bool>,
}

/// The captured request/response pair of a webhook test call.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WebhookTestResult {
    #[serde(default)]
    pub request: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub is_unreachable: bool,
}
