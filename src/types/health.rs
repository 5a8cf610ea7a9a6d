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

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Result of the full health check.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FullHealthCheck {
    pub passing: bool,
    /// Individual check name to its result description.
    pub checks: HashMap<String, String>,
    #[serde(default)]
    pub celery_queue_size: i64,
    #[serde(default)]
    pub celery_export_queue_size: i64,
}

/// Payload for the email tester.
#[derive(Clone, Debug, Serialize)]
pub struct EmailTesterRequest {
    pub target_email: String,
}

/// Outcome of the email tester.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EmailTesterResponse {
    pub succeeded: bool,
    #[serde(default)]
    pub error_stack: Option<String>,
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Celery queues whose backlog the health endpoint can measure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CeleryQueue {
    Celery,
    Export,
}

impl CeleryQueue {
    pub(crate) fn as_param(&self) -> &'static str {
        match self {
            CeleryQueue::Celery => "celery",
            CeleryQueue::Export => "export",
        }
    }
}
