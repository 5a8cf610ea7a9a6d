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

/// Lifecycle state of an asynchronous job.
///
/// Job types report additional intermediate states (`importing`,
/// `duplicating`, ...); those map to [`JobState::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Pending,
    Started,
    Exporting,
    Cancelled,
    Finished,
    Failed,
    Expired,
    #[serde(other)]
    Other,
}

impl JobState {
    /// Whether the job has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobState::Cancelled | JobState::Finished | JobState::Failed | JobState::Expired
        )
    }
}

/// Common envelope of every asynchronous Baserow job.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Job {
    pub id: i64,
    #[serde(rename = "type")]
    pub job_type: String,
    pub progress_percentage: u8,
    pub state: JobState,
    #[serde(default)]
    pub human_readable_error: Option<String>,
}

/// A job as returned by the generic jobs endpoints, with the type-specific
/// payload kept as raw JSON.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct JobWithPayload {
    #[serde(flatten)]
    pub job: Job,
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_states_fall_back_to_other() {
        let job: Job = serde_json::from_str(
            r#"{"id":1,"type":"duplicate_table","progress_percentage":40,"state":"duplicating"}"#,
        )
        .unwrap();
        assert_eq!(job.state, JobState::Other);
        assert!(!job.state.is_terminal());
    }

    #[test]
    fn finished_is_terminal() {
        let job: Job = serde_json::from_str(
            r#"{"id":2,"type":"export_table","progress_percentage":100,"state":"finished"}"#,
        )
        .unwrap();
        assert_eq!(job.state, JobState::Finished);
        assert!(job.state.is_terminal());
    }

    #[test]
    fn job_with_payload_keeps_extra_keys() {
        let job: JobWithPayload = serde_json::from_str(
            r#"{"id":3,"type":"file_import","progress_percentage":10,"state":"pending","database_id":7}"#,
        )
        .unwrap();
        assert_eq!(job.job.id, 3);
        assert_eq!(job.payload["database_id"], 7);
    }
}
