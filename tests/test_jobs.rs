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

use baserow::types::JobState;
use baserow_common::{CannedResponse, TestContext};

#[tokio::test]
async fn list_unwraps_the_jobs_envelope() {
    let ctx = TestContext::with_response(CannedResponse::json(
        r#"{"jobs": [
            {"id": 1, "type": "export_table", "progress_percentage": 40, "state": "exporting"},
            {"id": 2, "type": "duplicate_table", "progress_percentage": 100, "state": "finished"}
        ]}"#,
    ))
    .await;

    let jobs = ctx.client.jobs().list(&[1, 2]).await.unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[1].job.state, JobState::Finished);

    let req = ctx.server.last_request();
    assert_eq!(req.path, "/api/jobs/");
    assert!(req.query_pairs().contains(&("job_ids".into(), "1%2C2".into())));
}

#[tokio::test]
async fn get_carries_the_type_specific_payload() {
    let ctx = TestContext::with_response(CannedResponse::json(
        r#"{
            "id": 3,
            "type": "file_import",
            "progress_percentage": 10,
            "state": "pending",
            "database_id": 7,
            "table_id": 9
        }"#,
    ))
    .await;

    let job = ctx.client.jobs().get(3).await.unwrap();
    assert_eq!(job.job.job_type, "file_import");
    assert_eq!(job.payload["database_id"], 7);
    assert_eq!(ctx.server.last_request().path, "/api/jobs/3/");
}
