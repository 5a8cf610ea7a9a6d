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

use baserow::types::{
    ExportApplicationsPayload, ListWorkspaceUsersParams, RequestOptions, WorkspaceInvitationCreate,
};
use baserow_common::{CannedResponse, TestContext};

#[tokio::test]
async fn list_parses_member_workspaces() {
    let ctx = TestContext::with_response(CannedResponse::json(
        r#"[{
            "id": 1,
            "name": "Acme",
            "order": 1,
            "permissions": "ADMIN",
            "unread_notifications_count": 2,
            "users": [{
                "id": 10,
                "name": "Ada",
                "email": "ada@example.com",
                "workspace": 1,
                "permissions": "ADMIN",
                "created_on": "2024-01-01T00:00:00Z",
                "user_id": 4,
                "to_be_deleted": false
            }]
        }]"#,
    ))
    .await;

    let workspaces = ctx.client.workspaces().list().await.unwrap();
    assert_eq!(workspaces.len(), 1);
    assert_eq!(workspaces[0].workspace.name, "Acme");
    assert_eq!(workspaces[0].users[0].email, "ada@example.com");
    assert_eq!(ctx.server.last_request().path, "/api/workspaces/");
}

#[tokio::test]
async fn order_posts_workspace_ids() {
    let ctx = TestContext::with_response(CannedResponse::no_content()).await;
    ctx.client
        .workspaces()
        .order(&[3, 1, 2], &RequestOptions::default())
        .await
        .unwrap();

    let req = ctx.server.last_request();
    assert_eq!(req.path, "/api/workspaces/order/");
    assert_eq!(req.json(), serde_json::json!({"workspaces": [3, 1, 2]}));
}

#[tokio::test]
async fn list_users_forwards_search_and_sorts() {
    let ctx = TestContext::with_response(CannedResponse::json("[]")).await;

    let params = ListWorkspaceUsersParams::builder()
        .search("ada")
        .sorts("-email")
        .build();
    ctx.client.workspaces().list_users(1, &params).await.unwrap();

    let req = ctx.server.last_request();
    assert_eq!(req.path, "/api/workspaces/users/workspace/1/");
    let pairs = req.query_pairs();
    assert!(pairs.contains(&("search".into(), "ada".into())));
    assert!(pairs.contains(&("sorts".into(), "-email".into())));
}

#[tokio::test]
async fn invitation_lifecycle_paths() {
    let invitation = r#"{
        "id": 30,
        "workspace": 1,
        "email": "grace@example.com",
        "permissions": "MEMBER",
        "message": "welcome",
        "created_on": "2024-02-01T00:00:00Z"
    }"#;
    let ctx = TestContext::with_response(CannedResponse::json(invitation)).await;

    let payload = WorkspaceInvitationCreate::builder()
        .email("grace@example.com")
        .permissions("MEMBER")
        .message("welcome")
        .base_url("https://app.example.com/invite")
        .build();
    let created = ctx
        .client
        .workspaces()
        .create_invitation(1, &payload)
        .await
        .unwrap();
    assert_eq!(created.email, "grace@example.com");

    let req = ctx.server.last_request();
    assert_eq!(req.path, "/api/workspaces/invitations/workspace/1/");
    assert_eq!(req.json()["base_url"], "https://app.example.com/invite");

    ctx.client
        .workspaces()
        .update_invitation(30, "ADMIN")
        .await
        .unwrap();
    assert_eq!(
        ctx.server.last_request().json(),
        serde_json::json!({"permissions": "ADMIN"})
    );

    ctx.client.workspaces().delete_invitation(30).await.unwrap();
    assert_eq!(
        ctx.server.last_request().path,
        "/api/workspaces/invitations/30/"
    );
}

#[tokio::test]
async fn export_applications_starts_a_job() {
    let ctx = TestContext::with_response(CannedResponse::json(
        r#"{
            "id": 40,
            "type": "export_applications",
            "progress_percentage": 0,
            "state": "pending",
            "exported_file_name": null,
            "url": null,
            "created_on": "2024-02-01T00:00:00Z",
            "workspace_id": 1
        }"#,
    ))
    .await;

    let payload = ExportApplicationsPayload::builder()
        .application_ids(vec![5, 6])
        .build();
    let job = ctx
        .client
        .workspaces()
        .export_applications(1, &payload, &RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(job.workspace_id, Some(1));

    let req = ctx.server.last_request();
    assert_eq!(req.path, "/api/workspaces/1/export/async/");
    assert_eq!(req.json(), serde_json::json!({"application_ids": [5, 6]}));
}

#[tokio::test]
async fn upload_import_file_is_multipart() {
    let ctx = TestContext::with_response(CannedResponse::json(
        r#"{"id": 50, "name": "export.zip", "size": 1024}"#,
    ))
    .await;

    let resource = ctx
        .client
        .workspaces()
        .upload_import_file(1, "export.zip", &b"PK\x03\x04"[..], &RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(resource.id, 50);

    let req = ctx.server.last_request();
    assert_eq!(req.path, "/api/workspaces/1/import/upload-file/");
    let content_type = req.header("content-type").unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn permissions_lists_one_entry_per_manager() {
    let ctx = TestContext::with_response(CannedResponse::json(
        r#"[
            {"name": "core", "permissions": ["list_workspaces"]},
            {"name": "basic", "permissions": {"admin_only": []}}
        ]"#,
    ))
    .await;

    let perms = ctx.client.workspaces().permissions(1).await.unwrap();
    assert_eq!(perms.len(), 2);
    assert_eq!(perms[0].name, "core");
    assert_eq!(ctx.server.last_request().path, "/api/workspaces/1/permissions/");
}
