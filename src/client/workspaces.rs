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
use crate::types::{
    ApplicationExportJob, ApplicationImportJob, ExportApplicationsPayload, GenerativeAiSettings,
    ImportResource, ListWorkspaceExports, ListWorkspaceUsersParams, PermissionObject,
    RequestOptions, Workspace, WorkspaceInvitation, WorkspaceInvitationCreate, WorkspaceUser,
    WorkspaceUserWorkspace,
};

impl BaserowClient {
    /// Workspace operations.
    pub fn workspaces(&self) -> WorkspaceOperations<'_> {
        WorkspaceOperations { client: self }
    }
}

/// Operations on workspaces, their members, invitations and application
/// export/import.
#[derive(Clone, Copy, Debug)]
pub struct WorkspaceOperations<'a> {
    client: &'a BaserowClient,
}

impl WorkspaceOperations<'_> {
    /// Lists the workspaces of the authorized user.
    ///
    /// See <https://api.baserow.io/api/redoc/#tag/Workspaces/operation/list_workspaces>
    pub async fn list(&self) -> Result<Vec<WorkspaceUserWorkspace>, Error> {
        self.client
            .send_json(ApiRequest::new(Method::GET, "/api/workspaces/"))
            .await
    }

    /// Creates a workspace.
    pub async fn create(
        &self,
        name: &str,
        options: &RequestOptions,
    ) -> Result<WorkspaceUserWorkspace, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::POST, "/api/workspaces/")
                    .headers(options.to_headers())
                    .body_json(&serde_json::json!({ "name": name }))?,
            )
            .await
    }

    /// Renames a workspace.
    pub async fn update(
        &self,
        workspace_id: i64,
        name: &str,
        options: &RequestOptions,
    ) -> Result<Workspace, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::PATCH, format!("/api/workspaces/{workspace_id}/"))
                    .headers(options.to_headers())
                    .body_json(&serde_json::json!({ "name": name }))?,
            )
            .await
    }

    /// Deletes a workspace.
    pub async fn delete(&self, workspace_id: i64, options: &RequestOptions) -> Result<(), Error> {
        self.client
            .send_unit(
                ApiRequest::new(Method::DELETE, format!("/api/workspaces/{workspace_id}/"))
                    .headers(options.to_headers()),
            )
            .await
    }

    /// Reorders the user's workspaces.
    pub async fn order(
        &self,
        workspace_ids: &[i64],
        options: &RequestOptions,
    ) -> Result<(), Error> {
        self.client
            .send_unit(
                ApiRequest::new(Method::POST, "/api/workspaces/order/")
                    .headers(options.to_headers())
                    .body_json(&serde_json::json!({ "workspaces": workspace_ids }))?,
            )
            .await
    }

    /// Leaves a workspace.
    pub async fn leave(&self, workspace_id: i64) -> Result<(), Error> {
        self.client
            .send_unit(ApiRequest::new(
                Method::POST,
                format!("/api/workspaces/{workspace_id}/leave/"),
            ))
            .await
    }

    /// Creates an initial workspace with example data, as used right after
    /// signup when onboarding is skipped.
    pub async fn create_initial_workspace(&self) -> Result<WorkspaceUserWorkspace, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::POST,
                "/api/workspaces/create-initial-workspace/",
            ))
            .await
    }

    // --- Members ---

    /// Lists the members of a workspace. Requires admin permissions on the
    /// workspace.
    pub async fn list_users(
        &self,
        workspace_id: i64,
        params: &ListWorkspaceUsersParams,
    ) -> Result<Vec<WorkspaceUser>, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::GET,
                    format!("/api/workspaces/users/workspace/{workspace_id}/"),
                )
                .query_params(params.to_query()),
            )
            .await
    }

    /// Changes a member's permissions. Takes the workspace-user relation id,
    /// not the user id.
    pub async fn update_user(
        &self,
        workspace_user_id: i64,
        permissions: &str,
    ) -> Result<WorkspaceUser, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::PATCH,
                    format!("/api/workspaces/users/{workspace_user_id}/"),
                )
                .body_json(&serde_json::json!({ "permissions": permissions }))?,
            )
            .await
    }

    /// Removes a member from a workspace.
    pub async fn delete_user(&self, workspace_user_id: i64) -> Result<(), Error> {
        self.client
            .send_unit(ApiRequest::new(
                Method::DELETE,
                format!("/api/workspaces/users/{workspace_user_id}/"),
            ))
            .await
    }

    // --- Invitations ---

    /// Lists the pending invitations of a workspace.
    pub async fn list_invitations(
        &self,
        workspace_id: i64,
    ) -> Result<Vec<WorkspaceInvitation>, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::GET,
                format!("/api/workspaces/invitations/workspace/{workspace_id}/"),
            ))
            .await
    }

    /// Invites a user into a workspace by email.
    pub async fn create_invitation(
        &self,
        workspace_id: i64,
        payload: &WorkspaceInvitationCreate,
    ) -> Result<WorkspaceInvitation, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/workspaces/invitations/workspace/{workspace_id}/"),
                )
                .body_json(payload)?,
            )
            .await
    }

    /// Fetches an invitation by id.
    pub async fn get_invitation(&self, invitation_id: i64) -> Result<WorkspaceInvitation, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::GET,
                format!("/api/workspaces/invitations/{invitation_id}/"),
            ))
            .await
    }

    /// Changes the permissions of a pending invitation.
    pub async fn update_invitation(
        &self,
        invitation_id: i64,
        permissions: &str,
    ) -> Result<WorkspaceInvitation, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::PATCH,
                    format!("/api/workspaces/invitations/{invitation_id}/"),
                )
                .body_json(&serde_json::json!({ "permissions": permissions }))?,
            )
            .await
    }

    /// Revokes a pending invitation.
    pub async fn delete_invitation(&self, invitation_id: i64) -> Result<(), Error> {
        self.client
            .send_unit(ApiRequest::new(
                Method::DELETE,
                format!("/api/workspaces/invitations/{invitation_id}/"),
            ))
            .await
    }

    /// Accepts an invitation, joining the workspace. Called by the invited
    /// user.
    pub async fn accept_invitation(
        &self,
        invitation_id: i64,
    ) -> Result<WorkspaceUserWorkspace, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::POST,
                format!("/api/workspaces/invitations/{invitation_id}/accept/"),
            ))
            .await
    }

    /// Rejects an invitation. Called by the invited user.
    pub async fn reject_invitation(&self, invitation_id: i64) -> Result<(), Error> {
        self.client
            .send_unit(ApiRequest::new(
                Method::POST,
                format!("/api/workspaces/invitations/{invitation_id}/reject/"),
            ))
            .await
    }

    // --- Settings and permissions ---

    /// Fetches the generative AI settings of a workspace.
    pub async fn get_generative_ai_settings(
        &self,
        workspace_id: i64,
    ) -> Result<GenerativeAiSettings, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::GET,
                format!("/api/workspaces/{workspace_id}/settings/generative-ai/"),
            ))
            .await
    }

    /// Updates the generative AI settings of a workspace.
    pub async fn update_generative_ai_settings(
        &self,
        workspace_id: i64,
        settings: &GenerativeAiSettings,
        options: &RequestOptions,
    ) -> Result<Workspace, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::PATCH,
                    format!("/api/workspaces/{workspace_id}/settings/generative-ai/"),
                )
                .headers(options.to_headers())
                .body_json(settings)?,
            )
            .await
    }

    /// Lists what the current user is allowed to do in a workspace, one
    /// entry per permission manager.
    pub async fn permissions(&self, workspace_id: i64) -> Result<Vec<PermissionObject>, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::GET,
                format!("/api/workspaces/{workspace_id}/permissions/"),
            ))
            .await
    }

    // --- Application export/import ---

    /// Lists previously created application exports of a workspace.
    pub async fn list_exports(
        &self,
        workspace_id: i64,
        options: &RequestOptions,
    ) -> Result<ListWorkspaceExports, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::GET,
                    format!("/api/workspaces/{workspace_id}/export/"),
                )
                .headers(options.to_headers()),
            )
            .await
    }

    /// Starts a job exporting applications of a workspace into an archive.
    pub async fn export_applications(
        &self,
        workspace_id: i64,
        payload: &ExportApplicationsPayload,
        options: &RequestOptions,
    ) -> Result<ApplicationExportJob, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/workspaces/{workspace_id}/export/async/"),
                )
                .headers(options.to_headers())
                .body_json(payload)?,
            )
            .await
    }

    /// Uploads a previously exported archive for import. The payload travels
    /// as a multipart form so the transport chooses the content type.
    pub async fn upload_import_file(
        &self,
        workspace_id: i64,
        file_name: &str,
        content: impl Into<Bytes>,
        options: &RequestOptions,
    ) -> Result<ImportResource, Error> {
        let part = Part::stream(reqwest::Body::from(content.into()))
            .file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/workspaces/{workspace_id}/import/upload-file/"),
                )
                .headers(options.to_headers())
                .body_multipart(form),
            )
            .await
    }

    /// Starts a job importing applications from an uploaded archive.
    pub async fn import_applications(
        &self,
        workspace_id: i64,
        resource_id: i64,
        options: &RequestOptions,
    ) -> Result<ApplicationImportJob, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/workspaces/{workspace_id}/import/async/"),
                )
                .headers(options.to_headers())
                .body_json(&serde_json::json!({ "resource_id": resource_id }))?,
            )
            .await
    }

    /// Deletes an uploaded import/export resource.
    pub async fn delete_import_resource(
        &self,
        workspace_id: i64,
        resource_id: i64,
    ) -> Result<(), Error> {
        self.client
            .send_unit(ApiRequest::new(
                Method::DELETE,
                format!("/api/workspaces/{workspace_id}/import/{resource_id}/"),
            ))
            .await
    }
}
