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
use crate::types::{
    AdminDashboard, AdminListParams, AdminUser, AdminUserCreate, AdminUserUpdate, AdminWorkspace,
    AuditLogActionType, AuditLogEntry, AuditLogExportJob, AuditLogExportRequest, AuditLogFacet,
    ImpersonateResponse, ListAuditLogParams, Page, RequestOptions,
};

impl BaserowClient {
    /// Instance administration. Staff accounts only.
    pub fn admin(&self) -> AdminOperations<'_> {
        AdminOperations { client: self }
    }
}

/// Operations for instance administration: audit log, auth providers,
/// dashboard statistics, and user and workspace management.
#[derive(Clone, Copy, Debug)]
pub struct AdminOperations<'a> {
    client: &'a BaserowClient,
}

impl AdminOperations<'_> {
    // --- Audit log ---

    /// Lists audit log entries. Requires an enterprise license.
    pub async fn list_audit_log(
        &self,
        params: &ListAuditLogParams,
    ) -> Result<Page<AuditLogEntry>, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::GET, "/api/audit-log/").query_params(params.to_query()),
            )
            .await
    }

    /// Lists the distinct action types present in the audit log.
    pub async fn list_audit_log_action_types(
        &self,
        params: &AdminListParams,
    ) -> Result<Vec<AuditLogActionType>, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::GET, "/api/audit-log/action-types/")
                    .query_params(params.to_query()),
            )
            .await
    }

    /// Starts a job exporting audit log entries to CSV.
    pub async fn export_audit_log(
        &self,
        payload: &AuditLogExportRequest,
        options: &RequestOptions,
    ) -> Result<AuditLogExportJob, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::POST, "/api/audit-log/export/")
                    .headers(options.to_headers())
                    .body_json(payload)?,
            )
            .await
    }

    /// Lists the users appearing in the audit log.
    pub async fn list_audit_log_users(
        &self,
        params: &AdminListParams,
    ) -> Result<Page<AuditLogFacet>, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::GET, "/api/audit-log/users/")
                    .query_params(params.to_query()),
            )
            .await
    }

    /// Lists the workspaces appearing in the audit log.
    pub async fn list_audit_log_workspaces(
        &self,
        params: &AdminListParams,
    ) -> Result<Page<AuditLogFacet>, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::GET, "/api/audit-log/workspaces/")
                    .query_params(params.to_query()),
            )
            .await
    }

    // --- Auth providers ---

    /// Lists the configured authentication providers. Provider shapes vary
    /// per type and stay raw JSON.
    pub async fn list_auth_providers(&self) -> Result<Vec<serde_json::Value>, Error> {
        self.client
            .send_json(ApiRequest::new(Method::GET, "/api/admin/auth-provider/"))
            .await
    }

    /// Creates an authentication provider.
    pub async fn create_auth_provider(
        &self,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::POST, "/api/admin/auth-provider/").body_json(payload)?,
            )
            .await
    }

    /// Fetches an authentication provider by id.
    pub async fn get_auth_provider(&self, provider_id: i64) -> Result<serde_json::Value, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::GET,
                format!("/api/admin/auth-provider/{provider_id}/"),
            ))
            .await
    }

    /// Updates an authentication provider.
    pub async fn update_auth_provider(
        &self,
        provider_id: i64,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::PATCH,
                    format!("/api/admin/auth-provider/{provider_id}/"),
                )
                .body_json(payload)?,
            )
            .await
    }

    /// Deletes an authentication provider.
    pub async fn delete_auth_provider(&self, provider_id: i64) -> Result<(), Error> {
        self.client
            .send_unit(ApiRequest::new(
                Method::DELETE,
                format!("/api/admin/auth-provider/{provider_id}/"),
            ))
            .await
    }

    // --- Dashboard ---

    /// Fetches the instance dashboard statistics.
    pub async fn dashboard(&self) -> Result<AdminDashboard, Error> {
        self.client
            .send_json(ApiRequest::new(Method::GET, "/api/admin/dashboard/"))
            .await
    }

    // --- Users ---

    /// Lists all users of the instance.
    pub async fn list_users(&self, params: &AdminListParams) -> Result<Page<AdminUser>, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::GET, "/api/admin/users/").query_params(params.to_query()),
            )
            .await
    }

    /// Creates a user.
    pub async fn create_user(&self, payload: &AdminUserCreate) -> Result<AdminUser, Error> {
        self.client
            .send_json(ApiRequest::new(Method::POST, "/api/admin/users/").body_json(payload)?)
            .await
    }

    /// Updates a user.
    pub async fn update_user(
        &self,
        user_id: i64,
        payload: &AdminUserUpdate,
    ) -> Result<AdminUser, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::PATCH, format!("/api/admin/users/{user_id}/"))
                    .body_json(payload)?,
            )
            .await
    }

    /// Deletes a user. Staff cannot delete themselves.
    pub async fn delete_user(&self, user_id: i64) -> Result<(), Error> {
        self.client
            .send_unit(ApiRequest::new(
                Method::DELETE,
                format!("/api/admin/users/{user_id}/"),
            ))
            .await
    }

    /// Obtains tokens to act as another, non-staff user.
    pub async fn impersonate_user(&self, user_id: i64) -> Result<ImpersonateResponse, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::POST, "/api/admin/users/impersonate/")
                    .body_json(&serde_json::json!({ "user": user_id }))?,
            )
            .await
    }

    // --- Workspaces ---

    /// Lists all workspaces of the instance with usage statistics.
    pub async fn list_workspaces(
        &self,
        params: &AdminListParams,
    ) -> Result<Page<AdminWorkspace>, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::GET, "/api/admin/workspaces/")
                    .query_params(params.to_query()),
            )
            .await
    }

    /// Deletes any workspace of the instance.
    pub async fn delete_workspace(&self, workspace_id: i64) -> Result<(), Error> {
        self.client
            .send_unit(ApiRequest::new(
                Method::DELETE,
                format!("/api/admin/workspaces/{workspace_id}/"),
            ))
            .await
    }
}
