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

//! Instance administration: audit log, auth providers, dashboard, users.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::multimap_ext::{Multimap, MultimapExt};

/// One audit log entry.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AuditLogEntry {
    pub id: i64,
    pub action_type: String,
    pub user: String,
    pub workspace: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub ip_address: Option<String>,
}

/// A distinct action type present in the audit log.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AuditLogActionType {
    pub id: String,
    pub value: String,
}

/// A user or workspace facet of the audit log.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AuditLogFacet {
    pub id: i64,
    pub value: String,
}

/// Query parameters for listing audit log entries.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct ListAuditLogParams {
    #[builder(default, setter(strip_option))]
    pub page: Option<u32>,
    #[builder(default, setter(strip_option))]
    pub size: Option<u32>,
    #[builder(default, setter(into, strip_option))]
    pub action_type: Option<String>,
    #[builder(default, setter(strip_option))]
    pub from_timestamp: Option<DateTime<Utc>>,
    #[builder(default, setter(strip_option))]
    pub to_timestamp: Option<DateTime<Utc>>,
    #[builder(default, setter(strip_option))]
    pub user_id: Option<i64>,
    #[builder(default, setter(strip_option))]
    pub workspace_id: Option<i64>,
    /// Comma-separated sort keys, e.g. `-timestamp,user`.
    #[builder(default, setter(into, strip_option))]
    pub sorts: Option<String>,
}

impl ListAuditLogParams {
    pub(crate) fn to_query(&self) -> Multimap {
        let mut query = Multimap::new();
        query.add_opt("page", self.page.map(|v| v.to_string()));
        query.add_opt("size", self.size.map(|v| v.to_string()));
        query.add_opt("action_type", self.action_type.clone());
        query.add_opt(
            "from_timestamp",
            self.from_timestamp.map(|t| t.to_rfc3339()),
        );
        query.add_opt("to_timestamp", self.to_timestamp.map(|t| t.to_rfc3339()));
        query.add_opt("user_id", self.user_id.map(|v| v.to_string()));
        query.add_opt("workspace_id", self.workspace_id.map(|v| v.to_string()));
        query.add_opt("sorts", self.sorts.clone());
        query
    }
}

/// Search, sort and pagination parameters shared by the admin list
/// endpoints and the audit log facet endpoints.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct AdminListParams {
    #[builder(default, setter(strip_option))]
    pub page: Option<u32>,
    #[builder(default, setter(strip_option))]
    pub size: Option<u32>,
    #[builder(default, setter(into, strip_option))]
    pub search: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub sorts: Option<String>,
    #[builder(default, setter(strip_option))]
    pub workspace_id: Option<i64>,
}

impl AdminListParams {
    pub(crate) fn to_query(&self) -> Multimap {
        let mut query = Multimap::new();
        query.add_opt("page", self.page.map(|v| v.to_string()));
        query.add_opt("size", self.size.map(|v| v.to_string()));
        query.add_opt("search", self.search.clone());
        query.add_opt("sorts", self.sorts.clone());
        query.add_opt("workspace_id", self.workspace_id.map(|v| v.to_string()));
        query
    }
}

/// Payload for the asynchronous audit log CSV export.
#[derive(Clone, Debug, Default, Serialize, TypedBuilder)]
pub struct AuditLogExportRequest {
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_charset: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv_column_separator: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv_first_row_header: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_user_id: Option<i64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_workspace_id: Option<i64>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_action_type: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_from_timestamp: Option<DateTime<Utc>>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_to_timestamp: Option<DateTime<Utc>>,
    /// Comma-separated column names to leave out of the CSV.
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_columns: Option<String>,
}

/// The created audit log export job, echoing the export settings.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AuditLogExportJob {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub exported_file_name: Option<String>,
    pub created_on: DateTime<Utc>,
    #[serde(flatten)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

/// Statistics shown on the instance admin dashboard.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AdminDashboard {
    pub total_users: i64,
    pub total_workspaces: i64,
    pub total_applications: i64,
    pub new_users_last_24_hours: i64,
    pub new_users_last_7_days: i64,
    pub new_users_last_30_days: i64,
    pub previous_new_users_last_24_hours: i64,
    pub previous_new_users_last_7_days: i64,
    pub previous_new_users_last_30_days: i64,
    pub active_users_last_24_hours: i64,
    pub active_users_last_7_days: i64,
    pub active_users_last_30_days: i64,
    pub previous_active_users_last_24_hours: i64,
    pub previous_active_users_last_7_days: i64,
    pub previous_active_users_last_30_days: i64,
    pub new_users_per_day: Vec<AdminDashboardPerDay>,
    pub active_users_per_day: Vec<AdminDashboardPerDay>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AdminDashboardPerDay {
    pub date: NaiveDate,
    pub count: i64,
}

/// A user as seen by instance staff.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AdminUser {
    pub id: i64,
    /// The email address, which doubles as the login.
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub workspaces: Vec<AdminUserWorkspace>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    pub date_joined: DateTime<Utc>,
    pub is_active: bool,
    pub is_staff: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AdminUserWorkspace {
    pub id: i64,
    pub name: String,
    pub permissions: String,
}

/// Payload for creating a user as staff.
#[derive(Clone, Debug, Serialize, TypedBuilder)]
pub struct AdminUserCreate {
    #[builder(setter(into))]
    pub username: String,
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    pub password: String,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
}

/// Payload for updating a user as staff. All members optional.
#[derive(Clone, Debug, Default, Serialize, TypedBuilder)]
pub struct AdminUserUpdate {
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
}

/// Tokens and user details for an impersonated session.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ImpersonateResponse {
    pub user: ImpersonatedUser,
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ImpersonatedUser {
    pub first_name: String,
    pub username: String,
    pub language: String,
}

/// A workspace as seen by instance staff, with usage statistics.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AdminWorkspace {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub users: Vec<AdminWorkspaceUser>,
    pub application_count: i64,
    #[serde(default)]
    pub row_count: Option<i64>,
    #[serde(default)]
    pub storage_usage: Option<i64>,
    #[serde(default)]
    pub seats_taken: Option<i64>,
    #[serde(default)]
    pub free_users: Option<i64>,
    pub created_on: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AdminWorkspaceUser {
    pub id: i64,
    pub email: String,
    pub permissions: String,
}
