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

//! Workspaces, workspace users and invitations, application export/import.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::job::Job;
use crate::multimap_ext::{Multimap, MultimapExt};

/// A workspace.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Workspace {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub generative_ai_models_enabled: Option<serde_json::Value>,
}

/// A workspace as seen by one of its members, with the member-specific
/// ordering and permission attributes.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WorkspaceUserWorkspace {
    #[serde(flatten)]
    pub workspace: Workspace,
    #[serde(default)]
    pub users: Vec<WorkspaceUser>,
    pub order: i64,
    pub permissions: String,
    #[serde(default)]
    pub unread_notifications_count: i64,
}

/// A membership record linking a user to a workspace.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WorkspaceUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub workspace: i64,
    pub permissions: String,
    pub created_on: DateTime<Utc>,
    pub user_id: i64,
    #[serde(default)]
    pub to_be_deleted: bool,
    #[serde(default)]
    pub teams: Option<Vec<WorkspaceUserTeam>>,
    #[serde(default)]
    pub role_uid: Option<String>,
    #[serde(default)]
    pub highest_role_uid: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WorkspaceUserTeam {
    pub id: i64,
    pub name: String,
}

/// Query parameters for listing workspace users.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct ListWorkspaceUsersParams {
    #[builder(default, setter(into, strip_option))]
    pub search: Option<String>,
    /// Comma-separated sort keys, e.g. `name,-email`.
    #[builder(default, setter(into, strip_option))]
    pub sorts: Option<String>,
}

impl ListWorkspaceUsersParams {
    pub(crate) fn to_query(&self) -> Multimap {
        let mut query = Multimap::new();
        query.add_opt("search", self.search.clone());
        query.add_opt("sorts", self.sorts.clone());
        query
    }
}

/// A pending invitation into a workspace.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WorkspaceInvitation {
    pub id: i64,
    pub workspace: i64,
    pub email: String,
    pub permissions: String,
    #[serde(default)]
    pub message: String,
    pub created_on: DateTime<Utc>,
}

/// Payload for inviting a user into a workspace.
#[derive(Clone, Debug, Serialize, TypedBuilder)]
pub struct WorkspaceInvitationCreate {
    #[builder(setter(into))]
    pub email: String,
    /// `ADMIN`, `MEMBER` or `VIEWER`.
    #[builder(setter(into))]
    pub permissions: String,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Base URL for the accept link in the invitation email.
    #[builder(setter(into))]
    pub base_url: String,
}

/// Generative AI settings of a workspace, keyed by provider
/// (`openai`, `anthropic`, `mistral`, `ollama`, `openrouter`).
pub type GenerativeAiSettings =
    std::collections::HashMap<String, GenerativeAiProviderSettings>;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GenerativeAiProviderSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

/// Job tracking an asynchronous export of workspace applications.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApplicationExportJob {
    #[serde(flatten)]
    pub job: Job,
    #[serde(default)]
    pub exported_file_name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub created_on: DateTime<Utc>,
    #[serde(default)]
    pub workspace_id: Option<i64>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListWorkspaceExports {
    pub results: Vec<ApplicationExportJob>,
}

/// Payload restricting what an application export contains.
#[derive(Clone, Debug, Default, Serialize, TypedBuilder)]
pub struct ExportApplicationsPayload {
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_ids: Option<Vec<i64>>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_structure: Option<bool>,
}

/// An uploaded import archive, referenced when starting an import job.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ImportResource {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub size: Option<i64>,
}

/// Job tracking an asynchronous import of workspace applications.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApplicationImportJob {
    #[serde(flatten)]
    pub job: Job,
    #[serde(default)]
    pub installed_applications: Option<serde_json::Value>,
    pub workspace_id: i64,
    #[serde(default)]
    pub resource: Option<ImportResource>,
}

/// One permission manager's view of what the current user may do in a
/// workspace. The permission payload differs per manager and stays raw JSON.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PermissionObject {
    pub name: String,
    pub permissions: serde_json::Value,
}
