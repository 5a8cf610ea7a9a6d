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

//! Tables, table import/export and data sync shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use typed_builder::TypedBuilder;

use super::job::Job;

/// A table inside a database application.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Table {
    pub id: i64,
    pub name: String,
    pub order: i64,
    pub database_id: i64,
    #[serde(default)]
    pub data_sync: Option<DataSync>,
}

/// Payload for creating a table, optionally seeded with initial data.
#[derive(Clone, Debug, Default, Serialize, TypedBuilder)]
pub struct TableCreate {
    #[builder(setter(into))]
    pub name: String,
    /// Initial rows, as an array of arrays. When `first_row_header` is set,
    /// the first array provides the field names.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Vec<serde_json::Value>>>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_row_header: Option<bool>,
}

/// Payload for updating a table. Only the name can change.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Payload for importing data into an existing table.
#[derive(Clone, Debug, Serialize, TypedBuilder)]
pub struct TableImport {
    pub data: Vec<Vec<serde_json::Value>>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<TableImportConfiguration>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct TableImportConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upsert_fields: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upsert_values: Option<Vec<Vec<serde_json::Value>>>,
}

/// Job tracking an asynchronous table creation or data import.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FileImportJob {
    #[serde(flatten)]
    pub job: Job,
    pub database_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub table_id: Option<i64>,
    #[serde(default)]
    pub first_row_header: Option<bool>,
    #[serde(default)]
    pub report: Option<ImportReport>,
}

/// Per-row validation failures of an import, keyed by row index and then by
/// field name.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ImportReport {
    pub failing_rows: HashMap<String, HashMap<String, Vec<String>>>,
}

/// Job tracking an asynchronous table duplication.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DuplicateTableJob {
    #[serde(flatten)]
    pub job: Job,
    #[serde(default)]
    pub original_table: Option<Table>,
    #[serde(default)]
    pub duplicated_table: Option<Table>,
}

/// Table export formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExporterType {
    Csv,
    Json,
    Xml,
    Excel,
    File,
}

/// Options for a table export job. Format-specific settings are optional and
/// only consulted for the matching `exporter_type`.
#[derive(Clone, Debug, Serialize, TypedBuilder)]
pub struct ExportOptions {
    pub exporter_type: ExporterType,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_id: Option<i64>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_charset: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<i64>>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv_column_separator: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv_include_header: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excel_include_header: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organize_files: Option<bool>,
}

/// A table export job, created by `export_table` and polled via
/// `get_export_job` until `url` points at the produced file.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ExportJob {
    #[serde(flatten)]
    pub job: Job,
    #[serde(default)]
    pub table: Option<i64>,
    #[serde(default)]
    pub view: Option<i64>,
    pub exporter_type: String,
    #[serde(default)]
    pub exported_file_name: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A configured data sync on a table.
///
/// The connection settings differ per sync type (`ical_calendar`,
/// `postgresql`, `github_issues`, ...) and are kept as a raw JSON map.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DataSync {
    pub id: i64,
    #[serde(rename = "type")]
    pub sync_type: String,
    pub synced_properties: Vec<DataSyncSyncedProperty>,
    #[serde(default)]
    pub last_sync: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_error: Option<String>,
    #[serde(flatten)]
    pub config: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DataSyncSyncedProperty {
    pub field_id: i64,
    pub key: String,
    #[serde(default)]
    pub unique_primary: Option<bool>,
}

/// Payload for creating a data-synced table.
#[derive(Clone, Debug, Serialize, TypedBuilder)]
pub struct DataSyncCreate {
    #[builder(setter(into))]
    #[serde(rename = "type")]
    pub sync_type: String,
    #[builder(setter(into))]
    pub table_name: String,
    pub synced_properties: Vec<String>,
    /// Type-specific connection settings, e.g. `ical_url` or
    /// `postgresql_host`.
    #[builder(default)]
    #[serde(flatten)]
    pub config: serde_json::Map<String, serde_json::Value>,
}

/// Payload for updating a data sync configuration.
#[derive(Clone, Debug, Default, Serialize, TypedBuilder)]
pub struct DataSyncUpdate {
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synced_properties: Option<Vec<String>>,
    #[builder(default)]
    #[serde(flatten)]
    pub config: serde_json::Map<String, serde_json::Value>,
}

/// A property (candidate field) exposed by a data sync source.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DataSyncProperty {
    pub unique_primary: bool,
    pub key: String,
    pub name: String,
    pub field_type: String,
    #[serde(default)]
    pub initially_selected: bool,
}

/// Job tracking an asynchronous data sync run.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SyncDataSyncTableJob {
    #[serde(flatten)]
    pub job: Job,
    #[serde(default)]
    pub data_sync: Option<DataSync>,
}
