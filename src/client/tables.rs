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
    DataSync, DataSyncCreate, DataSyncProperty, DataSyncUpdate, DuplicateTableJob, ExportJob,
    ExportOptions, FileImportJob, RequestOptions, SyncDataSyncTableJob, Table, TableCreate,
    TableImport, TableUpdate,
};

impl BaserowClient {
    /// Table operations of a database application.
    pub fn tables(&self) -> DatabaseTableOperations<'_> {
        DatabaseTableOperations { client: self }
    }
}

/// Operations on tables: CRUD, ordering, import/export and data sync.
#[derive(Clone, Copy, Debug)]
pub struct DatabaseTableOperations<'a> {
    client: &'a BaserowClient,
}

impl DatabaseTableOperations<'_> {
    /// Lists all tables in a database.
    ///
    /// See <https://api.baserow.io/api/redoc/#tag/Database-tables/operation/list_database_tables>
    pub async fn list(&self, database_id: i64) -> Result<Vec<Table>, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::GET,
                format!("/api/database/tables/database/{database_id}/"),
            ))
            .await
    }

    /// Creates a table synchronously, optionally seeded with initial data.
    pub async fn create(
        &self,
        database_id: i64,
        payload: &TableCreate,
        options: &RequestOptions,
    ) -> Result<Table, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/tables/database/{database_id}/"),
                )
                .headers(options.to_headers())
                .body_json(payload)?,
            )
            .await
    }

    /// Starts a job creating a table asynchronously. Use this for large
    /// seed data; poll the returned job for completion.
    pub async fn create_async(
        &self,
        database_id: i64,
        payload: &TableCreate,
        options: &RequestOptions,
    ) -> Result<FileImportJob, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/tables/database/{database_id}/async/"),
                )
                .headers(options.to_headers())
                .body_json(payload)?,
            )
            .await
    }

    /// Fetches a table by id.
    pub async fn get(&self, table_id: i64) -> Result<Table, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::GET,
                format!("/api/database/tables/{table_id}/"),
            ))
            .await
    }

    /// Updates a table. Only the name can change.
    pub async fn update(
        &self,
        table_id: i64,
        payload: &TableUpdate,
        options: &RequestOptions,
    ) -> Result<Table, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::PATCH, format!("/api/database/tables/{table_id}/"))
                    .headers(options.to_headers())
                    .body_json(payload)?,
            )
            .await
    }

    /// Deletes a table.
    pub async fn delete(&self, table_id: i64, options: &RequestOptions) -> Result<(), Error> {
        self.client
            .send_unit(
                ApiRequest::new(Method::DELETE, format!("/api/database/tables/{table_id}/"))
                    .headers(options.to_headers()),
            )
            .await
    }

    /// Starts a job duplicating a table.
    pub async fn duplicate_async(
        &self,
        table_id: i64,
        options: &RequestOptions,
    ) -> Result<DuplicateTableJob, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/tables/{table_id}/duplicate/async/"),
                )
                .headers(options.to_headers())
                .body_json(&serde_json::json!({}))?,
            )
            .await
    }

    /// Reorders the tables of a database.
    pub async fn order(
        &self,
        database_id: i64,
        table_ids: &[i64],
        options: &RequestOptions,
    ) -> Result<(), Error> {
        self.client
            .send_unit(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/tables/database/{database_id}/order/"),
                )
                .headers(options.to_headers())
                .body_json(&serde_json::json!({ "table_ids": table_ids }))?,
            )
            .await
    }

    /// Starts a job importing data into an existing table.
    pub async fn import_async(
        &self,
        table_id: i64,
        payload: &TableImport,
    ) -> Result<FileImportJob, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/tables/{table_id}/import/async/"),
                )
                .body_json(payload)?,
            )
            .await
    }

    // --- Data sync ---

    /// Creates a table synchronized with an external data source.
    pub async fn create_data_sync_table(
        &self,
        database_id: i64,
        payload: &DataSyncCreate,
        options: &RequestOptions,
    ) -> Result<Table, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/data-sync/database/{database_id}/"),
                )
                .headers(options.to_headers())
                .body_json(payload)?,
            )
            .await
    }

    /// Fetches a data sync configuration.
    pub async fn get_data_sync(&self, data_sync_id: i64) -> Result<DataSync, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::GET,
                format!("/api/database/data-sync/{data_sync_id}/"),
            ))
            .await
    }

    /// Updates a data sync configuration.
    pub async fn update_data_sync(
        &self,
        data_sync_id: i64,
        payload: &DataSyncUpdate,
    ) -> Result<DataSync, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::PATCH,
                    format!("/api/database/data-sync/{data_sync_id}/"),
                )
                .body_json(payload)?,
            )
            .await
    }

    /// Lists the properties an existing data sync can expose as fields.
    pub async fn list_data_sync_properties(
        &self,
        data_sync_id: i64,
        options: &RequestOptions,
    ) -> Result<Vec<DataSyncProperty>, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::GET,
                    format!("/api/database/data-sync/{data_sync_id}/properties/"),
                )
                .headers(options.to_headers()),
            )
            .await
    }

    /// Lists the properties a prospective data sync source would expose,
    /// before any table exists.
    pub async fn data_sync_type_properties(
        &self,
        payload: &serde_json::Value,
    ) -> Result<Vec<DataSyncProperty>, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::POST, "/api/database/data-sync/properties/")
                    .body_json(payload)?,
            )
            .await
    }

    /// Starts a job pulling fresh data into a synced table.
    pub async fn sync_data_sync_async(
        &self,
        data_sync_id: i64,
    ) -> Result<SyncDataSyncTableJob, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::POST,
                format!("/api/database/data-sync/{data_sync_id}/sync/async/"),
            ))
            .await
    }

    // --- Export ---

    /// Creates and starts an export job for a table.
    ///
    /// See <https://api.baserow.io/api/redoc/#tag/Database-table-export/operation/export_table>
    pub async fn export_table(
        &self,
        table_id: i64,
        options: &ExportOptions,
    ) -> Result<ExportJob, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/export/table/{table_id}/"),
                )
                .body_json(options)?,
            )
            .await
    }

    /// Polls an export job.
    pub async fn get_export_job(&self, job_id: i64) -> Result<ExportJob, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::GET,
                format!("/api/database/export/{job_id}/"),
            ))
            .await
    }
}
