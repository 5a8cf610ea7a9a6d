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
    DuplicateFieldJob, Field, FieldCreate, FieldUpdate, RelatedFields, RequestOptions,
    UniqueRowValues, UniqueRowValuesParams,
};

impl BaserowClient {
    /// Field operations of a table.
    pub fn fields(&self) -> DatabaseFieldOperations<'_> {
        DatabaseFieldOperations { client: self }
    }
}

/// Operations on fields, the user-defined columns of a table.
#[derive(Clone, Copy, Debug)]
pub struct DatabaseFieldOperations<'a> {
    client: &'a BaserowClient,
}

impl DatabaseFieldOperations<'_> {
    /// Lists the fields of a table.
    pub async fn list(&self, table_id: i64) -> Result<Vec<Field>, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::GET,
                format!("/api/database/fields/table/{table_id}/"),
            ))
            .await
    }

    /// Creates a field.
    pub async fn create(
        &self,
        table_id: i64,
        payload: &FieldCreate,
        options: &RequestOptions,
    ) -> Result<Field, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/fields/table/{table_id}/"),
                )
                .headers(options.to_headers())
                .body_json(payload)?,
            )
            .await
    }

    /// Fetches a field by id.
    pub async fn get(&self, field_id: i64) -> Result<Field, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::GET,
                format!("/api/database/fields/{field_id}/"),
            ))
            .await
    }

    /// Updates a field. Changing the type converts the stored values.
    pub async fn update(
        &self,
        field_id: i64,
        payload: &FieldUpdate,
        options: &RequestOptions,
    ) -> Result<Field, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::PATCH, format!("/api/database/fields/{field_id}/"))
                    .headers(options.to_headers())
                    .body_json(payload)?,
            )
            .await
    }

    /// Deletes a field and returns the related fields the deletion touched.
    pub async fn delete(
        &self,
        field_id: i64,
        options: &RequestOptions,
    ) -> Result<RelatedFields, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::DELETE, format!("/api/database/fields/{field_id}/"))
                    .headers(options.to_headers()),
            )
            .await
    }

    /// Starts a job duplicating a field.
    pub async fn duplicate_async(
        &self,
        field_id: i64,
        duplicate_data: bool,
        options: &RequestOptions,
    ) -> Result<DuplicateFieldJob, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/fields/{field_id}/duplicate/async/"),
                )
                .headers(options.to_headers())
                .body_json(&serde_json::json!({ "duplicate_data": duplicate_data }))?,
            )
            .await
    }

    /// Lists the distinct values of a text-compatible field.
    pub async fn unique_row_values(
        &self,
        field_id: i64,
        params: &UniqueRowValuesParams,
    ) -> Result<UniqueRowValues, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::GET,
                    format!("/api/database/fields/{field_id}/unique_row_values/"),
                )
                .query_params(params.to_query()),
            )
            .await
    }
}
