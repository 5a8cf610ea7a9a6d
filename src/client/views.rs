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
    ListViewsParams, RequestOptions, View, ViewCreate, ViewFilter, ViewFilterCreate,
    ViewFilterUpdate, ViewSort, ViewSortCreate, ViewSortUpdate, ViewUpdate,
};

impl BaserowClient {
    /// View operations of a table.
    pub fn views(&self) -> DatabaseViewOperations<'_> {
        DatabaseViewOperations { client: self }
    }
}

/// Operations on views and their filters and sortings.
#[derive(Clone, Copy, Debug)]
pub struct DatabaseViewOperations<'a> {
    client: &'a BaserowClient,
}

impl DatabaseViewOperations<'_> {
    /// Lists the views of a table.
    pub async fn list(&self, table_id: i64, params: &ListViewsParams) -> Result<Vec<View>, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::GET,
                    format!("/api/database/views/table/{table_id}/"),
                )
                .query_params(params.to_query()),
            )
            .await
    }

    /// Creates a view.
    pub async fn create(
        &self,
        table_id: i64,
        payload: &ViewCreate,
        options: &RequestOptions,
    ) -> Result<View, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/views/table/{table_id}/"),
                )
                .headers(options.to_headers())
                .body_json(payload)?,
            )
            .await
    }

    /// Fetches a view by id.
    pub async fn get(&self, view_id: i64) -> Result<View, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::GET,
                format!("/api/database/views/{view_id}/"),
            ))
            .await
    }

    /// Updates a view.
    pub async fn update(
        &self,
        view_id: i64,
        payload: &ViewUpdate,
        options: &RequestOptions,
    ) -> Result<View, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::PATCH, format!("/api/database/views/{view_id}/"))
                    .headers(options.to_headers())
                    .body_json(payload)?,
            )
            .await
    }

    /// Deletes a view.
    pub async fn delete(&self, view_id: i64, options: &RequestOptions) -> Result<(), Error> {
        self.client
            .send_unit(
                ApiRequest::new(Method::DELETE, format!("/api/database/views/{view_id}/"))
                    .headers(options.to_headers()),
            )
            .await
    }

    /// Duplicates a view, placing the copy right after the original.
    pub async fn duplicate(&self, view_id: i64, options: &RequestOptions) -> Result<View, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/views/{view_id}/duplicate/"),
                )
                .headers(options.to_headers()),
            )
            .await
    }

    /// Reorders the views of a table.
    pub async fn order(
        &self,
        table_id: i64,
        view_ids: &[i64],
        options: &RequestOptions,
    ) -> Result<(), Error> {
        self.client
            .send_unit(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/views/table/{table_id}/order/"),
                )
                .headers(options.to_headers())
                .body_json(&serde_json::json!({ "view_ids": view_ids }))?,
            )
            .await
    }

    /// Fetches a calendar view's iCal feed by its feed slug. The body is the
    /// raw `text/calendar` document.
    pub async fn ical_feed(&self, ical_slug: &str) -> Result<String, Error> {
        self.client
            .execute(ApiRequest::new(
                Method::GET,
                format!("/api/database/views/calendar/{ical_slug}/ical.ics"),
            ))
            .await?
            .into_text()
    }

    // --- Filters ---

    /// Lists the filters of a view.
    pub async fn list_filters(&self, view_id: i64) -> Result<Vec<ViewFilter>, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::GET,
                format!("/api/database/views/{view_id}/filters/"),
            ))
            .await
    }

    /// Attaches a filter to a view.
    pub async fn create_filter(
        &self,
        view_id: i64,
        payload: &ViewFilterCreate,
    ) -> Result<ViewFilter, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/views/{view_id}/filters/"),
                )
                .body_json(payload)?,
            )
            .await
    }

    /// Updates a view filter.
    pub async fn update_filter(
        &self,
        filter_id: i64,
        payload: &ViewFilterUpdate,
    ) -> Result<ViewFilter, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::PATCH,
                    format!("/api/database/views/filter/{filter_id}/"),
                )
                .body_json(payload)?,
            )
            .await
    }

    /// Deletes a view filter.
    pub async fn delete_filter(&self, filter_id: i64) -> Result<(), Error> {
        self.client
            .send_unit(ApiRequest::new(
                Method::DELETE,
                format!("/api/database/views/filter/{filter_id}/"),
            ))
            .await
    }

    // --- Sortings ---

    /// Lists the sortings of a view.
    pub async fn list_sortings(&self, view_id: i64) -> Result<Vec<ViewSort>, Error> {
        self.client
            .send_json(ApiRequest::new(
                Method::GET,
                format!("/api/database/views/{view_id}/sortings/"),
            ))
            .await
    }

    /// Attaches a sorting to a view.
    pub async fn create_sorting(
        &self,
        view_id: i64,
        payload: &ViewSortCreate,
    ) -> Result<ViewSort, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/views/{view_id}/sortings/"),
                )
                .body_json(payload)?,
            )
            .await
    }

    /// Updates a view sorting.
    pub async fn update_sorting(
        &self,
        sort_id: i64,
        payload: &ViewSortUpdate,
    ) -> Result<ViewSort, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::PATCH,
                    format!("/api/database/views/sort/{sort_id}/"),
                )
                .body_json(payload)?,
            )
            .await
    }

    /// Deletes a view sorting.
    pub async fn delete_sorting(&self, sort_id: i64) -> Result<(), Error> {
        self.client
            .send_unit(ApiRequest::new(
                Method::DELETE,
                format!("/api/database/views/sort/{sort_id}/"),
            ))
            .await
    }
}
