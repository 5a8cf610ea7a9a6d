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
use serde::Serialize;

use super::{ApiRequest, BaserowClient};
use crate::error::Error;
use crate::multimap_ext::{Multimap, MultimapExt};
use crate::response::ResponseBody;
use crate::types::{
    AdjacentRowParams, CommentNotificationMode, CreateRowParams, DeleteRowParams, GetRowParams,
    LimitOffsetParams, ListRowsParams, MoveRowParams, Page, RequestOptions, Row, RowComment,
    RowHistoryEntry, UpdateRowParams,
};

impl BaserowClient {
    /// Row operations of a table.
    pub fn rows(&self) -> DatabaseRowOperations<'_> {
        DatabaseRowOperations { client: self }
    }
}

/// Operations on table rows: CRUD, batches, ordering, history and comments.
///
/// Row payloads are caller-supplied [`Serialize`] values whose keys are
/// `field_<id>`, or field names when the request uses `user_field_names`.
#[derive(Clone, Copy, Debug)]
pub struct DatabaseRowOperations<'a> {
    client: &'a BaserowClient,
}

impl DatabaseRowOperations<'_> {
    /// Lists rows of a table with pagination, search, ordering and filters.
    ///
    /// See <https://api.baserow.io/api/redoc/#tag/Database-table-rows/operation/list_database_table_rows>
    pub async fn list(&self, table_id: i64, params: &ListRowsParams) -> Result<Page<Row>, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::GET, format!("/api/database/rows/table/{table_id}/"))
                    .query_params(params.to_query()?),
            )
            .await
    }

    /// Fetches a single row.
    pub async fn get(
        &self,
        table_id: i64,
        row_id: i64,
        params: &GetRowParams,
    ) -> Result<Row, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::GET,
                    format!("/api/database/rows/table/{table_id}/{row_id}/"),
                )
                .query_params(params.to_query()),
            )
            .await
    }

    /// Creates a row.
    ///
    /// See <https://api.baserow.io/api/redoc/#tag/Database-table-rows/operation/create_database_table_row>
    pub async fn create<T: Serialize + ?Sized>(
        &self,
        table_id: i64,
        row_data: &T,
        params: &CreateRowParams,
        options: &RequestOptions,
    ) -> Result<Row, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::POST, format!("/api/database/rows/table/{table_id}/"))
                    .query_params(params.to_query())
                    .headers(options.to_headers())
                    .body_json(row_data)?,
            )
            .await
    }

    /// Updates the given fields of a row.
    pub async fn update<T: Serialize + ?Sized>(
        &self,
        table_id: i64,
        row_id: i64,
        row_data: &T,
        params: &UpdateRowParams,
        options: &RequestOptions,
    ) -> Result<Row, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::PATCH,
                    format!("/api/database/rows/table/{table_id}/{row_id}/"),
                )
                .query_params(params.to_query())
                .headers(options.to_headers())
                .body_json(row_data)?,
            )
            .await
    }

    /// Deletes a row.
    pub async fn delete(
        &self,
        table_id: i64,
        row_id: i64,
        params: &DeleteRowParams,
        options: &RequestOptions,
    ) -> Result<(), Error> {
        self.client
            .send_unit(
                ApiRequest::new(
                    Method::DELETE,
                    format!("/api/database/rows/table/{table_id}/{row_id}/"),
                )
                .query_params(params.to_query())
                .headers(options.to_headers()),
            )
            .await
    }

    /// Moves a row before another row, or to the end of the table.
    pub async fn move_row(
        &self,
        table_id: i64,
        row_id: i64,
        params: &MoveRowParams,
        options: &RequestOptions,
    ) -> Result<Row, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::PATCH,
                    format!("/api/database/rows/table/{table_id}/{row_id}/move/"),
                )
                .query_params(params.to_query())
                .headers(options.to_headers())
                .body_json(&serde_json::json!({}))?,
            )
            .await
    }

    /// Creates several rows in one request.
    pub async fn batch_create<T: Serialize>(
        &self,
        table_id: i64,
        items: &[T],
        params: &CreateRowParams,
        options: &RequestOptions,
    ) -> Result<Vec<Row>, Error> {
        let resp: BatchItems<Row> = self
            .client
            .send_json(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/rows/table/{table_id}/batch/"),
                )
                .query_params(params.to_query())
                .headers(options.to_headers())
                .body_json(&serde_json::json!({ "items": items }))?,
            )
            .await?;
        Ok(resp.items)
    }

    /// Updates several rows in one request. Every item must carry its `id`.
    pub async fn batch_update<T: Serialize>(
        &self,
        table_id: i64,
        items: &[T],
        params: &UpdateRowParams,
        options: &RequestOptions,
    ) -> Result<Vec<Row>, Error> {
        let resp: BatchItems<Row> = self
            .client
            .send_json(
                ApiRequest::new(
                    Method::PATCH,
                    format!("/api/database/rows/table/{table_id}/batch/"),
                )
                .query_params(params.to_query())
                .headers(options.to_headers())
                .body_json(&serde_json::json!({ "items": items }))?,
            )
            .await?;
        Ok(resp.items)
    }

    /// Deletes several rows in one request. The API models this as a POST to
    /// the batch-delete endpoint.
    pub async fn batch_delete(
        &self,
        table_id: i64,
        row_ids: &[i64],
        params: &DeleteRowParams,
        options: &RequestOptions,
    ) -> Result<(), Error> {
        self.client
            .send_unit(
                ApiRequest::new(
                    Method::POST,
                    format!("/api/database/rows/table/{table_id}/batch-delete/"),
                )
                .query_params(params.to_query())
                .headers(options.to_headers())
                .body_json(&serde_json::json!({ "items": row_ids }))?,
            )
            .await
    }

    /// Fetches the row adjacent to the given one, honoring view filters and
    /// search. Returns `None` when no adjacent row matches; the server
    /// signals that with an empty 204 answer.
    pub async fn adjacent(
        &self,
        table_id: i64,
        row_id: i64,
        params: &AdjacentRowParams,
    ) -> Result<Option<Row>, Error> {
        let resp = self
            .client
            .execute(
                ApiRequest::new(
                    Method::GET,
                    format!("/api/database/rows/table/{table_id}/{row_id}/adjacent/"),
                )
                .query_params(params.to_query()),
            )
            .await?;
        match resp {
            ResponseBody::Empty => Ok(None),
            other => Ok(Some(other.into_json()?)),
        }
    }

    /// Fetches the change history of a row.
    pub async fn history(
        &self,
        table_id: i64,
        row_id: i64,
        params: &LimitOffsetParams,
    ) -> Result<Page<RowHistoryEntry>, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::GET,
                    format!("/api/database/rows/table/{table_id}/{row_id}/history/"),
                )
                .query_params(params.to_query()),
            )
            .await
    }

    /// Resolves primary field values for rows across tables. Keys of the
    /// result map table ids to row ids to the row's display name.
    ///
    /// `requests` pairs each table id with the row ids to resolve.
    pub async fn list_names(
        &self,
        requests: &[(i64, Vec<i64>)],
    ) -> Result<serde_json::Value, Error> {
        let mut query = Multimap::new();
        for (table_id, row_ids) in requests {
            let ids: Vec<String> = row_ids.iter().map(|id| id.to_string()).collect();
            query.add(format!("table__{table_id}"), ids.join(","));
        }
        self.client
            .send_json(
                ApiRequest::new(Method::GET, "/api/database/rows/names/").query_params(query),
            )
            .await
    }

    /// Lists the comments on a row. Requires premium.
    pub async fn list_comments(
        &self,
        table_id: i64,
        row_id: i64,
        params: &LimitOffsetParams,
    ) -> Result<Page<RowComment>, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::GET, format!("/api/row_comments/{table_id}/{row_id}/"))
                    .query_params(params.to_query()),
            )
            .await
    }

    /// Creates a comment on a row. The message is the rich-text document
    /// structure used by the web frontend.
    pub async fn create_comment(
        &self,
        table_id: i64,
        row_id: i64,
        message: &serde_json::Value,
    ) -> Result<RowComment, Error> {
        self.client
            .send_json(
                ApiRequest::new(Method::POST, format!("/api/row_comments/{table_id}/{row_id}/"))
                    .body_json(&serde_json::json!({ "message": message }))?,
            )
            .await
    }

    /// Updates a comment. Only the author may do this.
    pub async fn update_comment(
        &self,
        table_id: i64,
        comment_id: i64,
        message: &serde_json::Value,
    ) -> Result<RowComment, Error> {
        self.client
            .send_json(
                ApiRequest::new(
                    Method::PATCH,
                    format!("/api/row_comments/{table_id}/comment/{comment_id}/"),
                )
                .body_json(&serde_json::json!({ "message": message }))?,
            )
            .await
    }

    /// Deletes a comment. Only the author may do this.
    pub async fn delete_comment(&self, table_id: i64, comment_id: i64) -> Result<(), Error> {
        self.client
            .send_unit(ApiRequest::new(
                Method::DELETE,
                format!("/api/row_comments/{table_id}/comment/{comment_id}/"),
            ))
            .await
    }

    /// Sets whether the user is notified for every comment on the row or
    /// only for mentions.
    pub async fn update_comment_notification_mode(
        &self,
        table_id: i64,
        row_id: i64,
        mode: CommentNotificationMode,
    ) -> Result<(), Error> {
        self.client
            .send_unit(
                ApiRequest::new(
                    Method::PUT,
                    format!("/api/row_comments/{table_id}/{row_id}/notification-mode/"),
                )
                .body_json(&serde_json::json!({ "mode": mode }))?,
            )
            .await
    }
}

#[derive(serde::Deserialize)]
struct BatchItems<T> {
    items: Vec<T>,
}
