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

//! Rows, row history and row comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::common::{FilterGroup, FilterType, SearchMode};
use crate::error::{Error, ValidationErr};
use crate::multimap_ext::{Multimap, MultimapExt};

/// A table row.
///
/// Field values are keyed by `field_<id>`, or by the field name when the
/// request was made with `user_field_names`. The value shapes are defined by
/// the user's table schema at runtime, so they stay raw JSON.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Row {
    pub id: i64,
    /// Position of the row in the table, a decimal rendered as a string.
    pub order: String,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Row {
    /// Returns the value of `field_<id>`.
    pub fn field(&self, field_id: i64) -> Option<&serde_json::Value> {
        self.fields.get(&format!("field_{field_id}"))
    }

    /// Returns a field value by key, for rows fetched with
    /// `user_field_names`.
    pub fn field_by_name(&self, name: &str) -> Option<&serde_json::Value> {
        self.fields.get(name)
    }
}

/// Query parameters for listing rows.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct ListRowsParams {
    #[builder(default, setter(strip_option))]
    pub page: Option<u32>,
    #[builder(default, setter(strip_option))]
    pub size: Option<u32>,
    #[builder(default, setter(into, strip_option))]
    pub search: Option<String>,
    #[builder(default, setter(strip_option))]
    pub search_mode: Option<SearchMode>,
    /// Comma-separated field ids or names to include.
    #[builder(default, setter(into, strip_option))]
    pub include: Option<String>,
    /// Comma-separated field ids or names to exclude.
    #[builder(default, setter(into, strip_option))]
    pub exclude: Option<String>,
    /// Comma-separated fields to order by; prefix with `-` for descending.
    #[builder(default, setter(into, strip_option))]
    pub order_by: Option<String>,
    /// Apply the filters and sorts of this view.
    #[builder(default, setter(strip_option))]
    pub view_id: Option<i64>,
    #[builder(default, setter(strip_option))]
    pub user_field_names: Option<bool>,
    /// Structured filter tree, sent as a JSON-encoded `filters` parameter.
    #[builder(default, setter(strip_option))]
    pub filters: Option<FilterGroup>,
    /// How filters combine when no structured tree is given.
    #[builder(default, setter(strip_option))]
    pub filter_type: Option<FilterType>,
}

impl ListRowsParams {
    pub(crate) fn to_query(&self) -> Result<Multimap, Error> {
        let mut query = Multimap::new();
        query.add_opt("page", self.page.map(|v| v.to_string()));
        query.add_opt("size", self.size.map(|v| v.to_string()));
        query.add_opt("search", self.search.clone());
        query.add_opt("search_mode", self.search_mode.map(|m| m.as_param()));
        query.add_opt("include", self.include.clone());
        query.add_opt("exclude", self.exclude.clone());
        query.add_opt("order_by", self.order_by.clone());
        query.add_opt("view_id", self.view_id.map(|v| v.to_string()));
        query.add_opt(
            "user_field_names",
            self.user_field_names.map(|v| v.to_string()),
        );
        if let Some(filters) = &self.filters {
            // The structured tree travels as one JSON-encoded parameter and
            // supersedes filter_type.
            let encoded = serde_json::to_string(filters).map_err(ValidationErr::JsonEncode)?;
            query.add("filters", encoded);
        } else if let Some(filter_type) = self.filter_type {
            let value = serde_json::to_value(filter_type).map_err(ValidationErr::JsonEncode)?;
            if let Some(s) = value.as_str() {
                query.add("filter_type", s);
            }
        }
        Ok(query)
    }
}

/// Query parameters for fetching a single row.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct GetRowParams {
    /// Set to request row metadata (`include=metadata`).
    #[builder(default)]
    pub include_metadata: bool,
    #[builder(default, setter(strip_option))]
    pub user_field_names: Option<bool>,
}

impl GetRowParams {
    pub(crate) fn to_query(&self) -> Multimap {
        let mut query = Multimap::new();
        if self.include_metadata {
            query.add("include", "metadata");
        }
        query.add_opt(
            "user_field_names",
            self.user_field_names.map(|v| v.to_string()),
        );
        query
    }
}

/// Query parameters for creating rows.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct CreateRowParams {
    /// Position the new row before the row with this id.
    #[builder(default, setter(strip_option))]
    pub before: Option<i64>,
    #[builder(default, setter(strip_option))]
    pub send_webhook_events: Option<bool>,
    #[builder(default, setter(strip_option))]
    pub user_field_names: Option<bool>,
}

impl CreateRowParams {
    pub(crate) fn to_query(&self) -> Multimap {
        let mut query = Multimap::new();
        query.add_opt("before", self.before.map(|v| v.to_string()));
        query.add_opt(
            "send_webhook_events",
            self.send_webhook_events.map(|v| v.to_string()),
        );
        query.add_opt(
            "user_field_names",
            self.user_field_names.map(|v| v.to_string()),
        );
        query
    }
}

/// Query parameters for updating rows.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct UpdateRowParams {
    #[builder(default, setter(strip_option))]
    pub send_webhook_events: Option<bool>,
    #[builder(default, setter(strip_option))]
    pub user_field_names: Option<bool>,
}

impl UpdateRowParams {
    pub(crate) fn to_query(&self) -> Multimap {
        let mut query = Multimap::new();
        query.add_opt(
            "send_webhook_events",
            self.send_webhook_events.map(|v| v.to_string()),
        );
        query.add_opt(
            "user_field_names",
            self.user_field_names.map(|v| v.to_string()),
        );
        query
    }
}

/// Query parameters for deleting rows.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct DeleteRowParams {
    #[builder(default, setter(strip_option))]
    pub send_webhook_events: Option<bool>,
}

impl DeleteRowParams {
    pub(crate) fn to_query(&self) -> Multimap {
        let mut query = Multimap::new();
        query.add_opt(
            "send_webhook_events",
            self.send_webhook_events.map(|v| v.to_string()),
        );
        query
    }
}

/// Query parameters for moving a row.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct MoveRowParams {
    /// Id of the row to move before; when unset the row moves to the end.
    #[builder(default, setter(strip_option))]
    pub before_id: Option<i64>,
    #[builder(default, setter(strip_option))]
    pub user_field_names: Option<bool>,
}

impl MoveRowParams {
    pub(crate) fn to_query(&self) -> Multimap {
        let mut query = Multimap::new();
        query.add_opt("before_id", self.before_id.map(|v| v.to_string()));
        query.add_opt(
            "user_field_names",
            self.user_field_names.map(|v| v.to_string()),
        );
        query
    }
}

/// Query parameters for fetching the adjacent row.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct AdjacentRowParams {
    /// Fetch the previous instead of the next row.
    #[builder(default, setter(strip_option))]
    pub previous: Option<bool>,
    #[builder(default, setter(strip_option))]
    pub view_id: Option<i64>,
    #[builder(default, setter(into, strip_option))]
    pub search: Option<String>,
    #[builder(default, setter(strip_option))]
    pub user_field_names: Option<bool>,
}

impl AdjacentRowParams {
    pub(crate) fn to_query(&self) -> Multimap {
        let mut query = Multimap::new();
        query.add_opt("previous", self.previous.map(|v| v.to_string()));
        query.add_opt("view_id", self.view_id.map(|v| v.to_string()));
        query.add_opt("search", self.search.clone());
        query.add_opt(
            "user_field_names",
            self.user_field_names.map(|v| v.to_string()),
        );
        query
    }
}

/// Pagination by limit/offset, used by the row history and comment feeds.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct LimitOffsetParams {
    #[builder(default, setter(strip_option))]
    pub limit: Option<u32>,
    #[builder(default, setter(strip_option))]
    pub offset: Option<u32>,
}

impl LimitOffsetParams {
    pub(crate) fn to_query(&self) -> Multimap {
        let mut query = Multimap::new();
        query.add_opt("limit", self.limit.map(|v| v.to_string()));
        query.add_opt("offset", self.offset.map(|v| v.to_string()));
        query
    }
}

/// One change-history entry of a row.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RowHistoryEntry {
    pub id: i64,
    pub action_type: String,
    pub user: RowHistoryUser,
    pub timestamp: DateTime<Utc>,
    pub before: serde_json::Map<String, serde_json::Value>,
    pub after: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub fields_metadata: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RowHistoryUser {
    pub id: i64,
    pub name: String,
}

/// A comment on a row. The message body is the rich-text document structure
/// used by the web frontend and stays raw JSON.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RowComment {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    pub table_id: i64,
    pub row_id: i64,
    pub message: serde_json::Value,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
    pub edited: bool,
    #[serde(default)]
    pub trashed: bool,
}

/// Notification preference for comments on a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentNotificationMode {
    All,
    Mentions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::common::{FieldRef, Filter, FilterNode};

    #[test]
    fn row_field_lookup_by_id_and_name() {
        let row: Row = serde_json::from_str(
            r#"{"id":7,"order":"2.00000000000000000000","field_11":"Projects","Active":true}"#,
        )
        .unwrap();
        assert_eq!(row.field(11).unwrap(), &serde_json::json!("Projects"));
        assert_eq!(row.field_by_name("Active").unwrap(), &serde_json::json!(true));
        assert!(row.field(999).is_none());
    }

    #[test]
    fn list_params_skip_unset_values() {
        let query = ListRowsParams::builder()
            .size(25)
            .search("alpha")
            .build()
            .to_query()
            .unwrap();
        assert_eq!(query.get("size").map(String::as_str), Some("25"));
        assert_eq!(query.get("search").map(String::as_str), Some("alpha"));
        assert!(query.get("page").is_none());
        assert!(query.get("user_field_names").is_none());
    }

    #[test]
    fn structured_filters_are_json_encoded_and_replace_filter_type() {
        let filters = FilterGroup {
            filter_type: FilterType::Or,
            filters: vec![FilterNode::Condition(Filter {
                field: FieldRef::Id(3),
                condition: "equal".into(),
                value: serde_json::json!(42),
            })],
        };
        let query = ListRowsParams::builder()
            .filters(filters)
            .filter_type(FilterType::And)
            .build()
            .to_query()
            .unwrap();

        assert!(query.get("filter_type").is_none());
        let encoded = query.get("filters").unwrap();
        let decoded: serde_json::Value = serde_json::from_str(encoded).unwrap();
        assert_eq!(decoded["filter_type"], "OR");
        assert_eq!(decoded["filters"][0]["field"], 3);
    }

    #[test]
    fn get_row_params_include_metadata() {
        let query = GetRowParams::builder().include_metadata(true).build().to_query();
        assert_eq!(query.get("include").map(String::as_str), Some("metadata"));
    }
}
