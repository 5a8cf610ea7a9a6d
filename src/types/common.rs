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

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::header_constants::{CLIENT_SESSION_ID, CLIENT_UNDO_REDO_ACTION_GROUP_ID};
use crate::multimap_ext::{Multimap, MultimapExt};

/// A page of results as returned by Baserow's paginated list endpoints.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// How sibling filters are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum FilterType {
    #[default]
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

/// Sort direction for view sortings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

/// A field reference in a filter: either the numeric field id, or the field
/// name when the request uses `user_field_names`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FieldRef {
    Id(i64),
    Name(String),
}

impl From<i64> for FieldRef {
    fn from(id: i64) -> Self {
        FieldRef::Id(id)
    }
}

impl From<&str> for FieldRef {
    fn from(name: &str) -> Self {
        FieldRef::Name(name.to_string())
    }
}

/// A single filter condition.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Filter {
    pub field: FieldRef,
    /// The filter condition, e.g. `equal` or `contains`.
    #[serde(rename = "type")]
    pub condition: String,
    pub value: serde_json::Value,
}

/// A tree of filters, combined with [`FilterType::And`] or
/// [`FilterType::Or`]. Groups nest arbitrarily.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FilterGroup {
    pub filter_type: FilterType,
    pub filters: Vec<FilterNode>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FilterNode {
    Condition(Filter),
    Group(FilterGroup),
}

/// Full-text search mode accepted by search-capable endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    FullTextWithCount,
    Compat,
}

impl SearchMode {
    pub(crate) fn as_param(&self) -> &'static str {
        match self {
            SearchMode::FullTextWithCount => "SearchModes.MODE_FT_WITH_COUNT",
            SearchMode::Compat => "SearchModes.MODE_COMPAT",
        }
    }
}

/// Optional per-call correlation headers.
///
/// `client_session_id` groups actions of one editing session for undo/redo;
/// `client_undo_redo_action_group_id` groups several actions into one
/// undoable unit. Both are opaque strings forwarded verbatim.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct RequestOptions {
    #[builder(default, setter(into, strip_option))]
    pub client_session_id: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub client_undo_redo_action_group_id: Option<String>,
}

impl RequestOptions {
    pub(crate) fn to_headers(&self) -> Multimap {
        let mut headers = Multimap::new();
        headers.add_opt(CLIENT_SESSION_ID, self.client_session_id.clone());
        headers.add_opt(
            CLIENT_UNDO_REDO_ACTION_GROUP_ID,
            self.client_undo_redo_action_group_id.clone(),
        );
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_group_serializes_nested_conditions() {
        let group = FilterGroup {
            filter_type: FilterType::And,
            filters: vec![
                FilterNode::Condition(Filter {
                    field: FieldRef::Id(1),
                    condition: "equal".into(),
                    value: serde_json::json!("test"),
                }),
                FilterNode::Group(FilterGroup {
                    filter_type: FilterType::Or,
                    filters: vec![FilterNode::Condition(Filter {
                        field: FieldRef::Name("Active".into()),
                        condition: "boolean".into(),
                        value: serde_json::json!(true),
                    })],
                }),
            ],
        };

        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["filter_type"], "AND");
        assert_eq!(json["filters"][0]["field"], 1);
        assert_eq!(json["filters"][0]["type"], "equal");
        assert_eq!(json["filters"][1]["filter_type"], "OR");
        assert_eq!(json["filters"][1]["filters"][0]["field"], "Active");
    }

    #[test]
    fn request_options_become_headers() {
        let options = RequestOptions::builder()
            .client_session_id("session-1")
            .client_undo_redo_action_group_id("group-1")
            .build();
        let headers = options.to_headers();
        assert_eq!(
            headers.get("ClientSessionId").map(String::as_str),
            Some("session-1")
        );
        assert_eq!(
            headers
                .get("ClientUndoRedoActionGroupId")
                .map(String::as_str),
            Some("group-1")
        );
    }

    #[test]
    fn default_request_options_add_no_headers() {
        assert!(RequestOptions::default().to_headers().is_empty());
    }
}
