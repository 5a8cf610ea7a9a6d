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

//! Views, view filters and view sortings.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::common::{FilterType, SortDirection};
use crate::multimap_ext::{Multimap, MultimapExt};

/// A view on a table (grid, gallery, form, calendar, ...). View types carry
/// their own extra properties, kept as raw JSON.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct View {
    pub id: i64,
    pub table_id: i64,
    pub name: String,
    pub order: i64,
    #[serde(rename = "type")]
    pub view_type: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub filter_type: Option<FilterType>,
    #[serde(default)]
    pub filters_disabled: Option<bool>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(flatten)]
    pub type_options: serde_json::Map<String, serde_json::Value>,
}

/// Payload for creating a view.
#[derive(Clone, Debug, Serialize, TypedBuilder)]
pub struct ViewCreate {
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    #[serde(rename = "type")]
    pub view_type: String,
    #[builder(default)]
    #[serde(flatten)]
    pub type_options: serde_json::Map<String, serde_json::Value>,
}

/// Payload for updating a view. All members optional.
#[derive(Clone, Debug, Default, Serialize, TypedBuilder)]
pub struct ViewUpdate {
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<FilterType>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters_disabled: Option<bool>,
    #[builder(default)]
    #[serde(flatten)]
    pub type_options: serde_json::Map<String, serde_json::Value>,
}

/// Query parameters for listing views.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct ListViewsParams {
    /// Restrict to one view type, e.g. `grid`.
    #[builder(default, setter(into, strip_option))]
    pub view_type: Option<String>,
    /// Comma-separated extra serializations to include, e.g.
    /// `filters,sortings`.
    #[builder(default, setter(into, strip_option))]
    pub include: Option<String>,
    #[builder(default, setter(strip_option))]
    pub limit: Option<u32>,
}

impl ListViewsParams {
    pub(crate) fn to_query(&self) -> Multimap {
        let mut query = Multimap::new();
        query.add_opt("type", self.view_type.clone());
        query.add_opt("include", self.include.clone());
        query.add_opt("limit", self.limit.map(|v| v.to_string()));
        query
    }
}

/// A filter attached to a view.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ViewFilter {
    pub id: i64,
    pub view: i64,
    pub field: i64,
    #[serde(rename = "type")]
    pub condition: String,
    pub value: String,
    #[serde(default)]
    pub group: Option<i64>,
}

/// Payload for creating a view filter.
#[derive(Clone, Debug, Serialize, TypedBuilder)]
pub struct ViewFilterCreate {
    pub field: i64,
    #[builder(setter(into))]
    #[serde(rename = "type")]
    pub condition: String,
    #[builder(setter(into))]
    pub value: String,
}

/// Payload for updating a view filter. All members optional.
#[derive(Clone, Debug, Default, Serialize, TypedBuilder)]
pub struct ViewFilterUpdate {
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<i64>,
    #[builder(default, setter(into, strip_option))]
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A sorting attached to a view.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ViewSort {
    pub id: i64,
    pub view: i64,
    pub field: i64,
    pub order: SortDirection,
}

/// Payload for creating a view sorting.
#[derive(Clone, Debug, Serialize, TypedBuilder)]
pub struct ViewSortCreate {
    pub field: i64,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortDirection>,
}

/// Payload for updating a view sorting. All members optional.
#[derive(Clone, Debug, Default, Serialize, TypedBuilder)]
pub struct ViewSortUpdate {
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<i64>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortDirection>,
}
