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

//! Fields: the user-defined columns of a table.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::job::Job;
use crate::multimap_ext::{Multimap, MultimapExt};

/// A field (column) of a table.
///
/// Every field type carries its own extra properties (select options, number
/// formats, link targets, ...); those stay in `type_options` as raw JSON.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Field {
    pub id: i64,
    pub table_id: i64,
    pub name: String,
    pub order: i64,
    #[serde(rename = "type")]
    pub field_type: String,
    pub primary: bool,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub immutable_type: Option<bool>,
    #[serde(default)]
    pub immutable_properties: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub type_options: serde_json::Map<String, serde_json::Value>,
}

/// Payload for creating a field.
#[derive(Clone, Debug, Serialize, TypedBuilder)]
pub struct FieldCreate {
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    #[serde(rename = "type")]
    pub field_type: String,
    /// Type-specific options, e.g. `number_decimal_places`.
    #[builder(default)]
    #[serde(flatten)]
    pub type_options: serde_json::Map<String, serde_json::Value>,
}

/// Payload for updating a field. All members optional.
#[derive(Clone, Debug, Default, Serialize, TypedBuilder)]
pub struct FieldUpdate {
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(default)]
    #[serde(flatten)]
    pub type_options: serde_json::Map<String, serde_json::Value>,
}

/// A field plus the related fields that changed with it, as returned by the
/// update and delete endpoints.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RelatedFields {
    pub related_fields: Vec<Field>,
}

/// Job tracking an asynchronous field duplication.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DuplicateFieldJob {
    #[serde(flatten)]
    pub job: Job,
    #[serde(default)]
    pub original_field: Option<Field>,
    #[serde(default)]
    pub duplicated_field: Option<Field>,
}

/// Distinct values of a text-compatible field.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UniqueRowValues {
    pub values: Vec<String>,
}

/// Query parameters for the unique row values endpoint.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct UniqueRowValuesParams {
    #[builder(default, setter(strip_option))]
    pub limit: Option<u32>,
    /// Split comma-separated cell values into individual entries.
    #[builder(default, setter(strip_option))]
    pub split_comma_separated: Option<bool>,
}

impl UniqueRowValuesParams {
    pub(crate) fn to_query(&self) -> Multimap {
        let mut query = Multimap::new();
        query.add_opt("limit", self.limit.map(|v| v.to_string()));
        query.add_opt(
            "split_comma_separated",
            self.split_comma_separated.map(|v| v.to_string()),
        );
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_keeps_type_specific_options() {
        let field: Field = serde_json::from_str(
            r#"{
                "id": 2,
                "table_id": 1,
                "name": "Price",
                "order": 3,
                "type": "number",
                "primary": false,
                "read_only": false,
                "number_decimal_places": 2,
                "number_negative": true
            }"#,
        )
        .unwrap();
        assert_eq!(field.field_type, "number");
        assert_eq!(field.type_options["number_decimal_places"], 2);
    }

    #[test]
    fn field_create_flattens_options() {
        let mut options = serde_json::Map::new();
        options.insert("text_default".into(), serde_json::json!("n/a"));
        let payload = FieldCreate::builder()
            .name("Notes")
            .field_type("text")
            .type_options(options)
            .build();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Notes", "type": "text", "text_default": "n/a"})
        );
    }
}
