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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata of an uploaded user file. The returned `name` is the generated
/// unique name referenced from file fields.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserFile {
    pub url: String,
    pub name: String,
    pub size: i64,
    pub mime_type: String,
    pub is_image: bool,
    #[serde(default)]
    pub image_width: Option<i64>,
    #[serde(default)]
    pub image_height: Option<i64>,
    pub uploaded_at: DateTime<Utc>,
    #[serde(default)]
    pub thumbnails: Option<serde_json::Value>,
    pub original_name: String,
}
