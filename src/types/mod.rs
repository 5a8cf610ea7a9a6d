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

//! Data shapes for Baserow API requests and responses.

pub mod admin;
pub mod common;
pub mod database;
pub mod field;
pub mod health;
pub mod job;
pub mod row;
pub mod user_file;
pub mod view;
pub mod webhook;
pub mod workspace;

pub use admin::*;
pub use common::*;
pub use database::*;
pub use field::*;
pub use health::*;
pub use job::*;
pub use row::*;
pub use user_file::*;
pub use view::*;
pub use webhook::*;
pub use workspace::*;
