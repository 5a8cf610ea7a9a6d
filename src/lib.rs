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

//! # Baserow Rust SDK (`baserow-rs`)
//!
//! This crate provides a strongly-typed, async interface to the REST API of
//! [Baserow](https://baserow.io), the open source no-code database.
//!
//! All requests are funneled through a single dispatcher on
//! [`BaserowClient`], which attaches authentication, serializes query
//! parameters and bodies, and decodes responses by status and content type.
//! Endpoint methods are grouped into façades reachable from the client, one
//! per API area: [`client::DatabaseRowOperations`],
//! [`client::DatabaseTableOperations`], [`client::WorkspaceOperations`] and
//! so on.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use baserow::BaserowClient;
//! use baserow::types::ListRowsParams;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = BaserowClient::new("https://api.baserow.io", "your-database-token")
//!         .expect("invalid configuration");
//!
//!     let page = client
//!         .rows()
//!         .list(1, &ListRowsParams::builder().size(50u32).build())
//!         .await
//!         .expect("request failed");
//!
//!     println!("table has {} rows", page.count);
//! }
//! ```
//!
//! ## Design
//! - One [`BaserowClient`] per logical client; it is cheap to clone and safe
//!   to share across tasks (configuration is immutable after construction)
//! - Errors are transparent: a non-2xx answer from the server becomes
//!   [`error::Error::Api`] carrying the HTTP status, the machine-readable
//!   error code and the detail payload; transport failures become
//!   [`error::Error::Network`]
//! - No retries, timeouts or caching; the SDK is a thin transport layer and
//!   callers own any retry policy

pub mod client;
pub mod error;
pub mod header_constants;
pub mod http;
pub mod multimap_ext;
pub mod response;
pub mod types;

pub use client::{BaserowClient, BaserowClientBuilder, TokenType};
