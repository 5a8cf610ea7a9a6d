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

//! Shared tooling for the baserow crate's integration tests: an in-process
//! HTTP server that records every incoming request and answers with canned
//! responses.

pub mod mock_server;
pub mod test_context;

pub use mock_server::{CannedResponse, MockServer, RecordedRequest};
pub use test_context::TestContext;
