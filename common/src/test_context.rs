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

use baserow::BaserowClient;

use crate::mock_server::{CannedResponse, MockServer};

/// Default token used by the test client.
pub const TEST_TOKEN: &str = "test-token";

/// A mock server plus a client pointed at it.
#[derive(Clone, Debug)]
pub struct TestContext {
    pub server: MockServer,
    pub client: BaserowClient,
}

impl TestContext {
    /// Spawns a server answering with the given responses in order.
    pub async fn with_responses(responses: Vec<CannedResponse>) -> Self {
        let server = MockServer::spawn(responses).await;
        let client =
            BaserowClient::new(&server.url(), TEST_TOKEN).expect("failed to build test client");
        Self { server, client }
    }

    /// Spawns a server answering every request the same way.
    pub async fn with_response(response: CannedResponse) -> Self {
        Self::with_responses(vec![response]).await
    }
}
