/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for plasso-client tests

use plasso_client::{ClientConfig, Member, PlassoClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client whose REST and GraphQL endpoints both live on `server`
pub fn mock_client(server: &MockServer) -> PlassoClient {
    PlassoClient::with_config_and_base_urls(
        ClientConfig::default(),
        &server.uri(),
        &format!("{}/graphql", server.uri()),
    )
    .expect("client init")
}

/// Member handle with a fixed token
#[allow(dead_code)]
pub fn test_member() -> Member {
    Member {
        public_key: "pk_test".to_string(),
        token: mock_member_token(),
    }
}

/// Mock member token for testing
pub fn mock_member_token() -> String {
    "pl_tok_4f2a9c".to_string()
}
