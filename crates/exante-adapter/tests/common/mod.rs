/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for exante-adapter tests

use exante_adapter::{ClientConfig, Credentials, ExanteClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Fixed credentials for testing
pub fn test_credentials() -> Credentials {
    Credentials {
        client_id: "d0c5340b-6d6c-49d9-b567-48c4bfca13d2".to_string(),
        app_id: "6cca6a14-a5e3-4219-9542-86123fc9d6c3".to_string(),
        shared_key: "5eeac64cc46b34f5332e5326/CHo4bRWq6pqqynnWKQg".to_string(),
    }
}

/// Client pointed at a mock server
pub fn test_client(server: &MockServer) -> ExanteClient {
    ExanteClient::with_config_and_base_url(ClientConfig::default(), &server.uri(), test_credentials())
        .expect("client init")
}
