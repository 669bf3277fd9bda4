//! Unit tests for the HTTP verification client

use vc_core::domain::entities::VerificationCode;
use vc_core::form::{ClientError, VerificationClientTrait};
use vc_shared::config::ClientConfig;

use crate::client::HttpVerificationClient;
use crate::InfrastructureError;

#[test]
fn test_client_uses_configured_url() {
    let client = HttpVerificationClient::new(ClientConfig::new("http://127.0.0.1:5000/")).unwrap();
    assert_eq!(client.verify_url(), "http://127.0.0.1:5000/api/verify");
    assert_eq!(client.config().timeout_secs, 10);
}

#[test]
fn test_client_rejects_invalid_config() {
    let result = HttpVerificationClient::new(ClientConfig::new("localhost without scheme"));
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    // Nothing listens on port 1
    let config = ClientConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
    };
    let client = HttpVerificationClient::new(config).unwrap();
    let code: VerificationCode = "123456".parse().unwrap();

    let result = client.verify(&code).await;
    assert!(matches!(result, Err(ClientError::Transport { .. })));
}
