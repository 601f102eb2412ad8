/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for smartlike-checkout tests

use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Well-known BIP-39 phrase used as the test account secret
pub const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

/// Hex public key the test phrase derives to
#[allow(dead_code)]
pub const TEST_PUBLIC_KEY: &str =
    "bf63640782acfa9a43f0a94d0549f045e9a307be5ff2b30240f224ee65b428b9";

/// Setup a mock gateway server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Mount a single-use gateway reply with the given status/data pair
#[allow(dead_code)]
pub async fn mount_gateway_reply(server: &MockServer, status: &str, data: &str) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": status,
            "data": data,
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Verify a hex-encoded Ed25519 signature against a hex public key
#[allow(dead_code)]
pub fn verify_wire_signature(sender_hex: &str, signature_hex: &str, message: &str) -> bool {
    use ed25519_dalek::{Signature, Verifier, VerifyingKey};

    let Ok(key_bytes) = hex::decode(sender_hex) else {
        return false;
    };
    let Ok(key_array) = <[u8; 32]>::try_from(key_bytes.as_slice()) else {
        return false;
    };
    let Ok(key) = VerifyingKey::from_bytes(&key_array) else {
        return false;
    };
    let Ok(sig_bytes) = hex::decode(signature_hex) else {
        return false;
    };
    let Ok(signature) = Signature::from_slice(&sig_bytes) else {
        return false;
    };
    key.verify(message.as_bytes(), &signature).is_ok()
}
