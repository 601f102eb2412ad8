/*
[INPUT]:  Validated checkout request, account secret, network client
[OUTPUT]: Terminal checkout outcome (login receipt or submission result)
[POS]:    Checkout layer - orchestrates the sign-and-submit pipeline
[UPDATE]: When pipeline stages or outcome mapping change
*/

use tracing::{debug, info};

use crate::keys::{AccountSigner, SecretProvider, resolve_secret, validate_mnemonic};
use crate::rpc::{CheckoutError, NetworkClient, Result};
use crate::types::{
    Action, ActionKind, CheckoutOutcome, CheckoutRequest, LoginReceipt, OutcomeState,
    SubmissionResult,
};

use super::sink::ResultSink;

/// Observable pipeline stage of a checkout session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    AwaitingSecret,
    Validating,
    Invalid,
    Deriving,
    Signing,
    Submitting,
    Done,
}

/// A single checkout: one request, one pipeline run at a time.
///
/// `run` takes `&mut self`, so a session can never have two submissions
/// in flight. After an invalid secret the session stays usable and a
/// corrected secret can be run again.
#[derive(Debug)]
pub struct CheckoutSession {
    request: CheckoutRequest,
    client: NetworkClient,
    state: CheckoutState,
}

impl CheckoutSession {
    pub fn new(request: CheckoutRequest, client: NetworkClient) -> Self {
        Self {
            request,
            client,
            state: CheckoutState::AwaitingSecret,
        }
    }

    /// Current pipeline stage
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// The request this session was created for
    pub fn request(&self) -> &CheckoutRequest {
        &self.request
    }

    /// Run the full pipeline with the given secret.
    ///
    /// Validates the secret, derives the account keypair, signs, and for
    /// payment actions submits to the network. Login never touches the
    /// network. Remote rejections come back as an error-state outcome;
    /// the error channel is reserved for bad input and local failures.
    pub async fn run(&mut self, secret: &str) -> Result<CheckoutOutcome> {
        let action = self.request.action.clone();
        info!(
            action = action.kind().as_str(),
            title = %self.request.title,
            "checkout started"
        );

        // Step 1: Validate the secret
        self.state = CheckoutState::Validating;
        if let Err(err) = validate_mnemonic(secret) {
            self.state = CheckoutState::Invalid;
            return Err(err);
        }

        // Step 2: Derive the account keypair
        self.state = CheckoutState::Deriving;
        let signer = AccountSigner::from_mnemonic(secret)?;

        // Step 3: Sign, and for payments submit
        self.state = CheckoutState::Signing;
        let outcome = match &action {
            Action::Login { token } => {
                let (public_key, signature) = signer.sign_hex(token);
                debug!("login token signed");
                CheckoutOutcome::Login(LoginReceipt {
                    state: OutcomeState::Ok,
                    action: ActionKind::Login,
                    public_key,
                    token: token.clone(),
                    signature,
                })
            }
            payment => self.submit_payment(payment, &signer).await?,
        };

        self.state = CheckoutState::Done;
        info!(state = ?outcome.state(), "checkout finished");
        Ok(outcome)
    }

    /// Run the pipeline, pulling the secret from a stored-secret backend
    /// when nothing was entered.
    pub async fn run_with_provider(
        &mut self,
        entered: &str,
        provider: &dyn SecretProvider,
    ) -> Result<CheckoutOutcome> {
        let secret = resolve_secret(entered, Some(provider)).await;
        self.run(secret.as_str()).await
    }

    /// Run the pipeline and hand the outcome to the sink.
    ///
    /// Nothing is delivered when the pipeline fails before producing an
    /// outcome (invalid secret); the error is returned instead.
    pub async fn run_and_deliver(
        &mut self,
        secret: &str,
        sink: &dyn ResultSink,
    ) -> Result<CheckoutOutcome> {
        let outcome = self.run(secret).await?;
        sink.deliver(&outcome).await?;
        Ok(outcome)
    }

    async fn submit_payment(
        &mut self,
        action: &Action,
        signer: &AccountSigner,
    ) -> Result<CheckoutOutcome> {
        let (tx, (amount, currency)) = match (action.transaction()?, action.payment_terms()) {
            (Some(tx), Some(terms)) => (tx, terms),
            _ => {
                return Err(CheckoutError::Config(
                    "login actions cannot be submitted".to_string(),
                ));
            }
        };
        let message = signer.sign_transaction(&tx)?;

        self.state = CheckoutState::Submitting;
        debug!(tx_ref = %tx.tx_ref(), "submitting transaction");
        let reply = self.client.submit(tx.kind, &message).await;

        Ok(CheckoutOutcome::Payment(SubmissionResult::from_reply(
            action.kind(),
            message.sender,
            amount,
            currency.to_string(),
            tx.tx_ref(),
            reply,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::MemorySink;
    use crate::keys::{Secret, StaticSecretProvider};
    use crate::rpc::ClientConfig;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn smartlike_request() -> CheckoutRequest {
        CheckoutRequest {
            action: Action::Smartlike {
                recipient: "https://example.com/video".to_string(),
                amount: 0.01,
                currency: "USD".to_string(),
            },
            title: "Like this video".to_string(),
            callback: "widget-1".to_string(),
        }
    }

    fn login_request() -> CheckoutRequest {
        CheckoutRequest {
            action: Action::Login {
                token: "session-token".to_string(),
            },
            title: "Sign in".to_string(),
            callback: "widget-1".to_string(),
        }
    }

    fn offline_client() -> NetworkClient {
        // Port 1 is never listening; login must succeed regardless.
        NetworkClient::with_config_and_network_url(ClientConfig::default(), "http://127.0.0.1:1")
            .expect("client init")
    }

    async fn mock_client(server: &MockServer) -> NetworkClient {
        NetworkClient::with_config_and_network_url(ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    async fn mount_ok(server: &MockServer) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ok",
                "data": ""
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_login_flow_skips_network() {
        let mut session = CheckoutSession::new(login_request(), offline_client());
        assert_eq!(session.state(), CheckoutState::AwaitingSecret);

        let outcome = session.run(TEST_MNEMONIC).await.unwrap();
        assert_eq!(session.state(), CheckoutState::Done);
        assert_eq!(outcome.state(), OutcomeState::Ok);

        match outcome {
            CheckoutOutcome::Login(receipt) => {
                assert_eq!(receipt.token, "session-token");
                let signer = AccountSigner::from_mnemonic(TEST_MNEMONIC).unwrap();
                assert_eq!(receipt.public_key, signer.public_key_hex());
                assert!(signer.verify(&receipt.token, &receipt.signature));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_secret_halts_pipeline() {
        let mut session = CheckoutSession::new(smartlike_request(), offline_client());

        let err = session.run("definitely not a mnemonic").await.unwrap_err();
        assert!(err.is_user_error());
        assert_eq!(session.state(), CheckoutState::Invalid);
    }

    #[tokio::test]
    async fn test_session_reusable_after_invalid_secret() {
        let mut session = CheckoutSession::new(login_request(), offline_client());

        assert!(session.run("bad secret").await.is_err());
        assert_eq!(session.state(), CheckoutState::Invalid);

        let outcome = session.run(TEST_MNEMONIC).await.unwrap();
        assert_eq!(outcome.state(), OutcomeState::Ok);
        assert_eq!(session.state(), CheckoutState::Done);
    }

    #[tokio::test]
    async fn test_payment_flow_submits() {
        let server = MockServer::start().await;
        mount_ok(&server).await;

        let mut session = CheckoutSession::new(smartlike_request(), mock_client(&server).await);
        let outcome = session.run(TEST_MNEMONIC).await.unwrap();

        assert_eq!(session.state(), CheckoutState::Done);
        match outcome {
            CheckoutOutcome::Payment(result) => {
                assert_eq!(result.state, OutcomeState::Ok);
                assert_eq!(result.action, ActionKind::Smartlike);
                assert_eq!(result.error, None);
                assert_eq!(result.amount, 0.01);
                assert_eq!(result.currency, "USD");
                // tx_ref is "{ts}.{sha256 hex}".
                let (ts, digest) = result.tx_ref.split_once('.').expect("tx_ref format");
                assert!(ts.parse::<i64>().unwrap() > 0);
                assert_eq!(digest.len(), 64);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_remote_rejection_becomes_error_outcome() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "error",
                "data": "unknown key"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut session = CheckoutSession::new(smartlike_request(), mock_client(&server).await);
        let outcome = session.run(TEST_MNEMONIC).await.unwrap();

        assert_eq!(outcome.state(), OutcomeState::Error);
        assert!(outcome.needs_funding());
        assert_eq!(session.state(), CheckoutState::Done);
    }

    #[tokio::test]
    async fn test_provider_supplies_secret() {
        let provider = StaticSecretProvider::new(Secret::new(TEST_MNEMONIC));
        let mut session = CheckoutSession::new(login_request(), offline_client());

        let outcome = session.run_with_provider("", &provider).await.unwrap();
        assert_eq!(outcome.state(), OutcomeState::Ok);
    }

    #[tokio::test]
    async fn test_entered_secret_overrides_provider() {
        let provider = StaticSecretProvider::new(Secret::new("stored garbage"));
        let mut session = CheckoutSession::new(login_request(), offline_client());

        let outcome = session
            .run_with_provider(TEST_MNEMONIC, &provider)
            .await
            .unwrap();
        assert_eq!(outcome.state(), OutcomeState::Ok);
    }

    #[tokio::test]
    async fn test_delivery_reaches_sink() {
        let sink = MemorySink::new();
        let mut session = CheckoutSession::new(login_request(), offline_client());

        session.run_and_deliver(TEST_MNEMONIC, &sink).await.unwrap();
        assert_eq!(sink.take().len(), 1);
    }

    #[tokio::test]
    async fn test_no_delivery_on_invalid_secret() {
        let sink = MemorySink::new();
        let mut session = CheckoutSession::new(login_request(), offline_client());

        assert!(session.run_and_deliver("bad", &sink).await.is_err());
        assert!(sink.take().is_empty());
    }
}
