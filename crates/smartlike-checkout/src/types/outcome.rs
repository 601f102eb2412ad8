/*
[INPUT]:  Gateway replies and signed transaction metadata
[OUTPUT]: Normalized checkout outcomes for the embedding page
[POS]:    Data layer - result normalization
[UPDATE]: When the gateway reply schema or callback payload changes
*/

use serde::{Deserialize, Serialize};

use super::action::ActionKind;

/// Gateway error string meaning the account exists but holds no funds
const UNKNOWN_KEY_ERROR: &str = "unknown key";

/// Terminal state of a checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeState {
    Ok,
    Error,
}

/// Raw reply from the network gateway.
///
/// Transport failures are folded into the same shape: non-200 statuses
/// and unreachable hosts become an `error` reply instead of a separate
/// error channel, so callers handle exactly one result type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcReply {
    pub status: String,
    pub data: String,
}

impl RpcReply {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    /// Reply for an HTTP status other than 200
    pub fn http_code(code: u16) -> Self {
        Self {
            status: "error".to_string(),
            data: format!("http code {code}"),
        }
    }

    /// Reply for an unreachable gateway
    pub fn connect_failed() -> Self {
        Self {
            status: "error".to_string(),
            data: "failed to connect".to_string(),
        }
    }

    /// Reply for a 200 response whose body did not parse
    pub fn invalid_response(detail: &str) -> Self {
        Self {
            status: "error".to_string(),
            data: format!("invalid response: {detail}"),
        }
    }

    /// True when the gateway rejected the sender key for lack of funds
    pub fn is_unknown_key(&self) -> bool {
        !self.is_ok() && self.data == UNKNOWN_KEY_ERROR
    }
}

/// Result of a payment submission, in the shape the embedding page
/// receives on its callback channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionResult {
    pub state: OutcomeState,
    #[serde(rename = "type")]
    pub action: ActionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "publicKey")]
    pub public_key: String,
    pub amount: f64,
    pub currency: String,
    #[serde(rename = "tx")]
    pub tx_ref: String,
}

impl SubmissionResult {
    /// Fold a gateway reply into a submission result
    pub fn from_reply(
        action: ActionKind,
        public_key: String,
        amount: f64,
        currency: String,
        tx_ref: String,
        reply: RpcReply,
    ) -> Self {
        let (state, error) = if reply.is_ok() {
            (OutcomeState::Ok, None)
        } else {
            (OutcomeState::Error, Some(reply.data))
        };
        Self {
            state,
            action,
            error,
            public_key,
            amount,
            currency,
            tx_ref,
        }
    }

    /// True when the submission failed because the account needs funding
    pub fn needs_funding(&self) -> bool {
        self.error.as_deref() == Some(UNKNOWN_KEY_ERROR)
    }
}

/// Result of a login checkout: a signed session token, no network involved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginReceipt {
    pub state: OutcomeState,
    #[serde(rename = "type")]
    pub action: ActionKind,
    #[serde(rename = "publicKey")]
    pub public_key: String,
    pub token: String,
    pub signature: String,
}

/// Terminal value of a checkout pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckoutOutcome {
    Login(LoginReceipt),
    Payment(SubmissionResult),
}

impl CheckoutOutcome {
    pub fn state(&self) -> OutcomeState {
        match self {
            CheckoutOutcome::Login(receipt) => receipt.state,
            CheckoutOutcome::Payment(result) => result.state,
        }
    }

    pub fn public_key(&self) -> &str {
        match self {
            CheckoutOutcome::Login(receipt) => &receipt.public_key,
            CheckoutOutcome::Payment(result) => &result.public_key,
        }
    }

    /// True when the outcome is a payment rejected for lack of funds
    pub fn needs_funding(&self) -> bool {
        match self {
            CheckoutOutcome::Login(_) => false,
            CheckoutOutcome::Payment(result) => result.needs_funding(),
        }
    }
}
