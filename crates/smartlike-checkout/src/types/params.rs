/*
[INPUT]:  Raw checkout parameters from the embedding page
[OUTPUT]: Validated checkout requests with defaults applied
[POS]:    Data layer - request validation and defaulting
[UPDATE]: When adding parameters or changing the required-field matrix
*/

use serde::{Deserialize, Serialize};

use super::action::Action;
use crate::rpc::{CheckoutError, Result};

/// Default currency when the embedding page supplies none
pub const DEFAULT_CURRENCY: &str = "USD";
/// Default payment amount when the embedding page supplies none
pub const DEFAULT_AMOUNT: f64 = 0.01;

/// Raw checkout parameters, as handed over by the embedding page.
///
/// Everything is optional here; validation happens in
/// [`CheckoutRequest::from_params`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutParams {
    /// Action selector: "login", "subscribe", "donate" or "smartlike"
    #[serde(rename = "type")]
    pub action: Option<String>,
    pub recipient: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub token: Option<String>,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub callback: Option<String>,
}

impl CheckoutParams {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "type" => self.action.as_deref(),
            "recipient" => self.recipient.as_deref(),
            "token" => self.token.as_deref(),
            "title" => self.title.as_deref(),
            "comment" => self.comment.as_deref(),
            "callback" => self.callback.as_deref(),
            _ => None,
        }
    }
}

/// A validated checkout request.
///
/// Construction guarantees the action carries every field it needs and
/// that amount/currency defaults are in place.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub action: Action,
    /// Human-readable description shown to the user before signing
    pub title: String,
    /// Channel identifier the outcome should be delivered to
    pub callback: String,
}

impl CheckoutRequest {
    /// Validate raw parameters and build a request.
    ///
    /// Required fields are checked per action type and the first missing
    /// one is reported. Missing amount/currency fall back to
    /// [`DEFAULT_AMOUNT`] / [`DEFAULT_CURRENCY`]; negative amounts clamp
    /// to zero.
    pub fn from_params(params: CheckoutParams) -> Result<Self> {
        let kind = params
            .action
            .as_deref()
            .ok_or(CheckoutError::MissingParameter { name: "type" })?;

        let amount = params.amount.unwrap_or(DEFAULT_AMOUNT).max(0.0);
        let currency = params
            .currency
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        let action = match kind {
            "login" => {
                check_required(&params, &["title", "token", "callback"])?;
                Action::Login {
                    token: params.token.clone().unwrap_or_default(),
                }
            }
            "subscribe" => {
                check_required(&params, &["title", "token", "recipient", "callback"])?;
                Action::Subscribe {
                    recipient: params.recipient.clone().unwrap_or_default(),
                    amount,
                    currency,
                }
            }
            "donate" => {
                check_required(&params, &["title", "recipient", "callback"])?;
                Action::Donate {
                    recipient: params.recipient.clone().unwrap_or_default(),
                    amount,
                    currency,
                    comment: params.comment.clone().unwrap_or_default(),
                }
            }
            "smartlike" => {
                check_required(&params, &["title", "recipient", "callback"])?;
                Action::Smartlike {
                    recipient: params.recipient.clone().unwrap_or_default(),
                    amount,
                    currency,
                }
            }
            other => {
                return Err(CheckoutError::UnknownAction {
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            action,
            title: params.title.unwrap_or_default(),
            callback: params.callback.unwrap_or_default(),
        })
    }
}

/// Check presence of required parameters, in declaration order
fn check_required(params: &CheckoutParams, names: &[&'static str]) -> Result<()> {
    for name in names {
        if params.field(name).is_none() {
            return Err(CheckoutError::missing(name));
        }
    }
    Ok(())
}
