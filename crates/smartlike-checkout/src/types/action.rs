/*
[INPUT]:  Validated checkout requests
[OUTPUT]: Typed actions and the transaction payloads they produce
[POS]:    Data layer - action model and payload construction
[UPDATE]: When adding action types or changing payload schemas
*/

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::transaction::{Transaction, TxKind};
use crate::rpc::Result;

/// Checkout action discriminator, matching the widget `type` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Login,
    Subscribe,
    Donate,
    Smartlike,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Login => "login",
            ActionKind::Subscribe => "subscribe",
            ActionKind::Donate => "donate",
            ActionKind::Smartlike => "smartlike",
        }
    }
}

/// A checkout action with everything needed to build its transaction.
///
/// `Login` only signs a token and never reaches the network; the other
/// three produce a [`Transaction`] for submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Login {
        token: String,
    },
    Subscribe {
        recipient: String,
        amount: f64,
        currency: String,
    },
    Donate {
        recipient: String,
        amount: f64,
        currency: String,
        comment: String,
    },
    Smartlike {
        recipient: String,
        amount: f64,
        currency: String,
    },
}

/// Recurring donation payload (`add_recurring_donation`)
#[derive(Serialize)]
struct SubscribePayload<'a> {
    recipient: &'a str,
    amount: f64,
    threshold: u32,
    currency: &'a str,
    title: &'a str,
    avatar: &'a str,
    comment: &'a str,
}

/// One-off donation payload with a published comment (`like`, kind 6)
#[derive(Serialize)]
struct DonatePayload<'a> {
    kind: u32,
    target: String,
    amount: f64,
    currency: &'a str,
    payload: DonateNote<'a>,
}

#[derive(Serialize)]
struct DonateNote<'a> {
    action: &'a str,
    text: &'a str,
}

/// Plain like payload (`like`, kind 0)
#[derive(Serialize)]
struct SmartlikePayload<'a> {
    kind: u32,
    target: String,
    amount: f64,
    currency: &'a str,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Login { .. } => ActionKind::Login,
            Action::Subscribe { .. } => ActionKind::Subscribe,
            Action::Donate { .. } => ActionKind::Donate,
            Action::Smartlike { .. } => ActionKind::Smartlike,
        }
    }

    /// Amount and currency for payment actions; `None` for login
    pub fn payment_terms(&self) -> Option<(f64, &str)> {
        match self {
            Action::Login { .. } => None,
            Action::Subscribe {
                amount, currency, ..
            }
            | Action::Donate {
                amount, currency, ..
            }
            | Action::Smartlike {
                amount, currency, ..
            } => Some((*amount, currency)),
        }
    }

    /// Build the network transaction for this action, timestamped now.
    ///
    /// Returns `None` for login, which signs a token instead of a
    /// transaction.
    pub fn transaction(&self) -> Result<Option<Transaction>> {
        self.transaction_at(Utc::now().timestamp())
    }

    /// Build the network transaction with an explicit unix timestamp
    pub fn transaction_at(&self, ts: i64) -> Result<Option<Transaction>> {
        let (kind, data) = match self {
            Action::Login { .. } => return Ok(None),
            Action::Subscribe {
                recipient,
                amount,
                currency,
            } => (
                TxKind::AddRecurringDonation,
                serde_json::to_string(&SubscribePayload {
                    recipient,
                    amount: *amount,
                    threshold: 0,
                    currency,
                    title: "",
                    avatar: "",
                    comment: "",
                })?,
            ),
            Action::Donate {
                recipient,
                amount,
                currency,
                comment,
            } => (
                TxKind::Like,
                serde_json::to_string(&DonatePayload {
                    kind: 6,
                    target: normalize_target(recipient),
                    amount: *amount,
                    currency,
                    payload: DonateNote {
                        action: "publish",
                        text: comment,
                    },
                })?,
            ),
            Action::Smartlike {
                recipient,
                amount,
                currency,
            } => (
                TxKind::Like,
                serde_json::to_string(&SmartlikePayload {
                    kind: 0,
                    target: normalize_target(recipient),
                    amount: *amount,
                    currency,
                })?,
            ),
        };

        Ok(Some(Transaction { kind, ts, data }))
    }
}

/// Canonicalize a like/donate target URL.
///
/// Strips the first `//www.`, `//m.` and `//mobile.` occurrence, in that
/// order, so mobile and desktop URLs of the same page collapse to one
/// canonical target.
pub fn normalize_target(target: &str) -> String {
    target
        .replacen("//www.", "//", 1)
        .replacen("//m.", "//", 1)
        .replacen("//mobile.", "//", 1)
}
