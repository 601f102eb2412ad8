/*
[INPUT]:  Transaction payloads and timestamps
[OUTPUT]: Wire-ready transaction and signed message structs
[POS]:    Data layer - type definitions for network submission
[UPDATE]: When the gateway transaction schema changes
*/

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Transaction kind accepted by the Smartlike network gateway.
///
/// Doubles as the JSON-RPC method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxKind {
    Like,
    AddRecurringDonation,
}

impl TxKind {
    /// Wire name, also used as the JSON-RPC method
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Like => "like",
            TxKind::AddRecurringDonation => "add_recurring_donation",
        }
    }
}

/// Transaction submitted to the network.
///
/// `data` carries the action payload as a pre-serialized JSON string, so the
/// bytes that get signed are exactly the bytes the gateway verifies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TxKind,
    pub ts: i64,
    pub data: String,
}

impl Transaction {
    /// Client-side reference for this transaction: `{ts}.{sha256(data)}`.
    ///
    /// Lets the caller correlate a submission with gateway records without
    /// waiting for a server-assigned id.
    pub fn tx_ref(&self) -> String {
        let digest = Sha256::digest(self.data.as_bytes());
        format!("{}.{}", self.ts, hex::encode(digest))
    }
}

/// Signed transaction envelope, as the gateway expects it inside
/// JSON-RPC params.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedMessage {
    /// Hex-encoded Ed25519 public key of the sender
    pub sender: String,
    /// Hex-encoded Ed25519 signature over `data`
    pub signature: String,
    /// Serialized [`Transaction`] the signature covers
    pub data: String,
}
