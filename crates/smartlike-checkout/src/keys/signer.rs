/*
[INPUT]:  Account secret phrase or raw seed bytes
[OUTPUT]: Ed25519 signatures and hex-encoded public keys
[POS]:    Keys layer - deterministic account key derivation and signing
[UPDATE]: When changing derivation or signature encoding
*/

use blake2::{Blake2b512, Digest};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier};
use zeroize::Zeroize;

use super::mnemonic;
use crate::rpc::Result;
use crate::types::{SignedMessage, Transaction};

/// Ed25519 signer for a Smartlike account.
///
/// The seed is the first 32 bytes of the BLAKE2b-512 digest of the phrase
/// text itself, not of the BIP-39 entropy. This matches the embed widget's
/// derivation, so accounts created there keep their keys here.
#[derive(Debug)]
pub struct AccountSigner {
    signing_key: SigningKey,
}

impl AccountSigner {
    /// Validate a mnemonic phrase and derive the account keypair from it
    pub fn from_mnemonic(phrase: &str) -> Result<Self> {
        mnemonic::validate_mnemonic(phrase)?;
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&Blake2b512::digest(phrase.as_bytes())[..32]);
        let signer = Self::from_seed(&seed);
        seed.zeroize();
        Ok(signer)
    }

    /// Create a signer from raw seed bytes (32 bytes)
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Get the public key in lowercase hex (the account's sender id)
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.signing_key.verifying_key().as_bytes())
    }

    /// Get the raw public key bytes
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Sign a message, returning `(public_key_hex, signature_hex)`
    pub fn sign_hex(&self, message: &str) -> (String, String) {
        let signature = self.signing_key.sign(message.as_bytes());
        (self.public_key_hex(), hex::encode(signature.to_bytes()))
    }

    /// Serialize and sign a transaction, producing the wire envelope
    pub fn sign_transaction(&self, tx: &Transaction) -> Result<SignedMessage> {
        let data = serde_json::to_string(tx)?;
        let (sender, signature) = self.sign_hex(&data);
        Ok(SignedMessage {
            sender,
            signature,
            data,
        })
    }

    /// Verify a hex-encoded signature against a message
    pub fn verify(&self, message: &str, signature_hex: &str) -> bool {
        let Ok(bytes) = hex::decode(signature_hex) else {
            return false;
        };
        let Ok(signature) = Signature::from_slice(&bytes) else {
            return false;
        };
        self.signing_key
            .verifying_key()
            .verify(message.as_bytes(), &signature)
            .is_ok()
    }
}
