/*
[INPUT]:  User-supplied secret phrases and OS entropy
[OUTPUT]: Validated BIP-39 mnemonics and zeroizing secret wrappers
[POS]:    Keys layer - account secret handling
[UPDATE]: When changing phrase length or validation rules
*/

use bip39::{Language, Mnemonic};
use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::rpc::Result;

/// Entropy size for generated secrets (16 bytes -> 12 words)
const GENERATED_ENTROPY_BYTES: usize = 16;

/// Account secret phrase, wiped from memory on drop.
///
/// Holds the raw text the user entered (or a freshly generated phrase),
/// not a parsed mnemonic: derivation hashes the text itself.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secret(String);

impl Secret {
    /// Wrap a secret phrase
    pub fn new(phrase: impl Into<String>) -> Self {
        Self(phrase.into())
    }

    /// Borrow the phrase text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the phrase is empty (no secret entered or stored)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validate that a phrase is a well-formed English BIP-39 mnemonic
///
/// Checks word list membership, word count and checksum. Surrounding
/// whitespace is tolerated; word case is not.
pub fn validate_mnemonic(phrase: &str) -> Result<()> {
    Mnemonic::parse_in(Language::English, phrase)?;
    Ok(())
}

/// Generate a new 12-word account secret from OS entropy
pub fn generate_mnemonic() -> Result<Secret> {
    let mut entropy = [0u8; GENERATED_ENTROPY_BYTES];
    OsRng.fill_bytes(&mut entropy);
    let mnemonic = Mnemonic::from_entropy(&entropy)?;
    entropy.zeroize();
    Ok(Secret::new(mnemonic.to_string()))
}
