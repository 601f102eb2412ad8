/*
[INPUT]:  Account secrets and signing requests
[OUTPUT]: Validated mnemonics, derived keypairs, signatures
[POS]:    Keys layer - account secret handling and Ed25519 signing
[UPDATE]: When derivation, validation or secret sourcing changes
*/

pub mod mnemonic;
pub mod provider;
pub mod signer;

pub use mnemonic::{Secret, generate_mnemonic, validate_mnemonic};
pub use provider::{SecretProvider, StaticSecretProvider, resolve_secret};
pub use signer::AccountSigner;
