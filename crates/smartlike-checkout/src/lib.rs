/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Smartlike checkout crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod checkout;
pub mod keys;
pub mod rpc;
pub mod types;

// Re-export commonly used types from checkout
pub use checkout::{
    CheckoutSession,
    CheckoutState,
    MemorySink,
    ResultSink,
};

// Re-export commonly used types from keys
pub use keys::{
    AccountSigner,
    Secret,
    SecretProvider,
    StaticSecretProvider,
    generate_mnemonic,
    resolve_secret,
    validate_mnemonic,
};

// Re-export commonly used types from rpc
pub use rpc::{
    CheckoutError,
    ClientConfig,
    NetworkClient,
    Result,
};

// Re-export all types
pub use types::*;
