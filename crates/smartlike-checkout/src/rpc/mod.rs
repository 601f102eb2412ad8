/*
[INPUT]:  Client configuration and signed transactions
[OUTPUT]: Gateway replies and typed errors
[POS]:    RPC layer - network gateway communication
[UPDATE]: When adding gateway methods or changing client behavior
*/

pub mod client;
pub mod error;

pub use error::{CheckoutError, Result};

pub use client::{ClientConfig, NetworkClient};
