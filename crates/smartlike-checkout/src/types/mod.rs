/*
[INPUT]:  Checkout schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for checkout and network wire format
[UPDATE]: When the checkout schema or gateway wire format changes
*/

pub mod action;
pub mod outcome;
pub mod params;
pub mod transaction;

pub use action::*;
pub use outcome::*;
pub use params::*;
pub use transaction::*;
