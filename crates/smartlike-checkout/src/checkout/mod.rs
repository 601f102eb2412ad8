/*
[INPUT]:  Checkout requests, secrets, and a network client
[OUTPUT]: Completed checkouts delivered to the host
[POS]:    Checkout layer - pipeline orchestration and result delivery
[UPDATE]: When pipeline flow or delivery semantics change
*/

pub mod session;
pub mod sink;

pub use session::{CheckoutSession, CheckoutState};
pub use sink::{MemorySink, ResultSink};
