/*
[INPUT]:  Terminal checkout outcomes
[OUTPUT]: Delivery to the host's result channel
[POS]:    Checkout layer - result delivery abstraction
[UPDATE]: When adding new delivery channels
*/

use std::sync::Mutex;

use async_trait::async_trait;

use crate::rpc::Result;
use crate::types::CheckoutOutcome;

/// Trait for delivering checkout outcomes to the host.
///
/// The embedding page receives outcomes over its message channel; native
/// hosts print them or forward them to a callback. The trait is async to
/// support channels that need I/O.
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Deliver a terminal outcome to the host
    async fn deliver(&self, outcome: &CheckoutOutcome) -> Result<()>;
}

/// Sink that buffers outcomes in memory, for tests and polling hosts
#[derive(Default)]
pub struct MemorySink {
    delivered: Mutex<Vec<CheckoutOutcome>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything delivered so far
    pub fn take(&self) -> Vec<CheckoutOutcome> {
        std::mem::take(&mut *self.delivered.lock().unwrap())
    }
}

#[async_trait]
impl ResultSink for MemorySink {
    async fn deliver(&self, outcome: &CheckoutOutcome) -> Result<()> {
        self.delivered.lock().unwrap().push(outcome.clone());
        Ok(())
    }
}
