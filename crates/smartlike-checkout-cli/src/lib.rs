/*
[INPUT]:  Public API exports for smartlike-checkout-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;

// Re-export main types for convenience
pub use config::CliConfig;
