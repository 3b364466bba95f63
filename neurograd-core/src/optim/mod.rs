//! Optimizers for training modules.
//!
//! Node values are immutable once computed, so an optimizer step does not
//! write into parameters. It swaps each parameter handle held by the module
//! for a fresh leaf carrying the updated value.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
