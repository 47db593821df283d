//! Custom hooks.
pub mod use_deferred;

// Re-exports
pub use use_deferred::{use_deferred, DeferredResult};
