//! Deferred resources.
//!
//! A [`Deferred`] wraps a loader that is invoked on first demand only.
//! The result, success or failure, is memoized for the life of the UI thread.
pub mod deferred;
pub mod registry;

// Re-exports
pub use deferred::{Deferred, DeferredStatus, Demand, LoadFuture};
pub use registry::request_deferred;
