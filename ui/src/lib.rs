//! Deferred components and shared widgets.
pub mod components;
pub mod deferred;
pub mod error;
pub mod hooks;
pub mod types;
pub mod widgets;

// Re-exports
pub use error::{Error, Result};
