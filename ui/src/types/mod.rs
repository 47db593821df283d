//! Common types.
pub mod message;

// Re-exports
pub use message::{Message, MessageType};
