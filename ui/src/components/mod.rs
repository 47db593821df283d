//! UI Components
pub mod lazy;
pub mod messages;

// Re-exports
pub use lazy::{DeferredModule, Lazy};
pub use messages::Message;
