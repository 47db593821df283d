//! Suspense components.
pub mod fallback_loading;

// Re-exports
pub use fallback_loading::Loading;
