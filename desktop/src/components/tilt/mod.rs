//! Tilt effect.
pub mod options;
pub mod tilt;
pub mod tilt_module;
pub mod transform;

// Re-exports
pub use tilt_module::TiltModule;
