//! Application components.
pub mod tilt;
