//! Widgets.
pub mod suspense;
