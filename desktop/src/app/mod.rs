//! Main application.
pub mod app;
pub mod show_tilt_state;

// Re-exports
pub use app::App;
pub use show_tilt_state::{ShowTiltAction, ShowTiltReducer, ShowTiltState};
