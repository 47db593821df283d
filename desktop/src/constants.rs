//! Constant values.
use tracing::level_filters::LevelFilter;

/// Most verbose level logged to the console.
pub const MAX_LOG_LEVEL: LevelFilter = LevelFilter::DEBUG;

/// Label of the visibility checkbox.
pub static SHOW_TILT_LABEL: &str = " show tilt";

/// Placeholder shown while the tilt module loads.
pub static LOADING_TILT_TEXT: &str = "loading tilt...";

/// Content rendered inside the tilt.
pub static TILT_CONTENT_TEXT: &str = "This is tilted!";

/// Simulated latency of fetching the tilt module, in milliseconds.
pub static TILT_LOAD_DELAY_MS: u32 = 800;

/// Tilt module manifest.
pub static TILT_MANIFEST: &str = include_str!("./components/tilt/tilt.json");

#[cfg(test)]
#[path = "./constants_test.rs"]
mod constants_test;
