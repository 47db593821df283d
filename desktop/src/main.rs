//! Lazy Tilt: a tilt component loaded on first demand.
mod app;
mod components;
mod constants;

use constants::MAX_LOG_LEVEL;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;
use tracing_web::{performance_layer, MakeConsoleWriter};

fn main() {
    init_logging(MAX_LOG_LEVEL);
    tracing::debug!("mounting app");
    yew::Renderer::<app::App>::new().render();
}

/// Sends events to the browser console and marks them on the performance timeline.
fn init_logging(max_level: LevelFilter) {
    // browsers lack ANSI support and `std::time`
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(MakeConsoleWriter)
        .with_filter(max_level);

    let timeline = performance_layer()
        .with_details_from_fields(Pretty::default())
        .with_filter(max_level);

    tracing_subscriber::registry()
        .with(console)
        .with(timeline)
        .init();
}
