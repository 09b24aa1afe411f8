use std::process::ExitCode;

use anyhow::Result;

use tock_engine::device::GpuInit;
use tock_engine::logging::{init_logging, LoggingConfig};
use tock_engine::resource;
use tock_engine::window::{Runtime, RuntimeConfig};

mod app;

use app::{ClockApp, CANVAS, FONT_FILE, TICK_INTERVAL};

const WINDOW_TITLE: &str = "Hello World!";

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Resolve assets before opening a window; a missing root is fatal.
    let font_path = resource::require_resource_file(FONT_FILE)?;

    let config = RuntimeConfig {
        title: WINDOW_TITLE.to_string(),
        canvas: CANVAS,
        frame_interval: TICK_INTERVAL,
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::default(), ClockApp::new(font_path))
}
