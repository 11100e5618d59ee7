// src/application/abstract_factory.rs

use crate::factories::select_application;
use crate::ports::WindowApplication;
use crate::{DemoConfig, DemoError};
use std::io::Write;
use tracing::{debug, info};

/// Status returned when no platform is selected.
pub const NO_PLATFORM_STATUS: u8 = 1;

/// Exercises one widget family through the abstract factory only.
pub fn run_client(
    application: &dyn WindowApplication,
    greeting: &str,
    out: &mut dyn Write,
) -> Result<(), DemoError> {
    let button = application.create_button();
    let mut text_edit = application.create_text_edit();

    button.click(out)?;
    text_edit.set_text(greeting.to_string(), out)?;
    writeln!(out, "Text edit have text -> {}", text_edit.text())?;

    Ok(())
}

pub fn run(config: &DemoConfig, out: &mut dyn Write) -> Result<(), DemoError> {
    let application = select_application(config.platform)?;
    info!(platform = %application.platform(), "running abstract factory demo");
    run_client(application.as_ref(), &config.greeting, out)
}

/// Runs the demo and turns the outcome into a process exit status.
///
/// A missing platform is reported on `out` and yields
/// [`NO_PLATFORM_STATUS`]; any other error propagates.
pub fn run_program(config: &DemoConfig, out: &mut dyn Write) -> Result<u8, DemoError> {
    match run(config, out) {
        Ok(()) => Ok(0),
        Err(DemoError::NoPlatformSelected) => {
            debug!("exiting early, no platform selected");
            writeln!(out, "{}", DemoError::NoPlatformSelected)?;
            Ok(NO_PLATFORM_STATUS)
        }
        Err(e) => Err(e),
    }
}
