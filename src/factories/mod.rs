// src/factories/mod.rs

mod macos_application;
mod windows_application;

pub use macos_application::MacOSWindowApplication;
pub use windows_application::WindowsWindowApplication;

use crate::ports::WindowApplication;
use crate::{DemoError, Platform};
use tracing::{debug, warn};

/// Picks the widget factory for the selected platform.
///
/// # Arguments
/// * `selection` - Platform chosen at compile or config time
///
/// # Returns
/// * `Ok(Box<dyn WindowApplication>)` - Factory for the platform's family
/// * `Err(DemoError::NoPlatformSelected)` - No platform was chosen
pub fn select_application(
    selection: Option<Platform>,
) -> Result<Box<dyn WindowApplication>, DemoError> {
    let application: Box<dyn WindowApplication> = match selection {
        Some(Platform::Windows) => Box::new(WindowsWindowApplication),
        Some(Platform::MacOS) => Box::new(MacOSWindowApplication),
        None => {
            warn!("no platform selected, refusing to create a widget factory");
            return Err(DemoError::NoPlatformSelected);
        }
    };

    debug!(platform = %application.platform(), "selected widget factory");
    Ok(application)
}
