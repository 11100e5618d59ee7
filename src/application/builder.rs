// src/application/builder.rs

use crate::ports::WindowBuilder;
use crate::services::WindowCreationManager;
use crate::{DemoConfig, DemoError, MacOSWindowBuilder, WindowsWindowBuilder};
use std::io::Write;
use tracing::info;

/// Builds and prints a default window, then a freshly reset titled one.
fn demonstrate(
    manager: &WindowCreationManager,
    builder: &mut dyn WindowBuilder,
    custom_title: &str,
    out: &mut dyn Write,
) -> Result<(), DemoError> {
    info!(platform = %builder.platform(), "running builder demo");

    manager.create_default_window(builder);
    builder.window().print_structure(out)?;

    builder.reset();
    manager.create_window_with_title(builder, custom_title);
    builder.window().print_structure(out)?;

    Ok(())
}

pub fn run_client(
    manager: &WindowCreationManager,
    custom_title: &str,
    out: &mut dyn Write,
) -> Result<(), DemoError> {
    let mut windows = WindowsWindowBuilder::new();
    demonstrate(manager, &mut windows, custom_title, out)?;

    let mut macos = MacOSWindowBuilder::new();
    demonstrate(manager, &mut macos, custom_title, out)?;

    Ok(())
}

pub fn run(config: &DemoConfig, out: &mut dyn Write) -> Result<(), DemoError> {
    let manager = WindowCreationManager::new();
    run_client(&manager, &config.custom_title, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_demo_output() {
        let mut out = Vec::new();
        run(&DemoConfig::default(), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Window: Standard Windows; Menubar: Windows default; Window title: New Window;Background color: Windows default; ",
                "Window: Standard Windows; Menubar: Windows default; Window title: New title;Background color: Windows default; ",
                "Window: Standard MacOS; Menubar: MacOS default; Window title: New Window;Background color: MacOS default; ",
                "Window: Standard MacOS; Menubar: MacOS default; Window title: New title;Background color: MacOS default; ",
            ]
        );
    }

    #[test]
    fn test_custom_title_replaces_second_build() {
        let config = DemoConfig::default().with_custom_title("Settings");
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert_eq!(output.matches("Window title: Settings;").count(), 2);
        assert_eq!(output.matches("Window title: New Window;").count(), 2);
    }
}
