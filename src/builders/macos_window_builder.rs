use crate::ports::WindowBuilder;
use crate::{Platform, Window};
use tracing::debug;

/// Builds window descriptions in the MacOS style.
#[derive(Debug, Clone)]
pub struct MacOSWindowBuilder {
    window: Window,
}

impl MacOSWindowBuilder {
    pub fn new() -> Self {
        Self {
            window: Window::new(Platform::MacOS),
        }
    }
}

impl Default for MacOSWindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowBuilder for MacOSWindowBuilder {
    fn platform(&self) -> Platform {
        Platform::MacOS
    }

    fn create_native_window(&mut self) {
        debug!("macos builder: native window");
        self.window.append("Window: Standard MacOS; ");
    }

    fn add_menubar(&mut self) {
        debug!("macos builder: menubar");
        self.window.append("Menubar: MacOS default; ");
    }

    fn set_title(&mut self, title: &str) {
        debug!(title, "macos builder: title");
        self.window.append(&format!("Window title: {};", title));
    }

    fn set_default_background_color(&mut self) {
        debug!("macos builder: background color");
        self.window.append("Background color: MacOS default; ");
    }

    fn reset(&mut self) {
        self.window = Window::new(Platform::MacOS);
    }

    fn window(&self) -> &Window {
        &self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_not_validated() {
        let mut builder = MacOSWindowBuilder::new();
        builder.set_title("");
        assert_eq!(builder.window().structure(), "Window title: ;");
    }

    #[test]
    fn test_steps_after_window_keep_accumulating() {
        let mut builder = MacOSWindowBuilder::new();
        builder.create_native_window();
        let snapshot = builder.window().structure().to_string();

        builder.add_menubar();

        assert_eq!(
            builder.window().structure(),
            format!("{}Menubar: MacOS default; ", snapshot)
        );
    }
}
