use crate::ports::WindowBuilder;
use crate::{Platform, Window};
use tracing::debug;

/// Builds window descriptions in the Windows style.
#[derive(Debug, Clone)]
pub struct WindowsWindowBuilder {
    window: Window,
}

impl WindowsWindowBuilder {
    pub fn new() -> Self {
        Self {
            window: Window::new(Platform::Windows),
        }
    }
}

impl Default for WindowsWindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowBuilder for WindowsWindowBuilder {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn create_native_window(&mut self) {
        debug!("windows builder: native window");
        self.window.append("Window: Standard Windows; ");
    }

    fn add_menubar(&mut self) {
        debug!("windows builder: menubar");
        self.window.append("Menubar: Windows default; ");
    }

    fn set_title(&mut self, title: &str) {
        debug!(title, "windows builder: title");
        self.window.append(&format!("Window title: {};", title));
    }

    fn set_default_background_color(&mut self) {
        debug!("windows builder: background color");
        self.window.append("Background color: Windows default; ");
    }

    fn reset(&mut self) {
        self.window = Window::new(Platform::Windows);
    }

    fn window(&self) -> &Window {
        &self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builder_holds_empty_window() {
        let builder = WindowsWindowBuilder::new();
        assert!(builder.window().is_empty());
        assert_eq!(builder.window().platform(), Platform::Windows);
    }

    #[test]
    fn test_steps_append_in_call_order() {
        let mut builder = WindowsWindowBuilder::new();
        builder.create_native_window();
        builder.add_menubar();
        builder.set_title("Editor");
        builder.set_default_background_color();

        assert_eq!(
            builder.window().structure(),
            "Window: Standard Windows; Menubar: Windows default; \
             Window title: Editor;Background color: Windows default; "
        );
    }

    #[test]
    fn test_reset_discards_fragments() {
        let mut builder = WindowsWindowBuilder::new();
        builder.create_native_window();
        builder.reset();

        assert!(builder.window().is_empty());
    }
}
