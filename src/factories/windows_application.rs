// src/factories/windows_application.rs

use crate::ports::{Button, TextEdit, WindowApplication};
use crate::{WindowsButton, WindowsTextEdit, Platform};
use tracing::debug;

/// Factory for the Windows widget family.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsWindowApplication;

impl WindowApplication for WindowsWindowApplication {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn create_button(&self) -> Box<dyn Button> {
        debug!("creating Windows button");
        Box::new(WindowsButton)
    }

    fn create_text_edit(&self) -> Box<dyn TextEdit> {
        debug!("creating Windows text edit");
        Box::new(WindowsTextEdit::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_share_family() {
        let application = WindowsWindowApplication;

        assert_eq!(application.create_button().platform(), Platform::Windows);
        assert_eq!(application.create_text_edit().platform(), Platform::Windows);
    }

    #[test]
    fn test_each_text_edit_is_new() {
        let application = WindowsWindowApplication;
        let mut first = application.create_text_edit();
        first.set_text("changed".to_string(), &mut Vec::new()).unwrap();

        let second = application.create_text_edit();
        assert_eq!(second.text(), "");
    }
}
