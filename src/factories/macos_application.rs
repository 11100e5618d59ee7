// src/factories/macos_application.rs

use crate::ports::{Button, TextEdit, WindowApplication};
use crate::{MacOSButton, MacOSTextEdit, Platform};
use tracing::debug;

/// Factory for the MacOS widget family.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacOSWindowApplication;

impl WindowApplication for MacOSWindowApplication {
    fn platform(&self) -> Platform {
        Platform::MacOS
    }

    fn create_button(&self) -> Box<dyn Button> {
        debug!("creating MacOS button");
        Box::new(MacOSButton)
    }

    fn create_text_edit(&self) -> Box<dyn TextEdit> {
        debug!("creating MacOS text edit");
        Box::new(MacOSTextEdit::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_share_family() {
        let application = MacOSWindowApplication;

        assert_eq!(application.create_button().platform(), Platform::MacOS);
        assert_eq!(application.create_text_edit().platform(), Platform::MacOS);
    }

    #[test]
    fn test_each_text_edit_is_new() {
        let application = MacOSWindowApplication;
        let mut first = application.create_text_edit();
        first.set_text("changed".to_string(), &mut Vec::new()).unwrap();

        let second = application.create_text_edit();
        assert_eq!(second.text(), "");
    }
}
