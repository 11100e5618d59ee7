use crate::ports::{Button, TextEdit};
use crate::{DemoError, Platform};
use std::io::Write;
use tracing::debug;

#[derive(Debug, Default, Clone)]
pub struct WindowsButton;

impl Button for WindowsButton {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn click(&self, out: &mut dyn Write) -> Result<(), DemoError> {
        debug!(platform = %self.platform(), "button clicked");
        writeln!(out, "Windows button was clicked")?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct WindowsTextEdit {
    text: String,
}

impl TextEdit for WindowsTextEdit {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String, out: &mut dyn Write) -> Result<(), DemoError> {
        self.text = text;
        writeln!(out, "Windows TextEdit text set to '{}'", self.text)?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MacOSButton;

impl Button for MacOSButton {
    fn platform(&self) -> Platform {
        Platform::MacOS
    }

    fn click(&self, out: &mut dyn Write) -> Result<(), DemoError> {
        debug!(platform = %self.platform(), "button clicked");
        writeln!(out, "MacOS button was clicked")?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MacOSTextEdit {
    text: String,
}

impl TextEdit for MacOSTextEdit {
    fn platform(&self) -> Platform {
        Platform::MacOS
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String, out: &mut dyn Write) -> Result<(), DemoError> {
        self.text = text;
        writeln!(out, "MacOS TextEdit text set to '{}'", self.text)?;
        Ok(())
    }
}
