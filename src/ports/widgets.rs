use crate::{DemoError, Platform};
use std::io::Write;

pub trait Button {
    fn platform(&self) -> Platform;

    /// Handles a click and reports it to `out`.
    fn click(&self, out: &mut dyn Write) -> Result<(), DemoError>;
}

pub trait TextEdit {
    fn platform(&self) -> Platform;

    fn text(&self) -> &str;

    /// Replaces the current text and reports the change to `out`.
    fn set_text(&mut self, text: String, out: &mut dyn Write) -> Result<(), DemoError>;
}
