use crate::{DemoError, Platform};
use std::io::Write;

/// Window description assembled by a [`crate::ports::WindowBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    platform: Platform,
    structure: String,
}

impl Window {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            structure: String::new(),
        }
    }

    /// Returns the platform the window is built for.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns the accumulated description.
    pub fn structure(&self) -> &str {
        &self.structure
    }

    pub fn is_empty(&self) -> bool {
        self.structure.is_empty()
    }

    pub(crate) fn append(&mut self, fragment: &str) {
        self.structure.push_str(fragment);
    }

    pub fn print_structure(&self, out: &mut dyn Write) -> Result<(), DemoError> {
        writeln!(out, "{}", self.structure)?;
        Ok(())
    }
}
