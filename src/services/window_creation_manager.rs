use crate::ports::WindowBuilder;
use tracing::debug;

pub const DEFAULT_WINDOW_TITLE: &str = "New Window";

/// Director that drives a [`WindowBuilder`] through fixed recipes.
///
/// The manager never owns a builder. It borrows whichever one the caller
/// hands in for the length of a single recipe, and it does not reset the
/// builder first, so consecutive recipes on the same builder accumulate.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowCreationManager;

impl WindowCreationManager {
    pub fn new() -> Self {
        Self
    }

    /// Builds a window titled [`DEFAULT_WINDOW_TITLE`].
    pub fn create_default_window(&self, builder: &mut dyn WindowBuilder) {
        self.create_window_with_title(builder, DEFAULT_WINDOW_TITLE);
    }

    pub fn create_window_with_title(&self, builder: &mut dyn WindowBuilder, title: &str) {
        debug!(platform = %builder.platform(), title, "running window recipe");
        builder.create_native_window();
        builder.add_menubar();
        builder.set_title(title);
        builder.set_default_background_color();
    }
}
