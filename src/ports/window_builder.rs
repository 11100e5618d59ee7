use crate::{Platform, Window};

/// Step-wise assembly of a platform [`Window`].
///
/// Each step appends one fragment to the product currently held by the
/// builder. Nothing is cleared between builds: callers that want a fresh
/// window must call [`WindowBuilder::reset`] themselves.
pub trait WindowBuilder {
    fn platform(&self) -> Platform;

    fn create_native_window(&mut self);

    fn add_menubar(&mut self);

    fn set_title(&mut self, title: &str);

    fn set_default_background_color(&mut self);

    /// Discards the current product and starts an empty one.
    fn reset(&mut self);

    /// Returns the product built so far without resetting it.
    fn window(&self) -> &Window;
}
