mod macos_window_builder;
mod windows_window_builder;

pub use macos_window_builder::MacOSWindowBuilder;
pub use windows_window_builder::WindowsWindowBuilder;
