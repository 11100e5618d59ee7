mod window_creation_manager;

pub use window_creation_manager::{DEFAULT_WINDOW_TITLE, WindowCreationManager};
