pub mod native_widgets;
pub mod window;

pub use native_widgets::*;
pub use window::*;
