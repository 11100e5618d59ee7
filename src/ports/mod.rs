// src/ports/mod.rs

pub use widgets::{Button, TextEdit};
pub use window_application::WindowApplication;
pub use window_builder::WindowBuilder;

pub mod widgets;
pub mod window_application;
pub mod window_builder;
