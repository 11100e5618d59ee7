use crate::Platform;
use crate::ports::{Button, TextEdit};

/// Abstract factory for one family of native widgets.
///
/// Every product handed out by an implementation belongs to the same
/// platform, so a client that only talks to this trait can never mix
/// widgets from different families.
pub trait WindowApplication {
    fn platform(&self) -> Platform;

    fn create_button(&self) -> Box<dyn Button>;

    fn create_text_edit(&self) -> Box<dyn TextEdit>;
}
