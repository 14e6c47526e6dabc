mod cloud_storage;
#[cfg(feature = "keyboard-nav")]
mod help_overlay;
mod story_browser;

pub use cloud_storage::*;
pub use story_browser::*;
