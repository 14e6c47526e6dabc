//! Keyboard navigation and keybindings module.
//!
//! This module provides keyboard support for the story browser, including:
//!
//! - Global shortcuts (help overlay)
//! - Story navigation and addon panel toggles
//! - Cloud storage container shortcuts (rename, upload panel)
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::keybindings;
//!
//! // In main.rs, before opening the window:
//! keybindings::init(cx);
//! ```

pub mod actions;
pub mod bindings;

use gpui::App;

// Re-export action namespaces for convenience
pub use actions::cloud_storage;
pub use actions::global;
pub use actions::story;
pub use bindings::register_keybindings;

/// Initialize the keybindings system.
///
/// This should be called once during application startup.
pub fn init(cx: &mut App) {
    register_keybindings(cx);
}
