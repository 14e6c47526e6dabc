//! Default keybinding definitions.
//!
//! This module defines all the default keyboard shortcuts for the application.

use gpui::{App, KeyBinding};

use super::actions::cloud_storage::*;
use super::actions::global::*;
use super::actions::story::*;

/// Register all default keybindings with the application.
pub fn register_keybindings(cx: &mut App) {
    cx.bind_keys(global_bindings());
    cx.bind_keys(story_bindings());
    cx.bind_keys(cloud_storage_bindings());
}

/// Global keybindings that work in any context.
fn global_bindings() -> Vec<KeyBinding> {
    vec![
        // Help
        KeyBinding::new("shift-/", ShowHelp, None), // ? key
        // Escape
        KeyBinding::new("escape", Escape, None),
    ]
}

/// Story browser keybindings.
fn story_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("alt-down", NextStory, Some("StoryBrowser")),
        KeyBinding::new("alt-up", PreviousStory, Some("StoryBrowser")),
        KeyBinding::new("cmd-r", RemountStory, Some("StoryBrowser")),
        KeyBinding::new("cmd-shift-a", ToggleAddonsPanel, Some("StoryBrowser")),
        KeyBinding::new("cmd-k", ClearActions, Some("StoryBrowser")),
    ]
}

/// Cloud storage container keybindings.
fn cloud_storage_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("escape", CancelRename, Some("CloudStorageContainer")),
        KeyBinding::new("cmd-u", ToggleUploadPanel, Some("CloudStorageContainer")),
    ]
}

/// Helper struct for displaying keybinding information in the help overlay.
#[derive(Clone)]
pub struct KeybindingInfo {
    pub key: &'static str,
    pub description: &'static str,
    pub context: Option<&'static str>,
}

/// Get all keybindings for display in help overlay.
pub fn get_all_keybindings() -> Vec<(&'static str, Vec<KeybindingInfo>)> {
    vec![
        (
            "Global",
            vec![
                KeybindingInfo {
                    key: "?",
                    description: "Show this help",
                    context: None,
                },
                KeybindingInfo {
                    key: "Esc",
                    description: "Close help",
                    context: None,
                },
            ],
        ),
        (
            "Stories",
            vec![
                KeybindingInfo {
                    key: "Alt+Down",
                    description: "Next story",
                    context: Some("Stories"),
                },
                KeybindingInfo {
                    key: "Alt+Up",
                    description: "Previous story",
                    context: Some("Stories"),
                },
                KeybindingInfo {
                    key: "Cmd+R",
                    description: "Remount with fresh data",
                    context: Some("Stories"),
                },
                KeybindingInfo {
                    key: "Cmd+Shift+A",
                    description: "Toggle addons panel",
                    context: Some("Stories"),
                },
                KeybindingInfo {
                    key: "Cmd+K",
                    description: "Clear actions",
                    context: Some("Stories"),
                },
            ],
        ),
        (
            "Cloud Storage",
            vec![
                KeybindingInfo {
                    key: "Esc",
                    description: "Cancel rename",
                    context: Some("Cloud Storage"),
                },
                KeybindingInfo {
                    key: "Cmd+U",
                    description: "Expand / collapse uploads",
                    context: Some("Cloud Storage"),
                },
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_sections() {
        let sections = get_all_keybindings();
        let names: Vec<&str> = sections.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["Global", "Stories", "Cloud Storage"]);
        assert!(sections.iter().all(|(_, bindings)| !bindings.is_empty()));
    }
}
