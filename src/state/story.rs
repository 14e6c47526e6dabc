//! Story browser state management.
//!
//! This module manages the global state shared by the story browser: the
//! loaded configuration and the selected story.

use gpui::*;

use crate::config::StoryConfig;
use crate::stories::{all_stories, story_index};

/// Global state for the story browser.
pub struct StoryState {
    /// Configuration loaded at startup.
    pub config: StoryConfig,
    /// Index of the selected story in the registry.
    pub selected_story: usize,
    /// Number of registered stories.
    pub story_count: usize,
}

impl Global for StoryState {}

impl StoryState {
    /// Initialize the global story state.
    pub fn init(config: StoryConfig, cx: &mut App) {
        let selected_story = config
            .initial_story
            .as_deref()
            .and_then(story_index)
            .unwrap_or(0);

        cx.set_global(StoryState {
            config,
            selected_story,
            story_count: all_stories().len(),
        });
    }
}
