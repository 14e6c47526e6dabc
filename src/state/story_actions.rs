//! Story state actions.
//!
//! This module contains actions that modify the global StoryState.

use gpui::*;

use super::story::StoryState;

/// Select the story at `index`, ignoring out-of-range indices.
pub fn select_story(index: usize, cx: &mut App) {
    cx.update_global::<StoryState, _>(|state, _cx| {
        if index < state.story_count {
            state.selected_story = index;
        } else {
            tracing::warn!(index, "No story at index");
        }
    });
}

/// Select the next story, wrapping around.
pub fn select_next_story(cx: &mut App) {
    cx.update_global::<StoryState, _>(|state, _cx| {
        state.selected_story = step_index(state.selected_story, 1, state.story_count);
    });
}

/// Select the previous story, wrapping around.
pub fn select_previous_story(cx: &mut App) {
    cx.update_global::<StoryState, _>(|state, _cx| {
        state.selected_story = step_index(state.selected_story, -1, state.story_count);
    });
}

fn step_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::prelude::v1::test;

    #[test]
    fn test_step_index_wraps() {
        assert_eq!(step_index(0, 1, 2), 1);
        assert_eq!(step_index(1, 1, 2), 0);
        assert_eq!(step_index(0, -1, 2), 1);
        assert_eq!(step_index(0, -1, 0), 0);
    }
}
