//! Action definitions for keyboard navigation.
//!
//! This module defines all the action types that can be triggered via keyboard shortcuts.

// ============================================================================
// Global Actions - Work in any context
// ============================================================================

pub mod global {
    use gpui::actions;

    actions!(
        global,
        [
            // Focus
            Escape,
            // Help
            ShowHelp,
            HideHelp,
        ]
    );
}

// ============================================================================
// Story Browser Actions
// ============================================================================

pub mod story {
    use gpui::actions;

    actions!(
        story,
        [
            NextStory,
            PreviousStory,
            RemountStory,
            ToggleAddonsPanel,
            ClearActions,
        ]
    );
}

// ============================================================================
// Cloud Storage Actions
// ============================================================================

pub mod cloud_storage {
    use gpui::actions;

    actions!(cloud_storage, [CancelRename, ToggleUploadPanel]);
}
