mod story;
mod story_actions;

pub use story::*;
pub use story_actions::*;
