mod container;
mod story_frame;

pub use container::*;
pub use story_frame::*;
