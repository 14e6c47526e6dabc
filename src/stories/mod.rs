//! Component stories.
//!
//! A story mounts a component with mock state so it can be inspected in the
//! story browser. Stories receive instrumentation handlers from the browser
//! and report every handler call to its Actions panel.
//!
//! # Usage
//!
//! ```ignore
//! use crate::stories::{ArgType, Story, StoryContext};
//!
//! pub struct MyComponentStory;
//!
//! impl Story for MyComponentStory {
//!     fn id(&self) -> &'static str { "section-mycomponent--default" }
//!     fn name(&self) -> &'static str { "Default" }
//!     fn title(&self) -> &'static str { "Section/MyComponent" }
//!     fn build(&self, ctx: StoryContext, window: &mut Window, cx: &mut Context<StoryBrowser>) -> AnyView {
//!         MyComponent::view(window, cx).into()
//!     }
//! }
//!
//! // Register it in registry::all_stories()
//! ```

mod actions;
mod cloud_storage;
mod fake_store;
mod frame;
mod generator;
mod registry;
mod story;

pub use actions::{ActionLog, ActionRecord};
pub use cloud_storage::{
    create_fake_store, fake_store_arg_types, CompactModeStory, LayoutMode, OverviewStory,
};
pub use fake_store::{FakeCloudStorage, FakeStoreConfig};
pub use frame::ViewportFrame;
pub use generator::{FixtureSettings, MockDataGenerator};
pub use registry::{all_stories, all_titles, story_index};
pub use story::{ArgType, Story, StoryContext};
