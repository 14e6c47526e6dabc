use gpui::{AnyView, Context, Window};

use crate::services::cloud_storage::Locale;
use crate::workspace::StoryBrowser;

use super::fake_store::FakeStoreConfig;
use super::frame::ViewportFrame;
use super::generator::FixtureSettings;

/// A story renders a component with mock state for preview.
///
/// Each call to [`build`](Story::build) mounts a fresh instance with its own
/// state; the browser drops it when another story is selected.
pub trait Story {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    /// Grouping title, `Section/Component`.
    fn title(&self) -> &'static str;
    fn arg_types(&self) -> Vec<ArgType> {
        vec![]
    }
    fn build(&self, ctx: StoryContext, window: &mut Window, cx: &mut Context<StoryBrowser>)
        -> AnyView;
}

/// A story argument as listed in the browser's Controls panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgType {
    pub name: &'static str,
    /// Set when the story overrides the argument internally.
    pub control_disabled: bool,
}

impl ArgType {
    pub fn disabled(name: &'static str) -> Self {
        Self {
            name,
            control_disabled: true,
        }
    }
}

/// Everything a story receives from the browser when it is mounted.
pub struct StoryContext {
    /// Instrumentation handlers, recorded in the Actions panel.
    pub args: FakeStoreConfig,
    pub seed: Option<u64>,
    pub fixture: FixtureSettings,
    pub frame: ViewportFrame,
    pub locale: Locale,
}
