//! Stories for the cloud storage container.

use gpui::{AnyView, Context, Window};

use crate::services::cloud_storage::{CloudStorageCommands, CloudStorageHandlers};
use crate::workspace::{CloudStorageStory, StoryBrowser};

use super::fake_store::FakeCloudStorage;
use super::generator::MockDataGenerator;
use super::story::{ArgType, Story, StoryContext};

pub const TITLE: &str = "CloudStorage/CloudStorageContainer";

/// Layout variant of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Normal,
    Compact,
}

impl LayoutMode {
    pub fn is_compact(&self) -> bool {
        matches!(self, LayoutMode::Compact)
    }
}

/// The handler arguments, all overridden by the fake store.
pub fn fake_store_arg_types() -> Vec<ArgType> {
    CloudStorageHandlers::NAMES
        .iter()
        .map(|name| ArgType::disabled(name))
        .collect()
}

/// Build a fake store with generated data for the given layout.
pub fn create_fake_store(ctx: StoryContext, mode: LayoutMode) -> FakeCloudStorage {
    let mut generator = MockDataGenerator::from_seed(ctx.seed, ctx.fixture);
    let mut fake = FakeCloudStorage::generate(ctx.args, &mut generator);
    fake.store_mut().set_locale(ctx.locale);
    if mode.is_compact() {
        fake.store_mut().set_compact(true);
    }
    fake
}

fn render(
    mode: LayoutMode,
    ctx: StoryContext,
    window: &mut Window,
    cx: &mut Context<StoryBrowser>,
) -> AnyView {
    let frame = ctx.frame;
    let fake = create_fake_store(ctx, mode);
    let story = CloudStorageStory::view(Box::new(fake), frame, window, cx);
    cx.observe(&story, |_, _, cx| cx.notify()).detach();
    story.into()
}

pub struct OverviewStory;

impl Story for OverviewStory {
    fn id(&self) -> &'static str {
        "cloudstorage-cloudstoragecontainer--overview"
    }

    fn name(&self) -> &'static str {
        "Overview"
    }

    fn title(&self) -> &'static str {
        TITLE
    }

    fn arg_types(&self) -> Vec<ArgType> {
        fake_store_arg_types()
    }

    fn build(
        &self,
        ctx: StoryContext,
        window: &mut Window,
        cx: &mut Context<StoryBrowser>,
    ) -> AnyView {
        render(LayoutMode::Normal, ctx, window, cx)
    }
}

pub struct CompactModeStory;

impl Story for CompactModeStory {
    fn id(&self) -> &'static str {
        "cloudstorage-cloudstoragecontainer--compact-mode"
    }

    fn name(&self) -> &'static str {
        "Compact Mode"
    }

    fn title(&self) -> &'static str {
        TITLE
    }

    fn arg_types(&self) -> Vec<ArgType> {
        fake_store_arg_types()
    }

    fn build(
        &self,
        ctx: StoryContext,
        window: &mut Window,
        cx: &mut Context<StoryBrowser>,
    ) -> AnyView {
        render(LayoutMode::Compact, ctx, window, cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::cloud_storage::Locale;
    use crate::stories::{ActionLog, FixtureSettings, ViewportFrame};

    fn context(seed: u64) -> StoryContext {
        StoryContext {
            args: ActionLog::new().handlers(),
            seed: Some(seed),
            fixture: FixtureSettings::default(),
            frame: ViewportFrame::default(),
            locale: Locale::ZhCn,
        }
    }

    #[test]
    fn test_arg_types_disable_every_handler() {
        let arg_types = fake_store_arg_types();
        assert_eq!(arg_types.len(), 8);
        assert!(arg_types.iter().all(|arg| arg.control_disabled));
        assert_eq!(arg_types[0].name, "onBatchDelete");
        assert_eq!(arg_types[7].name, "onNewFileName");
        assert_eq!(OverviewStory.arg_types(), CompactModeStory.arg_types());
    }

    #[test]
    fn test_layout_modes() {
        let normal = create_fake_store(context(1), LayoutMode::Normal);
        assert!(!normal.store().is_compact());
        assert_eq!(normal.store().files().len(), 25);
        assert_eq!(normal.store().locale(), Locale::ZhCn);

        let compact = create_fake_store(context(1), LayoutMode::Compact);
        assert!(compact.store().is_compact());
    }

    #[test]
    fn test_story_entries() {
        assert_eq!(OverviewStory.name(), "Overview");
        assert_eq!(CompactModeStory.name(), "Compact Mode");
        assert_eq!(OverviewStory.title(), CompactModeStory.title());
        assert_ne!(OverviewStory.id(), CompactModeStory.id());
    }
}
