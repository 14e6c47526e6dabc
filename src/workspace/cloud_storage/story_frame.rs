use gpui::*;
use gpui_component::ActiveTheme as _;

use crate::services::cloud_storage::CloudStorageCommands;
use crate::stories::ViewportFrame;

use super::CloudStorageContainer;

/// Hosts a [`CloudStorageContainer`] inside a fixed-height story frame.
pub struct CloudStorageStory {
    container: Entity<CloudStorageContainer>,
    frame: ViewportFrame,
    _subscriptions: Vec<Subscription>,
}

impl CloudStorageStory {
    pub fn view(
        commands: Box<dyn CloudStorageCommands>,
        frame: ViewportFrame,
        window: &mut Window,
        cx: &mut App,
    ) -> Entity<Self> {
        cx.new(|cx| Self::new(commands, frame, window, cx))
    }

    fn new(
        commands: Box<dyn CloudStorageCommands>,
        frame: ViewportFrame,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let container = CloudStorageContainer::view(commands, window, cx);
        // Re-render the host when the container changes so the Actions panel stays current.
        let _subscriptions = vec![cx.observe(&container, |_, _, cx| cx.notify())];

        Self {
            container,
            frame,
            _subscriptions,
        }
    }
}

impl Render for CloudStorageStory {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let viewport_height = f32::from(window.viewport_size().height);

        div()
            .w_full()
            .h(px(self.frame.resolved_height(viewport_height)))
            .border_1()
            .border_color(cx.theme().border)
            .rounded_lg()
            .overflow_hidden()
            .child(self.container.clone())
    }
}
