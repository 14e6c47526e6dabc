//! Story browser.
//!
//! Lists the registered stories in a sidebar, mounts the selected one in the
//! canvas and shows the Actions and Controls addon panels below it.

use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::{
    ActiveTheme as _, Disableable, Icon, Root, Selectable as _, Sizable as _, StyledExt as _,
    button::{Button, ButtonVariants as _},
    h_flex,
    label::Label,
    v_flex,
};

#[cfg(feature = "keyboard-nav")]
use super::help_overlay::HelpOverlay;
#[cfg(feature = "keyboard-nav")]
use crate::keybindings::{global, story as story_actions};
#[cfg(feature = "keyboard-nav")]
use crate::state::{select_next_story, select_previous_story};
use crate::state::{select_story, StoryState};
use crate::stories::{all_stories, all_titles, ActionLog, Story, StoryContext};

pub struct StoryBrowser {
    stories: Vec<Box<dyn Story>>,
    selected: usize,
    /// View of the mounted story.
    canvas: Option<AnyView>,
    action_log: ActionLog,
    show_addons: bool,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,

    /// Whether to show the help overlay.
    #[cfg(feature = "keyboard-nav")]
    show_help: bool,
}

impl StoryBrowser {
    pub fn view(window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| Self::new(window, cx))
    }

    fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let _subscriptions = vec![cx.observe_global_in::<StoryState>(
            window,
            move |this, window, cx| {
                let selected = cx.global::<StoryState>().selected_story;
                if selected != this.selected {
                    this.selected = selected;
                    this.mount_selected(window, cx);
                }
                cx.notify();
            },
        )];

        let focus_handle = cx.focus_handle();
        focus_handle.focus(window);

        let mut this = Self {
            stories: all_stories(),
            selected: cx.global::<StoryState>().selected_story,
            canvas: None,
            action_log: ActionLog::new(),
            show_addons: true,
            focus_handle,
            _subscriptions,
            #[cfg(feature = "keyboard-nav")]
            show_help: false,
        };
        this.mount_selected(window, cx);
        this
    }

    /// Mount a fresh instance of the selected story.
    fn mount_selected(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(story) = self.stories.get(self.selected) else {
            self.canvas = None;
            return;
        };

        let config = &cx.global::<StoryState>().config;
        let ctx = StoryContext {
            args: self.action_log.handlers(),
            seed: config.seed,
            fixture: config.fixture,
            frame: config.frame,
            locale: config.locale,
        };

        tracing::info!("Mounting story {}", story.id());
        self.canvas = Some(story.build(ctx, window, cx));
    }

    fn clear_actions(&mut self, cx: &mut Context<Self>) {
        self.action_log.clear();
        cx.notify();
    }

    // ========================================================================
    // Keyboard Action Handlers
    // ========================================================================

    #[cfg(feature = "keyboard-nav")]
    fn on_next_story(&mut self, _: &story_actions::NextStory, _: &mut Window, cx: &mut Context<Self>) {
        select_next_story(cx);
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_previous_story(
        &mut self,
        _: &story_actions::PreviousStory,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        select_previous_story(cx);
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_remount_story(
        &mut self,
        _: &story_actions::RemountStory,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.mount_selected(window, cx);
        cx.notify();
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_toggle_addons(
        &mut self,
        _: &story_actions::ToggleAddonsPanel,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.show_addons = !self.show_addons;
        cx.notify();
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_clear_actions(
        &mut self,
        _: &story_actions::ClearActions,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.clear_actions(cx);
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_show_help(&mut self, _: &global::ShowHelp, _window: &mut Window, cx: &mut Context<Self>) {
        self.show_help = true;
        cx.notify();
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_hide_help(&mut self, _: &global::HideHelp, _window: &mut Window, cx: &mut Context<Self>) {
        self.show_help = false;
        cx.notify();
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_escape(&mut self, _: &global::Escape, _window: &mut Window, cx: &mut Context<Self>) {
        if self.show_help {
            self.show_help = false;
            cx.notify();
        }
    }

    fn render_sidebar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let mut items: Vec<AnyElement> = vec![];

        for title in all_titles() {
            items.push(
                Label::new(title)
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .mt_2()
                    .into_any_element(),
            );

            let grouped = self
                .stories
                .iter()
                .enumerate()
                .filter(|(_, story)| story.title() == title);
            for (ix, story) in grouped {
                items.push(
                    Button::new(("story", ix))
                        .child(
                            h_flex()
                                .gap_2()
                                .items_center()
                                .child(Icon::empty().path("icons/book-open.svg").size_4())
                                .child(story.name()),
                        )
                        .ghost()
                        .small()
                        .w_full()
                        .selected(ix == self.selected)
                        .on_click(cx.listener(move |_, _, _, cx| {
                            select_story(ix, cx);
                        }))
                        .into_any_element(),
                );
            }
        }

        v_flex()
            .w(px(260.))
            .h_full()
            .p_2()
            .gap_1()
            .bg(cx.theme().sidebar)
            .border_r_1()
            .border_color(cx.theme().border)
            .child(Label::new("Stories").font_semibold())
            .children(items)
    }

    fn render_toolbar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let (title, name) = self
            .stories
            .get(self.selected)
            .map(|story| (story.title(), story.name()))
            .unwrap_or(("", ""));

        h_flex()
            .justify_between()
            .items_center()
            .px_4()
            .py_2()
            .bg(cx.theme().title_bar)
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                h_flex()
                    .gap_2()
                    .child(Label::new(title).text_sm().text_color(cx.theme().muted_foreground))
                    .child(Label::new(name).text_sm().font_semibold()),
            )
            .child(
                h_flex()
                    .gap_1()
                    .child(
                        Button::new("remount-story")
                            .icon(Icon::empty().path("icons/rotate-ccw.svg"))
                            .child("Remount")
                            .ghost()
                            .small()
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.mount_selected(window, cx);
                                cx.notify();
                            })),
                    )
                    .child(
                        Button::new("toggle-addons")
                            .child("Addons")
                            .ghost()
                            .small()
                            .selected(self.show_addons)
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.show_addons = !this.show_addons;
                                cx.notify();
                            })),
                    ),
            )
    }

    fn render_actions_panel(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let records = self.action_log.latest();
        let muted = cx.theme().muted_foreground;

        v_flex()
            .flex_1()
            .h_full()
            .overflow_hidden()
            .child(
                h_flex()
                    .justify_between()
                    .items_center()
                    .px_3()
                    .py_1()
                    .border_b_1()
                    .border_color(cx.theme().border)
                    .child(
                        Label::new(format!("Actions ({})", records.len()))
                            .text_sm()
                            .font_semibold(),
                    )
                    .child(
                        Button::new("clear-actions")
                            .child("Clear")
                            .ghost()
                            .xsmall()
                            .disabled(records.is_empty())
                            .on_click(cx.listener(|this, _, _, cx| this.clear_actions(cx))),
                    ),
            )
            .child(
                div()
                    .id("action-log")
                    .flex_1()
                    .overflow_y_scroll()
                    .px_3()
                    .py_1()
                    .when(records.is_empty(), |d| {
                        d.child(
                            Label::new("No actions recorded yet")
                                .text_xs()
                                .text_color(muted),
                        )
                    })
                    .children(records.into_iter().map(|record| {
                        h_flex()
                            .gap_3()
                            .py(px(2.))
                            .child(
                                Label::new(record.at.format("%H:%M:%S%.3f").to_string())
                                    .text_xs()
                                    .text_color(muted),
                            )
                            .child(Label::new(record.name).text_xs().font_medium())
                            .child(Label::new(record.args).text_xs().text_color(muted))
                    })),
            )
    }

    fn render_controls_panel(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let arg_types = self
            .stories
            .get(self.selected)
            .map(|story| story.arg_types())
            .unwrap_or_default();
        let muted = cx.theme().muted_foreground;

        v_flex()
            .w(px(300.))
            .h_full()
            .border_l_1()
            .border_color(cx.theme().border)
            .child(
                h_flex()
                    .px_3()
                    .py_1()
                    .border_b_1()
                    .border_color(cx.theme().border)
                    .child(Label::new("Controls").text_sm().font_semibold()),
            )
            .child(
                div()
                    .id("story-controls")
                    .flex_1()
                    .overflow_y_scroll()
                    .px_3()
                    .py_1()
                    .children(arg_types.into_iter().map(|arg| {
                        h_flex()
                            .justify_between()
                            .py(px(2.))
                            .child(Label::new(arg.name).text_xs())
                            .child(
                                Label::new(if arg.control_disabled { "disabled" } else { "-" })
                                    .text_xs()
                                    .text_color(muted),
                            )
                    })),
            )
    }

    fn render_addons(&self, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .h(px(220.))
            .border_t_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().background)
            .child(self.render_actions_panel(cx))
            .child(self.render_controls_panel(cx))
    }
}

impl Focusable for StoryBrowser {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for StoryBrowser {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        #[cfg(feature = "keyboard-nav")]
        let show_help = self.show_help;
        #[cfg(not(feature = "keyboard-nav"))]
        let show_help = false;

        let root = h_flex()
            .relative()
            .size_full()
            .key_context("StoryBrowser")
            .track_focus(&self.focus_handle)
            .bg(cx.theme().background);

        // Register keyboard action handlers (feature-gated)
        #[cfg(feature = "keyboard-nav")]
        let root = root
            .on_action(cx.listener(Self::on_next_story))
            .on_action(cx.listener(Self::on_previous_story))
            .on_action(cx.listener(Self::on_remount_story))
            .on_action(cx.listener(Self::on_toggle_addons))
            .on_action(cx.listener(Self::on_clear_actions))
            .on_action(cx.listener(Self::on_show_help))
            .on_action(cx.listener(Self::on_hide_help))
            .on_action(cx.listener(Self::on_escape));

        let main = v_flex()
            .flex_1()
            .h_full()
            .overflow_hidden()
            .child(self.render_toolbar(cx))
            .child(
                div()
                    .flex_1()
                    .p_4()
                    .overflow_hidden()
                    .children(self.canvas.clone()),
            )
            .when(self.show_addons, |d| d.child(self.render_addons(cx)));

        let root = root
            .child(self.render_sidebar(cx))
            .child(main)
            .children(Root::render_dialog_layer(window, cx))
            .children(Root::render_notification_layer(window, cx));

        #[cfg(feature = "keyboard-nav")]
        let root = root.when(show_help, |d| d.child(HelpOverlay::new()));
        #[cfg(not(feature = "keyboard-nav"))]
        let _ = show_help;

        root
    }
}
