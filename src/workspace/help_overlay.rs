//! Help overlay showing keyboard shortcuts.

use gpui::*;
use gpui_component::{ActiveTheme as _, StyledExt as _, h_flex, label::Label, v_flex};

use crate::keybindings::bindings::{KeybindingInfo, get_all_keybindings};

/// Modal listing every keyboard shortcut, grouped by section.
#[derive(IntoElement)]
pub struct HelpOverlay;

impl HelpOverlay {
    pub fn new() -> Self {
        Self
    }

    fn render_section(
        section_name: &'static str,
        bindings: Vec<KeybindingInfo>,
        cx: &App,
    ) -> impl IntoElement {
        v_flex()
            .gap_1()
            .mb_4()
            .child(Label::new(section_name).text_sm().font_semibold())
            .children(bindings.into_iter().map(|kb| {
                h_flex()
                    .justify_between()
                    .gap_4()
                    .child(
                        div()
                            .px_2()
                            .py_1()
                            .bg(cx.theme().muted)
                            .rounded_md()
                            .child(Label::new(kb.key).text_xs()),
                    )
                    .child(
                        Label::new(kb.description)
                            .text_xs()
                            .text_color(cx.theme().muted_foreground),
                    )
            }))
    }
}

impl RenderOnce for HelpOverlay {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        div()
            .id("help-overlay")
            .absolute()
            .inset_0()
            .bg(gpui::rgba(0x000000AA))
            .flex()
            .items_center()
            .justify_center()
            .child(
                v_flex()
                    .p_6()
                    .bg(cx.theme().popover)
                    .border_1()
                    .border_color(cx.theme().border)
                    .rounded_lg()
                    .max_w(px(720.))
                    .overflow_hidden()
                    .child(
                        h_flex()
                            .justify_between()
                            .items_center()
                            .mb_4()
                            .child(Label::new("Keyboard Shortcuts").text_base())
                            .child(
                                Label::new("Press Esc to close")
                                    .text_xs()
                                    .text_color(cx.theme().muted_foreground),
                            ),
                    )
                    .child(
                        h_flex()
                            .gap_8()
                            .flex_wrap()
                            .items_start()
                            .children(get_all_keybindings().into_iter().map(
                                |(name, bindings)| {
                                    div()
                                        .min_w(px(200.))
                                        .child(Self::render_section(name, bindings, cx))
                                },
                            )),
                    ),
            )
    }
}
