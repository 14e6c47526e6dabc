//! Cloud storage container component.
//!
//! Shows storage usage, the file list with per-file menus and the upload
//! panel for any [`CloudStorageCommands`] implementation.

use std::cell::RefCell;
use std::rc::Rc;

use gpui::{prelude::FluentBuilder as _, *};
use gpui_component::{
    ActiveTheme as _, Disableable, Icon, Sizable as _, StyledExt as _, WindowExt as _,
    button::{Button, ButtonVariants as _},
    checkbox::Checkbox,
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    list::ListItem,
    notification::NotificationType,
    v_flex,
};

#[cfg(feature = "keyboard-nav")]
use crate::keybindings::cloud_storage as storage_actions;
use crate::services::cloud_storage::{
    CloudStorageCommands, CloudStorageFile, FileConvertStatus, FileName, StoreEvent,
    UploadStatus, UploadTask,
};

pub struct CloudStorageContainer {
    commands: Box<dyn CloudStorageCommands>,
    /// Store events not yet applied to the view.
    pending_events: Rc<RefCell<Vec<StoreEvent>>>,
    rename_input: Entity<InputState>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl CloudStorageContainer {
    pub fn view(
        commands: Box<dyn CloudStorageCommands>,
        window: &mut Window,
        cx: &mut App,
    ) -> Entity<Self> {
        cx.new(|cx| Self::new(commands, window, cx))
    }

    fn new(
        mut commands: Box<dyn CloudStorageCommands>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let pending_events = Rc::new(RefCell::new(Vec::new()));
        let sink = pending_events.clone();
        commands
            .store_mut()
            .subscribe(move |event: &StoreEvent| sink.borrow_mut().push(event.clone()));

        let rename_input = cx.new(|cx| InputState::new(window, cx).placeholder("File name"));

        let _subscriptions = vec![cx.subscribe_in(
            &rename_input,
            window,
            |this, _, event: &InputEvent, window, cx| {
                if let InputEvent::PressEnter { .. } = event {
                    this.commit_rename(window, cx);
                }
            },
        )];

        Self {
            commands,
            pending_events,
            rename_input,
            focus_handle: cx.focus_handle(),
            _subscriptions,
        }
    }

    /// Run a command, then surface its notices and apply store changes.
    fn dispatch(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
        command: impl FnOnce(&mut dyn CloudStorageCommands),
    ) {
        command(self.commands.as_mut());

        for notice in self.commands.take_notices() {
            window.push_notification((NotificationType::Info, SharedString::from(notice.message)), cx);
        }

        self.flush_events(window, cx);
        cx.notify();
    }

    fn flush_events(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let events = std::mem::take(&mut *self.pending_events.borrow_mut());
        for event in &events {
            if let StoreEvent::RenamePanelChanged(Some(file_uuid)) = event {
                self.begin_rename(file_uuid, window, cx);
            }
        }
    }

    fn begin_rename(&mut self, file_uuid: &str, window: &mut Window, cx: &mut Context<Self>) {
        let file_name = self
            .commands
            .store()
            .find_file(file_uuid)
            .map(|file| file.file_name.clone())
            .unwrap_or_default();

        self.rename_input.update(cx, |input, cx| {
            input.set_value(file_name, window, cx);
            input.focus(window, cx);
        });
    }

    /// Commit the rename input. An empty name cancels the rename without
    /// calling the host.
    fn commit_rename(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(file_uuid) = self
            .commands
            .store()
            .renaming_file_uuid()
            .map(str::to_string)
        else {
            return;
        };

        let value = self.rename_input.read(cx).value().trim().to_string();
        if value.is_empty() {
            self.cancel_rename(window, cx);
            return;
        }

        let file_name = FileName::parse(&value);
        self.dispatch(window, cx, |commands| {
            commands.on_new_file_name(&file_uuid, &file_name);
            commands.store_mut().set_rename_panel(None);
        });
        self.focus_handle.focus(window);
    }

    fn cancel_rename(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.dispatch(window, cx, |commands| {
            commands.store_mut().set_rename_panel(None)
        });
        self.focus_handle.focus(window);
    }

    fn select_all(&mut self, selected: bool, window: &mut Window, cx: &mut Context<Self>) {
        self.dispatch(window, cx, |commands| {
            let file_uuids = if selected {
                commands
                    .store()
                    .files()
                    .iter()
                    .map(|file| file.file_uuid.clone())
                    .collect()
            } else {
                vec![]
            };
            commands.store_mut().set_selected_file_uuids(file_uuids);
        });
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_cancel_rename(
        &mut self,
        _: &storage_actions::CancelRename,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.commands.store().renaming_file_uuid().is_some() {
            self.cancel_rename(window, cx);
        } else {
            cx.propagate();
        }
    }

    #[cfg(feature = "keyboard-nav")]
    fn on_toggle_upload_panel(
        &mut self,
        _: &storage_actions::ToggleUploadPanel,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let expanded = self.commands.store().is_upload_panel_expanded();
        self.dispatch(window, cx, |commands| {
            commands.store_mut().set_upload_panel_expanded(!expanded)
        });
    }

    fn upload_status_color(status: UploadStatus, cx: &App) -> Hsla {
        match status {
            UploadStatus::Uploading => cx.theme().primary,
            UploadStatus::Idle => cx.theme().muted_foreground,
            UploadStatus::Error => cx.theme().danger,
            UploadStatus::Success => cx.theme().success,
        }
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let store = self.commands.store();
        let strings = store.locale().strings();
        let compact = store.is_compact();
        let selected_count = store.selected_file_uuids().len();
        let all_selected = selected_count > 0 && selected_count == store.files().len();

        h_flex()
            .justify_between()
            .items_center()
            .px(if compact { px(8.) } else { px(16.) })
            .py_2()
            .bg(cx.theme().title_bar)
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(
                        Checkbox::new("select-all")
                            .checked(all_selected)
                            .disabled(store.files().is_empty())
                            .on_click(cx.listener(|this, checked: &bool, window, cx| {
                                this.select_all(*checked, window, cx);
                            })),
                    )
                    .child(
                        Label::new(strings.usage)
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .child(
                        Label::new(store.total_usage_display())
                            .text_sm()
                            .font_semibold(),
                    ),
            )
            .child(
                h_flex()
                    .gap_2()
                    .child(
                        Button::new("batch-delete")
                            .icon(Icon::empty().path("icons/trash.svg"))
                            .when(!compact, |b| b.child(strings.delete))
                            .small()
                            .danger()
                            .disabled(selected_count == 0)
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.dispatch(window, cx, |commands| commands.on_batch_delete());
                            })),
                    )
                    .child(
                        Button::new("upload")
                            .icon(Icon::empty().path("icons/upload.svg"))
                            .when(!compact, |b| b.child(strings.upload))
                            .small()
                            .primary()
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.dispatch(window, cx, |commands| commands.on_upload());
                            })),
                    ),
            )
    }

    fn render_file_title(
        &self,
        ix: usize,
        file: &CloudStorageFile,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let renaming = self.commands.store().renaming_file_uuid() == Some(file.file_uuid.as_str());

        if renaming {
            return h_flex()
                .flex_1()
                .gap_1()
                .items_center()
                .child(div().flex_1().child(Input::new(&self.rename_input).small()))
                .child(
                    Button::new(("rename-cancel", ix))
                        .icon(Icon::empty().path("icons/x.svg"))
                        .ghost()
                        .xsmall()
                        .on_click(cx.listener(|this, _, window, cx| {
                            this.cancel_rename(window, cx);
                        })),
                )
                .into_any_element();
        }

        let max_len = if self.commands.store().is_compact() { 24 } else { 48 };
        let file_uuid = file.file_uuid.clone();

        Button::new(("file-title", ix))
            .child(
                Label::new(truncate(&file.file_name, max_len))
                    .font_medium()
                    .text_sm()
                    .whitespace_nowrap(),
            )
            .ghost()
            .small()
            .on_click(cx.listener(move |this, _, window, cx| {
                this.dispatch(window, cx, |commands| commands.on_item_title_click(&file_uuid));
            }))
            .into_any_element()
    }

    fn render_file_item(
        &self,
        ix: usize,
        file: &CloudStorageFile,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let store = self.commands.store();
        let compact = store.is_compact();
        let is_selected = store.is_file_selected(&file.file_uuid);

        let bg_color = if is_selected {
            cx.theme().list_active
        } else if ix % 2 == 0 {
            cx.theme().list
        } else {
            cx.theme().list_even
        };
        let muted = cx.theme().muted_foreground;

        let convert = match file.convert {
            FileConvertStatus::Converting => Some((file.convert.as_str(), cx.theme().primary)),
            FileConvertStatus::Error => Some((file.convert.as_str(), cx.theme().danger)),
            FileConvertStatus::Idle | FileConvertStatus::Success => None,
        };

        let select_uuid = file.file_uuid.clone();
        let checkbox = Checkbox::new(("file-select", ix))
            .checked(is_selected)
            .on_click(cx.listener(move |this, checked: &bool, window, cx| {
                let checked = *checked;
                this.dispatch(window, cx, |commands| {
                    commands
                        .store_mut()
                        .toggle_file_selected(&select_uuid, checked);
                });
            }));

        let title = self.render_file_title(ix, file, cx);

        let menus: Vec<AnyElement> = self
            .commands
            .file_menus(file)
            .into_iter()
            .enumerate()
            .map(|(menu_ix, item)| {
                let file_uuid = file.file_uuid.clone();
                let key = item.key.clone();
                let button = Button::new(("file-menu", ix * 16 + menu_ix))
                    .child(item.name.clone())
                    .xsmall();
                let button = if item.danger {
                    button.danger()
                } else {
                    button.ghost()
                };
                button
                    .on_click(cx.listener(move |this, _, window, cx| {
                        this.dispatch(window, cx, |commands| {
                            commands.on_item_menu_click(&file_uuid, &key)
                        });
                    }))
                    .into_any_element()
            })
            .collect();

        ListItem::new(("file", ix))
            .w_full()
            .py(if compact { px(2.) } else { px(6.) })
            .px_2()
            .bg(bg_color)
            .border_1()
            .border_color(if is_selected {
                cx.theme().list_active_border
            } else {
                bg_color
            })
            .rounded(cx.theme().radius)
            .child(
                h_flex()
                    .w_full()
                    .gap_2()
                    .items_center()
                    .child(checkbox)
                    .child(Icon::empty().path("icons/file.svg").size_4().text_color(muted))
                    .child(div().flex_1().overflow_hidden().child(title))
                    .when_some(convert, |d, (label, color)| {
                        d.child(Label::new(label).text_xs().text_color(color))
                    })
                    .when(!compact, |d| {
                        d.child(Label::new(file.size_display()).text_xs().text_color(muted))
                            .child(
                                Label::new(file.create_at.format("%Y-%m-%d %H:%M").to_string())
                                    .text_xs()
                                    .text_color(muted),
                            )
                    })
                    .child(h_flex().gap_1().children(menus)),
            )
    }

    fn render_file_list(&self, cx: &mut Context<Self>) -> AnyElement {
        let store = self.commands.store();

        if store.files().is_empty() {
            return div()
                .flex()
                .flex_1()
                .flex_col()
                .items_center()
                .justify_center()
                .gap_2()
                .child(
                    Icon::empty()
                        .path("icons/folder-open.svg")
                        .size_8()
                        .text_color(cx.theme().muted_foreground),
                )
                .child(
                    Label::new(store.locale().strings().no_files)
                        .text_color(cx.theme().muted_foreground),
                )
                .into_any_element();
        }

        let mut container = div()
            .id("cloud-storage-files")
            .flex()
            .flex_col()
            .flex_1()
            .overflow_y_scroll()
            .p_2()
            .gap_1();

        for (ix, file) in store.files().iter().enumerate() {
            container = container.child(self.render_file_item(ix, file, cx));
        }

        container.into_any_element()
    }

    fn render_upload_task(
        &self,
        ix: usize,
        task: &UploadTask,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let strings = self.commands.store().locale().strings();
        let color = Self::upload_status_color(task.status, cx);

        let retry = (task.status == UploadStatus::Error).then(|| {
            let task = task.clone();
            Button::new(("upload-retry", ix))
                .icon(Icon::empty().path("icons/rotate-ccw.svg"))
                .tooltip(strings.retry)
                .ghost()
                .xsmall()
                .on_click(cx.listener(move |this, _, window, cx| {
                    this.dispatch(window, cx, |commands| commands.on_upload_retry(&task));
                }))
        });

        let cancel = task.status.is_cancellable().then(|| {
            let task = task.clone();
            Button::new(("upload-cancel", ix))
                .icon(Icon::empty().path("icons/x.svg"))
                .tooltip(strings.cancel)
                .ghost()
                .xsmall()
                .on_click(cx.listener(move |this, _, window, cx| {
                    this.dispatch(window, cx, |commands| commands.on_upload_cancel(&task));
                }))
        });

        h_flex()
            .gap_2()
            .items_center()
            .px_3()
            .py_1()
            .child(
                Icon::empty()
                    .path("icons/file.svg")
                    .size_4()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(
                v_flex()
                    .flex_1()
                    .gap_1()
                    .child(
                        h_flex()
                            .justify_between()
                            .child(Label::new(truncate(&task.file_name, 32)).text_sm())
                            .child(
                                Label::new(format!("{} {}%", task.status, task.percent))
                                    .text_xs()
                                    .text_color(color),
                            ),
                    )
                    .child(
                        div()
                            .h(px(4.))
                            .w_full()
                            .rounded_full()
                            .bg(cx.theme().border)
                            .child(
                                div()
                                    .h_full()
                                    .rounded_full()
                                    .w(relative(task.percent as f32 / 100.))
                                    .bg(color),
                            ),
                    ),
            )
            .children(retry)
            .children(cancel)
    }

    fn render_upload_panel(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let store = self.commands.store();
        let strings = store.locale().strings();
        let expanded = store.is_upload_panel_expanded();
        let status_color = Self::upload_status_color(store.upload_status(), cx);
        let max_height = if store.is_compact() { px(160.) } else { px(240.) };

        let rows: Vec<AnyElement> = if expanded {
            store
                .sorted_upload_tasks()
                .into_iter()
                .enumerate()
                .map(|(ix, task)| self.render_upload_task(ix, task, cx).into_any_element())
                .collect()
        } else {
            vec![]
        };

        let toggle_icon = if expanded {
            "icons/chevron-down.svg"
        } else {
            "icons/chevron-up.svg"
        };

        v_flex()
            .border_t_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().background)
            .child(
                h_flex()
                    .justify_between()
                    .items_center()
                    .px_3()
                    .py_2()
                    .child(
                        h_flex()
                            .gap_2()
                            .items_center()
                            .child(Label::new(strings.upload_list).text_sm().font_semibold())
                            .child(
                                Label::new(format!(
                                    "{}/{}",
                                    store.upload_finished_count(),
                                    store.upload_total_count()
                                ))
                                .text_xs()
                                .text_color(status_color),
                            ),
                    )
                    .child(
                        h_flex()
                            .gap_1()
                            .child(
                                Button::new("upload-panel-toggle")
                                    .icon(Icon::empty().path(toggle_icon))
                                    .ghost()
                                    .xsmall()
                                    .on_click(cx.listener(move |this, _, window, cx| {
                                        this.dispatch(window, cx, |commands| {
                                            commands.store_mut().set_upload_panel_expanded(!expanded)
                                        });
                                    })),
                            )
                            .child(
                                Button::new("upload-panel-close")
                                    .icon(Icon::empty().path("icons/x.svg"))
                                    .ghost()
                                    .xsmall()
                                    .on_click(cx.listener(|this, _, window, cx| {
                                        this.dispatch(window, cx, |commands| {
                                            commands.on_upload_panel_close()
                                        });
                                    })),
                            ),
                    ),
            )
            .when(expanded, |d| {
                d.child(
                    div()
                        .id("upload-tasks")
                        .max_h(max_height)
                        .overflow_y_scroll()
                        .children(rows),
                )
            })
    }
}

impl Focusable for CloudStorageContainer {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for CloudStorageContainer {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let show_upload_panel = self.commands.store().is_upload_panel_visible();

        let root = v_flex()
            .key_context("CloudStorageContainer")
            .track_focus(&self.focus_handle)
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _, window, cx| {
                    if !this.focus_handle.contains_focused(window, cx) {
                        this.focus_handle.focus(window);
                    }
                }),
            )
            .size_full()
            .bg(cx.theme().background);

        #[cfg(feature = "keyboard-nav")]
        let root = root
            .on_action(cx.listener(Self::on_cancel_rename))
            .on_action(cx.listener(Self::on_toggle_upload_panel));

        root.child(self.render_header(cx))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.render_file_list(cx)),
            )
            .when(show_upload_panel, |d| d.child(self.render_upload_panel(cx)))
    }
}

/// Truncate a string to at most `max_len` characters.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use gpui::{TestAppContext, VisualTestContext};
    use gpui_component::Root;

    use super::*;
    use std::prelude::v1::test;
    use crate::services::cloud_storage::FileMenuKey;
    use crate::stories::{ActionLog, FakeCloudStorage};

    fn open_container<'a>(
        cx: &'a mut TestAppContext,
        files: &[(&str, &str)],
    ) -> (Entity<CloudStorageContainer>, ActionLog, &'a mut VisualTestContext) {
        cx.update(gpui_component::init);

        let log = ActionLog::new();
        let mut fake = FakeCloudStorage::new(log.handlers());
        fake.store_mut().set_files(
            files
                .iter()
                .map(|(uuid, name)| CloudStorageFile::new(*uuid, *name))
                .collect(),
        );

        let mut container = None;
        let (_root, cx) = cx.add_window_view(|window, cx| {
            let view = CloudStorageContainer::view(Box::new(fake), window, cx);
            container = Some(view.clone());
            Root::new(view, window, cx)
        });
        let container = container.unwrap();
        (container, log, cx)
    }

    fn begin_rename(
        container: &Entity<CloudStorageContainer>,
        file_uuid: &str,
        cx: &mut VisualTestContext,
    ) {
        container.update_in(cx, |this, window, cx| {
            this.dispatch(window, cx, |commands| {
                commands.on_item_menu_click(file_uuid, &FileMenuKey::Rename)
            });
        });
    }

    fn set_rename_value(
        container: &Entity<CloudStorageContainer>,
        value: &str,
        cx: &mut VisualTestContext,
    ) {
        container.update_in(cx, |this, window, cx| {
            this.rename_input
                .update(cx, |input, cx| input.set_value(value.to_string(), window, cx));
        });
    }

    /// Handler names, newest first.
    fn log_names(log: &ActionLog) -> Vec<&'static str> {
        log.latest().iter().map(|record| record.name).collect()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("report.pdf", 40), "report.pdf");
        assert_eq!(truncate("abcdefghij", 6), "abc...");
        assert_eq!(truncate("上传文件列表很长.txt", 5), "上传...");
    }

    #[gpui::test]
    fn test_rename_flow(cx: &mut TestAppContext) {
        let (container, log, cx) = open_container(cx, &[("abc", "old.txt"), ("def", "b.txt")]);

        begin_rename(&container, "abc", cx);
        container.read_with(cx, |this, cx| {
            assert_eq!(this.commands.store().renaming_file_uuid(), Some("abc"));
            assert_eq!(this.rename_input.read(cx).value().to_string(), "old.txt");
        });

        set_rename_value(&container, "  new.txt ", cx);
        container.update_in(cx, |this, window, cx| {
            this.commit_rename(window, cx);
            assert!(this.focus_handle.is_focused(window));
        });

        container.read_with(cx, |this, _| {
            let store = this.commands.store();
            assert_eq!(store.renaming_file_uuid(), None);
            assert_eq!(store.find_file("abc").unwrap().file_name, "new.txt");
            assert_eq!(store.find_file("def").unwrap().file_name, "b.txt");
        });
        assert_eq!(log_names(&log), vec!["onNewFileName", "onItemMenuClick"]);
    }

    #[gpui::test]
    fn test_empty_rename_cancels(cx: &mut TestAppContext) {
        let (container, log, cx) = open_container(cx, &[("abc", "old.txt")]);

        begin_rename(&container, "abc", cx);
        set_rename_value(&container, "   ", cx);
        container.update_in(cx, |this, window, cx| {
            this.commit_rename(window, cx);
            assert!(this.focus_handle.is_focused(window));
        });

        container.read_with(cx, |this, _| {
            let store = this.commands.store();
            assert_eq!(store.renaming_file_uuid(), None);
            assert_eq!(store.find_file("abc").unwrap().file_name, "old.txt");
        });
        assert_eq!(log_names(&log), vec!["onItemMenuClick"]);
    }

    #[gpui::test]
    fn test_cancel_rename_restores_focus(cx: &mut TestAppContext) {
        let (container, log, cx) = open_container(cx, &[("abc", "old.txt")]);

        begin_rename(&container, "abc", cx);
        container.update_in(cx, |this, window, cx| {
            assert!(!this.focus_handle.is_focused(window));
            this.cancel_rename(window, cx);
            assert!(this.focus_handle.is_focused(window));
            assert_eq!(this.commands.store().renaming_file_uuid(), None);
        });
        assert_eq!(log.len(), 1);
    }

    #[gpui::test]
    fn test_dispatch_notifies_without_store_change(cx: &mut TestAppContext) {
        let (container, log, cx) = open_container(cx, &[("abc", "old.txt")]);

        let notified = Rc::new(Cell::new(0usize));
        let counter = notified.clone();
        let _subscription = cx.update(|_, cx| {
            cx.observe(&container, move |_, _| counter.set(counter.get() + 1))
        });

        container.update_in(cx, |this, window, cx| {
            this.dispatch(window, cx, |commands| commands.on_upload());
        });

        assert!(notified.get() > 0);
        assert_eq!(log_names(&log), vec!["onUpload"]);
    }

    #[gpui::test]
    fn test_select_all(cx: &mut TestAppContext) {
        let (container, _log, cx) = open_container(cx, &[("a", "a.txt"), ("b", "b.txt")]);

        container.update_in(cx, |this, window, cx| this.select_all(true, window, cx));
        container.read_with(cx, |this, _| {
            assert_eq!(
                this.commands.store().selected_file_uuids(),
                &["a".to_string(), "b".to_string()]
            );
        });

        container.update_in(cx, |this, window, cx| this.select_all(false, window, cx));
        container.read_with(cx, |this, _| {
            assert!(this.commands.store().selected_file_uuids().is_empty());
        });
    }
}
