//! Cloud storage state container.
//!
//! `CloudStorageStore` owns everything the container renders. Its fields are
//! private: every change goes through a mutation method, and every mutation
//! publishes a [`StoreEvent`] to the subscribed observers.

use std::collections::{BTreeMap, HashSet};

use super::locale::Locale;
use super::types::{format_bytes, CloudStorageFile, UploadStatus, UploadTask};

/// Change published by the store after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    TotalUsageChanged(u64),
    FilesReplaced { count: usize },
    FileRemoved { file_uuid: String, index: usize },
    FileRenamed { file_uuid: String, file_name: String },
    UploadTaskChanged { upload_id: String },
    CompactChanged(bool),
    RenamePanelChanged(Option<String>),
    SelectionChanged { count: usize },
    UploadPanelExpanded(bool),
    LocaleChanged(Locale),
}

type Observer = Box<dyn FnMut(&StoreEvent)>;

/// State of the cloud storage container.
pub struct CloudStorageStore {
    total_usage: u64,
    files: Vec<CloudStorageFile>,
    upload_tasks: BTreeMap<String, UploadTask>,
    compact: bool,
    renaming_file_uuid: Option<String>,
    selected_file_uuids: Vec<String>,
    upload_panel_expanded: bool,
    locale: Locale,
    observers: Vec<Observer>,
}

impl Default for CloudStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CloudStorageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudStorageStore")
            .field("total_usage", &self.total_usage)
            .field("files", &self.files.len())
            .field("upload_tasks", &self.upload_tasks.len())
            .field("compact", &self.compact)
            .field("renaming_file_uuid", &self.renaming_file_uuid)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl CloudStorageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            total_usage: 0,
            files: vec![],
            upload_tasks: BTreeMap::new(),
            compact: false,
            renaming_file_uuid: None,
            selected_file_uuids: vec![],
            upload_panel_expanded: false,
            locale: Locale::default(),
            observers: vec![],
        }
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Register an observer called after every mutation. Observers live as
    /// long as the store.
    pub fn subscribe(&mut self, observer: impl FnMut(&StoreEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn publish(&mut self, event: StoreEvent) {
        tracing::debug!(?event, "cloud storage store changed");
        for observer in self.observers.iter_mut() {
            observer(&event);
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn total_usage(&self) -> u64 {
        self.total_usage
    }

    /// Total usage as a human-readable string.
    pub fn total_usage_display(&self) -> String {
        format_bytes(self.total_usage)
    }

    pub fn files(&self) -> &[CloudStorageFile] {
        &self.files
    }

    pub fn find_file(&self, file_uuid: &str) -> Option<&CloudStorageFile> {
        self.files.iter().find(|file| file.file_uuid == file_uuid)
    }

    pub fn file_index(&self, file_uuid: &str) -> Option<usize> {
        self.files.iter().position(|file| file.file_uuid == file_uuid)
    }

    pub fn upload_tasks(&self) -> &BTreeMap<String, UploadTask> {
        &self.upload_tasks
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn renaming_file_uuid(&self) -> Option<&str> {
        self.renaming_file_uuid.as_deref()
    }

    pub fn selected_file_uuids(&self) -> &[String] {
        &self.selected_file_uuids
    }

    pub fn is_file_selected(&self, file_uuid: &str) -> bool {
        self.selected_file_uuids.iter().any(|uuid| uuid == file_uuid)
    }

    pub fn is_upload_panel_expanded(&self) -> bool {
        self.upload_panel_expanded
    }

    /// The upload panel is shown whenever there is at least one task.
    pub fn is_upload_panel_visible(&self) -> bool {
        !self.upload_tasks.is_empty()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Overall status of the upload panel.
    pub fn upload_status(&self) -> UploadStatus {
        let mut tasks = self.upload_tasks.values();
        if self.upload_tasks.is_empty() {
            UploadStatus::Idle
        } else if tasks.clone().any(|task| task.status == UploadStatus::Error) {
            UploadStatus::Error
        } else if tasks.all(|task| task.status == UploadStatus::Success) {
            UploadStatus::Success
        } else {
            UploadStatus::Uploading
        }
    }

    /// Number of tasks that finished successfully.
    pub fn upload_finished_count(&self) -> usize {
        self.upload_tasks
            .values()
            .filter(|task| task.status == UploadStatus::Success)
            .count()
    }

    pub fn upload_total_count(&self) -> usize {
        self.upload_tasks.len()
    }

    /// Tasks in panel order: uploading, idle, error, success, then by name.
    pub fn sorted_upload_tasks(&self) -> Vec<&UploadTask> {
        let mut tasks: Vec<&UploadTask> = self.upload_tasks.values().collect();
        tasks.sort_by(|a, b| {
            a.status
                .panel_rank()
                .cmp(&b.status.panel_rank())
                .then_with(|| a.file_name.cmp(&b.file_name))
        });
        tasks
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    pub fn set_total_usage(&mut self, total_usage: u64) {
        self.total_usage = total_usage;
        self.publish(StoreEvent::TotalUsageChanged(total_usage));
    }

    /// Replace the file list. Later duplicates of an identifier are dropped.
    pub fn set_files(&mut self, files: Vec<CloudStorageFile>) {
        let mut seen = HashSet::new();
        let before = files.len();
        self.files = files
            .into_iter()
            .filter(|file| seen.insert(file.file_uuid.clone()))
            .collect();
        if self.files.len() != before {
            tracing::warn!(
                dropped = before - self.files.len(),
                "Dropped files with duplicate identifiers"
            );
        }
        let known: HashSet<&str> = self.files.iter().map(|f| f.file_uuid.as_str()).collect();
        self.selected_file_uuids
            .retain(|uuid| known.contains(uuid.as_str()));
        if let Some(uuid) = &self.renaming_file_uuid {
            if !known.contains(uuid.as_str()) {
                self.renaming_file_uuid = None;
            }
        }
        let count = self.files.len();
        self.publish(StoreEvent::FilesReplaced { count });
    }

    /// Remove a file, keeping the order of the others.
    pub fn remove_file(&mut self, file_uuid: &str) -> Option<CloudStorageFile> {
        let index = self.file_index(file_uuid)?;
        let removed = self.files.remove(index);
        self.selected_file_uuids.retain(|uuid| uuid != file_uuid);
        if self.renaming_file_uuid.as_deref() == Some(file_uuid) {
            self.renaming_file_uuid = None;
        }
        self.publish(StoreEvent::FileRemoved {
            file_uuid: file_uuid.to_string(),
            index,
        });
        Some(removed)
    }

    /// Overwrite the display name of a file. Returns false if not found.
    pub fn rename_file(&mut self, file_uuid: &str, file_name: &str) -> bool {
        let Some(file) = self.files.iter_mut().find(|f| f.file_uuid == file_uuid) else {
            return false;
        };
        file.file_name = file_name.to_string();
        self.publish(StoreEvent::FileRenamed {
            file_uuid: file_uuid.to_string(),
            file_name: file_name.to_string(),
        });
        true
    }

    /// Insert or replace an upload task keyed by its upload id.
    pub fn insert_upload_task(&mut self, task: UploadTask) {
        let upload_id = task.upload_id.clone();
        self.upload_tasks.insert(upload_id.clone(), task);
        self.publish(StoreEvent::UploadTaskChanged { upload_id });
    }

    pub fn set_compact(&mut self, compact: bool) {
        self.compact = compact;
        self.publish(StoreEvent::CompactChanged(compact));
    }

    /// Begin renaming a file, or close the rename input with `None`.
    pub fn set_rename_panel(&mut self, file_uuid: Option<&str>) {
        self.renaming_file_uuid = file_uuid.map(str::to_string);
        self.publish(StoreEvent::RenamePanelChanged(
            self.renaming_file_uuid.clone(),
        ));
    }

    /// Replace the selection. Unknown identifiers are ignored.
    pub fn set_selected_file_uuids(&mut self, file_uuids: Vec<String>) {
        let mut seen = HashSet::new();
        self.selected_file_uuids = file_uuids
            .into_iter()
            .filter(|uuid| self.files.iter().any(|f| &f.file_uuid == uuid))
            .filter(|uuid| seen.insert(uuid.clone()))
            .collect();
        let count = self.selected_file_uuids.len();
        self.publish(StoreEvent::SelectionChanged { count });
    }

    /// Add or remove a file from the selection.
    pub fn toggle_file_selected(&mut self, file_uuid: &str, selected: bool) {
        let is_selected = self.is_file_selected(file_uuid);
        if selected && !is_selected && self.file_index(file_uuid).is_some() {
            self.selected_file_uuids.push(file_uuid.to_string());
        } else if !selected && is_selected {
            self.selected_file_uuids.retain(|uuid| uuid != file_uuid);
        } else {
            return;
        }
        let count = self.selected_file_uuids.len();
        self.publish(StoreEvent::SelectionChanged { count });
    }

    pub fn set_upload_panel_expanded(&mut self, expanded: bool) {
        self.upload_panel_expanded = expanded;
        self.publish(StoreEvent::UploadPanelExpanded(expanded));
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        self.publish(StoreEvent::LocaleChanged(locale));
    }
}
