//! Fake cloud storage for stories.
//!
//! `FakeCloudStorage` wraps a [`CloudStorageController`] and decorates the
//! item-menu and rename commands with local mock behavior, so a human can
//! download, rename and delete files in the story without a backend. Every
//! command still reaches the story's handlers afterwards.

use crate::services::cloud_storage::{
    CloudStorageCommands, CloudStorageController, CloudStorageFile, CloudStorageHandlers,
    CloudStorageStore, FileMenuItem, FileMenuKey, FileName, Notice, UploadTask,
};

use super::generator::MockDataGenerator;

/// The handlers a fake store is configured with.
pub type FakeStoreConfig = CloudStorageHandlers;

pub struct FakeCloudStorage {
    inner: CloudStorageController,
    notices: Vec<Notice>,
}

impl FakeCloudStorage {
    /// Create a fake store around an empty state.
    pub fn new(config: FakeStoreConfig) -> Self {
        Self::with_store(CloudStorageStore::new(), config)
    }

    pub fn with_store(store: CloudStorageStore, config: FakeStoreConfig) -> Self {
        Self {
            inner: CloudStorageController::new(store, config),
            notices: vec![],
        }
    }

    /// Create a fake store filled with generated mock data.
    pub fn generate(config: FakeStoreConfig, generator: &mut MockDataGenerator) -> Self {
        let mut fake = Self::new(config);
        generator.populate(fake.inner.store_mut());
        fake
    }
}

impl CloudStorageCommands for FakeCloudStorage {
    fn store(&self) -> &CloudStorageStore {
        self.inner.store()
    }

    fn store_mut(&mut self) -> &mut CloudStorageStore {
        self.inner.store_mut()
    }

    fn file_menus(&self, file: &CloudStorageFile) -> Vec<FileMenuItem> {
        self.inner.file_menus(file)
    }

    fn on_batch_delete(&mut self) {
        self.inner.on_batch_delete();
    }

    fn on_upload(&mut self) {
        self.inner.on_upload();
    }

    fn on_upload_cancel(&mut self, task: &UploadTask) {
        self.inner.on_upload_cancel(task);
    }

    fn on_upload_panel_close(&mut self) {
        self.inner.on_upload_panel_close();
    }

    fn on_upload_retry(&mut self, task: &UploadTask) {
        self.inner.on_upload_retry(task);
    }

    fn on_item_menu_click(&mut self, file_uuid: &str, menu_key: &FileMenuKey) {
        match menu_key {
            FileMenuKey::Download => {
                let file_name = self
                    .store()
                    .find_file(file_uuid)
                    .map(|file| file.file_name.as_str())
                    .unwrap_or_default();
                let notice = Notice::info(format!("Fake download file \"{}\".", file_name));
                self.notices.push(notice);
            }
            FileMenuKey::Rename => {
                self.store_mut().set_rename_panel(Some(file_uuid));
            }
            FileMenuKey::Delete => {
                self.store_mut().remove_file(file_uuid);
            }
            FileMenuKey::Other(_) => {}
        }
        self.inner.on_item_menu_click(file_uuid, menu_key);
    }

    fn on_item_title_click(&mut self, file_uuid: &str) {
        self.inner.on_item_title_click(file_uuid);
    }

    fn on_new_file_name(&mut self, file_uuid: &str, file_name: &FileName) {
        self.store_mut().rename_file(file_uuid, &file_name.full_name);
        self.inner.on_new_file_name(file_uuid, file_name);
    }

    fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stories::ActionLog;

    fn fake_with(files: &[(&str, &str)]) -> (FakeCloudStorage, ActionLog) {
        let log = ActionLog::new();
        let mut fake = FakeCloudStorage::new(log.handlers());
        fake.store_mut().set_files(
            files
                .iter()
                .map(|(uuid, name)| CloudStorageFile::new(*uuid, *name))
                .collect(),
        );
        (fake, log)
    }

    fn names(fake: &FakeCloudStorage) -> Vec<String> {
        fake.store()
            .files()
            .iter()
            .map(|f| f.file_name.clone())
            .collect()
    }

    #[test]
    fn test_download_acknowledges_without_mutation() {
        let (mut fake, log) = fake_with(&[("abc", "report.pdf")]);
        let before = fake.store().files().to_vec();

        fake.on_item_menu_click("abc", &FileMenuKey::Download);

        let notices = fake.take_notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].message.contains("report.pdf"));
        assert_eq!(fake.store().files(), before.as_slice());
        assert_eq!(log.len(), 1);
        assert!(fake.take_notices().is_empty());
    }

    #[test]
    fn test_download_unknown_file_still_forwards() {
        let (mut fake, log) = fake_with(&[("abc", "report.pdf")]);

        fake.on_item_menu_click("missing", &FileMenuKey::Download);

        let notices = fake.take_notices();
        assert_eq!(notices[0].message, "Fake download file \"\".");
        assert_eq!(log.len(), 1);
        assert_eq!(log.latest()[0].name, "onItemMenuClick");
    }

    #[test]
    fn test_rename_enters_rename_state() {
        let (mut fake, log) = fake_with(&[("abc", "old.txt")]);

        fake.on_item_menu_click("abc", &FileMenuKey::Rename);

        assert_eq!(fake.store().renaming_file_uuid(), Some("abc"));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_delete_removes_exactly_that_file() {
        let (mut fake, log) = fake_with(&[("a", "a.txt"), ("b", "b.txt"), ("c", "c.txt")]);

        fake.on_item_menu_click("b", &FileMenuKey::Delete);

        assert_eq!(names(&fake), vec!["a.txt", "c.txt"]);
        assert_eq!(log.latest()[0].args, "\"b\", \"delete\"");
    }

    #[test]
    fn test_delete_unknown_file_is_idempotent() {
        let (mut fake, log) = fake_with(&[("a", "a.txt"), ("b", "b.txt")]);
        let before = fake.store().files().to_vec();

        fake.on_item_menu_click("missing", &FileMenuKey::Delete);
        fake.on_item_menu_click("missing", &FileMenuKey::Delete);

        assert_eq!(fake.store().files(), before.as_slice());
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_other_menu_key_only_forwards() {
        let (mut fake, log) = fake_with(&[("a", "a.txt")]);
        let before = fake.store().files().to_vec();

        fake.on_item_menu_click("a", &FileMenuKey::from("share"));

        assert_eq!(fake.store().files(), before.as_slice());
        assert_eq!(fake.store().renaming_file_uuid(), None);
        assert!(fake.take_notices().is_empty());
        assert_eq!(log.latest()[0].args, "\"a\", \"share\"");
    }

    #[test]
    fn test_new_file_name_renames_and_forwards_once() {
        let (mut fake, log) = fake_with(&[("abc", "old.txt")]);

        fake.on_new_file_name("abc", &FileName::parse("new.txt"));

        assert_eq!(fake.store().find_file("abc").unwrap().file_name, "new.txt");
        let latest = log.latest();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].name, "onNewFileName");
        assert_eq!(latest[0].args, "\"abc\", \"new.txt\"");
    }

    #[test]
    fn test_new_file_name_for_unknown_file_forwards_once() {
        let (mut fake, log) = fake_with(&[("abc", "old.txt")]);

        fake.on_new_file_name("missing", &FileName::parse("new.txt"));

        assert_eq!(names(&fake), vec!["old.txt"]);
        assert_eq!(log.len(), 1);
        assert_eq!(log.latest()[0].args, "\"missing\", \"new.txt\"");
    }

    #[test]
    fn test_pass_through_commands_forward() {
        let (mut fake, log) = fake_with(&[("a", "a.txt")]);
        fake.store_mut().toggle_file_selected("a", true);
        let task = UploadTask::new("u1", "photo.png");

        fake.on_batch_delete();
        fake.on_upload();
        fake.on_upload_cancel(&task);
        fake.on_upload_retry(&task);
        fake.on_upload_panel_close();
        fake.on_item_title_click("a");

        let names: Vec<&str> = log.latest().iter().rev().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "onBatchDelete",
                "onUpload",
                "onUploadCancel",
                "onUploadRetry",
                "onUploadPanelClose",
                "onItemTitleClick",
            ]
        );
        // Batch delete is left to the host.
        assert_eq!(fake.store().files().len(), 1);
    }

    #[test]
    fn test_generate_fills_store() {
        use crate::stories::{FixtureSettings, MockDataGenerator};

        let mut generator = MockDataGenerator::seeded(11, FixtureSettings::default());
        let fake = FakeCloudStorage::generate(ActionLog::new().handlers(), &mut generator);
        assert_eq!(fake.store().files().len(), 25);
        assert_eq!(fake.file_menus(&fake.store().files()[0]).len(), 3);
    }
}
