//! Production command implementation.
//!
//! `CloudStorageController` binds a store to host handlers without any local
//! behavior: the host owns uploads, renames and deletions and writes the
//! results back through the store's mutation API.

use super::locale::Locale;
use super::store::CloudStorageStore;
use super::traits::{CloudStorageCommands, CloudStorageHandlers};
use super::types::{CloudStorageFile, FileMenuItem, FileMenuKey, FileName, UploadTask};

pub struct CloudStorageController {
    store: CloudStorageStore,
    handlers: CloudStorageHandlers,
}

impl CloudStorageController {
    pub fn new(store: CloudStorageStore, handlers: CloudStorageHandlers) -> Self {
        Self { store, handlers }
    }

    /// Default per-file menu: download, rename, delete.
    pub fn default_file_menus(locale: Locale) -> Vec<FileMenuItem> {
        let strings = locale.strings();
        vec![
            FileMenuItem::new(FileMenuKey::Download, strings.download),
            FileMenuItem::new(FileMenuKey::Rename, strings.rename),
            FileMenuItem::new(FileMenuKey::Delete, strings.delete).danger(),
        ]
    }
}

impl CloudStorageCommands for CloudStorageController {
    fn store(&self) -> &CloudStorageStore {
        &self.store
    }

    fn store_mut(&mut self) -> &mut CloudStorageStore {
        &mut self.store
    }

    fn file_menus(&self, _file: &CloudStorageFile) -> Vec<FileMenuItem> {
        Self::default_file_menus(self.store.locale())
    }

    fn on_batch_delete(&mut self) {
        (self.handlers.on_batch_delete)();
    }

    fn on_upload(&mut self) {
        (self.handlers.on_upload)();
    }

    fn on_upload_cancel(&mut self, task: &UploadTask) {
        (self.handlers.on_upload_cancel)(task);
    }

    fn on_upload_panel_close(&mut self) {
        (self.handlers.on_upload_panel_close)();
    }

    fn on_upload_retry(&mut self, task: &UploadTask) {
        (self.handlers.on_upload_retry)(task);
    }

    fn on_item_menu_click(&mut self, file_uuid: &str, menu_key: &FileMenuKey) {
        (self.handlers.on_item_menu_click)(file_uuid, menu_key);
    }

    fn on_item_title_click(&mut self, file_uuid: &str) {
        (self.handlers.on_item_title_click)(file_uuid);
    }

    fn on_new_file_name(&mut self, file_uuid: &str, file_name: &FileName) {
        (self.handlers.on_new_file_name)(file_uuid, file_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_commands_forward_without_mutation() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut handlers = CloudStorageHandlers::logging();
        let sink = calls.clone();
        handlers.on_item_menu_click = Box::new(move |uuid: &str, key: &FileMenuKey| {
            sink.borrow_mut().push(format!("{uuid}:{key}"));
        });
        let sink = calls.clone();
        handlers.on_new_file_name = Box::new(move |uuid: &str, name: &FileName| {
            sink.borrow_mut().push(format!("{uuid}={}", name.full_name));
        });

        let mut store = CloudStorageStore::new();
        store.set_files(vec![CloudStorageFile::new("abc", "old.txt")]);
        let mut controller = CloudStorageController::new(store, handlers);

        controller.on_item_menu_click("abc", &FileMenuKey::Delete);
        controller.on_new_file_name("abc", &FileName::parse("new.txt"));

        assert_eq!(*calls.borrow(), vec!["abc:delete", "abc=new.txt"]);
        assert_eq!(controller.store().files().len(), 1);
        assert_eq!(controller.store().files()[0].file_name, "old.txt");
        assert!(controller.take_notices().is_empty());
    }

    #[test]
    fn test_default_file_menus() {
        let menus = CloudStorageController::default_file_menus(Locale::ZhCn);
        let keys: Vec<&str> = menus.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, vec!["download", "rename", "delete"]);
        assert_eq!(menus[0].name, "下载");
        assert!(menus[2].danger);
        assert!(!menus[0].danger);
    }
}
