//! Action log for story instrumentation.
//!
//! Stories receive handlers that record every call here; the story browser
//! shows the log in its Actions panel.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use chrono::{DateTime, Local};

use crate::services::cloud_storage::{CloudStorageHandlers, FileMenuKey, FileName, UploadTask};

const DEFAULT_CAPACITY: usize = 200;

/// A recorded handler call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    pub name: &'static str,
    /// Arguments rendered for display.
    pub args: String,
    pub at: DateTime<Local>,
}

/// Shared, bounded log of handler calls, newest last.
#[derive(Clone)]
pub struct ActionLog {
    records: Rc<RefCell<VecDeque<ActionRecord>>>,
    capacity: usize,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Rc::new(RefCell::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    pub fn record(&self, name: &'static str, args: String) {
        tracing::info!(action = name, %args, "story action");
        let mut records = self.records.borrow_mut();
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(ActionRecord {
            name,
            args,
            at: Local::now(),
        });
    }

    /// Recorded calls, newest first.
    pub fn latest(&self) -> Vec<ActionRecord> {
        self.records.borrow().iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }

    /// Handlers that record each call under its handler name.
    pub fn handlers(&self) -> CloudStorageHandlers {
        let log = self.clone();
        let on_batch_delete = Box::new(move || log.record("onBatchDelete", String::new()));
        let log = self.clone();
        let on_upload = Box::new(move || log.record("onUpload", String::new()));
        let log = self.clone();
        let on_upload_cancel = Box::new(move |task: &UploadTask| {
            log.record("onUploadCancel", format!("{:?}", task.upload_id))
        });
        let log = self.clone();
        let on_upload_panel_close =
            Box::new(move || log.record("onUploadPanelClose", String::new()));
        let log = self.clone();
        let on_upload_retry = Box::new(move |task: &UploadTask| {
            log.record("onUploadRetry", format!("{:?}", task.upload_id))
        });
        let log = self.clone();
        let on_item_menu_click = Box::new(move |file_uuid: &str, menu_key: &FileMenuKey| {
            log.record(
                "onItemMenuClick",
                format!("{:?}, {:?}", file_uuid, menu_key.as_str()),
            )
        });
        let log = self.clone();
        let on_item_title_click = Box::new(move |file_uuid: &str| {
            log.record("onItemTitleClick", format!("{:?}", file_uuid))
        });
        let log = self.clone();
        let on_new_file_name = Box::new(move |file_uuid: &str, file_name: &FileName| {
            log.record(
                "onNewFileName",
                format!("{:?}, {:?}", file_uuid, file_name.full_name),
            )
        });

        CloudStorageHandlers {
            on_batch_delete,
            on_upload,
            on_upload_cancel,
            on_upload_panel_close,
            on_upload_retry,
            on_item_menu_click,
            on_item_title_click,
            on_new_file_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handlers_record_calls() {
        let log = ActionLog::new();
        let mut handlers = log.handlers();

        (handlers.on_item_menu_click)("abc", &FileMenuKey::Download);
        (handlers.on_new_file_name)("abc", &FileName::parse("new.txt"));
        (handlers.on_upload)();

        let latest = log.latest();
        assert_eq!(latest.len(), 3);
        assert_eq!(latest[0].name, "onUpload");
        assert_eq!(latest[1].name, "onNewFileName");
        assert_eq!(latest[1].args, "\"abc\", \"new.txt\"");
        assert_eq!(latest[2].args, "\"abc\", \"download\"");
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let log = ActionLog::with_capacity(2);
        log.record("first", String::new());
        log.record("second", String::new());
        log.record("third", String::new());

        let names: Vec<&str> = log.latest().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["third", "second"]);

        log.clear();
        assert!(log.is_empty());
    }
}
