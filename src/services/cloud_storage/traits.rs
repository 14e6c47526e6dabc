//! Cloud storage command traits.
//!
//! This module defines the operations the cloud storage container needs from
//! whatever drives it, and the host-supplied handlers those operations are
//! forwarded to.

use super::store::CloudStorageStore;
use super::types::{CloudStorageFile, FileMenuItem, FileMenuKey, FileName, Notice, UploadTask};

/// Operations the cloud storage container needs from a store.
///
/// The container reads state through [`store`](Self::store), updates purely
/// visual state (selection, rename input, panel expansion) through
/// [`store_mut`](Self::store_mut), and routes every user command through the
/// `on_*` methods.
pub trait CloudStorageCommands {
    fn store(&self) -> &CloudStorageStore;

    fn store_mut(&mut self) -> &mut CloudStorageStore;

    /// Entries of the per-file context menu.
    fn file_menus(&self, file: &CloudStorageFile) -> Vec<FileMenuItem>;

    /// Delete every selected file.
    fn on_batch_delete(&mut self);

    /// Start a new upload.
    fn on_upload(&mut self);

    fn on_upload_cancel(&mut self, task: &UploadTask);

    fn on_upload_panel_close(&mut self);

    fn on_upload_retry(&mut self, task: &UploadTask);

    /// A per-file menu entry was clicked.
    fn on_item_menu_click(&mut self, file_uuid: &str, menu_key: &FileMenuKey);

    fn on_item_title_click(&mut self, file_uuid: &str);

    /// A rename was committed.
    fn on_new_file_name(&mut self, file_uuid: &str, file_name: &FileName);

    /// Drain acknowledgments raised by commands since the last call.
    fn take_notices(&mut self) -> Vec<Notice> {
        Vec::new()
    }
}

/// Host-supplied handlers the eight commands are forwarded to.
pub struct CloudStorageHandlers {
    pub on_batch_delete: Box<dyn FnMut()>,
    pub on_upload: Box<dyn FnMut()>,
    pub on_upload_cancel: Box<dyn FnMut(&UploadTask)>,
    pub on_upload_panel_close: Box<dyn FnMut()>,
    pub on_upload_retry: Box<dyn FnMut(&UploadTask)>,
    pub on_item_menu_click: Box<dyn FnMut(&str, &FileMenuKey)>,
    pub on_item_title_click: Box<dyn FnMut(&str)>,
    pub on_new_file_name: Box<dyn FnMut(&str, &FileName)>,
}

impl CloudStorageHandlers {
    /// Names of the handlers, in declaration order.
    pub const NAMES: [&'static str; 8] = [
        "onBatchDelete",
        "onUpload",
        "onUploadCancel",
        "onUploadPanelClose",
        "onUploadRetry",
        "onItemMenuClick",
        "onItemTitleClick",
        "onNewFileName",
    ];

    /// Handlers that only log the call.
    pub fn logging() -> Self {
        Self {
            on_batch_delete: Box::new(|| tracing::info!("onBatchDelete")),
            on_upload: Box::new(|| tracing::info!("onUpload")),
            on_upload_cancel: Box::new(|task: &UploadTask| {
                tracing::info!(upload_id = %task.upload_id, "onUploadCancel")
            }),
            on_upload_panel_close: Box::new(|| tracing::info!("onUploadPanelClose")),
            on_upload_retry: Box::new(|task: &UploadTask| {
                tracing::info!(upload_id = %task.upload_id, "onUploadRetry")
            }),
            on_item_menu_click: Box::new(|file_uuid: &str, menu_key: &FileMenuKey| {
                tracing::info!(file_uuid, menu_key = %menu_key, "onItemMenuClick")
            }),
            on_item_title_click: Box::new(|file_uuid: &str| {
                tracing::info!(file_uuid, "onItemTitleClick")
            }),
            on_new_file_name: Box::new(|file_uuid: &str, file_name: &FileName| {
                tracing::info!(file_uuid, file_name = %file_name.full_name, "onNewFileName")
            }),
        }
    }
}

impl Default for CloudStorageHandlers {
    fn default() -> Self {
        Self::logging()
    }
}
