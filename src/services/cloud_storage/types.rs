//! Cloud storage types.
//!
//! This module defines the records shown by the cloud storage container:
//! stored files, upload tasks, file names and per-file menu entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Conversion status of a stored file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileConvertStatus {
    Idle,
    Error,
    Success,
    Converting,
}

impl FileConvertStatus {
    /// Get all conversion statuses.
    pub fn all() -> [FileConvertStatus; 4] {
        [
            FileConvertStatus::Idle,
            FileConvertStatus::Error,
            FileConvertStatus::Success,
            FileConvertStatus::Converting,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileConvertStatus::Idle => "idle",
            FileConvertStatus::Error => "error",
            FileConvertStatus::Success => "success",
            FileConvertStatus::Converting => "converting",
        }
    }
}

impl std::fmt::Display for FileConvertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of an upload task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Idle,
    Error,
    Success,
    Uploading,
}

impl UploadStatus {
    /// Get all upload statuses.
    pub fn all() -> [UploadStatus; 4] {
        [
            UploadStatus::Idle,
            UploadStatus::Error,
            UploadStatus::Success,
            UploadStatus::Uploading,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "idle",
            UploadStatus::Error => "error",
            UploadStatus::Success => "success",
            UploadStatus::Uploading => "uploading",
        }
    }

    /// Sort rank used by the upload panel: active work first, finished work last.
    pub fn panel_rank(&self) -> u8 {
        match self {
            UploadStatus::Uploading => 0,
            UploadStatus::Idle => 1,
            UploadStatus::Error => 2,
            UploadStatus::Success => 3,
        }
    }

    /// Whether the task can still be cancelled.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, UploadStatus::Idle | UploadStatus::Uploading)
    }
}

impl std::fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A file stored in the cloud storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudStorageFile {
    /// Unique identifier of the file.
    pub file_uuid: String,
    /// Display name, including the extension.
    pub file_name: String,
    /// Size in bytes.
    pub file_size: u64,
    /// Conversion status (documents are converted for whiteboard display).
    pub convert: FileConvertStatus,
    /// Creation timestamp.
    pub create_at: DateTime<Utc>,
}

impl CloudStorageFile {
    pub fn new(file_uuid: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            file_uuid: file_uuid.into(),
            file_name: file_name.into(),
            file_size: 0,
            convert: FileConvertStatus::Idle,
            create_at: Utc::now(),
        }
    }

    /// Get a human-readable size string.
    pub fn size_display(&self) -> String {
        format_bytes(self.file_size)
    }
}

/// An upload task shown in the upload panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadTask {
    /// Unique identifier of the upload, also the key in the task map.
    pub upload_id: String,
    pub file_name: String,
    pub status: UploadStatus,
    /// Completion percentage, 0 to 100.
    pub percent: u8,
}

impl UploadTask {
    pub fn new(upload_id: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            upload_id: upload_id.into(),
            file_name: file_name.into(),
            status: UploadStatus::Idle,
            percent: 0,
        }
    }

    pub fn with_status(mut self, status: UploadStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the completion percentage, clamped to 100.
    pub fn with_percent(mut self, percent: u8) -> Self {
        self.percent = percent.min(100);
        self
    }
}

/// A file name entered by the user, split into base name and extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileName {
    /// Base name without the extension.
    pub name: String,
    /// Extension including the leading dot, or empty.
    pub ext: String,
    /// Base name and extension joined.
    pub full_name: String,
}

impl FileName {
    /// Parse a full file name such as `report.pdf`.
    pub fn parse(full_name: &str) -> Self {
        let (name, ext) = Self::split(full_name);
        Self {
            name: name.to_string(),
            ext: ext.to_string(),
            full_name: full_name.to_string(),
        }
    }

    /// Split at the last dot. Leading dots (`.bashrc`) are part of the name.
    fn split(full_name: &str) -> (&str, &str) {
        match full_name.rfind('.') {
            Some(0) | None => (full_name, ""),
            Some(ix) => full_name.split_at(ix),
        }
    }
}

/// Key of a per-file menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileMenuKey {
    Download,
    Rename,
    Delete,
    /// A key this fixture does not handle locally.
    Other(String),
}

impl FileMenuKey {
    pub fn as_str(&self) -> &str {
        match self {
            FileMenuKey::Download => "download",
            FileMenuKey::Rename => "rename",
            FileMenuKey::Delete => "delete",
            FileMenuKey::Other(key) => key,
        }
    }
}

impl From<&str> for FileMenuKey {
    fn from(key: &str) -> Self {
        match key {
            "download" => FileMenuKey::Download,
            "rename" => FileMenuKey::Rename,
            "delete" => FileMenuKey::Delete,
            other => FileMenuKey::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for FileMenuKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An entry of the per-file context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMenuItem {
    pub key: FileMenuKey,
    /// Localized label.
    pub name: String,
    /// Rendered with the danger color.
    pub danger: bool,
}

impl FileMenuItem {
    pub fn new(key: FileMenuKey, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
            danger: false,
        }
    }

    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }
}

/// Informational acknowledgment raised by a command, shown as a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Format a byte count as a human-readable string.
pub fn format_bytes(bytes: u64) -> String {
    match bytes {
        b if b >= 1_073_741_824 => format!("{:.1} GB", b as f64 / 1_073_741_824.0),
        b if b >= 1_048_576 => format!("{:.1} MB", b as f64 / 1_048_576.0),
        b if b >= 1024 => format!("{:.1} KB", b as f64 / 1024.0),
        b => format!("{} B", b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_parse() {
        let file_name = FileName::parse("new.txt");
        assert_eq!(file_name.name, "new");
        assert_eq!(file_name.ext, ".txt");
        assert_eq!(file_name.full_name, "new.txt");

        let nested = FileName::parse("archive.tar.gz");
        assert_eq!(nested.name, "archive.tar");
        assert_eq!(nested.ext, ".gz");
    }

    #[test]
    fn test_file_name_without_extension() {
        let plain = FileName::parse("README");
        assert_eq!(plain.name, "README");
        assert_eq!(plain.ext, "");

        let dotfile = FileName::parse(".bashrc");
        assert_eq!(dotfile.name, ".bashrc");
        assert_eq!(dotfile.ext, "");
    }

    #[test]
    fn test_menu_key_from_str() {
        assert_eq!(FileMenuKey::from("download"), FileMenuKey::Download);
        assert_eq!(FileMenuKey::from("rename"), FileMenuKey::Rename);
        assert_eq!(FileMenuKey::from("delete"), FileMenuKey::Delete);
        assert_eq!(
            FileMenuKey::from("share"),
            FileMenuKey::Other("share".to_string())
        );
        assert_eq!(FileMenuKey::Other("share".to_string()).as_str(), "share");
    }

    #[test]
    fn test_upload_task_percent_is_clamped() {
        let task = UploadTask::new("u1", "a.png").with_percent(250);
        assert_eq!(task.percent, 100);
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1_500_000), "1.4 MB");
        assert_eq!(format_bytes(2_500_000_000), "2.3 GB");
    }

    #[test]
    fn test_status_serde_names() {
        let json = serde_json::to_string(&FileConvertStatus::Converting).unwrap();
        assert_eq!(json, "\"converting\"");
        let status: UploadStatus = serde_json::from_str("\"uploading\"").unwrap();
        assert_eq!(status, UploadStatus::Uploading);
    }
}
