//! Localized strings for the cloud storage container.

use serde::{Deserialize, Serialize};

/// Display language of the container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Locale {
    /// Parse a locale tag such as `en`, `en-US` or `zh-CN`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lower = tag.trim().to_ascii_lowercase();
        if lower == "en" || lower.starts_with("en-") || lower.starts_with("en_") {
            Some(Locale::En)
        } else if lower == "zh" || lower.starts_with("zh-") || lower.starts_with("zh_") {
            Some(Locale::ZhCn)
        } else {
            None
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Locale::En => &EN,
            Locale::ZhCn => &ZH_CN,
        }
    }
}

/// Static string table for one locale.
pub struct Strings {
    pub download: &'static str,
    pub rename: &'static str,
    pub delete: &'static str,
    pub upload: &'static str,
    pub usage: &'static str,
    pub no_files: &'static str,
    pub upload_list: &'static str,
    pub retry: &'static str,
    pub cancel: &'static str,
}

const EN: Strings = Strings {
    download: "Download",
    rename: "Rename",
    delete: "Delete",
    upload: "Upload",
    usage: "Used",
    no_files: "No files",
    upload_list: "Uploads",
    retry: "Retry",
    cancel: "Cancel",
};

const ZH_CN: Strings = Strings {
    download: "下载",
    rename: "重命名",
    delete: "删除",
    upload: "上传",
    usage: "已使用",
    no_files: "暂无文件",
    upload_list: "传输列表",
    retry: "重试",
    cancel: "取消",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("en"), Some(Locale::En));
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("zh-CN"), Some(Locale::ZhCn));
        assert_eq!(Locale::from_tag("zh_TW"), Some(Locale::ZhCn));
        assert_eq!(Locale::from_tag("fr"), None);
    }

    #[test]
    fn test_strings() {
        assert_eq!(Locale::ZhCn.strings().download, "下载");
        assert_eq!(Locale::ZhCn.strings().rename, "重命名");
        assert_eq!(Locale::En.strings().delete, "Delete");
    }
}
