//! Embedded application assets.

use std::borrow::Cow;

use anyhow::anyhow;
use gpui::{AssetSource, Result, SharedString};
use rust_embed::RustEmbed;

/// SVG icons bundled into the binary from `assets/`.
#[derive(RustEmbed)]
#[folder = "assets"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        Self::get(path)
            .map(|file| Some(file.data))
            .ok_or_else(|| anyhow!("could not find asset at path \"{}\"", path))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter(|p| p.starts_with(path))
            .map(|p| SharedString::from(p.to_string()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons_are_embedded() {
        for icon in ["icons/file.svg", "icons/upload.svg", "icons/trash.svg", "icons/x.svg"] {
            assert!(Assets.load(icon).unwrap().is_some(), "{icon}");
        }
        assert!(Assets.load("icons/missing.svg").is_err());
        assert!(Assets.load("").unwrap().is_none());
    }

    #[test]
    fn test_list_icons() {
        let icons = Assets.list("icons/").unwrap();
        assert!(icons.iter().any(|p| p.as_ref() == "icons/chevron-up.svg"));
    }
}
