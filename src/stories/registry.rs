//! Story registry.

use super::cloud_storage::{CompactModeStory, OverviewStory};
use super::story::Story;

/// Every registered story, in display order.
pub fn all_stories() -> Vec<Box<dyn Story>> {
    vec![Box::new(OverviewStory), Box::new(CompactModeStory)]
}

/// Distinct story titles, in display order.
pub fn all_titles() -> Vec<&'static str> {
    let mut titles: Vec<&'static str> = vec![];
    for story in all_stories() {
        if !titles.contains(&story.title()) {
            titles.push(story.title());
        }
    }
    titles
}

/// Index of the story with the given id.
pub fn story_index(id: &str) -> Option<usize> {
    all_stories().iter().position(|story| story.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry() {
        let names: Vec<&str> = all_stories().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Overview", "Compact Mode"]);
        assert_eq!(all_titles(), vec!["CloudStorage/CloudStorageContainer"]);
    }

    #[test]
    fn test_story_index() {
        assert_eq!(
            story_index("cloudstorage-cloudstoragecontainer--compact-mode"),
            Some(1)
        );
        assert_eq!(story_index("missing"), None);
    }
}
