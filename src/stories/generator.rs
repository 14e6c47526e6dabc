//! Mock data generator for cloud storage stories.
//!
//! Produces random files, upload tasks and usage totals. Generators built
//! with [`MockDataGenerator::seeded`] and a fixed clock are reproducible.

use chrono::{DateTime, TimeDelta, Utc};
use fake::{
    faker::{
        filesystem::en::FileExtension,
        lorem::en::{Word, Words},
    },
    Fake,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::services::cloud_storage::{
    CloudStorageFile, CloudStorageStore, FileConvertStatus, UploadStatus, UploadTask,
};

const ONE_YEAR_SECS: i64 = 365 * 24 * 60 * 60;

/// Shape of the generated mock data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureSettings {
    /// Exact number of generated files.
    pub file_count: usize,
    /// Upper bound (inclusive) of the total usage in bytes.
    pub max_total_usage: u64,
    /// Upper bound (inclusive) of a file size in bytes.
    pub max_file_size: u64,
    /// Upper bound (inclusive) of the number of upload tasks.
    pub max_upload_tasks: usize,
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self {
            file_count: 25,
            max_total_usage: 1_000_000_000,
            max_file_size: 100_000_000,
            max_upload_tasks: 200,
        }
    }
}

/// Random generator of cloud storage mock data.
pub struct MockDataGenerator {
    rng: StdRng,
    now: DateTime<Utc>,
    settings: FixtureSettings,
}

impl MockDataGenerator {
    /// Create a generator seeded from the operating system.
    pub fn new(settings: FixtureSettings) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            now: Utc::now(),
            settings,
        }
    }

    /// Create a reproducible generator.
    pub fn seeded(seed: u64, settings: FixtureSettings) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            now: Utc::now(),
            settings,
        }
    }

    /// Seeded when a seed is given, random otherwise.
    pub fn from_seed(seed: Option<u64>, settings: FixtureSettings) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed, settings),
            None => Self::new(settings),
        }
    }

    /// Pin the clock creation dates are generated against.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    fn uuid(&mut self) -> String {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);
        uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string()
    }

    fn extension(&mut self) -> String {
        FileExtension().fake_with_rng(&mut self.rng)
    }

    pub fn total_usage(&mut self) -> u64 {
        self.rng.gen_range(0..=self.settings.max_total_usage)
    }

    /// A file named `<1-3 words>.<ext>`, created within the past year.
    pub fn file(&mut self) -> CloudStorageFile {
        let words: Vec<String> = Words(1..4).fake_with_rng(&mut self.rng);
        let file_name = format!("{}.{}", words.join(" "), self.extension());
        let statuses = FileConvertStatus::all();
        let age = TimeDelta::seconds(self.rng.gen_range(1..=ONE_YEAR_SECS));

        CloudStorageFile {
            file_uuid: self.uuid(),
            file_name,
            file_size: self.rng.gen_range(0..=self.settings.max_file_size),
            convert: statuses[self.rng.gen_range(0..statuses.len())],
            create_at: self.now - age,
        }
    }

    pub fn files(&mut self) -> Vec<CloudStorageFile> {
        (0..self.settings.file_count).map(|_| self.file()).collect()
    }

    /// An upload task named `<word>.<ext>`.
    pub fn upload_task(&mut self) -> UploadTask {
        let word: String = Word().fake_with_rng(&mut self.rng);
        let file_name = format!("{}.{}", word, self.extension());
        let statuses = UploadStatus::all();

        let status = statuses[self.rng.gen_range(0..statuses.len())];

        UploadTask::new(self.uuid(), file_name)
            .with_status(status)
            .with_percent(self.rng.gen_range(0..=100))
    }

    /// Between zero and `max_upload_tasks` tasks, inclusive.
    pub fn upload_tasks(&mut self) -> Vec<UploadTask> {
        let count = self.rng.gen_range(0..=self.settings.max_upload_tasks);
        (0..count).map(|_| self.upload_task()).collect()
    }

    /// Fill a store with usage, files and upload tasks.
    pub fn populate(&mut self, store: &mut CloudStorageStore) {
        store.set_total_usage(self.total_usage());
        store.set_files(self.files());
        for task in self.upload_tasks() {
            store.insert_upload_task(task);
        }
        tracing::debug!(
            files = store.files().len(),
            upload_tasks = store.upload_tasks().len(),
            "Populated mock cloud storage"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn populated(seed: u64) -> CloudStorageStore {
        let mut store = CloudStorageStore::new();
        MockDataGenerator::seeded(seed, FixtureSettings::default()).populate(&mut store);
        store
    }

    #[test]
    fn test_generated_store_bounds() {
        for seed in 0..20 {
            let store = populated(seed);
            assert!(store.total_usage() <= 1_000_000_000);
            assert_eq!(store.files().len(), 25);
            for file in store.files() {
                assert!(file.file_size <= 100_000_000);
                assert!(FileConvertStatus::all().contains(&file.convert));
                assert!(file.file_name.contains('.'));
            }

            assert!(store.upload_tasks().len() < 201);
            for (upload_id, task) in store.upload_tasks() {
                assert_eq!(upload_id, &task.upload_id);
                assert!(task.percent <= 100);
                assert!(UploadStatus::all().contains(&task.status));
            }
        }
    }

    #[test]
    fn test_file_ids_are_unique() {
        let store = populated(7);
        let ids: HashSet<&str> = store.files().iter().map(|f| f.file_uuid.as_str()).collect();
        assert_eq!(ids.len(), store.files().len());
    }

    #[test]
    fn test_creation_dates_are_in_the_past_year() {
        let now = Utc::now();
        let mut generator = MockDataGenerator::seeded(3, FixtureSettings::default()).with_now(now);
        for file in generator.files() {
            assert!(file.create_at < now);
            assert!(file.create_at >= now - TimeDelta::seconds(ONE_YEAR_SECS));
        }
    }

    #[test]
    fn test_seeded_generators_are_reproducible() {
        let now = Utc::now();
        let settings = FixtureSettings::default();
        let mut a = MockDataGenerator::seeded(42, settings).with_now(now);
        let mut b = MockDataGenerator::seeded(42, settings).with_now(now);

        assert_eq!(a.total_usage(), b.total_usage());
        assert_eq!(a.files(), b.files());
        assert_eq!(a.upload_tasks(), b.upload_tasks());
    }

    #[test]
    fn test_custom_settings() {
        let settings = FixtureSettings {
            file_count: 3,
            max_total_usage: 10,
            max_file_size: 0,
            max_upload_tasks: 0,
        };
        let mut store = CloudStorageStore::new();
        MockDataGenerator::seeded(1, settings).populate(&mut store);

        assert_eq!(store.files().len(), 3);
        assert!(store.total_usage() <= 10);
        assert!(store.files().iter().all(|f| f.file_size == 0));
        assert!(store.upload_tasks().is_empty());
    }
}
