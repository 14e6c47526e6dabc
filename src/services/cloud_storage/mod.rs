//! Cloud storage model.
//!
//! This module holds everything the cloud storage container renders and the
//! commands it issues, independent of any UI toolkit.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 CloudStorageContainer (view)                │
//! │  - Reads the store, re-renders on StoreEvent                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ CloudStorageCommands
//!              ┌───────────────┴───────────────┐
//!              ▼                               ▼
//! ┌──────────────────────────┐   ┌──────────────────────────────┐
//! │  CloudStorageController  │◄──│  FakeCloudStorage (stories)  │
//! │  store + host handlers   │   │  local mock mutations, then  │
//! │                          │   │  forwards to the controller  │
//! └──────────────────────────┘   └──────────────────────────────┘
//! ```

mod controller;
mod locale;
mod store;
mod traits;
mod types;

pub use controller::CloudStorageController;
pub use locale::{Locale, Strings};
pub use store::{CloudStorageStore, StoreEvent};
pub use traits::{CloudStorageCommands, CloudStorageHandlers};
pub use types::{
    format_bytes, CloudStorageFile, FileConvertStatus, FileMenuItem, FileMenuKey, FileName,
    Notice, UploadStatus, UploadTask,
};
