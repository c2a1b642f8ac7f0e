//! Typed record and photo access over any key-value store.
//!
//! # Responsibility
//! - Map the `adminData` and `profilePhoto` keys to domain values.
//! - Decide the fallback policy for absent or unparsable stored records.
//!
//! # Invariants
//! - `load_record` always yields a complete record: absent key or corrupt
//!   JSON falls back to the built-in default (corrupt blobs log a warning).
//! - `save_record` propagates storage and serialization errors unguarded.

use crate::model::content::ContentRecord;
use crate::store::kv::KeyValueStore;
use crate::store::{StoreError, StoreResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key for the JSON content record.
pub const ADMIN_DATA_KEY: &str = "adminData";
/// Storage key for the avatar photo data-URL.
pub const PROFILE_PHOTO_KEY: &str = "profilePhoto";

/// Error for typed record persistence.
#[derive(Debug)]
pub enum ContentRepoError {
    Store(StoreError),
    Serialize(serde_json::Error),
}

impl Display for ContentRepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize content record: {err}"),
        }
    }
}

impl Error for ContentRepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StoreError> for ContentRepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for ContentRepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Typed repository over an injected key-value store.
pub struct ContentRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ContentRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the active content record.
    ///
    /// Absent key yields the built-in default. A stored blob that fails to
    /// parse also yields the default, after a warning: the page must always
    /// render, and reset is the recovery path for a bad blob.
    pub fn load_record(&self) -> StoreResult<ContentRecord> {
        match self.store.get(ADMIN_DATA_KEY)? {
            None => Ok(ContentRecord::builtin_default()),
            Some(raw) => match ContentRecord::from_json(&raw) {
                Ok(record) => Ok(record),
                Err(err) => {
                    warn!(
                        "event=record_load module=store status=warn reason=parse_failed error={err}"
                    );
                    Ok(ContentRecord::builtin_default())
                }
            },
        }
    }

    /// Persists the record wholesale under `adminData`.
    pub fn save_record(&mut self, record: &ContentRecord) -> Result<(), ContentRepoError> {
        let raw = record.to_json()?;
        self.store.set(ADMIN_DATA_KEY, &raw)?;
        info!(
            "event=record_save module=store status=ok projects={}",
            record.projects.len()
        );
        Ok(())
    }

    /// Removes the stored record, reverting the next load to the default.
    pub fn clear_record(&mut self) -> StoreResult<()> {
        self.store.remove(ADMIN_DATA_KEY)?;
        info!("event=record_clear module=store status=ok");
        Ok(())
    }

    /// Loads the stored avatar photo data-URL, if any.
    pub fn load_photo(&self) -> StoreResult<Option<String>> {
        self.store.get(PROFILE_PHOTO_KEY)
    }

    /// Persists the avatar photo data-URL.
    pub fn save_photo(&mut self, data_url: &str) -> StoreResult<()> {
        self.store.set(PROFILE_PHOTO_KEY, data_url)
    }
}
