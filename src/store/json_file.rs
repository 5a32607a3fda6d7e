/// License file backed by a JSON array on disk, re-read on every lookup
use std::fs;
use std::path::{Path, PathBuf};

use super::{find_record, RecordStore};
use crate::errors::StoreError;
use crate::models::LicenseRecord;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole file
    pub fn load(&self) -> Result<Vec<LicenseRecord>, StoreError> {
        let contents = fs::read_to_string(&self.path)?;
        let records: Vec<LicenseRecord> = serde_json::from_str(&contents)?;

        log::debug!(
            "Loaded {} license records from {}",
            records.len(),
            self.path.display()
        );

        Ok(records)
    }
}

impl RecordStore for JsonFileStore {
    fn find_by_hwid_and_key(
        &self,
        hwid: &str,
        key: &str,
    ) -> Result<Option<LicenseRecord>, StoreError> {
        let records = self.load()?;
        Ok(find_record(&records, hwid, key).cloned())
    }

    fn record_count(&self) -> Result<usize, StoreError> {
        Ok(self.load()?.len())
    }
}
