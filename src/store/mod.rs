/// License record storage
pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::errors::StoreError;
use crate::models::LicenseRecord;

/// Read-only lookup of license records
pub trait RecordStore: Send + Sync {
    /// First record whose hardware id and key both equal the supplied values
    fn find_by_hwid_and_key(
        &self,
        hwid: &str,
        key: &str,
    ) -> Result<Option<LicenseRecord>, StoreError>;

    /// Number of records currently readable from the backing storage
    fn record_count(&self) -> Result<usize, StoreError>;
}

/// Linear scan, first match wins
pub fn find_record<'a>(
    records: &'a [LicenseRecord],
    hwid: &str,
    key: &str,
) -> Option<&'a LicenseRecord> {
    records.iter().find(|record| record.matches(hwid, key))
}
