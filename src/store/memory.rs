/// Fixed in-process record list
use super::{find_record, RecordStore};
use crate::errors::StoreError;
use crate::models::LicenseRecord;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<LicenseRecord>,
}

impl MemoryStore {
    pub fn new(records: Vec<LicenseRecord>) -> Self {
        Self { records }
    }
}

impl RecordStore for MemoryStore {
    fn find_by_hwid_and_key(
        &self,
        hwid: &str,
        key: &str,
    ) -> Result<Option<LicenseRecord>, StoreError> {
        Ok(find_record(&self.records, hwid, key).cloned())
    }

    fn record_count(&self) -> Result<usize, StoreError> {
        Ok(self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_lookup() {
        let store = MemoryStore::new(vec![LicenseRecord::new("ABC123", "XYZ", "2999-01-01")]);

        assert!(store.find_by_hwid_and_key("ABC123", "XYZ").unwrap().is_some());
        assert!(store.find_by_hwid_and_key("ABC123", "xyz").unwrap().is_none());
        assert!(MemoryStore::default()
            .find_by_hwid_and_key("ABC123", "XYZ")
            .unwrap()
            .is_none());
        assert_eq!(store.record_count().unwrap(), 1);
    }
}
