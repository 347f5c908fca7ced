use crate::domain::model::VisitRecord;
use crate::domain::ports::VisitStore;
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-process store. Clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<Vec<VisitRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<VisitRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    pub async fn records(&self) -> Vec<VisitRecord> {
        self.records.lock().await.clone()
    }
}

impl VisitStore for MemoryStore {
    async fn put_record(&self, record: &VisitRecord) -> Result<()> {
        self.records.lock().await.push(record.clone());
        Ok(())
    }

    async fn count_records(&self) -> Result<usize> {
        Ok(self.records.lock().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_records() {
        tokio_test::block_on(async {
            let store = MemoryStore::new();
            let other = store.clone();
            let record = VisitRecord {
                visit: "1".to_string(),
                timestamp: "05-Jan-24 03:22:10 PM".to_string(),
            };

            store.put_record(&record).await.unwrap();
            store.put_record(&record).await.unwrap();

            assert_eq!(other.count_records().await.unwrap(), 2);
            assert_eq!(other.records().await, vec![record.clone(), record]);
        });
    }
}
