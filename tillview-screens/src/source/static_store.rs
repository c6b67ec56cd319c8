//! In-memory record store

use async_trait::async_trait;
use tillview_lib::DataSource;
use tillview_lib::ListRecord;
use tillview_lib::RecordStore;
use tillview_lib::SourceError;
use tokio::sync::RwLock;

/// An in-memory data source.
///
/// Backs the screens that list static catalog data, and stands in for the
/// backend in tests. Mutations edit the stored vector in place; reads hand
/// out a snapshot clone, so a browser refresh sees a consistent set.
#[derive(Debug, Default)]
pub struct StaticSource<R> {
    records: RwLock<Vec<R>>,
}

impl<R> StaticSource<R> {
    /// Creates a store seeded with the given records.
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Creates an empty store.
    pub fn empty() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Checks if the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl<R> DataSource<R> for StaticSource<R>
where
    R: Clone + Send + Sync + 'static,
{
    async fn fetch_all(&self) -> Result<Vec<R>, SourceError> {
        Ok(self.records.read().await.clone())
    }
}

#[async_trait]
impl<R> RecordStore<R> for StaticSource<R>
where
    R: ListRecord + Clone + Send + Sync + 'static,
    R::Key: Send + Sync,
{
    async fn create(&self, record: R) -> Result<R, SourceError> {
        let mut records = self.records.write().await;
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, key: R::Key, record: R) -> Result<R, SourceError> {
        let mut records = self.records.write().await;
        match records.iter().position(|r| r.key() == key) {
            Some(index) => {
                records[index] = record.clone();
                Ok(record)
            }
            None => Err(SourceError::not_found("no stored record with that key")),
        }
    }

    async fn delete(&self, key: R::Key) -> Result<(), SourceError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.key() != key);
        if records.len() == before {
            return Err(SourceError::not_found("no stored record with that key"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::model::Activity;

    fn activity(code: &str) -> Activity {
        Activity {
            id: Uuid::new_v4(),
            code: code.to_string(),
            description: format!("activity {code}"),
            active: true,
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_snapshot() {
        let store = StaticSource::new(vec![activity("A"), activity("B")]);
        let records = store.fetch_all().await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_update_missing_record_fails() {
        let store = StaticSource::new(vec![activity("A")]);
        let err = store
            .update(Uuid::new_v4(), activity("B"))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let first = activity("A");
        let key = first.id;
        let store = StaticSource::new(vec![first, activity("B")]);

        store.delete(key).await.unwrap();
        assert_eq!(store.len().await, 1);

        let err = store.delete(key).await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }
}
