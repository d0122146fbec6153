//! In-memory message store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::model::Message;
use crate::observability::metrics;
use crate::storage::{MessageStore, StorageError, StorageResult};

/// Process-local store: one map behind one mutex.
///
/// Every operation holds the lock for its full duration, so store
/// operations are linearized. Contents are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    messages: Arc<Mutex<HashMap<String, Message>>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored messages.
    pub fn len(&self) -> StorageResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Whether the store holds no messages.
    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, HashMap<String, Message>>> {
        self.messages
            .lock()
            .map_err(|err| StorageError::Backend(err.to_string()))
    }
}

#[async_trait]
impl MessageStore for InMemoryStore {
    async fn save(&self, message: Message) -> StorageResult<Message> {
        let mut messages = self.lock()?;
        messages.insert(message.id.clone(), message.clone());
        metrics::record_store_size(messages.len());
        Ok(message)
    }

    async fn get(&self, id: &str) -> StorageResult<Message> {
        let messages = self.lock()?;
        messages
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    async fn update(
        &self,
        id: &str,
        content: &str,
        is_palindrome: bool,
    ) -> StorageResult<Message> {
        let mut messages = self.lock()?;
        let message = messages
            .get_mut(id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;
        message.apply_update(content, is_palindrome);
        Ok(message.clone())
    }

    async fn delete(&self, id: &str) -> StorageResult<()> {
        let mut messages = self.lock()?;
        messages
            .remove(id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;
        metrics::record_store_size(messages.len());
        Ok(())
    }

    async fn list(&self) -> StorageResult<Vec<Message>> {
        let messages = self.lock()?;
        Ok(messages.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_save_then_get_round_trip() {
        let store = InMemoryStore::new();
        let msg = Message::new("kayak", true);

        let saved = store.save(msg.clone()).await.unwrap();
        assert_eq!(saved, msg);

        let fetched = store.get(&msg.id).await.unwrap();
        assert_eq!(fetched, msg);
    }

    #[tokio::test]
    async fn test_save_overwrites_by_id() {
        let store = InMemoryStore::new();
        let mut msg = Message::new("one", false);
        store.save(msg.clone()).await.unwrap();

        msg.content = "two".into();
        store.save(msg.clone()).await.unwrap();

        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(store.get(&msg.id).await.unwrap().content, "two");
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.get("nope").await.unwrap_err();
        assert_eq!(err, StorageError::NotFound("nope".into()));
    }

    #[tokio::test]
    async fn test_update_preserves_id_and_created_at() {
        let store = InMemoryStore::new();
        let msg = store.save(Message::new("my message", false)).await.unwrap();

        let updated = store.update(&msg.id, "Step on no pets", true).await.unwrap();

        assert_eq!(updated.id, msg.id);
        assert_eq!(updated.created_at, msg.created_at);
        assert_eq!(updated.content, "Step on no pets");
        assert!(updated.is_palindrome);
        assert!(updated.updated_at > msg.updated_at);
        assert_eq!(store.get(&msg.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.update("ghost", "x", true).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let store = InMemoryStore::new();
        let msg = store.save(Message::new("bye", false)).await.unwrap();

        store.delete(&msg.id).await.unwrap();

        assert!(matches!(
            store.get(&msg.id).await,
            Err(StorageError::NotFound(_))
        ));
        assert!(matches!(
            store.delete(&msg.id).await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_empty_and_after_creates() {
        let store = InMemoryStore::new();
        assert!(store.list().await.unwrap().is_empty());

        let mut expected = HashSet::new();
        for content in ["a", "bb", "abc", "noon"] {
            let msg = store
                .save(Message::new(content, crate::model::is_palindrome(content)))
                .await
                .unwrap();
            expected.insert(msg.id);
        }

        let listed: HashSet<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(listed, expected);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_are_not_lost() {
        let store = InMemoryStore::new();
        let tasks = 64;

        let handles: Vec<_> = (0..tasks)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .save(Message::new(format!("message {i}"), false))
                        .await
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.list().await.unwrap().len(), tasks);
    }
}
