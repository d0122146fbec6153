//! Message service: validation, classification and store access.
//!
//! Handlers decode and encode; everything between lives here so it can be
//! exercised against a mock store.

use std::sync::Arc;

use crate::http::error::ApiError;
use crate::model::{is_palindrome, Message};
use crate::storage::MessageStore;

/// Reject an empty path id before touching storage.
pub fn require_id(id: &str) -> Result<(), ApiError> {
    if id.is_empty() {
        return Err(ApiError::EmptyId);
    }
    Ok(())
}

/// Message operations backed by a [`MessageStore`].
#[derive(Clone)]
pub struct MessageService {
    store: Arc<dyn MessageStore>,
}

impl MessageService {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// Classify and store a new message.
    pub async fn create(&self, content: String) -> Result<Message, ApiError> {
        if content.is_empty() {
            return Err(ApiError::EmptyContent);
        }

        let palindrome = is_palindrome(&content);
        let saved = self.store.save(Message::new(content, palindrome)).await?;

        tracing::info!(message_id = %saved.id, is_palindrome = saved.is_palindrome, "Message created");
        Ok(saved)
    }

    pub async fn get(&self, id: &str) -> Result<Message, ApiError> {
        require_id(id)?;
        Ok(self.store.get(id).await?)
    }

    /// Replace a message's content and re-classify it.
    ///
    /// Empty content is accepted and classified like any other text.
    pub async fn update(&self, id: &str, content: &str) -> Result<Message, ApiError> {
        require_id(id)?;

        let updated = self
            .store
            .update(id, content, is_palindrome(content))
            .await?;

        tracing::info!(message_id = %updated.id, is_palindrome = updated.is_palindrome, "Message updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        require_id(id)?;
        self.store.delete(id).await?;

        tracing::info!(message_id = %id, "Message deleted");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Message>, ApiError> {
        Ok(self.store.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MockMessageStore, StorageError};
    use mockall::predicate::eq;

    fn service(store: MockMessageStore) -> MessageService {
        MessageService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_create_classifies_and_saves() {
        let mut store = MockMessageStore::new();
        store.expect_save().times(1).returning(Ok);

        let message = service(store)
            .create("A man a plan a canal Panama".into())
            .await
            .unwrap();

        assert!(!message.id.is_empty());
        assert_eq!(message.content, "A man a plan a canal Panama");
        assert!(message.is_palindrome);
    }

    #[tokio::test]
    async fn test_create_non_palindrome() {
        let mut store = MockMessageStore::new();
        store.expect_save().times(1).returning(Ok);

        let message = service(store).create("my message".into()).await.unwrap();
        assert!(!message.is_palindrome);
    }

    #[tokio::test]
    async fn test_empty_content_never_reaches_store() {
        let mut store = MockMessageStore::new();
        store.expect_save().never();

        let err = service(store).create(String::new()).await.unwrap_err();
        assert!(matches!(err, ApiError::EmptyContent));
    }

    #[tokio::test]
    async fn test_empty_id_never_reaches_store() {
        let mut store = MockMessageStore::new();
        store.expect_get().never();
        store.expect_update().never();
        store.expect_delete().never();
        let service = service(store);

        assert!(matches!(service.get("").await, Err(ApiError::EmptyId)));
        assert!(matches!(service.update("", "x").await, Err(ApiError::EmptyId)));
        assert!(matches!(service.delete("").await, Err(ApiError::EmptyId)));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut store = MockMessageStore::new();
        store
            .expect_get()
            .with(eq("missing"))
            .times(1)
            .returning(|id| Err(StorageError::NotFound(id.to_string())));

        let err = service(store).get("missing").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[tokio::test]
    async fn test_update_passes_classification_to_store() {
        let mut store = MockMessageStore::new();
        store
            .expect_update()
            .with(eq("abc"), eq("Never odd or even"), eq(true))
            .times(1)
            .returning(|id, content, flag| {
                let mut message = Message::new(content, flag);
                message.id = id.to_string();
                Ok(message)
            });

        let message = service(store)
            .update("abc", "Never odd or even")
            .await
            .unwrap();
        assert_eq!(message.id, "abc");
        assert!(message.is_palindrome);
    }

    #[tokio::test]
    async fn test_update_allows_empty_content() {
        let mut store = MockMessageStore::new();
        store
            .expect_update()
            .with(eq("abc"), eq(""), eq(true))
            .times(1)
            .returning(|id, content, flag| {
                let mut message = Message::new(content, flag);
                message.id = id.to_string();
                Ok(message)
            });

        let message = service(store).update("abc", "").await.unwrap();
        assert!(message.is_palindrome);
    }

    #[tokio::test]
    async fn test_backend_failure_is_storage_error() {
        let mut store = MockMessageStore::new();
        store
            .expect_list()
            .times(1)
            .returning(|| Err(StorageError::Backend("boom".into())));
        store
            .expect_delete()
            .times(1)
            .returning(|_| Err(StorageError::Backend("boom".into())));
        let service = service(store);

        assert!(matches!(service.list().await, Err(ApiError::Storage(_))));
        assert!(matches!(service.delete("id").await, Err(ApiError::Storage(_))));
    }
}
