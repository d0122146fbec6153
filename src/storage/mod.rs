//! Message storage subsystem.
//!
//! # Data Flow
//! ```text
//! DatabaseConfig.kind
//!     → create_store() picks a backend
//!     → Arc<dyn MessageStore> shared by all handlers
//!
//! handler → MessageStore::{save,get,update,delete,list} → backend
//! ```
//!
//! # Design Decisions
//! - Handlers only see the trait; adding a persistent backend does not touch them
//! - Cancellation is future-drop; no explicit context parameter
//! - Backends return owned copies, never references into their state

pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::DatabaseConfig;
use crate::model::Message;

pub use memory::InMemoryStore;

/// Backend name for [`InMemoryStore`].
pub const IN_MEMORY: &str = "in-memory";

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors returned by message stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No message with this id exists.
    #[error("message {0} not found")]
    NotFound(String),

    /// Unexpected backend failure.
    #[error("storage backend failure: {0}")]
    Backend(String),

    /// The configured backend name is not supported.
    #[error("{0} is an unknown database type")]
    UnknownBackend(String),
}

/// CRUD contract over messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Insert or overwrite a message by id.
    async fn save(&self, message: Message) -> StorageResult<Message>;

    /// Fetch a message.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] when no message has this id.
    async fn get(&self, id: &str) -> StorageResult<Message>;

    /// Replace content and palindrome flag, keeping `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] when no message has this id.
    async fn update(&self, id: &str, content: &str, is_palindrome: bool)
        -> StorageResult<Message>;

    /// Remove a message.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] when no message has this id.
    async fn delete(&self, id: &str) -> StorageResult<()>;

    /// All messages, in no particular order.
    async fn list(&self) -> StorageResult<Vec<Message>>;
}

/// Build the store selected by `config.kind`.
pub fn create_store(config: &DatabaseConfig) -> StorageResult<Arc<dyn MessageStore>> {
    match config.kind.as_str() {
        IN_MEMORY => Ok(Arc::new(InMemoryStore::new())),
        other => Err(StorageError::UnknownBackend(other.to_string())),
    }
}
