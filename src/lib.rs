//! Palindrome messages service library.
//!
//! A CRUD HTTP service over text messages, each tagged with whether its
//! content is a palindrome.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod observability;
pub mod storage;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use model::{is_palindrome, Message};
pub use storage::{InMemoryStore, MessageStore, StorageError};
