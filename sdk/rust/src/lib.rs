//! HTTP client for the palindrome messages service.

pub mod client;

pub use client::{ClientError, Message, MessagesClient};
