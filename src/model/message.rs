//! Message entity.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored text message and its palindrome classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Server-generated identifier (UUID v4). Never changes.
    pub id: String,

    /// Message text as submitted.
    pub content: String,

    /// Cached result of [`crate::model::is_palindrome`] over `content`.
    pub is_palindrome: bool,

    /// Creation time. Never changes.
    pub created_at: DateTime<Utc>,

    /// Time of the last successful mutation.
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message with a fresh id and both timestamps set to now.
    pub fn new(content: impl Into<String>, is_palindrome: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            is_palindrome,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the content and flag, refreshing `updated_at`.
    pub fn apply_update(&mut self, content: impl Into<String>, is_palindrome: bool) {
        self.content = content.into();
        self.is_palindrome = is_palindrome;
        self.touch();
    }

    /// Advance `updated_at`. Strictly increases even if the clock has not moved.
    fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + TimeDelta::nanoseconds(1)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_has_id_and_equal_timestamps() {
        let msg = Message::new("hello", false);

        assert!(!msg.id.is_empty());
        assert!(Uuid::parse_str(&msg.id).is_ok());
        assert_eq!(msg.content, "hello");
        assert!(!msg.is_palindrome);
        assert_eq!(msg.created_at, msg.updated_at);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Message::new("a", true);
        let b = Message::new("a", true);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_update_preserves_identity() {
        let mut msg = Message::new("first", false);
        let original = msg.clone();

        msg.apply_update("level", true);

        assert_eq!(msg.id, original.id);
        assert_eq!(msg.created_at, original.created_at);
        assert_eq!(msg.content, "level");
        assert!(msg.is_palindrome);
        assert!(msg.updated_at > original.updated_at);
    }

    #[test]
    fn test_touch_is_strict_even_with_future_timestamp() {
        let mut msg = Message::new("x", true);
        let future = Utc::now() + TimeDelta::hours(1);
        msg.updated_at = future;

        msg.apply_update("y", true);

        assert_eq!(msg.updated_at, future + TimeDelta::nanoseconds(1));
    }
}
