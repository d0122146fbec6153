//! Domain model.
//!
//! # Data Flow
//! ```text
//! request content
//!     → palindrome.rs (classify once, at write time)
//!     → message.rs (Message record with id + timestamps)
//!     → storage (canonical copy)
//! ```

pub mod message;
pub mod palindrome;

pub use message::Message;
pub use palindrome::is_palindrome;
