//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack, graceful shutdown)
//!     → request.rs (request ID span, body decoding)
//!     → handlers.rs (route adapters)
//!     → service.rs (validation, palindrome check, store calls)
//!     → response.rs / error.rs (JSON body or status + text)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;
pub mod service;

pub use error::ApiError;
pub use request::{MessageRequest, X_REQUEST_ID};
pub use response::MessageResponse;
pub use server::{AppState, HttpServer};
pub use service::MessageService;
