//! Resource setup for the binary and for each resolution call.
//!
//! - Logger (once per process)
//! - Cookie-bearing HTTP session (once per resolution call)

mod client;
mod logger;

// Re-export public API
pub use client::init_session_client;
pub use logger::init_logger_with;
