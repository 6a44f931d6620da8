//! FFI bindings for UniFFI export
//!
//! This module provides Swift/Kotlin bindings for the sms crate via UniFFI.
//!
//! ## Usage from Swift
//!
//! ```swift
//! import SmsFFI
//!
//! // Initialize logging first
//! initializeLogging(callback: myLogCallback, maxLevel: 2)
//!
//! // Open the message store with the host's permission subsystem
//! let service = try SmsService(
//!     dbPath: try resolveStorePath(),
//!     permissions: myPermissionHost
//! )
//!
//! // Typed surface
//! let conversations = try service.getConversations(limit: 20, offset: 0)
//! let messages = try service.getConversationMessages(threadId: "123")
//!
//! // Or the raw channel surface
//! let result = service.call(method: "getAllSms", argsJson: "{}")
//! ```

mod logging;
mod service;
mod types;

// Re-export all FFI types and the SmsService
pub use logging::{init_ffi_logger, set_log_callback, set_log_level};
pub use service::*;
pub use types::*;
