//! FFI-friendly type wrappers for UniFFI export
//!
//! These types convert internal Rust types to FFI-compatible versions.
//! Timestamps stay epoch milliseconds (`i64`), matching the store encoding;
//! channel payloads cross as JSON strings.

use crate::channel::MethodResponse;
use crate::models::{Conversation, Message};

// ============================================================================
// Message / Conversation Records
// ============================================================================

/// FFI-friendly message representation
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMessage {
    pub id: String,
    pub address: Option<String>,
    pub body: Option<String>,
    /// Receipt timestamp (epoch milliseconds)
    pub date: i64,
    /// Origin timestamp (epoch milliseconds)
    pub date_sent: i64,
    /// Store `type` encoding (1 received, 2 sent)
    pub kind: i64,
    /// Store `read` encoding (0 unread, 1 read)
    pub read: i64,
    /// Present only on the thread query path
    pub thread_id: Option<i64>,
}

impl From<Message> for FfiMessage {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            address: m.address,
            body: m.body,
            date: m.date,
            date_sent: m.date_sent,
            kind: m.kind,
            read: m.read,
            thread_id: m.thread_id,
        }
    }
}

/// FFI-friendly conversation summary
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiConversation {
    pub id: i64,
    pub thread_id: i64,
    /// Resolved from the thread's newest message; empty when none exists
    pub address: String,
    /// Date of the latest message (epoch milliseconds)
    pub date: i64,
    /// Body of the thread's newest message; empty when none exists
    pub snippet: String,
}

impl From<Conversation> for FfiConversation {
    fn from(c: Conversation) -> Self {
        Self {
            id: c.id,
            thread_id: c.thread_id,
            address: c.address,
            date: c.date,
            snippet: c.snippet,
        }
    }
}

// ============================================================================
// Raw Channel Results
// ============================================================================

/// Outcome discriminant for a raw channel call
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiMethodStatus {
    Success,
    Error,
    NotImplemented,
}

/// Result of a raw channel call
///
/// `payload_json` is set on success; `error_code`/`error_message` on error.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMethodResult {
    pub status: FfiMethodStatus,
    pub payload_json: Option<String>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

impl From<MethodResponse> for FfiMethodResult {
    fn from(response: MethodResponse) -> Self {
        match response {
            MethodResponse::Success(value) => Self {
                status: FfiMethodStatus::Success,
                payload_json: Some(value.to_string()),
                error_code: None,
                error_message: None,
            },
            MethodResponse::Error { code, message } => Self {
                status: FfiMethodStatus::Error,
                payload_json: None,
                error_code: Some(code),
                error_message: Some(message),
            },
            MethodResponse::NotImplemented => Self {
                status: FfiMethodStatus::NotImplemented,
                payload_json: None,
                error_code: None,
                error_message: None,
            },
        }
    }
}

// ============================================================================
// Callback Traits
// ============================================================================

/// Host-side permission subsystem
///
/// The host owns the read-message capability. `launch_prompt` fires the
/// native consent dialog and reports only whether it was launched; the grant
/// outcome arrives through the host's own permission-result callback and is
/// observed by a later `is_granted`.
#[uniffi::export(callback_interface)]
pub trait PermissionHost: Send + Sync {
    /// Whether the read-message capability is currently granted
    fn is_granted(&self) -> bool;
    /// Whether an interactive context is available for prompting
    fn has_interactive_context(&self) -> bool;
    /// Launch the native consent prompt; false when it could not be shown
    fn launch_prompt(&self) -> bool;
}

// ============================================================================
// Log Callback
// ============================================================================

/// Log level for FFI callback
#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<log::Level> for FfiLogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => FfiLogLevel::Error,
            log::Level::Warn => FfiLogLevel::Warn,
            log::Level::Info => FfiLogLevel::Info,
            log::Level::Debug => FfiLogLevel::Debug,
            log::Level::Trace => FfiLogLevel::Trace,
        }
    }
}

/// Callback interface for receiving log messages from Rust
///
/// Hosts route these into their own logging facility.
#[uniffi::export(callback_interface)]
pub trait LogCallback: Send + Sync {
    /// Called when a log message is emitted
    fn on_log(&self, level: FfiLogLevel, target: String, message: String);
}
