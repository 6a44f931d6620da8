//! Sms crate - read-only gateway over the platform message store
//!
//! This crate bridges a device's system-managed SMS database to host
//! application runtimes:
//! - Domain models (Message, Conversation)
//! - Storage trait abstraction with SQLite and in-memory backends
//! - Permission gate delegating to the host platform
//! - Gateway operations (bulk read, per-address, conversation listing,
//!   per-thread read)
//! - Method-call channel for remote-procedure-style hosts
//! - UniFFI facade for Swift/Kotlin
//!
//! The message store is external and owned by the platform: this crate
//! never writes to it, holds no state of its own, and returns every failure
//! as a typed (code, message) pair.

pub mod channel;
pub mod config;
pub mod error;
pub mod ffi;
pub mod gateway;
pub mod models;
pub mod permission;
pub mod store;

pub use channel::{MethodResponse, handle_method};
pub use config::StoreConfig;
pub use error::SmsError;
pub use gateway::SmsGateway;
pub use models::{Conversation, ConversationRow, Message, message_kind, read_state};
pub use permission::{PermissionProvider, StaticPermissions};
pub use store::{InMemorySmsStore, SmsStore, SqliteSmsStore, ThreadLatest};

uniffi::setup_scaffolding!();
