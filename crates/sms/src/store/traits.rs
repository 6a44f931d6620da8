//! Storage trait definitions

use crate::models::{ConversationRow, Message};
use anyhow::Result;

/// Address and body of the newest message in a thread
///
/// Either field may be absent when the store row holds NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadLatest {
    pub address: Option<String>,
    pub body: Option<String>,
}

/// Trait for read-only access to the platform message store
///
/// The store is external and owned by the host platform: implementations
/// never create, mutate, or delete rows. Each method opens and releases its
/// own query handles before returning, on every exit path.
pub trait SmsStore: Send + Sync {
    /// List every message, newest first by `date`
    fn list_messages(&self) -> Result<Vec<Message>>;

    /// List messages for one address, oldest first by `date`
    fn list_messages_by_address(&self, address: &str) -> Result<Vec<Message>>;

    /// List messages for one thread, oldest first by `date`
    ///
    /// Rows from this path carry their `thread_id`.
    fn list_messages_for_thread(&self, thread_id: &str) -> Result<Vec<Message>>;

    /// List conversation rows, newest first by `date`
    ///
    /// `limit == 0` means unbounded: no LIMIT is applied and `offset` is
    /// ignored. With `limit > 0`, `offset` skips that many rows.
    fn list_conversation_rows(&self, limit: u32, offset: u32) -> Result<Vec<ConversationRow>>;

    /// Address and body of the single newest message in a thread
    fn latest_message_in_thread(&self, thread_id: i64) -> Result<Option<ThreadLatest>>;
}
