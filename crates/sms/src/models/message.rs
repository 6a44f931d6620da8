//! Message model representing one SMS record
//!
//! A `Message` is a read-only projection of one row in the platform message
//! store. The `kind` and `read` fields carry the store's own small-integer
//! encodings unmodified; the constants below name the values the platform
//! documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store encodings for the message `type` column
pub mod message_kind {
    /// Message received from the counterparty
    pub const RECEIVED: i64 = 1;
    /// Message sent by the device owner
    pub const SENT: i64 = 2;
}

/// Store encodings for the message `read` column
pub mod read_state {
    pub const UNREAD: i64 = 0;
    pub const READ: i64 = 1;
}

/// A single SMS message
///
/// Serde attributes define the wire contract: hosts receive the same keys
/// the platform channel has always used (`dateSent`, `type`, `threadId`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Store-assigned row identifier
    pub id: String,
    /// Counterparty phone number or address
    pub address: Option<String>,
    /// Message text
    pub body: Option<String>,
    /// Receipt timestamp (epoch milliseconds)
    pub date: i64,
    /// Origin timestamp (epoch milliseconds)
    #[serde(rename = "dateSent")]
    pub date_sent: i64,
    /// Store `type` encoding, passed through unmodified (1 received, 2 sent)
    #[serde(rename = "type")]
    pub kind: i64,
    /// Store `read` encoding, passed through unmodified (0 unread, 1 read)
    pub read: i64,
    /// Conversation thread id; populated only by the thread query path
    #[serde(
        rename = "threadId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub thread_id: Option<i64>,
}

impl Message {
    /// Receipt timestamp as a typed datetime
    pub fn received_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.date).unwrap_or_default()
    }

    /// Origin timestamp as a typed datetime
    pub fn sent_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.date_sent).unwrap_or_default()
    }

    /// Whether the store marks this message as read
    pub fn is_read(&self) -> bool {
        self.read == read_state::READ
    }
}
