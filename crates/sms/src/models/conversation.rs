//! Conversation models for thread summaries

use serde::{Deserialize, Serialize};

/// One raw row of the store's conversation listing
///
/// The store-side `snippet` column is projected for completeness but is
/// unreliable for SMS threads; the assembled [`Conversation`] resolves its
/// snippet from the thread's newest message instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationRow {
    /// Conversation-row identifier (`_id` column)
    pub id: i64,
    /// Thread identifier grouping messages
    pub thread_id: i64,
    /// Date of the latest message in the thread (epoch milliseconds)
    pub date: i64,
    /// Store-maintained preview of the latest message, often empty
    pub snippet: Option<String>,
}

/// One conversation thread summary, synthesized by the gateway
///
/// `address` and `snippet` are derived at read time from the single newest
/// message in the thread; both are empty strings when that lookup yields no
/// row. Wire keys match the platform channel contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Conversation-row identifier
    #[serde(rename = "_id")]
    pub id: i64,
    /// Thread identifier grouping messages
    pub thread_id: i64,
    /// Counterparty address, resolved from the thread's newest message
    pub address: String,
    /// Date of the latest message (epoch milliseconds)
    pub date: i64,
    /// Body of the thread's newest message
    pub snippet: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_keys() {
        let conversation = Conversation {
            id: 3,
            thread_id: 9,
            address: "+15550000001".to_string(),
            date: 1_700_000_000_000,
            snippet: "latest body".to_string(),
        };

        let value = serde_json::to_value(conversation).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["_id"], 3);
        assert_eq!(obj["thread_id"], 9);
        assert_eq!(obj["address"], "+15550000001");
        assert_eq!(obj["snippet"], "latest body");
    }
}
