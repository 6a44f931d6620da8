//! In-memory store implementation
//!
//! Used for testing and for embedding hosts that supply message data
//! directly instead of a platform database. Mirrors the platform store's
//! observable behavior: the conversation listing is maintained as messages
//! arrive, and `thread_id` is only projected on the thread query path.

use anyhow::Result;
use std::collections::BTreeMap;
use std::sync::RwLock;

use super::traits::{SmsStore, ThreadLatest};
use crate::models::{ConversationRow, Message};

/// In-memory implementation of [`SmsStore`]
pub struct InMemorySmsStore {
    messages: RwLock<Vec<Message>>,
    /// Conversation listing keyed by thread_id
    conversations: RwLock<BTreeMap<i64, ConversationRow>>,
}

impl InMemorySmsStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
            conversations: RwLock::new(BTreeMap::new()),
        }
    }

    /// Insert a message, maintaining the derived conversation listing
    pub fn insert_message(&self, message: Message) {
        if let Some(thread_id) = message.thread_id {
            let mut conversations = self.conversations.write().unwrap();
            let row = conversations.entry(thread_id).or_insert(ConversationRow {
                id: thread_id,
                thread_id,
                date: message.date,
                snippet: None,
            });
            if message.date >= row.date {
                row.date = message.date;
                row.snippet = message.body.clone();
            }
        }

        self.messages.write().unwrap().push(message);
    }

    /// Insert a raw conversation row, as the platform listing would hold it
    ///
    /// Lets tests cover threads that have a listing row but no messages.
    pub fn insert_conversation_row(&self, row: ConversationRow) {
        self.conversations.write().unwrap().insert(row.thread_id, row);
    }
}

impl Default for InMemorySmsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SmsStore for InMemorySmsStore {
    fn list_messages(&self) -> Result<Vec<Message>> {
        let messages = self.messages.read().unwrap();
        let mut result: Vec<Message> = messages
            .iter()
            .cloned()
            .map(|mut m| {
                // Bulk path does not project thread_id
                m.thread_id = None;
                m
            })
            .collect();

        result.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(result)
    }

    fn list_messages_by_address(&self, address: &str) -> Result<Vec<Message>> {
        let messages = self.messages.read().unwrap();
        let mut result: Vec<Message> = messages
            .iter()
            .filter(|m| m.address.as_deref() == Some(address))
            .cloned()
            .map(|mut m| {
                m.thread_id = None;
                m
            })
            .collect();

        result.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(result)
    }

    fn list_messages_for_thread(&self, thread_id: &str) -> Result<Vec<Message>> {
        // Channel text that is not a thread number matches no rows,
        // like the platform store's affinity comparison.
        let Ok(thread_id) = thread_id.parse::<i64>() else {
            return Ok(Vec::new());
        };

        let messages = self.messages.read().unwrap();
        let mut result: Vec<Message> = messages
            .iter()
            .filter(|m| m.thread_id == Some(thread_id))
            .cloned()
            .collect();

        result.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(result)
    }

    fn list_conversation_rows(&self, limit: u32, offset: u32) -> Result<Vec<ConversationRow>> {
        let conversations = self.conversations.read().unwrap();
        let mut rows: Vec<ConversationRow> = conversations.values().cloned().collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));

        if limit > 0 {
            let result = rows
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect();
            return Ok(result);
        }

        Ok(rows)
    }

    fn latest_message_in_thread(&self, thread_id: i64) -> Result<Option<ThreadLatest>> {
        let messages = self.messages.read().unwrap();
        let latest = messages
            .iter()
            .filter(|m| m.thread_id == Some(thread_id))
            .max_by_key(|m| m.date)
            .map(|m| ThreadLatest {
                address: m.address.clone(),
                body: m.body.clone(),
            });

        Ok(latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{message_kind, read_state};

    fn make_message(id: &str, address: &str, body: &str, date: i64, thread_id: i64) -> Message {
        Message {
            id: id.to_string(),
            address: Some(address.to_string()),
            body: Some(body.to_string()),
            date,
            date_sent: date - 1000,
            kind: message_kind::RECEIVED,
            read: read_state::UNREAD,
            thread_id: Some(thread_id),
        }
    }

    #[test]
    fn test_list_messages_newest_first() {
        let store = InMemorySmsStore::new();
        store.insert_message(make_message("1", "+1555", "old", 1_000, 1));
        store.insert_message(make_message("2", "+1555", "new", 2_000, 1));

        let messages = store.list_messages().unwrap();
        assert_eq!(messages[0].body.as_deref(), Some("new"));
        assert_eq!(messages[1].body.as_deref(), Some("old"));
        assert!(messages[0].thread_id.is_none());
    }

    #[test]
    fn test_list_messages_by_address_filters_and_sorts() {
        let store = InMemorySmsStore::new();
        store.insert_message(make_message("1", "+1555", "second", 2_000, 1));
        store.insert_message(make_message("2", "+1555", "first", 1_000, 1));
        store.insert_message(make_message("3", "+1666", "other", 3_000, 2));

        let messages = store.list_messages_by_address("+1555").unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].body.as_deref(), Some("first"));
        assert_eq!(messages[1].body.as_deref(), Some("second"));
    }

    #[test]
    fn test_list_messages_for_thread() {
        let store = InMemorySmsStore::new();
        store.insert_message(make_message("1", "+1555", "a", 1_000, 1));
        store.insert_message(make_message("2", "+1666", "b", 2_000, 2));

        let messages = store.list_messages_for_thread("2").unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].thread_id, Some(2));

        assert!(store.list_messages_for_thread("nope").unwrap().is_empty());
    }

    #[test]
    fn test_conversation_listing_derived_from_messages() {
        let store = InMemorySmsStore::new();
        store.insert_message(make_message("1", "+1555", "old", 1_000, 1));
        store.insert_message(make_message("2", "+1555", "new", 3_000, 1));
        store.insert_message(make_message("3", "+1666", "mid", 2_000, 2));

        let rows = store.list_conversation_rows(0, 0).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].thread_id, 1);
        assert_eq!(rows[0].date, 3_000);
        assert_eq!(rows[0].snippet.as_deref(), Some("new"));
        assert_eq!(rows[1].thread_id, 2);
    }

    #[test]
    fn test_conversation_window() {
        let store = InMemorySmsStore::new();
        for i in 0..5 {
            store.insert_message(make_message(
                &format!("{i}"),
                "+1555",
                "body",
                1_000 * (i + 1),
                i + 1,
            ));
        }

        let page1 = store.list_conversation_rows(2, 0).unwrap();
        let page2 = store.list_conversation_rows(2, 2).unwrap();
        assert_eq!(page1.len(), 2);
        assert_eq!(page2.len(), 2);
        assert_ne!(page1[0].thread_id, page2[0].thread_id);

        // Unbounded ignores the offset
        let all = store.list_conversation_rows(0, 3).unwrap();
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn test_latest_message_in_thread() {
        let store = InMemorySmsStore::new();
        store.insert_message(make_message("1", "+1555", "old", 1_000, 1));
        store.insert_message(make_message("2", "+1555", "new", 2_000, 1));

        let latest = store.latest_message_in_thread(1).unwrap().unwrap();
        assert_eq!(latest.body.as_deref(), Some("new"));
        assert!(store.latest_message_in_thread(9).unwrap().is_none());
    }

    #[test]
    fn test_row_without_messages() {
        let store = InMemorySmsStore::new();
        store.insert_conversation_row(ConversationRow {
            id: 7,
            thread_id: 7,
            date: 5_000,
            snippet: Some("listing snippet".to_string()),
        });

        let rows = store.list_conversation_rows(0, 0).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(store.latest_message_in_thread(7).unwrap().is_none());
    }
}
