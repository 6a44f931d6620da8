//! SQLite-backed access to the platform message database
//!
//! The message database is owned by the host platform; this store opens it
//! read-only and never runs DDL or DML against it. Two logical tables are
//! queried: the flat `sms` message table and the `conversations` thread
//! listing.

use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags, OptionalExtension, params, params_from_iter};

use super::traits::{SmsStore, ThreadLatest};
use crate::models::{ConversationRow, Message};

/// Projection shared by the bulk and per-address message queries
const MESSAGE_COLUMNS: &str = "_id, address, body, date, date_sent, type, read";

/// Read-only SQLite store over the platform message database
pub struct SqliteSmsStore {
    conn: Mutex<Connection>,
}

impl SqliteSmsStore {
    /// Open the message database at `db_path`
    ///
    /// The connection is read-only: the database belongs to the platform and
    /// must never be created or modified from here. Fails when the file does
    /// not exist or is not a database.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(db_path.as_ref(), flags)
            .with_context(|| format!("Failed to open message store at {:?}", db_path.as_ref()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Map one `sms` row using the shared projection
    fn message_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Message> {
        Ok(Message {
            id: row.get::<_, i64>(0)?.to_string(),
            address: row.get(1)?,
            body: row.get(2)?,
            date: row.get(3)?,
            date_sent: row.get(4)?,
            kind: row.get(5)?,
            read: row.get(6)?,
            thread_id: None,
        })
    }
}

impl SmsStore for SqliteSmsStore {
    fn list_messages(&self) -> Result<Vec<Message>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM sms ORDER BY date DESC"
        ))?;

        let messages = stmt
            .query_map([], Self::message_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(messages)
    }

    fn list_messages_by_address(&self, address: &str) -> Result<Vec<Message>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM sms WHERE address = ? ORDER BY date ASC"
        ))?;

        let messages = stmt
            .query_map([address], Self::message_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(messages)
    }

    fn list_messages_for_thread(&self, thread_id: &str) -> Result<Vec<Message>> {
        let conn = self.conn.lock().unwrap();

        // thread_id arrives as channel text; the column's integer affinity
        // converts it for the comparison.
        let mut stmt = conn.prepare(&format!(
            "SELECT {MESSAGE_COLUMNS}, thread_id FROM sms WHERE thread_id = ? ORDER BY date ASC"
        ))?;

        let messages = stmt
            .query_map([thread_id], |row| {
                let mut message = Self::message_from_row(row)?;
                message.thread_id = row.get(7)?;
                Ok(message)
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(messages)
    }

    fn list_conversation_rows(&self, limit: u32, offset: u32) -> Result<Vec<ConversationRow>> {
        let conn = self.conn.lock().unwrap();

        // LIMIT/OFFSET are appended only when requested: limit 0 means the
        // full listing, and the window only applies inside a bounded limit.
        let mut sql =
            String::from("SELECT _id, thread_id, date, snippet FROM conversations ORDER BY date DESC");
        let mut window: Vec<i64> = Vec::new();
        if limit > 0 {
            sql.push_str(" LIMIT ?");
            window.push(i64::from(limit));
            if offset > 0 {
                sql.push_str(" OFFSET ?");
                window.push(i64::from(offset));
            }
        }

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(window), |row| {
                Ok(ConversationRow {
                    id: row.get(0)?,
                    thread_id: row.get(1)?,
                    date: row.get(2)?,
                    snippet: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    fn latest_message_in_thread(&self, thread_id: i64) -> Result<Option<ThreadLatest>> {
        let conn = self.conn.lock().unwrap();

        let latest = conn
            .query_row(
                "SELECT address, body FROM sms WHERE thread_id = ? ORDER BY date DESC LIMIT 1",
                params![thread_id],
                |row| {
                    Ok(ThreadLatest {
                        address: row.get(0)?,
                        body: row.get(1)?,
                    })
                },
            )
            .optional()?;

        Ok(latest)
    }
}
