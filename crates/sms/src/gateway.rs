//! Message store gateway
//!
//! Coordinates the permission gate and the message store for the read
//! operations exposed over the channel. Every operation is stateless,
//! side-effect-free, and safe to retry; ordering and windowing are the
//! store's own.

use log::debug;
use std::sync::Arc;

use crate::error::SmsError;
use crate::models::{Conversation, Message};
use crate::permission::PermissionProvider;
use crate::store::SmsStore;

/// Gateway over the external message store
///
/// Operations check arguments first, then the permission gate, then query.
/// Failures surface as [`SmsError`] with the operation's wire code; no
/// retries, no partial results.
pub struct SmsGateway {
    store: Arc<dyn SmsStore>,
    permissions: Arc<dyn PermissionProvider>,
}

impl SmsGateway {
    /// Create a new gateway
    pub fn new(store: Arc<dyn SmsStore>, permissions: Arc<dyn PermissionProvider>) -> Self {
        Self { store, permissions }
    }

    fn ensure_granted(&self) -> Result<(), SmsError> {
        if self.permissions.is_granted() {
            Ok(())
        } else {
            Err(SmsError::PermissionDenied)
        }
    }

    /// Every message in the store, newest first
    pub fn get_all_messages(&self) -> Result<Vec<Message>, SmsError> {
        self.ensure_granted()?;

        self.store.list_messages().map_err(|e| SmsError::SmsRead {
            message: format!("Error reading SMS messages: {e}"),
        })
    }

    /// Every message exchanged with one address, oldest first
    ///
    /// Retained for callers that predate thread ids; prefer
    /// [`SmsGateway::get_conversation_messages`] when a thread id is known.
    pub fn get_messages_by_address(&self, address: &str) -> Result<Vec<Message>, SmsError> {
        if address.is_empty() {
            return Err(SmsError::InvalidAddress {
                message: "Address cannot be null or empty".to_string(),
            });
        }

        self.ensure_granted()?;

        self.store
            .list_messages_by_address(address)
            .map_err(|e| SmsError::ConversationMessages {
                message: format!("Error reading conversation messages: {e}"),
            })
    }

    /// Conversation summaries, newest first by latest message date
    ///
    /// `limit == 0` returns the full listing and `offset` has no effect.
    /// Each returned thread costs one additional lookup to resolve its
    /// address and snippet from the newest message, so the call is
    /// O(returned conversations) store queries; keep `limit` bounded for
    /// large stores.
    pub fn get_conversations(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Conversation>, SmsError> {
        self.ensure_granted()?;

        let rows = self
            .store
            .list_conversation_rows(limit, offset)
            .map_err(|e| SmsError::ConversationList {
                message: format!("Error reading phone numbers: {e}"),
            })?;

        let mut conversations = Vec::with_capacity(rows.len());
        for row in rows {
            // A fault in the per-thread lookup aborts the whole call; a
            // thread whose lookup yields no row resolves to empty strings.
            let latest = self
                .store
                .latest_message_in_thread(row.thread_id)
                .map_err(|e| SmsError::ConversationList {
                    message: format!("Error reading phone numbers: {e}"),
                })?;

            let (address, snippet) = match latest {
                Some(latest) => (
                    latest.address.unwrap_or_default(),
                    latest.body.unwrap_or_default(),
                ),
                None => (String::new(), String::new()),
            };

            conversations.push(Conversation {
                id: row.id,
                thread_id: row.thread_id,
                address,
                date: row.date,
                snippet,
            });
        }

        debug!("Resolved {} conversations", conversations.len());
        Ok(conversations)
    }

    /// Every message in one conversation thread, oldest first
    pub fn get_conversation_messages(&self, thread_id: &str) -> Result<Vec<Message>, SmsError> {
        if thread_id.is_empty() {
            return Err(SmsError::InvalidThreadId {
                message: "Thread ID cannot be null or empty".to_string(),
            });
        }

        self.ensure_granted()?;

        self.store
            .list_messages_for_thread(thread_id)
            .map_err(|e| SmsError::ConversationMessages {
                message: format!("Error reading conversation messages: {e}"),
            })
    }

    /// Whether the read-message capability is currently granted
    pub fn check_permission(&self) -> bool {
        self.permissions.is_granted()
    }

    /// Attempt to obtain the read-message capability
    ///
    /// Returns `Ok(true)` when already granted. Otherwise fires the host
    /// prompt and returns `Ok(false)` unconditionally: the grant outcome
    /// arrives asynchronously and is only observable through a later
    /// [`SmsGateway::check_permission`]. Hosts with a dedicated permission
    /// facility should prefer it and treat this operation as best-effort.
    pub fn request_permission(&self) -> Result<bool, SmsError> {
        if self.permissions.is_granted() {
            return Ok(true);
        }

        if !self.permissions.has_interactive_context() {
            return Err(SmsError::NoActivity {
                message: "No activity available to request permission".to_string(),
            });
        }

        self.permissions
            .request()
            .map_err(|e| SmsError::PermissionRequest {
                message: format!("Error requesting SMS permission: {e}"),
            })?;

        Ok(false)
    }
}
