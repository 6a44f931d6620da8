//! SmsService facade for UniFFI export
//!
//! This provides a high-level, FFI-friendly API that wraps the gateway for
//! Swift/Kotlin hosts: typed methods for each operation plus a raw channel
//! entry for hosts that speak the method-call contract directly.

use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;

use crate::channel;
use crate::config::StoreConfig;
use crate::error::SmsError;
use crate::ffi::types::*;
use crate::gateway::SmsGateway;
use crate::permission::PermissionProvider;
use crate::store::SqliteSmsStore;

/// Adapter exposing a host [`PermissionHost`] as a [`PermissionProvider`]
struct HostPermissions {
    host: Box<dyn PermissionHost>,
}

impl PermissionProvider for HostPermissions {
    fn is_granted(&self) -> bool {
        self.host.is_granted()
    }

    fn has_interactive_context(&self) -> bool {
        self.host.has_interactive_context()
    }

    fn request(&self) -> Result<()> {
        if self.host.launch_prompt() {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Host failed to launch the consent prompt"))
        }
    }
}

/// Main service object for message store access
///
/// This is the primary entry point for Swift/Kotlin code. It opens the
/// platform message database read-only and delegates permission state to
/// the host-provided [`PermissionHost`].
#[derive(uniffi::Object)]
pub struct SmsService {
    gateway: SmsGateway,
}

#[uniffi::export]
impl SmsService {
    /// Open the message store at `db_path`
    ///
    /// # Arguments
    /// * `db_path` - Path to the platform message database
    /// * `permissions` - Host implementation of the permission subsystem
    #[uniffi::constructor]
    pub fn new(
        db_path: String,
        permissions: Box<dyn PermissionHost>,
    ) -> Result<Arc<Self>, SmsError> {
        let store = SqliteSmsStore::open(&db_path).map_err(|e| SmsError::SmsRead {
            message: format!("Error reading SMS messages: {e}"),
        })?;

        let gateway = SmsGateway::new(
            Arc::new(store),
            Arc::new(HostPermissions { host: permissions }),
        );

        Ok(Arc::new(Self { gateway }))
    }

    // ========================================================================
    // Read Operations
    // ========================================================================

    /// Every message in the store, newest first
    pub fn get_all_messages(&self) -> Result<Vec<FfiMessage>, SmsError> {
        let messages = self.gateway.get_all_messages()?;
        Ok(messages.into_iter().map(FfiMessage::from).collect())
    }

    /// Every message exchanged with one address, oldest first
    pub fn get_messages_by_address(&self, address: String) -> Result<Vec<FfiMessage>, SmsError> {
        let messages = self.gateway.get_messages_by_address(&address)?;
        Ok(messages.into_iter().map(FfiMessage::from).collect())
    }

    /// Conversation summaries, newest first; `limit == 0` is unbounded
    pub fn get_conversations(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<FfiConversation>, SmsError> {
        let conversations = self.gateway.get_conversations(limit, offset)?;
        Ok(conversations.into_iter().map(FfiConversation::from).collect())
    }

    /// Every message in one conversation thread, oldest first
    pub fn get_conversation_messages(
        &self,
        thread_id: String,
    ) -> Result<Vec<FfiMessage>, SmsError> {
        let messages = self.gateway.get_conversation_messages(&thread_id)?;
        Ok(messages.into_iter().map(FfiMessage::from).collect())
    }

    // ========================================================================
    // Permission Gate
    // ========================================================================

    /// Whether the read-message capability is currently granted
    pub fn check_permission(&self) -> bool {
        self.gateway.check_permission()
    }

    /// Attempt to obtain the read-message capability
    ///
    /// Fire-and-forget on the prompt path: returns false and the host
    /// observes the outcome via a later `check_permission`.
    pub fn request_permission(&self) -> Result<bool, SmsError> {
        self.gateway.request_permission()
    }

    // ========================================================================
    // Raw Channel
    // ========================================================================

    /// Dispatch one named channel operation
    ///
    /// `args_json` is the JSON argument map; malformed or empty input is
    /// treated as no arguments, matching the channel's tolerance.
    pub fn call(&self, method: String, args_json: String) -> FfiMethodResult {
        let args: Value = serde_json::from_str(&args_json).unwrap_or(Value::Null);
        channel::handle_method(&self.gateway, &method, &args).into()
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Resolve the configured message database path
///
/// Reads the shared config file, falling back to the environment. Hosts that
/// manage the path themselves can skip this and pass it to the constructor
/// directly.
#[uniffi::export]
pub fn resolve_store_path() -> Result<String, SmsError> {
    let cfg = StoreConfig::load().map_err(|e| SmsError::SmsRead {
        message: format!("Error reading SMS messages: {e}"),
    })?;
    Ok(cfg.db_path.to_string_lossy().into_owned())
}
