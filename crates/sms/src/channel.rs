//! Method-call channel for host runtimes
//!
//! The inbound surface of the gateway: a named operation plus a JSON
//! argument map in, a success payload, a (code, message) error, or a
//! not-implemented signal out. Payload shapes are the serde wire forms of
//! the models; unknown operation names are not errors.

use serde::Serialize;
use serde_json::Value;

use crate::error::SmsError;
use crate::gateway::SmsGateway;

pub const METHOD_GET_ALL_SMS: &str = "getAllSms";
pub const METHOD_GET_SMS_BY_ADDRESS: &str = "getSmsByAddress";
pub const METHOD_GET_CONVERSATIONS: &str = "getConversations";
pub const METHOD_GET_CONVERSATION_MESSAGES: &str = "getConversationMessages";
pub const METHOD_GET_MESSAGES_BY_ADDRESS: &str = "getMessagesByAddress";
pub const METHOD_CHECK_PERMISSION: &str = "checkPermission";
pub const METHOD_REQUEST_PERMISSION: &str = "requestPermission";

/// Outcome of one channel call
///
/// Mirrors the host channel's result triple: success payload, typed error,
/// or not-implemented for unknown operation names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodResponse {
    Success(Value),
    Error { code: String, message: String },
    NotImplemented,
}

impl From<SmsError> for MethodResponse {
    fn from(err: SmsError) -> Self {
        MethodResponse::Error {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

fn reply<T: Serialize>(result: Result<T, SmsError>) -> MethodResponse {
    match result {
        Ok(payload) => {
            MethodResponse::Success(serde_json::to_value(payload).unwrap_or(Value::Null))
        }
        Err(err) => err.into(),
    }
}

fn string_arg(args: &Value, key: &str) -> String {
    args.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn window_arg(args: &Value, key: &str) -> u32 {
    // Absent, null, or negative window arguments fall back to 0.
    args.get(key)
        .and_then(Value::as_u64)
        .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// Dispatch one named operation against the gateway
pub fn handle_method(gateway: &SmsGateway, method: &str, args: &Value) -> MethodResponse {
    match method {
        METHOD_GET_ALL_SMS => reply(gateway.get_all_messages()),
        METHOD_GET_SMS_BY_ADDRESS | METHOD_GET_MESSAGES_BY_ADDRESS => {
            let address = string_arg(args, "address");
            reply(gateway.get_messages_by_address(&address))
        }
        METHOD_GET_CONVERSATIONS => {
            let limit = window_arg(args, "limit");
            let offset = window_arg(args, "offset");
            reply(gateway.get_conversations(limit, offset))
        }
        METHOD_GET_CONVERSATION_MESSAGES => {
            let thread_id = string_arg(args, "threadId");
            reply(gateway.get_conversation_messages(&thread_id))
        }
        METHOD_CHECK_PERMISSION => MethodResponse::Success(Value::Bool(gateway.check_permission())),
        METHOD_REQUEST_PERMISSION => match gateway.request_permission() {
            Ok(granted) => MethodResponse::Success(Value::Bool(granted)),
            Err(err) => err.into(),
        },
        _ => MethodResponse::NotImplemented,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Message, message_kind, read_state};
    use crate::permission::StaticPermissions;
    use crate::store::InMemorySmsStore;
    use serde_json::json;
    use std::sync::Arc;

    fn make_message(id: &str, body: &str, date: i64, thread_id: i64) -> Message {
        Message {
            id: id.to_string(),
            address: Some("+15550000001".to_string()),
            body: Some(body.to_string()),
            date,
            date_sent: date - 1000,
            kind: message_kind::SENT,
            read: read_state::READ,
            thread_id: Some(thread_id),
        }
    }

    fn make_gateway() -> SmsGateway {
        let store = Arc::new(InMemorySmsStore::new());
        store.insert_message(make_message("1", "First message", 1_000, 123));
        store.insert_message(make_message("2", "Second message", 2_000, 123));
        SmsGateway::new(store, Arc::new(StaticPermissions::granted()))
    }

    #[test]
    fn test_unknown_method_is_not_implemented() {
        let gateway = make_gateway();
        assert_eq!(
            handle_method(&gateway, "sendSms", &json!({})),
            MethodResponse::NotImplemented
        );
    }

    #[test]
    fn test_get_all_sms_payload_shape() {
        let gateway = make_gateway();

        let MethodResponse::Success(payload) = handle_method(&gateway, METHOD_GET_ALL_SMS, &json!({}))
        else {
            panic!("expected success");
        };

        let list = payload.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["body"], "Second message");
        assert_eq!(list[0]["type"], message_kind::SENT);
        // Bulk path omits threadId
        assert!(list[0].get("threadId").is_none());
    }

    #[test]
    fn test_get_conversation_messages_round_trip() {
        let gateway = make_gateway();

        let response = handle_method(
            &gateway,
            METHOD_GET_CONVERSATION_MESSAGES,
            &json!({"threadId": "123"}),
        );

        let MethodResponse::Success(payload) = response else {
            panic!("expected success");
        };
        let list = payload.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["body"], "First message");
        assert_eq!(list[1]["body"], "Second message");
        assert_eq!(list[0]["threadId"], 123);
    }

    #[test]
    fn test_missing_thread_id_is_invalid() {
        let gateway = make_gateway();

        let response = handle_method(&gateway, METHOD_GET_CONVERSATION_MESSAGES, &json!({}));
        assert_eq!(
            response,
            MethodResponse::Error {
                code: "INVALID_THREAD_ID".to_string(),
                message: "Thread ID cannot be null or empty".to_string(),
            }
        );
    }

    #[test]
    fn test_address_methods_are_aliases() {
        let gateway = make_gateway();
        let args = json!({"address": "+15550000001"});

        let a = handle_method(&gateway, METHOD_GET_SMS_BY_ADDRESS, &args);
        let b = handle_method(&gateway, METHOD_GET_MESSAGES_BY_ADDRESS, &args);
        assert_eq!(a, b);
        assert!(matches!(a, MethodResponse::Success(_)));
    }

    #[test]
    fn test_get_conversations_defaults_to_unbounded() {
        let gateway = make_gateway();

        let MethodResponse::Success(payload) =
            handle_method(&gateway, METHOD_GET_CONVERSATIONS, &json!({}))
        else {
            panic!("expected success");
        };

        let list = payload.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["thread_id"], 123);
        assert_eq!(list[0]["snippet"], "Second message");
        assert_eq!(list[0]["address"], "+15550000001");
    }

    #[test]
    fn test_negative_window_arguments_fall_back_to_zero() {
        let gateway = make_gateway();

        let response = handle_method(
            &gateway,
            METHOD_GET_CONVERSATIONS,
            &json!({"limit": -3, "offset": -1}),
        );
        let MethodResponse::Success(payload) = response else {
            panic!("expected success");
        };
        assert_eq!(payload.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_permission_methods() {
        let store = Arc::new(InMemorySmsStore::new());
        let permissions = Arc::new(StaticPermissions::denied());
        let gateway = SmsGateway::new(store, permissions.clone());

        assert_eq!(
            handle_method(&gateway, METHOD_CHECK_PERMISSION, &json!({})),
            MethodResponse::Success(Value::Bool(false))
        );
        assert_eq!(
            handle_method(&gateway, METHOD_REQUEST_PERMISSION, &json!({})),
            MethodResponse::Success(Value::Bool(false))
        );
        assert_eq!(permissions.prompts_fired(), 1);
    }

    #[test]
    fn test_denied_reads_surface_permission_code() {
        let gateway = SmsGateway::new(
            Arc::new(InMemorySmsStore::new()),
            Arc::new(StaticPermissions::denied()),
        );

        let response = handle_method(&gateway, METHOD_GET_ALL_SMS, &json!({}));
        let MethodResponse::Error { code, .. } = response else {
            panic!("expected error");
        };
        assert_eq!(code, "PERMISSION_DENIED");
    }
}
