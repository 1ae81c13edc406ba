//! Message recipient addressing

use serde::Serialize;
use serde_json::Value;

/// Recipient of an outbound message.
///
/// Either a `userContact`/`chatId` pair, or an opaque contact object taken
/// verbatim from an inbound event.
#[derive(Debug, Clone)]
pub enum MessageContact {
    Pair {
        user_contact: Option<String>,
        chat_id: Option<String>,
    },
    Raw(Value),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PairWire<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_contact: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chat_id: Option<&'a str>,
}

impl MessageContact {
    /// Create a contact from a user address and chat session id
    pub fn new(user_contact: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::Pair {
            user_contact: Some(user_contact.into()),
            chat_id: Some(chat_id.into()),
        }
    }

    /// Create a contact addressed by user address only
    pub fn with_user_contact(user_contact: impl Into<String>) -> Self {
        Self::Pair {
            user_contact: Some(user_contact.into()),
            chat_id: None,
        }
    }

    /// Create a contact addressed by chat session id only
    pub fn with_chat_id(chat_id: impl Into<String>) -> Self {
        Self::Pair {
            user_contact: None,
            chat_id: Some(chat_id.into()),
        }
    }

    pub(crate) fn to_wire(&self) -> Value {
        match self {
            Self::Pair {
                user_contact,
                chat_id,
            } => {
                let wire = PairWire {
                    user_contact: user_contact.as_deref(),
                    chat_id: chat_id.as_deref(),
                };
                serde_json::json!(wire)
            }
            Self::Raw(value) => value.clone(),
        }
    }
}

impl From<Value> for MessageContact {
    fn from(value: Value) -> Self {
        Self::Raw(value)
    }
}

impl From<(&str, &str)> for MessageContact {
    fn from((user_contact, chat_id): (&str, &str)) -> Self {
        Self::new(user_contact, chat_id)
    }
}
