//! Inbound event dispatch

use dashmap::DashMap;
use futures_util::future::BoxFuture;
use serde::Deserialize;
use serde_json::Value;

use crate::bot::Bot;
use crate::contact::MessageContact;
use crate::error::Result;
use crate::message::MessageContent;
use crate::suggestion::Suggestions;

/// Inbound event envelope delivered by the platform.
///
/// Fields outside the envelope are kept verbatim in `extra`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub message_contact: Option<Value>,
    #[serde(rename = "RCSMessage", default)]
    pub rcs_message: Option<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Reply handle pre-bound to the contact an event came from.
#[derive(Clone)]
pub struct Reply {
    bot: Bot,
    contact: MessageContact,
}

impl Reply {
    pub(crate) fn new(bot: Bot, contact: MessageContact) -> Self {
        Self { bot, contact }
    }

    /// The contact this reply is addressed to
    pub fn contact(&self) -> &MessageContact {
        &self.contact
    }

    /// Send a message back to the originating contact.
    ///
    /// Equivalent to [`Bot::send_message`] with the contact pre-filled.
    pub async fn send(
        &self,
        content: impl Into<MessageContent>,
        suggestions: Option<&Suggestions>,
    ) -> Result<Value> {
        self.bot.send_message(&self.contact, content, suggestions).await
    }
}

pub(crate) type Handler =
    Box<dyn Fn(EventPayload, Option<Reply>) -> BoxFuture<'static, ()> + Send + Sync>;

/// Registry of event handlers keyed by event name.
///
/// Handlers for one event run in registration order. Panics inside a
/// handler propagate to the dispatch caller.
#[derive(Default)]
pub(crate) struct EventDispatcher {
    handlers: DashMap<String, Vec<Handler>>,
}

impl EventDispatcher {
    pub(crate) fn on(&self, event: &str, handler: Handler) {
        self.handlers.entry(event.to_string()).or_default().push(handler);
    }

    pub(crate) async fn emit(&self, event: &str, payload: EventPayload, reply: Option<Reply>) {
        // Collect the futures before awaiting so the map guard is released.
        let pending: Vec<BoxFuture<'static, ()>> = match self.handlers.get(event) {
            Some(handlers) => handlers
                .iter()
                .map(|handler| handler(payload.clone(), reply.clone()))
                .collect(),
            None => Vec::new(),
        };

        for future in pending {
            future.await;
        }
    }
}
