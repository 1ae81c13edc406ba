//! Bot client: credentials, one method per remote operation, request layer

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, SecondsFormat, Utc};
use futures_util::future::BoxFuture;
use reqwest::multipart;
use serde_json::Value;
use tracing::{debug, info};

use crate::contact::MessageContact;
use crate::dispatch::{EventDispatcher, EventPayload, Reply};
use crate::error::{Error, Result};
use crate::message::{IsTyping, MessageContent, MessageStatus};
use crate::suggestion::Suggestions;
use crate::webhook;

/// Bot credentials
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    pub api_url: String,
    pub bot_id: String,
}

impl BotConfig {
    pub fn new(
        token: impl Into<String>,
        api_url: impl Into<String>,
        bot_id: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            api_url: api_url.into(),
            bot_id: bot_id.into(),
        }
    }
}

/// Source of an uploaded file: local content or a hosted URL
#[derive(Debug, Clone)]
pub enum FileSource {
    Path(PathBuf),
    Url(String),
}

struct BotInner {
    config: BotConfig,
    http: reqwest::Client,
    dispatcher: EventDispatcher,
}

/// MaaP chatbot client.
///
/// Immutable after construction and cheap to clone; clones share the HTTP
/// client and the event-handler registry.
#[derive(Clone)]
pub struct Bot {
    inner: Arc<BotInner>,
}

impl std::fmt::Debug for Bot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bot")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl Bot {
    /// Create a client. Fails with a configuration error naming the first
    /// missing credential.
    pub fn new(config: BotConfig) -> Result<Self> {
        if config.token.is_empty() {
            return Err(Error::Config("token"));
        }
        if config.api_url.is_empty() {
            return Err(Error::Config("API URL"));
        }
        if config.bot_id.is_empty() {
            return Err(Error::Config("bot ID"));
        }

        Ok(Self {
            inner: Arc::new(BotInner {
                config,
                http: reqwest::Client::new(),
                dispatcher: EventDispatcher::default(),
            }),
        })
    }

    pub fn bot_id(&self) -> &str {
        &self.inner.config.bot_id
    }

    /// Send a message to a contact, with an optional chip list.
    pub async fn send_message(
        &self,
        recipient: &MessageContact,
        content: impl Into<MessageContent>,
        suggestions: Option<&Suggestions>,
    ) -> Result<Value> {
        let body = message_body(recipient, &content.into(), suggestions);

        debug!(bot_id = %self.bot_id(), "Sending message");

        self.send_request(self.inner.http.post(self.endpoint("/messages")).json(&body))
            .await
    }

    /// Show the typing indicator to a contact
    pub async fn start_typing(&self, recipient: &MessageContact) -> Result<Value> {
        self.send_typing(recipient, IsTyping::Active).await
    }

    /// Clear the typing indicator
    pub async fn stop_typing(&self, recipient: &MessageContact) -> Result<Value> {
        self.send_typing(recipient, IsTyping::Idle).await
    }

    /// Fetch the delivery status of a sent message
    pub async fn get_message_status(&self, message_id: &str) -> Result<Value> {
        let url = self.endpoint(&format!("/messages/{message_id}/status"));
        self.send_request(self.inner.http.get(url)).await
    }

    /// Update the status of a received message (cancelled / displayed)
    pub async fn update_message_status(
        &self,
        message_id: &str,
        status: MessageStatus,
    ) -> Result<Value> {
        let body = serde_json::json!({ "RCSMessage": { "status": status } });
        let url = self.endpoint(&format!("/messages/{message_id}/status"));

        debug!(message_id, ?status, "Updating message status");

        self.send_request(self.inner.http.put(url).json(&body)).await
    }

    /// Look up the RCS capabilities of a contact. Each identifier is sent
    /// only when supplied.
    pub async fn get_contact_capabilities(
        &self,
        user_contact: Option<&str>,
        chat_id: Option<&str>,
    ) -> Result<Value> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(user_contact) = user_contact {
            query.push(("userContact", user_contact));
        }
        if let Some(chat_id) = chat_id {
            query.push(("chatId", chat_id));
        }

        self.send_request(
            self.inner
                .http
                .get(self.endpoint("/contactCapabilities"))
                .query(&query),
        )
        .await
    }

    /// Upload a file to the platform's media store.
    ///
    /// `until` is the retention deadline; when omitted the platform keeps
    /// the file for 30 days.
    pub async fn upload_file(
        &self,
        source: FileSource,
        file_type: &str,
        until: Option<DateTime<Utc>>,
    ) -> Result<Value> {
        let until = until.unwrap_or_else(|| Utc::now() + chrono::Duration::days(30));

        let mut form = multipart::Form::new()
            .text("fileType", file_type.to_string())
            .text("until", until.to_rfc3339_opts(SecondsFormat::Millis, true));

        match source {
            FileSource::Path(path) => {
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let content = tokio::fs::read(&path).await?;

                info!(file = %path.display(), file_type, "Uploading file");

                form = form.part(
                    "fileContent",
                    multipart::Part::bytes(content).file_name(file_name),
                );
            }
            FileSource::Url(url) => {
                info!(url = %url, file_type, "Uploading file by URL");
                form = form.text("fileUrl", url);
            }
        }

        self.send_request(self.inner.http.post(self.endpoint("/files")).multipart(form))
            .await
    }

    /// Fetch a stored file's descriptor
    pub async fn get_file(&self, file_id: &str) -> Result<Value> {
        let url = self.endpoint(&format!("/files/{file_id}"));
        self.send_request(self.inner.http.get(url)).await
    }

    /// Delete a stored file
    pub async fn delete_file(&self, file_id: &str) -> Result<Value> {
        let url = self.endpoint(&format!("/files/{file_id}"));
        self.send_request(self.inner.http.delete(url)).await
    }

    /// Register a handler for an inbound event name.
    ///
    /// Handlers registered for one event run in registration order. The
    /// second argument is a [`Reply`] bound to the event's contact, when
    /// the event carries one.
    pub fn on<H, Fut>(&self, event: &str, handler: H)
    where
        H: Fn(EventPayload, Option<Reply>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.inner.dispatcher.on(
            event,
            Box::new(move |payload, reply| -> BoxFuture<'static, ()> {
                Box::pin(handler(payload, reply))
            }),
        );
    }

    /// Dispatch an already-parsed event envelope.
    ///
    /// Used by the webhook handler, and directly by callers who run their
    /// own HTTP layer. Envelopes without an event name are ignored.
    pub async fn handle_event(&self, payload: EventPayload) {
        let Some(event) = payload.event.clone().filter(|event| !event.is_empty()) else {
            return;
        };

        let reply = payload
            .message_contact
            .clone()
            .map(|contact| Reply::new(self.clone(), MessageContact::from(contact)));

        self.inner.dispatcher.emit(&event, payload, reply).await;
    }

    /// Router serving the webhook contract on every path and method
    pub fn webhook_router(&self) -> Router {
        webhook::router(self.clone())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}{}", self.inner.config.api_url, self.inner.config.bot_id, path)
    }

    async fn send_typing(&self, recipient: &MessageContact, state: IsTyping) -> Result<Value> {
        let body = serde_json::json!({
            "RCSMessage": { "isTyping": state },
            "messageContact": recipient.to_wire(),
        });

        self.send_request(self.inner.http.post(self.endpoint("/messages")).json(&body))
            .await
    }

    /// Issue a request with the bearer header and normalize the outcome.
    async fn send_request(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = request
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.inner.config.token),
            )
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let body = decode_body(&text);

        if !status.is_success() {
            return Err(Error::Api(body));
        }

        api_result(body)
    }
}

/// Assemble the `POST /messages` body for a content + chip-list pair.
pub(crate) fn message_body(
    recipient: &MessageContact,
    content: &MessageContent,
    suggestions: Option<&Suggestions>,
) -> Value {
    let (key, value) = content.to_wire();

    let mut rcs_message = serde_json::Map::new();
    rcs_message.insert(key.to_string(), value);

    if let Some(suggestions) = suggestions {
        rcs_message.insert(
            "suggestedChipList".to_string(),
            serde_json::json!({ "suggestions": suggestions }),
        );
    }

    serde_json::json!({
        "RCSMessage": rcs_message,
        "messageContact": recipient.to_wire(),
    })
}

fn decode_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// A 2xx exchange still fails when the body carries an `error` field.
pub(crate) fn api_result(body: Value) -> Result<Value> {
    match body.get("error") {
        Some(error) if !error.is_null() => Err(Error::Api(error.clone())),
        _ => Ok(body),
    }
}
