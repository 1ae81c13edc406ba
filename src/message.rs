//! Outbound message content types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::carousel::RichcardCarousel;
use crate::rich_card::Richcard;

/// Statuses a bot may set on a delivered message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Cancelled,
    Displayed,
}

/// Typing-indicator states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum IsTyping {
    Active,
    Idle,
}

/// File attachment message.
///
/// Only `fileUrl` is required; unset fields are omitted on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMessage {
    pub file_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(rename = "fileMIMEType", skip_serializing_if = "Option::is_none")]
    pub file_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_file_name: Option<String>,
    #[serde(rename = "thumbnailMIMEType", skip_serializing_if = "Option::is_none")]
    pub thumbnail_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_file_size: Option<u64>,
}

impl FileMessage {
    pub fn new(file_url: impl Into<String>) -> Self {
        Self {
            file_url: file_url.into(),
            file_name: None,
            file_mime_type: None,
            file_size: None,
            thumbnail_url: None,
            thumbnail_file_name: None,
            thumbnail_mime_type: None,
            thumbnail_file_size: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_file_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.file_mime_type = Some(mime_type.into());
        self
    }

    pub fn with_file_size(mut self, file_size: u64) -> Self {
        self.file_size = Some(file_size);
        self
    }

    pub fn with_thumbnail_url(mut self, thumbnail_url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(thumbnail_url.into());
        self
    }

    pub fn with_thumbnail_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.thumbnail_file_name = Some(file_name.into());
        self
    }

    pub fn with_thumbnail_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.thumbnail_mime_type = Some(mime_type.into());
        self
    }

    pub fn with_thumbnail_file_size(mut self, file_size: u64) -> Self {
        self.thumbnail_file_size = Some(file_size);
        self
    }
}

/// Audio attachment message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioMessage {
    pub file_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(rename = "fileMIMEType", skip_serializing_if = "Option::is_none")]
    pub file_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// Playback length in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playing_length: Option<u64>,
}

impl AudioMessage {
    pub fn new(file_url: impl Into<String>) -> Self {
        Self {
            file_url: file_url.into(),
            file_name: None,
            file_mime_type: None,
            file_size: None,
            playing_length: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_file_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.file_mime_type = Some(mime_type.into());
        self
    }

    pub fn with_file_size(mut self, file_size: u64) -> Self {
        self.file_size = Some(file_size);
        self
    }

    pub fn with_playing_length(mut self, playing_length: u64) -> Self {
        self.playing_length = Some(playing_length);
        self
    }
}

/// Geolocation push message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeolocationPushMessage {
    /// Position as a "lat lon" coordinate pair
    pub pos: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl GeolocationPushMessage {
    pub fn new(pos: impl Into<String>) -> Self {
        Self {
            pos: pos.into(),
            label: None,
            timestamp: None,
            expiry: None,
            time_offset: None,
            radius: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn with_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.expiry = Some(expiry.into());
        self
    }

    pub fn with_time_offset(mut self, time_offset: i64) -> Self {
        self.time_offset = Some(time_offset);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
}

/// Outbound message content.
///
/// Closed set of content kinds; each maps to its `RCSMessage` wire key.
#[derive(Debug, Clone)]
pub enum MessageContent {
    Text(String),
    Richcard(Richcard),
    Carousel(RichcardCarousel),
    File(FileMessage),
    Audio(AudioMessage),
    Geolocation(GeolocationPushMessage),
}

impl MessageContent {
    pub(crate) fn to_wire(&self) -> (&'static str, Value) {
        match self {
            Self::Text(text) => ("textMessage", Value::String(text.clone())),
            Self::Richcard(card) => ("richcardMessage", card.to_wire()),
            Self::Carousel(carousel) => ("richcardMessage", carousel.to_wire()),
            Self::File(file) => ("fileMessage", serde_json::json!(file)),
            Self::Audio(audio) => ("audioMessage", serde_json::json!(audio)),
            Self::Geolocation(geo) => ("geolocationPushMessage", serde_json::json!(geo)),
        }
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Richcard> for MessageContent {
    fn from(card: Richcard) -> Self {
        Self::Richcard(card)
    }
}

impl From<RichcardCarousel> for MessageContent {
    fn from(carousel: RichcardCarousel) -> Self {
        Self::Carousel(carousel)
    }
}

impl From<FileMessage> for MessageContent {
    fn from(file: FileMessage) -> Self {
        Self::File(file)
    }
}

impl From<AudioMessage> for MessageContent {
    fn from(audio: AudioMessage) -> Self {
        Self::Audio(audio)
    }
}

impl From<GeolocationPushMessage> for MessageContent {
    fn from(geo: GeolocationPushMessage) -> Self {
        Self::Geolocation(geo)
    }
}
