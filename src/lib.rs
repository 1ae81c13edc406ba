//! MaaP chatbot SDK
//!
//! Client SDK for RCS MaaP chatbot platforms:
//! - Text, file, audio, geolocation, rich card and carousel messages
//! - Suggested replies and actions (chip lists)
//! - REST client with bearer-token auth
//! - Webhook endpoint with per-event-name handler dispatch

pub mod bot;
pub mod carousel;
pub mod contact;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod rich_card;
pub mod suggestion;
pub mod webhook;

#[cfg(test)]
mod tests;

pub use bot::{Bot, BotConfig, FileSource};
pub use carousel::{CardWidth, RichcardCarousel};
pub use contact::MessageContact;
pub use dispatch::{EventPayload, Reply};
pub use error::{Error, Result};
pub use message::{
    AudioMessage, FileMessage, GeolocationPushMessage, MessageContent, MessageStatus,
};
pub use rich_card::{CardOrientation, ImageAlignment, Media, MediaHeight, Richcard};
pub use suggestion::{DialType, RecordingType, SettingsType, Suggestion, Suggestions};
