//! Rich card messages

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::suggestion::Suggestions;

/// Card orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardOrientation {
    Vertical,
    Horizontal,
}

/// Image alignment for horizontal cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageAlignment {
    Left,
    Right,
}

/// Media height classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaHeight {
    ShortHeight,
    MediumHeight,
    TallHeight,
}

/// Media descriptor for a rich card
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub media_url: String,
    pub media_content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_content_type: Option<String>,
    pub media_file_size: u64,
    pub height: MediaHeight,
}

impl Media {
    /// Create a media descriptor from a hosted file
    pub fn new(
        media_url: impl Into<String>,
        media_content_type: impl Into<String>,
        media_file_size: u64,
        height: MediaHeight,
    ) -> Self {
        Self {
            media_url: media_url.into(),
            media_content_type: media_content_type.into(),
            thumbnail_url: None,
            thumbnail_content_type: None,
            media_file_size,
            height,
        }
    }

    /// Attach a thumbnail
    pub fn with_thumbnail(
        mut self,
        thumbnail_url: impl Into<String>,
        thumbnail_content_type: impl Into<String>,
    ) -> Self {
        self.thumbnail_url = Some(thumbnail_url.into());
        self.thumbnail_content_type = Some(thumbnail_content_type.into());
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardLayout {
    card_orientation: CardOrientation,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_alignment: Option<ImageAlignment>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<&'a Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestions: Option<&'a Suggestions>,
}

/// General-purpose rich card.
///
/// Unset fields are left out of the wire payload entirely.
#[derive(Debug, Clone)]
pub struct Richcard {
    card_orientation: CardOrientation,
    image_alignment: Option<ImageAlignment>,
    media: Option<Media>,
    title: Option<String>,
    description: Option<String>,
    suggestions: Option<Suggestions>,
}

impl Default for Richcard {
    fn default() -> Self {
        Self::new()
    }
}

impl Richcard {
    /// Create an empty vertical card
    pub fn new() -> Self {
        Self {
            card_orientation: CardOrientation::Vertical,
            image_alignment: None,
            media: None,
            title: None,
            description: None,
            suggestions: None,
        }
    }

    pub fn with_orientation(mut self, orientation: CardOrientation) -> Self {
        self.card_orientation = orientation;
        self
    }

    /// Set the image alignment. Only serialized for horizontal cards.
    pub fn with_image_alignment(mut self, alignment: ImageAlignment) -> Self {
        self.image_alignment = Some(alignment);
        self
    }

    pub fn with_media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_suggestions(mut self, suggestions: Suggestions) -> Self {
        self.suggestions = Some(suggestions);
        self
    }

    /// The card's content object, shared with carousel assembly.
    pub(crate) fn content_value(&self) -> Value {
        let content = CardContent {
            media: self.media.as_ref(),
            title: self.title.as_deref(),
            description: self.description.as_deref(),
            suggestions: self.suggestions.as_ref(),
        };
        serde_json::json!(content)
    }

    pub(crate) fn to_wire(&self) -> Value {
        let layout = CardLayout {
            card_orientation: self.card_orientation,
            image_alignment: match self.card_orientation {
                CardOrientation::Horizontal => self.image_alignment,
                CardOrientation::Vertical => None,
            },
        };
        serde_json::json!({
            "message": {
                "generalPurposeCard": {
                    "layout": layout,
                    "content": self.content_value(),
                }
            }
        })
    }
}
