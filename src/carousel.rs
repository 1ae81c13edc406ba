//! Rich card carousels

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rich_card::Richcard;

/// Card width classes in a carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardWidth {
    SmallWidth,
    MediumWidth,
}

/// Horizontally scrollable set of rich cards sharing one width layout.
///
/// The carousel embeds each card's *content* object; card-level layout
/// (orientation, alignment) does not apply inside a carousel.
#[derive(Debug, Clone)]
pub struct RichcardCarousel {
    card_width: CardWidth,
    richcards: Vec<Richcard>,
}

impl Default for RichcardCarousel {
    fn default() -> Self {
        Self::new()
    }
}

impl RichcardCarousel {
    /// Create an empty carousel of small-width cards
    pub fn new() -> Self {
        Self {
            card_width: CardWidth::SmallWidth,
            richcards: Vec::new(),
        }
    }

    pub fn with_card_width(mut self, card_width: CardWidth) -> Self {
        self.card_width = card_width;
        self
    }

    /// Append a card. Display order is insertion order.
    pub fn add_richcard(&mut self, richcard: Richcard) -> &mut Self {
        self.richcards.push(richcard);
        self
    }

    pub fn len(&self) -> usize {
        self.richcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.richcards.is_empty()
    }

    pub(crate) fn to_wire(&self) -> Value {
        let content: Vec<Value> = self.richcards.iter().map(Richcard::content_value).collect();
        serde_json::json!({
            "message": {
                "generalPurposeCardCarousel": {
                    "layout": { "cardWidth": self.card_width },
                    "content": content,
                }
            }
        })
    }
}
