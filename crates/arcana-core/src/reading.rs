//! Core data types for a tarot reading.
//!
//! A reading starts from a question and a list of [`DrawnCard`]s, binds each
//! card to a spread position, and ends in an immutable [`Reading`] carrying
//! the resolved cards, the inferred tone, and the generated interpretation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A card as drawn for a single reading: catalog id plus orientation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// Catalog id of the card (0-based).
    pub card_id: u32,
    /// Whether the card landed reversed.
    pub reversed: bool,
}

impl DrawnCard {
    /// Create a drawn card.
    pub fn new(card_id: u32, reversed: bool) -> Self {
        Self { card_id, reversed }
    }

    /// The orientation implied by the reversal flag.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_reversed(self.reversed)
    }
}

/// Which of a card's two meanings applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// The card is upright.
    Upright,
    /// The card is reversed.
    Reversed,
}

impl Orientation {
    /// Map a reversal flag to an orientation.
    pub fn from_reversed(reversed: bool) -> Self {
        if reversed { Self::Reversed } else { Self::Upright }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upright => write!(f, "upright"),
            Self::Reversed => write!(f, "reversed"),
        }
    }
}

/// A drawn card bound to a spread position with its meaning resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCard {
    /// Spread position label (e.g. "Past").
    pub position: String,
    /// Display name of the card.
    pub name: String,
    /// Orientation the card was drawn in.
    pub orientation: Orientation,
    /// Meaning text for that orientation.
    pub meaning: String,
}

/// The inferred emotional framing of the querent's question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneAssessment {
    /// Polarity label from the classifier, lowercased (e.g. "positive").
    pub polarity: String,
    /// Classifier confidence in `[0, 1]`.
    pub confidence: f32,
    /// Emotional label chosen for prompt construction (e.g. "hopeful").
    pub emotion: String,
}

/// A completed reading. Constructed once per request, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    /// Unique id of this reading.
    pub id: Uuid,
    /// The question as asked.
    pub question: String,
    /// Resolved cards in spread-position order.
    pub cards: Vec<ResolvedCard>,
    /// Display name of the spread used.
    pub spread: String,
    /// Tone assessment of the question.
    pub tone: ToneAssessment,
    /// Generated interpretation text.
    pub interpretation: String,
    /// When the reading was composed.
    pub created_at: DateTime<Utc>,
}
