//! Reading composer: the orchestration pipeline.
//!
//! `ReadingComposer` borrows the knowledge store and the two external
//! capabilities from the composition root; it keeps no state between
//! `compose` calls. Missing catalog entries degrade the reading with
//! placeholders; only capability failures abort it.

use chrono::Utc;
use rand::rngs::StdRng;
use uuid::Uuid;

use crate::error::{ArcanaError, ArcanaResult};
use crate::gateway::{GenerationGateway, GenerationParams, GenerationRequest, strip_prompt_echo};
use crate::knowledge::{KnowledgeStore, SpreadDef};
use crate::prompt::build_prompt;
use crate::reading::{DrawnCard, Orientation, Reading, ResolvedCard};
use crate::tone::{ToneClassifier, assess};

/// Display name of the fallback spread used for unknown spread names.
pub const FALLBACK_SPREAD_NAME: &str = "Basic Reading";

/// Orchestrates a reading: tone inference, spread binding, card resolution,
/// prompt assembly, and generation.
pub struct ReadingComposer<'a> {
    store: &'a KnowledgeStore,
    classifier: &'a dyn ToneClassifier,
    gateway: &'a dyn GenerationGateway,
}

impl<'a> ReadingComposer<'a> {
    /// Create a composer over a store and the two external capabilities.
    pub fn new(
        store: &'a KnowledgeStore,
        classifier: &'a dyn ToneClassifier,
        gateway: &'a dyn GenerationGateway,
    ) -> Self {
        Self {
            store,
            classifier,
            gateway,
        }
    }

    /// Compose a reading for `question` with the given drawn cards and
    /// spread name.
    ///
    /// Unknown spread names fall back to a one-position spread; unknown
    /// card ids are substituted with placeholders carrying the offending
    /// id. Drawn cards beyond the spread's position count are dropped.
    /// An empty question or empty card list still produces a well-formed
    /// reading.
    pub fn compose(
        &self,
        question: &str,
        drawn: &[DrawnCard],
        spread_name: &str,
        params: GenerationParams,
        rng: &mut StdRng,
    ) -> ArcanaResult<Reading> {
        let tone = assess(self.classifier, question, rng).map_err(ArcanaError::Classifier)?;

        let fallback = fallback_spread();
        let spread = self.store.resolve_spread(spread_name).unwrap_or(&fallback);

        let cards = self.resolve_cards(drawn, spread);

        let prompt = build_prompt(question, &tone.emotion, &spread.name, &cards);
        let request = GenerationRequest {
            prompt: prompt.clone(),
            params,
        };
        let raw = self
            .gateway
            .generate(&request)
            .map_err(ArcanaError::Generation)?;
        let interpretation = strip_prompt_echo(&raw, &prompt);

        Ok(Reading {
            id: Uuid::new_v4(),
            question: question.to_string(),
            cards,
            spread: spread.name.clone(),
            tone,
            interpretation,
            created_at: Utc::now(),
        })
    }

    /// Bind drawn cards to spread positions and resolve their meanings.
    ///
    /// Truncates to the position count first, then binds index `i` to
    /// `positions[i % len]`.
    fn resolve_cards(&self, drawn: &[DrawnCard], spread: &SpreadDef) -> Vec<ResolvedCard> {
        let len = spread.positions.len();
        drawn
            .iter()
            .take(len)
            .enumerate()
            .map(|(i, card)| {
                let position = spread.positions[i % len].clone();
                match self.store.resolve_card(card.card_id, card.reversed) {
                    Some(meaning) => ResolvedCard {
                        position,
                        name: meaning.name,
                        orientation: meaning.orientation,
                        meaning: meaning.meaning,
                    },
                    None => ResolvedCard {
                        position,
                        name: format!("Unknown Card {}", card.card_id),
                        orientation: Orientation::from_reversed(card.reversed),
                        meaning: "No meaning available".to_string(),
                    },
                }
            })
            .collect()
    }
}

/// The one-position spread substituted for unknown spread names.
fn fallback_spread() -> SpreadDef {
    SpreadDef {
        name: FALLBACK_SPREAD_NAME.to_string(),
        positions: vec!["Card".to_string()],
    }
}
