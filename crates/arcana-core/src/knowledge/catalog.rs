//! Catalog data types and the builtin default catalog.
//!
//! The catalog file is a JSON record with two collections: `cards`, keyed by
//! stringified card id, and `spreads`, keyed by spread name. The builtin
//! catalog covers the 22 major arcana and two spreads, and is used whenever
//! a catalog file is missing or malformed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A card entry: display name plus one meaning per orientation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Display name (e.g. "The Fool").
    pub name: String,
    /// Meaning when drawn upright.
    pub upright: String,
    /// Meaning when drawn reversed.
    pub reversed: String,
}

/// A spread: display name plus ordered position labels.
///
/// Position order is significant; it defines the positional semantics of a
/// reading (e.g. "Past", "Present", "Future").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadDef {
    /// Display name (e.g. "Three Card Spread").
    pub name: String,
    /// Ordered position labels.
    pub positions: Vec<String>,
}

/// The full knowledge catalog: cards keyed by stringified id, spreads keyed
/// by spread name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Card entries, keyed by the string form of the card id.
    pub cards: HashMap<String, CardRecord>,
    /// Spread definitions, keyed by spread name.
    pub spreads: HashMap<String, SpreadDef>,
}

impl Catalog {
    /// Whether the catalog satisfies the structural invariants: at least one
    /// card, and no spread with an empty position list.
    ///
    /// A catalog failing this check is treated as malformed and replaced by
    /// the builtin catalog rather than exposed with holes.
    pub fn is_valid(&self) -> bool {
        !self.cards.is_empty() && self.spreads.values().all(|s| !s.positions.is_empty())
    }
}

/// Name, upright meaning, and reversed meaning for the 22 major arcana.
const MAJOR_ARCANA: &[(&str, &str, &str)] = &[
    (
        "The Fool",
        "Beginnings, innocence, spontaneity, a free spirit",
        "Holding back, recklessness, risk-taking, uncertainty",
    ),
    (
        "The Magician",
        "Manifestation, resourcefulness, power, inspired action",
        "Manipulation, poor planning, untapped talents",
    ),
    (
        "The High Priestess",
        "Intuition, sacred knowledge, the subconscious mind",
        "Secrets, withdrawal, silenced inner voice",
    ),
    (
        "The Empress",
        "Femininity, beauty, nature, nurturing, abundance",
        "Creative block, dependence on others, emptiness",
    ),
    (
        "The Emperor",
        "Authority, structure, control, fatherhood",
        "Domination, excessive control, rigidity, inflexibility",
    ),
    (
        "The Hierophant",
        "Tradition, conformity, spiritual wisdom, institutions",
        "Personal beliefs, freedom, challenging the status quo",
    ),
    (
        "The Lovers",
        "Love, harmony, relationships, values alignment",
        "Self-love, disharmony, imbalance, misaligned values",
    ),
    (
        "The Chariot",
        "Control, willpower, success, determination",
        "Self-discipline lost, opposition, lack of direction",
    ),
    (
        "Strength",
        "Courage, persuasion, influence, compassion",
        "Inner strength doubted, self-doubt, low energy",
    ),
    (
        "The Hermit",
        "Soul-searching, introspection, inner guidance",
        "Isolation, loneliness, withdrawal from the world",
    ),
    (
        "Wheel of Fortune",
        "Good luck, karma, life cycles, destiny, a turning point",
        "Bad luck, resistance to change, breaking cycles",
    ),
    (
        "Justice",
        "Fairness, truth, cause and effect, law",
        "Unfairness, lack of accountability, dishonesty",
    ),
    (
        "The Hanged Man",
        "Pause, surrender, letting go, new perspectives",
        "Delays, resistance, stalling, indecision",
    ),
    (
        "Death",
        "Endings, change, transformation, transition",
        "Resistance to change, inability to move on",
    ),
    (
        "Temperance",
        "Balance, moderation, patience, purpose",
        "Imbalance, excess, self-healing needed, realignment",
    ),
    (
        "The Devil",
        "Shadow self, attachment, addiction, restriction",
        "Releasing limiting beliefs, exploring dark thoughts, detachment",
    ),
    (
        "The Tower",
        "Sudden change, upheaval, chaos, revelation, awakening",
        "Personal transformation, fear of change, averting disaster",
    ),
    (
        "The Star",
        "Hope, faith, purpose, renewal, spirituality",
        "Lack of faith, despair, self-trust eroded, disconnection",
    ),
    (
        "The Moon",
        "Illusion, fear, anxiety, subconscious, intuition",
        "Release of fear, repressed emotion, inner confusion",
    ),
    (
        "The Sun",
        "Positivity, fun, warmth, success, vitality",
        "Inner child lost, feeling down, overly optimistic",
    ),
    (
        "Judgement",
        "Rebirth, inner calling, absolution, reflection",
        "Self-doubt, inner critic, ignoring the call",
    ),
    (
        "The World",
        "Completion, integration, accomplishment, travel",
        "Seeking closure, shortcuts taken, delays to completion",
    ),
];

/// Build the builtin default catalog: the 22 major arcana plus the
/// `three_card` and `celtic_cross` spreads.
pub fn builtin_catalog() -> Catalog {
    let cards = MAJOR_ARCANA
        .iter()
        .enumerate()
        .map(|(id, (name, upright, reversed))| {
            (
                id.to_string(),
                CardRecord {
                    name: (*name).to_string(),
                    upright: (*upright).to_string(),
                    reversed: (*reversed).to_string(),
                },
            )
        })
        .collect();

    let mut spreads = HashMap::new();
    spreads.insert(
        "three_card".to_string(),
        SpreadDef {
            name: "Three Card Spread".to_string(),
            positions: vec![
                "Past".to_string(),
                "Present".to_string(),
                "Future".to_string(),
            ],
        },
    );
    spreads.insert(
        "celtic_cross".to_string(),
        SpreadDef {
            name: "Celtic Cross".to_string(),
            positions: [
                "Present",
                "Challenge",
                "Past",
                "Future",
                "Above",
                "Below",
                "Advice",
                "External Influence",
                "Hopes/Fears",
                "Outcome",
            ]
            .iter()
            .map(|p| (*p).to_string())
            .collect(),
        },
    );

    Catalog { cards, spreads }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_22_major_arcana() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.cards.len(), 22);
        assert_eq!(catalog.cards["0"].name, "The Fool");
        assert_eq!(catalog.cards["21"].name, "The World");
    }

    #[test]
    fn builtin_spreads() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.spreads.len(), 2);
        assert_eq!(catalog.spreads["three_card"].positions.len(), 3);
        assert_eq!(catalog.spreads["celtic_cross"].positions.len(), 10);
        assert_eq!(catalog.spreads["three_card"].positions[0], "Past");
        assert_eq!(catalog.spreads["celtic_cross"].positions[9], "Outcome");
    }

    #[test]
    fn builtin_is_valid() {
        assert!(builtin_catalog().is_valid());
    }

    #[test]
    fn every_builtin_card_has_both_meanings() {
        for card in builtin_catalog().cards.values() {
            assert!(!card.upright.is_empty(), "{} missing upright", card.name);
            assert!(!card.reversed.is_empty(), "{} missing reversed", card.name);
        }
    }

    #[test]
    fn empty_cards_is_invalid() {
        let catalog = Catalog {
            cards: HashMap::new(),
            spreads: builtin_catalog().spreads,
        };
        assert!(!catalog.is_valid());
    }

    #[test]
    fn empty_positions_is_invalid() {
        let mut catalog = builtin_catalog();
        catalog.spreads.insert(
            "broken".to_string(),
            SpreadDef {
                name: "Broken".to_string(),
                positions: Vec::new(),
            },
        );
        assert!(!catalog.is_valid());
    }

    #[test]
    fn catalog_deserializes_from_source_format() {
        let json = r#"{
            "cards": {
                "0": {"name": "The Fool", "upright": "a", "reversed": "b"}
            },
            "spreads": {
                "three_card": {"name": "Three Card Spread", "positions": ["Past", "Present", "Future"]}
            }
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert!(catalog.is_valid());
        assert_eq!(catalog.cards["0"].upright, "a");
    }
}
