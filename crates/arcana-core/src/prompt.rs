//! Deterministic prompt assembly.
//!
//! Given identical inputs the assembled prompt is byte-identical; the only
//! upstream nondeterminism is the randomly chosen emotional label, which is
//! fixed by the time the prompt is built.

use crate::reading::ResolvedCard;

/// Instructional preamble placed at the top of every prompt.
pub const SYSTEM_PREAMBLE: &str = "You are an expert tarot reader with deep knowledge of \
symbolism and psychology. Your interpretations are insightful, nuanced, and respectful of \
the querent's circumstances. Based on the cards drawn and their positions, provide a \
detailed interpretation that is helpful and clear.";

/// Closing instruction requesting the interpretation.
pub const CLOSING_INSTRUCTION: &str = "Provide a detailed tarot interpretation:";

/// Assemble the generation prompt.
///
/// Fixed section order: preamble, question, emotional label, spread display
/// name, one line per card as `"<position>: <name> (<orientation>)"` in
/// spread-position order, closing instruction.
pub fn build_prompt(
    question: &str,
    emotion: &str,
    spread_display: &str,
    cards: &[ResolvedCard],
) -> String {
    let mut prompt = format!("{SYSTEM_PREAMBLE}\n\n");
    prompt.push_str(&format!("Question: {question}\n"));
    prompt.push_str(&format!("Querent's emotional state: {emotion}\n\n"));
    prompt.push_str(&format!("Spread: {spread_display}\n\n"));

    for card in cards {
        prompt.push_str(&format!(
            "{}: {} ({})\n",
            card.position, card.name, card.orientation
        ));
    }

    prompt.push_str(&format!("\n{CLOSING_INSTRUCTION}"));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::Orientation;

    fn card(position: &str, name: &str, orientation: Orientation) -> ResolvedCard {
        ResolvedCard {
            position: position.to_string(),
            name: name.to_string(),
            orientation,
            meaning: "meaning".to_string(),
        }
    }

    #[test]
    fn prompt_contains_sections_in_order() {
        let cards = [
            card("Past", "The Fool", Orientation::Upright),
            card("Present", "The Magician", Orientation::Reversed),
        ];
        let prompt = build_prompt("Will I travel?", "hopeful", "Three Card Spread", &cards);

        let preamble_at = prompt.find(SYSTEM_PREAMBLE).unwrap();
        let question_at = prompt.find("Question: Will I travel?").unwrap();
        let emotion_at = prompt.find("Querent's emotional state: hopeful").unwrap();
        let spread_at = prompt.find("Spread: Three Card Spread").unwrap();
        let past_at = prompt.find("Past: The Fool (upright)").unwrap();
        let present_at = prompt.find("Present: The Magician (reversed)").unwrap();

        assert!(preamble_at < question_at);
        assert!(question_at < emotion_at);
        assert!(emotion_at < spread_at);
        assert!(spread_at < past_at);
        assert!(past_at < present_at);
        assert!(prompt.ends_with(CLOSING_INSTRUCTION));
    }

    #[test]
    fn prompt_is_deterministic() {
        let cards = [card("Card", "The Tower", Orientation::Upright)];
        let a = build_prompt("q", "neutral", "Basic Reading", &cards);
        let b = build_prompt("q", "neutral", "Basic Reading", &cards);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_cards_still_well_formed() {
        let prompt = build_prompt("q", "neutral", "Basic Reading", &[]);
        assert!(prompt.starts_with(SYSTEM_PREAMBLE));
        assert!(prompt.ends_with(CLOSING_INSTRUCTION));
    }
}
