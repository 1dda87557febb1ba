use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use arcana_core::{
    DrawnCard, GenerationParams, Reading, ReadingComposer, deck,
};

use crate::offline::{KeywordToneClassifier, TemplateGateway};

/// Arguments for the `read` command.
pub struct ReadArgs {
    pub question: String,
    pub spread: String,
    pub cards: Option<String>,
    pub draw: usize,
    pub seed: u64,
    pub knowledge: Option<PathBuf>,
    pub temperature: f32,
    pub top_p: f32,
    pub max_length: u32,
    pub json: bool,
}

pub fn run(args: &ReadArgs) -> Result<(), String> {
    let store = super::open_store(args.knowledge.as_deref());
    let mut rng = StdRng::seed_from_u64(args.seed);

    let drawn = match &args.cards {
        Some(spec) => parse_cards(spec)?,
        None => deck::draw(args.draw, store.card_count() as u32, &mut rng),
    };

    let params = GenerationParams {
        max_length: args.max_length,
        temperature: args.temperature,
        nucleus: args.top_p,
        sampling: true,
    };

    let classifier = KeywordToneClassifier;
    let gateway = TemplateGateway;
    let composer = ReadingComposer::new(&store, &classifier, &gateway);

    let reading = composer
        .compose(&args.question, &drawn, &args.spread, params, &mut rng)
        .map_err(|e| e.to_string())?;

    if args.json {
        let json = serde_json::to_string_pretty(&reading).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        render(&reading);
    }

    Ok(())
}

/// Parse a card spec like `0,1r,7` into drawn cards.
///
/// Each comma-separated token is a card id with an optional `r` (or `R`)
/// suffix marking the card reversed.
pub fn parse_cards(spec: &str) -> Result<Vec<DrawnCard>, String> {
    spec.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|token| {
            let (id_part, reversed) = match token.strip_suffix(['r', 'R']) {
                Some(rest) => (rest, true),
                None => (token, false),
            };
            let card_id: u32 = id_part
                .parse()
                .map_err(|_| format!("invalid card '{token}', expected an id like 7 or 7r"))?;
            Ok(DrawnCard::new(card_id, reversed))
        })
        .collect()
}

fn render(reading: &Reading) {
    println!("{} {}", "Question:".bold(), reading.question);
    println!(
        "{} {} (feeling {}, confidence {:.2})",
        "Tone:".bold(),
        reading.tone.polarity,
        reading.tone.emotion,
        reading.tone.confidence
    );
    println!("{} {}", "Spread:".bold(), reading.spread);
    println!();

    if reading.cards.is_empty() {
        println!("  No cards drawn.");
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Position", "Card", "Orientation", "Meaning"]);
        for card in &reading.cards {
            table.add_row(vec![
                &card.position,
                &card.name,
                &card.orientation.to_string(),
                &card.meaning,
            ]);
        }
        println!("{table}");
    }

    println!();
    println!("{}", "Interpretation".bold());
    println!("{}", reading.interpretation);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_spec() {
        let cards = parse_cards("0,1r,7").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0], DrawnCard::new(0, false));
        assert_eq!(cards[1], DrawnCard::new(1, true));
        assert_eq!(cards[2], DrawnCard::new(7, false));
    }

    #[test]
    fn parse_tolerates_spaces_and_uppercase() {
        let cards = parse_cards(" 3 , 12R ").unwrap();
        assert_eq!(cards[0], DrawnCard::new(3, false));
        assert_eq!(cards[1], DrawnCard::new(12, true));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_cards("0,fool").is_err());
        assert!(parse_cards("r").is_err());
    }

    #[test]
    fn parse_empty_spec_is_empty() {
        assert!(parse_cards("").unwrap().is_empty());
    }
}
