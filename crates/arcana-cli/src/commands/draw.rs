use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use arcana_core::deck;

pub fn run(count: usize, seed: u64, knowledge: Option<&Path>) -> Result<(), String> {
    let store = super::open_store(knowledge);
    let mut rng = StdRng::seed_from_u64(seed);

    let drawn = deck::draw(count, store.card_count() as u32, &mut rng);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Card", "Orientation"]);

    for card in &drawn {
        let name = store
            .resolve_card(card.card_id, card.reversed)
            .map(|m| m.name)
            .unwrap_or_else(|| format!("Unknown Card {}", card.card_id));
        table.add_row(vec![
            card.card_id.to_string(),
            name,
            card.orientation().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards drawn", drawn.len());

    Ok(())
}
