use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(knowledge: Option<&Path>) -> Result<(), String> {
    let store = super::open_store(knowledge);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Card", "Upright", "Reversed"]);

    for id in store.card_ids() {
        // Upright and reversed lookups share the name; two resolves keep
        // the store API narrow.
        let upright = store.resolve_card(id, false).expect("id from card_ids");
        let reversed = store.resolve_card(id, true).expect("id from card_ids");
        table.add_row(vec![
            id.to_string(),
            upright.name,
            truncate(&upright.meaning),
            truncate(&reversed.meaning),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", store.card_count());

    Ok(())
}

fn truncate(text: &str) -> String {
    if text.chars().count() > 60 {
        let cut: String = text.chars().take(57).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
