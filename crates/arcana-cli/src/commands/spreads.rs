use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(knowledge: Option<&Path>) -> Result<(), String> {
    let store = super::open_store(knowledge);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Display", "Positions"]);

    for name in store.spread_names() {
        let spread = store.resolve_spread(name).expect("name from spread_names");
        table.add_row(vec![
            name.to_string(),
            spread.name.clone(),
            spread.positions.join(", "),
        ]);
    }

    println!("{table}");

    Ok(())
}
