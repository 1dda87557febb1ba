//! Command implementations.

pub mod cards;
pub mod draw;
pub mod read;
pub mod spreads;

use std::path::Path;

use colored::Colorize;

use arcana_core::{CatalogSource, KnowledgeStore};

/// Open the knowledge store, warning on stderr when a requested catalog
/// file could not be used and the builtin catalog is live instead.
pub fn open_store(knowledge: Option<&Path>) -> KnowledgeStore {
    match knowledge {
        Some(path) => {
            let store = KnowledgeStore::load(path);
            if store.source() == &CatalogSource::Builtin {
                eprintln!(
                    "{} could not read catalog {}, using builtin catalog",
                    "warning:".yellow().bold(),
                    path.display()
                );
            }
            store
        }
        None => KnowledgeStore::builtin(),
    }
}
