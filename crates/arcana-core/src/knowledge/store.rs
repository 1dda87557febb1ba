//! Knowledge store: catalog loading with builtin fallback, card and spread
//! resolution.

use std::fs;
use std::path::{Path, PathBuf};

use crate::reading::Orientation;

use super::catalog::{Catalog, SpreadDef, builtin_catalog};

/// Where the live catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Loaded and validated from a catalog file.
    File(PathBuf),
    /// The builtin default catalog (file missing or malformed).
    Builtin,
}

/// A card meaning resolved for a specific orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMeaning {
    /// Display name of the card.
    pub name: String,
    /// Orientation the meaning was resolved for.
    pub orientation: Orientation,
    /// Meaning text for that orientation.
    pub meaning: String,
}

/// Read-only catalog of card meanings and spread definitions.
///
/// Loaded once and shared for the lifetime of the process; there is no
/// write path after load.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    catalog: Catalog,
    source: CatalogSource,
}

impl KnowledgeStore {
    /// Load the catalog from a JSON file.
    ///
    /// Any failure — missing file, unparseable JSON, or a catalog violating
    /// the structural invariants — falls back to the builtin catalog. This
    /// never fails; check [`KnowledgeStore::source`] to see which catalog
    /// is live.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match read_catalog(path) {
            Some(catalog) => Self {
                catalog,
                source: CatalogSource::File(path.to_path_buf()),
            },
            None => Self::builtin(),
        }
    }

    /// The builtin default catalog: 22 major arcana, `three_card` and
    /// `celtic_cross` spreads.
    pub fn builtin() -> Self {
        Self {
            catalog: builtin_catalog(),
            source: CatalogSource::Builtin,
        }
    }

    /// Where the live catalog came from.
    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Number of cards in the catalog (the deck size for random draws).
    pub fn card_count(&self) -> usize {
        self.catalog.cards.len()
    }

    /// Resolve a card id and orientation to its display name and meaning.
    ///
    /// Returns `None` if the id is not in the catalog; the caller decides
    /// the substitution policy (the composer continues with a placeholder
    /// rather than aborting the reading).
    pub fn resolve_card(&self, card_id: u32, reversed: bool) -> Option<CardMeaning> {
        let record = self.catalog.cards.get(&card_id.to_string())?;
        let orientation = Orientation::from_reversed(reversed);
        let meaning = match orientation {
            Orientation::Upright => record.upright.clone(),
            Orientation::Reversed => record.reversed.clone(),
        };
        Some(CardMeaning {
            name: record.name.clone(),
            orientation,
            meaning,
        })
    }

    /// Resolve a spread by exact name.
    pub fn resolve_spread(&self, name: &str) -> Option<&SpreadDef> {
        self.catalog.spreads.get(name)
    }

    /// Spread names in the catalog, sorted.
    pub fn spread_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.catalog.spreads.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Card ids in the catalog, sorted numerically.
    pub fn card_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self
            .catalog
            .cards
            .keys()
            .filter_map(|k| k.parse().ok())
            .collect();
        ids.sort_unstable();
        ids
    }
}

/// Read and validate a catalog file. `None` on any failure.
fn read_catalog(path: &Path) -> Option<Catalog> {
    let text = fs::read_to_string(path).ok()?;
    let catalog: Catalog = serde_json::from_str(&text).ok()?;
    catalog.is_valid().then_some(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn catalog_file(json: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f
    }

    #[test]
    fn load_valid_file() {
        let f = catalog_file(
            r#"{
                "cards": {"0": {"name": "The Fool", "upright": "up", "reversed": "down"}},
                "spreads": {"single": {"name": "Single", "positions": ["Card"]}}
            }"#,
        );
        let store = KnowledgeStore::load(f.path());
        assert_eq!(store.source(), &CatalogSource::File(f.path().to_path_buf()));
        assert_eq!(store.card_count(), 1);
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let store = KnowledgeStore::load("/nonexistent/tarot_knowledge.json");
        assert_eq!(store.source(), &CatalogSource::Builtin);
        assert_eq!(store.card_count(), 22);
    }

    #[test]
    fn malformed_json_falls_back_to_builtin() {
        let f = catalog_file("{ not json");
        let store = KnowledgeStore::load(f.path());
        assert_eq!(store.source(), &CatalogSource::Builtin);
    }

    #[test]
    fn structurally_invalid_catalog_falls_back_to_builtin() {
        // Parses fine, but a spread with no positions violates the
        // invariants, so the whole file is rejected.
        let f = catalog_file(
            r#"{
                "cards": {"0": {"name": "The Fool", "upright": "up", "reversed": "down"}},
                "spreads": {"empty": {"name": "Empty", "positions": []}}
            }"#,
        );
        let store = KnowledgeStore::load(f.path());
        assert_eq!(store.source(), &CatalogSource::Builtin);
    }

    #[test]
    fn resolve_card_upright_and_reversed() {
        let store = KnowledgeStore::builtin();

        let fool = store.resolve_card(0, false).unwrap();
        assert_eq!(fool.name, "The Fool");
        assert_eq!(fool.orientation, Orientation::Upright);
        assert!(fool.meaning.contains("Beginnings"));

        let fool_rev = store.resolve_card(0, true).unwrap();
        assert_eq!(fool_rev.orientation, Orientation::Reversed);
        assert!(fool_rev.meaning.contains("Holding back"));
    }

    #[test]
    fn resolve_unknown_card_is_none() {
        let store = KnowledgeStore::builtin();
        assert!(store.resolve_card(99, false).is_none());
    }

    #[test]
    fn resolve_spread() {
        let store = KnowledgeStore::builtin();
        let spread = store.resolve_spread("three_card").unwrap();
        assert_eq!(spread.name, "Three Card Spread");
        assert_eq!(spread.positions, ["Past", "Present", "Future"]);
        assert!(store.resolve_spread("five_card").is_none());
    }

    #[test]
    fn spread_names_sorted() {
        let store = KnowledgeStore::builtin();
        assert_eq!(store.spread_names(), ["celtic_cross", "three_card"]);
    }

    #[test]
    fn card_ids_sorted() {
        let store = KnowledgeStore::builtin();
        let ids = store.card_ids();
        assert_eq!(ids.len(), 22);
        assert_eq!(ids[0], 0);
        assert_eq!(ids[21], 21);
    }
}
