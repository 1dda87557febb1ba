//! Knowledge catalog: card meanings and spread definitions.
//!
//! The catalog is loaded once from a JSON file (or the builtin defaults)
//! and treated as read-only for the lifetime of the process.

pub mod catalog;
pub mod store;

pub use catalog::{Catalog, CardRecord, SpreadDef, builtin_catalog};
pub use store::{CardMeaning, CatalogSource, KnowledgeStore};
