//! Tarot reading interpretation pipeline.
//!
//! Turns a question, a list of drawn cards, and a spread name into a
//! generation request and a structured [`Reading`]: card and spread
//! resolution with fallback policy, tone inference with weighted-random
//! emotion mapping, deterministic prompt assembly, and echo-stripped
//! post-processing of the generated text.
//!
//! The two model-backed steps — tone classification and text generation —
//! are capability traits ([`ToneClassifier`], [`GenerationGateway`])
//! injected by the caller, so the pipeline itself is fully testable with
//! deterministic doubles.

pub mod composer;
pub mod deck;
pub mod error;
pub mod gateway;
pub mod knowledge;
pub mod prompt;
pub mod reading;
pub mod tone;

pub use composer::ReadingComposer;
pub use error::{ArcanaError, ArcanaResult, CapabilityError};
pub use gateway::{GenerationGateway, GenerationParams, GenerationRequest};
pub use knowledge::{CatalogSource, KnowledgeStore};
pub use reading::{DrawnCard, Orientation, Reading, ResolvedCard, ToneAssessment};
pub use tone::{ToneClassifier, ToneSignal};
