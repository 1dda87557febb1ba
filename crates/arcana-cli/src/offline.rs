//! Offline stand-ins for the two external capabilities.
//!
//! These let the full pipeline run end-to-end without a model host: a
//! keyword-lexicon tone classifier and a template-based generation gateway.
//! Both are deterministic for a given input, so `--seed` fully reproduces
//! a reading.

use arcana_core::{
    CapabilityError, GenerationGateway, GenerationRequest, ToneClassifier, ToneSignal,
};

/// Words treated as positive signals in a question.
const POSITIVE_WORDS: &[&str] = &[
    "love", "hope", "success", "succeed", "happy", "joy", "grow", "improve", "win", "good",
    "opportunity", "better",
];

/// Words treated as negative signals in a question.
const NEGATIVE_WORDS: &[&str] = &[
    "fear", "afraid", "lose", "loss", "fail", "failure", "worry", "worried", "sad", "bad",
    "trouble", "worse",
];

/// Rule-based tone classifier: counts lexicon hits in the question.
#[derive(Debug, Default)]
pub struct KeywordToneClassifier;

impl ToneClassifier for KeywordToneClassifier {
    fn classify(&self, text: &str) -> Result<ToneSignal, CapabilityError> {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        let positive = words.iter().filter(|w| POSITIVE_WORDS.contains(w)).count();
        let negative = words.iter().filter(|w| NEGATIVE_WORDS.contains(w)).count();

        let (label, hits) = if positive > negative {
            ("POSITIVE", positive)
        } else if negative > positive {
            ("NEGATIVE", negative)
        } else {
            ("NEUTRAL", 0)
        };

        // Confidence grows with the hit margin but stays below certainty.
        let score = if hits == 0 {
            0.5
        } else {
            let total = (positive + negative) as f32;
            0.5 + 0.45 * (positive.abs_diff(negative) as f32 / total)
        };

        Ok(ToneSignal {
            label: label.to_string(),
            score,
        })
    }
}

/// Canned interpretation bodies for the template gateway.
const INTERPRETATIONS: &[&str] = &[
    "The cards speak of momentum gathering behind you. What began as hesitation now turns \
     toward action; the position of each card suggests the querent already senses the shift. \
     Trust the sequence as it unfolded: the earlier influences have done their work, and the \
     final card marks the direction the current is taking. Patience with the process, not \
     force, carries this reading forward.",
    "This spread turns on tension between what is held and what must be released. The cards \
     in their positions trace a movement from accumulated weight toward an opening that only \
     appears once something is set down. Read the reversed cards not as denial but as energy \
     turned inward, waiting. The question carries its own answer: the release the querent \
     fears is the release the cards counsel.",
    "A quiet reading, but not an idle one. Each position reinforces the last, and together \
     they describe groundwork rather than upheaval: foundations tested, alliances weighed, \
     small choices compounding. Nothing here demands a dramatic turn. The cards advise \
     steadiness and attention to what is already in motion, for the outcome position points \
     to consolidation, not surprise.",
];

/// Template-based generation gateway.
///
/// Echoes the prompt as a prefix (as a completion model would) followed by
/// a canned interpretation chosen deterministically from the prompt, so the
/// composer's echo-stripping path is exercised on every run.
#[derive(Debug, Default)]
pub struct TemplateGateway;

impl GenerationGateway for TemplateGateway {
    fn generate(&self, request: &GenerationRequest) -> Result<String, CapabilityError> {
        let pick = request.prompt.len() % INTERPRETATIONS.len();
        let body = INTERPRETATIONS[pick];

        // Honor max_length on the generated tail, on a char boundary.
        let limit = request.params.max_length as usize;
        let body = match body.char_indices().nth(limit) {
            Some((cut, _)) => &body[..cut],
            None => body,
        };

        Ok(format!("{}\n{}", request.prompt, body))
    }
}
