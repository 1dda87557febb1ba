//! Tone inference: the classifier boundary and the emotion mapper.
//!
//! The classifier is an external capability that labels a question with a
//! coarse polarity and a confidence score. The mapper turns the polarity
//! into one of a few emotional labels by uniform random choice — intentional
//! variety in phrasing, not a reliability mechanism.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::CapabilityError;
use crate::reading::ToneAssessment;

/// Raw output of the tone classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneSignal {
    /// Polarity label (an open set; `"POSITIVE"` and `"NEGATIVE"` are
    /// special-cased by the emotion mapper).
    pub label: String,
    /// Confidence score in `[0, 1]`.
    pub score: f32,
}

/// External capability boundary: text in, polarity label + confidence out.
pub trait ToneClassifier {
    /// Classify the emotional polarity of `text`.
    fn classify(&self, text: &str) -> Result<ToneSignal, CapabilityError>;
}

/// Emotional labels for a positive polarity.
pub const POSITIVE_EMOTIONS: &[&str] = &["hopeful", "optimistic", "excited"];

/// Emotional labels for a negative polarity.
pub const NEGATIVE_EMOTIONS: &[&str] = &["concerned", "anxious", "worried"];

/// Fallback label for any unrecognized polarity.
pub const NEUTRAL_EMOTION: &str = "neutral";

/// Map a polarity label to an emotional label.
///
/// `"POSITIVE"` and `"NEGATIVE"` (exact match) pick uniformly from their
/// candidate sets; any other label maps to [`NEUTRAL_EMOTION`].
pub fn map_to_emotion(label: &str, rng: &mut StdRng) -> &'static str {
    let candidates = match label {
        "POSITIVE" => POSITIVE_EMOTIONS,
        "NEGATIVE" => NEGATIVE_EMOTIONS,
        _ => return NEUTRAL_EMOTION,
    };
    candidates[rng.random_range(0..candidates.len())]
}

/// Classify `text` and map the result to a full tone assessment.
///
/// The polarity is stored lowercased; the emotion is chosen via
/// [`map_to_emotion`].
pub fn assess(
    classifier: &dyn ToneClassifier,
    text: &str,
    rng: &mut StdRng,
) -> Result<ToneAssessment, CapabilityError> {
    let signal = classifier.classify(text)?;
    let emotion = map_to_emotion(&signal.label, rng).to_string();
    Ok(ToneAssessment {
        polarity: signal.label.to_lowercase(),
        confidence: signal.score,
        emotion,
    })
}
