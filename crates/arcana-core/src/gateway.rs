//! Generation gateway: the text-completion capability boundary.

use crate::error::CapabilityError;

/// Sampling parameters for a generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Maximum length of the generated output.
    pub max_length: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus (top-p) sampling threshold.
    pub nucleus: f32,
    /// Whether sampling is enabled.
    pub sampling: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: 1500,
            temperature: 0.7,
            nucleus: 0.9,
            sampling: true,
        }
    }
}

/// A fully-specified generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// The assembled prompt.
    pub prompt: String,
    /// Sampling parameters.
    pub params: GenerationParams,
}

/// External capability boundary: prompt in, raw generated text out.
///
/// The raw output may or may not echo the prompt as a literal prefix; the
/// composer strips it with [`strip_prompt_echo`].
pub trait GenerationGateway {
    /// Generate text for the given request.
    fn generate(&self, request: &GenerationRequest) -> Result<String, CapabilityError>;
}

/// Strip the echoed prompt prefix from raw gateway output.
///
/// If `raw` begins with the exact prompt, that prefix is removed; otherwise
/// (echo suppressed upstream) the text is left as is. Surrounding
/// whitespace is trimmed in both cases. Never fails.
pub fn strip_prompt_echo(raw: &str, prompt: &str) -> String {
    raw.strip_prefix(prompt).unwrap_or(raw).trim().to_string()
}
