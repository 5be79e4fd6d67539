//! Per-call generation settings.

use bon::Builder;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Sampling parameters sent alongside each request.
///
/// ```
/// use palaver::types::GenerationSettings;
///
/// let settings = GenerationSettings::builder().temperature(0.2).build();
/// assert_eq!(settings.max_tokens, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Randomness of the generation, 0.0 to 2.0.
    #[builder(default = DEFAULT_TEMPERATURE)]
    pub temperature: f64,
    #[builder(default = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
