//! Prompt sent to the generative-text service.
//!
//! The reply format described here is what [`crate::parser`] understands.

use crate::model::{MAX_ALTERNATIVES, MIN_ALTERNATIVES};

/// Alternatives requested by default translator settings.
pub const DEFAULT_ALTERNATIVE_COUNT: u8 = 3;

/// Build the translation prompt for a transcript.
///
/// `alternative_count` is clamped to the supported range.
#[must_use]
pub fn build_translation_prompt(transcript: &str, alternative_count: u8) -> String {
    let count = alternative_count.clamp(MIN_ALTERNATIVES, MAX_ALTERNATIVES);
    let transcript = transcript.trim().replace('"', "'");
    format!(
        "Translate the following text to Cantonese (include both Chinese characters and jyutping romanization).\n\
Text: \"{transcript}\"\n\
\n\
Reply using exactly this format:\n\
\n\
## Translation\n\
**Chinese:** <Cantonese in traditional Chinese characters>\n\
**Jyutping:** <jyutping romanization>\n\
\n\
## Key Cantonese Words\n\
- **<word>** (<jyutping>): <English meaning>\n\
\n\
## Alternative Expressions\n\
Give {count} alternative phrasing(s), each as two lines:\n\
**<Casual|Formal|Polite|Slang>:** <Chinese>\n\
**Jyutping:** <jyutping>\n"
    )
}
