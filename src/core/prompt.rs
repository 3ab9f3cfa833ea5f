//! Prompt template and sampling parameters for the translation model

/// System instruction framing the model for every request
pub const SYSTEM_PROMPT: &str =
    "You are a professional Chinese business translator specializing in workplace communication.";

/// Model used when OPENAI_MODEL is not set
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Sampling temperature, fixed low to favor consistency over creativity
pub const TEMPERATURE: f64 = 0.3;

/// Output token cap to bound cost and latency
pub const MAX_TOKENS: u32 = 2000;

/// Build the user prompt for a block of English business text
///
/// The model must answer with nothing but a JSON array; its output is
/// parsed strictly with no repair step.
pub fn build_translation_prompt(text: &str) -> String {
    format!(
        r#"You are a professional Chinese business translator. Break down the following English business text into logical segments and provide:

1. Professional Chinese translation (Simplified Chinese)
2. Accurate Hanyu Pinyin with tone marks
3. Brief business context explanations for key terms

Format your response as a JSON array with this structure:
[
  {{
    "english": "original English segment",
    "chinese": "Chinese translation",
    "pinyin": "pinyin with tone marks",
    "notes": "explanation of business terms and context"
  }}
]

Text to translate: "{text}"

Focus on:
- Business terminology accuracy
- Professional tone in Chinese
- Clear pinyin pronunciation guide
- Practical explanations for non-native speakers

Respond only with valid JSON."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_input_text() {
        let prompt = build_translation_prompt("Please schedule a meeting with the supplier.");
        assert!(prompt.contains("Please schedule a meeting with the supplier."));
    }

    #[test]
    fn test_prompt_names_all_segment_keys() {
        let prompt = build_translation_prompt("Hello");
        for key in ["\"english\"", "\"chinese\"", "\"pinyin\"", "\"notes\""] {
            assert!(prompt.contains(key), "prompt should name {}", key);
        }
    }

    #[test]
    fn test_prompt_demands_json_only() {
        let prompt = build_translation_prompt("Hello");
        assert!(prompt.ends_with("Respond only with valid JSON."));
    }

    #[test]
    fn test_system_prompt_framing() {
        assert!(SYSTEM_PROMPT.contains("Chinese business translator"));
        assert!(SYSTEM_PROMPT.contains("workplace communication"));
    }
}
