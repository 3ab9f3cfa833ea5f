//! Core data models for translation

use serde::{Deserialize, Serialize};

/// Inbound translation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// English business text to translate
    pub text: String,
}

impl TranslationRequest {
    /// Create a new translation request
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One translated segment of the source text
///
/// Documented shape of each element in a successful response. Segments
/// coming back from the model are relayed without being re-validated
/// against this struct; it exists for consumers that want typed access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSegment {
    /// Original English fragment
    pub english: String,
    /// Simplified Chinese translation
    pub chinese: String,
    /// Hanyu Pinyin with tone marks
    pub pinyin: String,
    /// Business context explanation
    pub notes: String,
}

/// One conversation turn sent to the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("system", "user", "assistant")
    pub role: String,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Build a system-role message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Build a user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Outbound chat-completion request
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation turns
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f64,
    /// Output token cap
    pub max_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_request_new() {
        let request = TranslationRequest::new("Please review the quarterly report.");
        assert_eq!(request.text, "Please review the quarterly report.");
    }

    #[test]
    fn test_segment_from_model_output() {
        let segment: TranslationSegment = serde_json::from_str(
            r#"{"english":"Hello","chinese":"你好","pinyin":"nǐ hǎo","notes":"greeting"}"#,
        )
        .unwrap();

        assert_eq!(segment.english, "Hello");
        assert_eq!(segment.chinese, "你好");
        assert_eq!(segment.pinyin, "nǐ hǎo");
        assert_eq!(segment.notes, "greeting");
    }

    #[test]
    fn test_chat_message_roles() {
        let system = ChatMessage::system("instruction");
        let user = ChatMessage::user("prompt");

        assert_eq!(system.role, "system");
        assert_eq!(user.role, "user");
    }

    #[test]
    fn test_chat_completion_request_wire_shape() {
        let request = ChatCompletionRequest {
            model: "gpt-4".to_string(),
            messages: vec![ChatMessage::user("translate this")],
            temperature: 0.3,
            max_tokens: 2000,
        };

        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["model"], "gpt-4");
        assert_eq!(wire["temperature"], 0.3);
        assert_eq!(wire["max_tokens"], 2000);
        assert_eq!(wire["messages"][0]["role"], "user");
    }
}
