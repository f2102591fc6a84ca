use serde::Deserialize;

use crate::error::ProviderError;

// ============================================================================
// generateContent Response Structures
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

pub struct ResponseParser;

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseParser {
    pub fn new() -> Self {
        Self
    }

    /// Pulls the generated text out of the first candidate. The text itself
    /// is returned untouched; an empty string is a valid answer.
    pub fn extract_text(&self, body: &str) -> Result<String, ProviderError> {
        let response: GenerateContentResponse = serde_json::from_str(body)
            .map_err(|e| ProviderError::Malformed(format!("could not parse body: {e}")))?;

        let Some(candidate) = response.candidates.into_iter().next() else {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .map(|r| format!("prompt blocked ({r})"))
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(ProviderError::Malformed(reason));
        };

        let Some(content) = candidate.content else {
            let reason = candidate
                .finish_reason
                .unwrap_or_else(|| "UNKNOWN".to_string());
            return Err(ProviderError::Malformed(format!(
                "candidate has no content (finish reason: {reason})"
            )));
        };

        Ok(content
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect::<String>())
    }

    /// Provider's own error message, if the body carries one.
    pub fn extract_error_message(&self, body: &str) -> Option<String> {
        serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .map(|envelope| envelope.error.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_text_parts_verbatim() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"**Scheme A**"},{"text":"\n- detail"}]},"finishReason":"STOP"}]}"#;
        let text = ResponseParser::new().extract_text(body).unwrap();
        assert_eq!(text, "**Scheme A**\n- detail");
    }

    #[test]
    fn empty_text_is_success() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#;
        assert_eq!(ResponseParser::new().extract_text(body).unwrap(), "");
    }

    #[test]
    fn blocked_prompt_is_malformed() {
        let body = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        let err = ResponseParser::new().extract_text(body).unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(ref m) if m.contains("SAFETY")));
    }

    #[test]
    fn candidate_without_content_is_malformed() {
        let body = r#"{"candidates":[{"finishReason":"RECITATION"}]}"#;
        let err = ResponseParser::new().extract_text(body).unwrap_err();
        assert!(err.to_string().contains("RECITATION"));
    }

    #[test]
    fn reads_provider_error_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            ResponseParser::new().extract_error_message(body).as_deref(),
            Some("API key not valid.")
        );
        assert!(ResponseParser::new().extract_error_message("oops").is_none());
    }
}
