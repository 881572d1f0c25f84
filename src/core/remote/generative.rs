//! Gemini generateContent: asks for the bare result, then digs the first
//! candidate's text out of the response.

use serde::Serialize;
use serde_json::Value;

use crate::core::config::ServiceConfig;

use super::ProviderError;

/// Instruction prepended to the user's expression.
const RESULT_PROMPT: &str = "Return ONLY the final numeric/symbolic result (no steps, no text). \
If units are involved, simplify. Problem: ";

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

fn request_body(question: &str) -> GenerateRequest {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: format!("{RESULT_PROMPT}{question}"),
            }],
        }],
    }
}

pub(super) async fn answer(
    client: &reqwest::Client,
    service: &ServiceConfig,
    question: &str,
) -> Result<String, ProviderError> {
    let response = client
        .post(&service.endpoint)
        .query(&[("key", service.api_key.as_str())])
        .json(&request_body(question))
        .send()
        .await?;
    // Error payloads parse as JSON too; they just have no candidates.
    let payload: Value = response.json().await?;
    candidate_text(&payload)
        .ok_or_else(|| ProviderError::Unusable("no candidate text".to_string()))
}

/// `candidates[0].content.parts[0].text`, trimmed. Whitespace-only text is
/// a miss.
fn candidate_text(payload: &Value) -> Option<String> {
    let text = payload
        .pointer("/candidates/0/content/parts/0/text")?
        .as_str()?
        .trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_has_the_wire_shape() {
        let body = serde_json::to_value(request_body("2^100")).unwrap();
        let text = body
            .pointer("/contents/0/parts/0/text")
            .and_then(Value::as_str)
            .unwrap();
        assert!(text.starts_with("Return ONLY the final numeric/symbolic result"));
        assert!(text.ends_with("Problem: 2^100"));
    }

    #[test]
    fn extracts_first_candidate_text() {
        let payload = json!({
            "candidates": [{
                "content": { "parts": [{ "text": " 42\n" }], "role": "model" },
                "finishReason": "STOP"
            }]
        });
        assert_eq!(candidate_text(&payload), Some("42".to_string()));
    }

    #[test]
    fn missing_candidates_is_none() {
        assert_eq!(candidate_text(&json!({})), None);
        assert_eq!(
            candidate_text(&json!({ "error": { "code": 400, "message": "API key not valid" } })),
            None
        );
    }

    #[test]
    fn empty_or_whitespace_text_is_none() {
        let empty = json!({ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] });
        let blank = json!({ "candidates": [{ "content": { "parts": [{ "text": "  \n " }] } }] });
        assert_eq!(candidate_text(&empty), None);
        assert_eq!(candidate_text(&blank), None);
    }

    #[test]
    fn non_string_text_is_none() {
        let payload = json!({ "candidates": [{ "content": { "parts": [{ "text": 42 }] } }] });
        assert_eq!(candidate_text(&payload), None);
    }
}
