//! Vision API interaction: one Messages call per request.
//!
//! This module packages the decoded image and the selected instruction into
//! a single Anthropic Messages API request and awaits one complete response.
//! It is intentionally thin — prompt engineering lives in
//! [`crate::prompts`], cleanup in [`crate::pipeline::normalize`].
//!
//! ## No retries
//!
//! Exactly one call is made per request. Transient upstream failures (429,
//! 5xx) are reported to the caller with the upstream status; the surrounding
//! UI owns the "try again" affordance. Retrying here would double-bill the
//! user for an interactive action they can simply repeat.

use crate::config::GenerationConfig;
use crate::error::GenerateError;
use crate::pipeline::decode::DecodedImage;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// One content segment of the model's reply.
///
/// The wire format is an ordered list of heterogeneous blocks. Only `text`
/// blocks carry generated code; every other block kind (`tool_use`,
/// `thinking`, future additions) deserialises to `Other`, keeping
/// deserialisation total over any reply the API may send.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Token accounting as reported by the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

/// The fields of a Messages API response the pipeline consumes.
#[derive(Debug, Deserialize)]
pub struct VisionReply {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: Usage,
}

/// Send the image and instruction to the Messages API, await one response.
///
/// The request carries a single user message with two ordered content parts:
/// the base64 image (with its claimed media type) first, then the
/// instruction text. Image-before-text is the layout the API documents as
/// giving the best vision results.
pub async fn request_completion(
    http: &reqwest::Client,
    config: &GenerationConfig,
    image: &DecodedImage,
    instruction: &str,
) -> Result<VisionReply, GenerateError> {
    let body = json!({
        "model": config.model,
        "max_tokens": config.max_tokens,
        "messages": [{
            "role": "user",
            "content": [
                {
                    "type": "image",
                    "source": {
                        "type": "base64",
                        "media_type": image.media_type(),
                        "data": image.data,
                    },
                },
                {
                    "type": "text",
                    "text": instruction,
                },
            ],
        }],
    });

    let url = format!("{}/v1/messages", config.base_url.trim_end_matches('/'));
    debug!(model = %config.model, media_type = %image.media_type(), "calling vision API");

    let response = http
        .post(&url)
        .header("x-api-key", &config.api_key)
        .header("anthropic-version", &config.api_version)
        .json(&body)
        .send()
        .await
        .map_err(|e| GenerateError::UpstreamUnavailable {
            reason: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        let body_text = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body_text);
        warn!(status = status.as_u16(), %message, "vision API returned an error");
        return Err(GenerateError::Upstream {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<VisionReply>()
        .await
        .map_err(|e| GenerateError::Internal(format!("Unparseable vision API response: {e}")))
}

/// Pull the human-readable message out of an Anthropic error body.
///
/// Error bodies look like `{"type":"error","error":{"type":...,"message":...}}`;
/// anything else falls back to the raw body (or a stock message when empty).
fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }
    }
    if body.trim().is_empty() {
        "Failed to generate code".to_string()
    } else {
        body.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_and_other_blocks() {
        let reply: VisionReply = serde_json::from_str(
            r#"{
                "content": [
                    {"type": "text", "text": "const a = 1;"},
                    {"type": "tool_use", "id": "t1", "name": "x", "input": {}},
                    {"type": "text", "text": "const b = 2;"}
                ],
                "usage": {"input_tokens": 1200, "output_tokens": 40}
            }"#,
        )
        .unwrap();

        assert_eq!(reply.content.len(), 3);
        assert!(matches!(&reply.content[0], ContentBlock::Text { text } if text == "const a = 1;"));
        assert!(matches!(&reply.content[1], ContentBlock::Other));
        assert_eq!(reply.usage.input_tokens, 1200);
        assert_eq!(reply.usage.output_tokens, 40);
    }

    #[test]
    fn tolerates_missing_content_and_usage() {
        let reply: VisionReply = serde_json::from_str(r#"{"id": "msg_1"}"#).unwrap();
        assert!(reply.content.is_empty());
        assert_eq!(reply.usage.input_tokens, 0);
    }

    #[test]
    fn extracts_structured_error_message() {
        let body = r#"{"type":"error","error":{"type":"rate_limit_error","message":"Overloaded"}}"#;
        assert_eq!(extract_error_message(body), "Overloaded");
    }

    #[test]
    fn falls_back_to_raw_body() {
        assert_eq!(extract_error_message("upstream exploded"), "upstream exploded");
    }

    #[test]
    fn empty_body_gets_stock_message() {
        assert_eq!(extract_error_message(""), "Failed to generate code");
        assert_eq!(extract_error_message("  \n"), "Failed to generate code");
    }
}
