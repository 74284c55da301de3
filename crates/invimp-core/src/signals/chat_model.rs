//! Structured extraction through an OpenAI-compatible chat endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::config::ModelConfig;
use crate::models::record::StructuredFields;

use super::ModelExtractor;

/// Prompt pinning the reply to the fixed field vocabulary.
const SCHEMA_PROMPT: &str = r#"You are an invoice field extraction assistant.
Given raw text extracted from a PDF invoice, return ONLY a JSON object with
exactly these keys, every value a string or null:

{
  "vendor_number": "string or null",
  "invoice_number": "string or null",
  "invoice_id": "string or null",
  "invoice_no": "string or null",
  "invoice_total": "string or null (decimal, two fraction digits)",
  "invoice_net_amount": "string or null (decimal, two fraction digits)"
}

Use null for anything you cannot determine. No markdown fences, no
commentary."#;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Chat-endpoint implementation of [`ModelExtractor`].
pub struct ChatModelClient {
    client: Client,
    config: ModelConfig,
}

impl ChatModelClient {
    pub fn new(config: ModelConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    async fn request(&self, text: &str) -> Result<StructuredFields, String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SCHEMA_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
            temperature: self.config.temperature,
        };

        let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?
            .error_for_status()
            .map_err(|e| format!("model endpoint returned {e}"))?
            .json::<ChatResponse>()
            .await
            .map_err(|e| format!("malformed response body: {e}"))?;

        let content = response
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| "response carried no choices".to_string())?;

        parse_reply(content)
    }
}

/// Lift the JSON object out of the reply, tolerating stray markdown fences.
fn parse_reply(content: &str) -> Result<StructuredFields, String> {
    let trimmed = content.trim();
    let json = match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => return Err("no JSON object in reply".to_string()),
    };

    serde_json::from_str(json).map_err(|e| format!("invalid field JSON: {e}"))
}

#[async_trait]
impl ModelExtractor for ChatModelClient {
    async fn extract(&self, text: &str) -> StructuredFields {
        if text.trim().is_empty() {
            return StructuredFields::default();
        }

        match self.request(text).await {
            Ok(fields) => {
                debug!(empty = fields.is_empty(), "model extraction finished");
                fields
            }
            Err(e) => {
                // Model failure is just an absent signal for every field
                warn!(error = %e, "model extraction failed");
                StructuredFields::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_bare_json_reply() {
        let fields = parse_reply(
            r#"{"vendor_number": "00001234", "invoice_number": null,
                "invoice_id": null, "invoice_no": null,
                "invoice_total": "10.00", "invoice_net_amount": null}"#,
        )
        .unwrap();
        assert_eq!(fields.vendor_number.as_deref(), Some("00001234"));
        assert_eq!(fields.invoice_number, None);
        assert_eq!(fields.invoice_total.as_deref(), Some("10.00"));
    }

    #[test]
    fn strips_markdown_fences() {
        let fields =
            parse_reply("```json\n{\"invoice_number\": \"INV-1\"}\n```").unwrap();
        assert_eq!(fields.invoice_number.as_deref(), Some("INV-1"));
    }

    #[test]
    fn prose_reply_is_an_error() {
        assert!(parse_reply("I could not find any fields.").is_err());
    }
}
