// src/ai/gemini.rs
use crate::ai::{GatewayError, SearchPrompt, SearchProvider};
use crate::config::AiConfig;
use reqwest::blocking::Client;
use serde_json::{json, Value};

/// Google Gemini `generateContent` with a JSON response schema.
pub struct GeminiProvider {
    client: Client,
    endpoint: String,
}

impl GeminiProvider {
    pub fn new(cfg: &AiConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| GatewayError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint_for_model(&cfg.api_base, &cfg.model),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchProvider for GeminiProvider {
    fn complete(&self, api_key: &str, prompt: &SearchPrompt) -> Result<String, GatewayError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", api_key)
            .json(&request_body(prompt))
            .send()
            .map_err(|e| GatewayError::Request(e.without_url().to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = resp
            .json()
            .map_err(|e| GatewayError::Malformed(e.without_url().to_string()))?;

        let text = response_text(&value);
        if text.is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(text)
    }
}

fn endpoint_for_model(api_base: &str, model: &str) -> String {
    let model = model.trim();
    if model.starts_with("models/") {
        format!("{api_base}/{model}:generateContent")
    } else {
        format!("{api_base}/models/{model}:generateContent")
    }
}

fn request_body(prompt: &SearchPrompt) -> Value {
    json!({
        "systemInstruction": {
            "parts": [{ "text": prompt.system_instruction }]
        },
        "contents": [
            {
                "role": "user",
                "parts": [{ "text": prompt.user_prompt }]
            }
        ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "recommendedPropertyIds": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" }
                    },
                    "summary": {
                        "type": "STRING",
                        "description": "A friendly, short paragraph explaining the recommendations."
                    }
                }
            }
        }
    })
}

/// Text parts of the first candidate, joined.
fn response_text(response: &Value) -> String {
    response
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(Value::as_str))
                .collect::<Vec<&str>>()
                .join("")
                .trim()
                .to_string()
        })
        .unwrap_or_default()
}
