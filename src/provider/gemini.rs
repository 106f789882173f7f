use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Provider;
use crate::errors::NudgeError;
use crate::wire::{GenerationLimits, ModelResponse};

pub struct GeminiProvider {
    model: String,
    api_key: String,
    api_base: String,
    timeout: Duration,
    client: Client,
}

impl GeminiProvider {
    pub fn new(model: String, api_key: String, timeout_secs: u64) -> Self {
        Self {
            model,
            api_key,
            api_base: "https://generativelanguage.googleapis.com/v1beta".into(),
            timeout: Duration::from_secs(timeout_secs),
            client: Client::new(),
        }
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl Provider for GeminiProvider {
    async fn generate(
        &self,
        prompt: &str,
        limits: &GenerationLimits,
        debug: bool,
    ) -> Result<ModelResponse, NudgeError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        );
        let body = GenerateRequest {
            contents: vec![Content { parts: vec![Part { text: prompt }] }],
            generation_config: GenerationConfig {
                temperature: limits.temperature,
                max_output_tokens: limits.max_output_tokens,
            },
        };

        if debug {
            eprintln!("debug[gemini]: POST {}", url);
        }

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| NudgeError::Provider(format!("gemini request failed: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| NudgeError::Provider(format!("gemini read body failed: {e}")))?;

        if debug {
            eprintln!("debug[gemini]: raw status: {}", status);
            eprintln!("debug[gemini]: raw response:\n{}", &text);
        }

        if !status.is_success() {
            return Err(NudgeError::Provider(format!(
                "gemini API error ({status}): {text}"
            )));
        }

        let parsed: GenerateResponse = serde_json::from_str(&text).map_err(|e| {
            NudgeError::Schema(format!("gemini response parse error: {e}\nRaw: {text}"))
        })?;

        let out = parsed
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default();

        if out.is_empty() {
            return Err(NudgeError::Schema("gemini: empty candidates".into()));
        }

        Ok(ModelResponse { model: self.model.clone(), text: out })
    }
}
