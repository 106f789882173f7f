use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::NudgeError;

/// The three free-text inputs every analysis starts from.
/// All three must be non-empty before any provider call is made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub project_name: String,
    pub target_action: String,
    pub municipality: String,
}

impl AnalysisRequest {
    pub fn validate(&self) -> Result<(), NudgeError> {
        let mut missing = Vec::new();
        if self.project_name.trim().is_empty() {
            missing.push("事業名");
        }
        if self.target_action.trim().is_empty() {
            missing.push("目標行動");
        }
        if self.municipality.trim().is_empty() {
            missing.push("自治体名");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(NudgeError::Validation(format!(
                "すべての項目を入力してください（未入力: {}）",
                missing.join("、")
            )))
        }
    }
}

/// Per-invocation identity, used to key saved request/response artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tx {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl Tx {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4(), timestamp: Utc::now() }
    }
}

impl Default for Tx {
    fn default() -> Self {
        Self::new()
    }
}

/// Sampling parameters forwarded to the text-generation endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenerationLimits {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// Opaque model output; the text may or may not carry a fenced diagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelResponse {
    pub model: String,
    pub text: String,
}
