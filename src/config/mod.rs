use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::cli::ProviderKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub root: String,
    pub provider: ProviderKind,
    pub model: String,
    #[serde(skip)]
    pub api_key: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout_secs: u64,
    pub strip_diagram: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: ".".into(),
            provider: ProviderKind::Gemini,
            model: "gemini-pro".into(),
            api_key: String::new(),
            temperature: 0.7,
            max_output_tokens: 2048,
            timeout_secs: 120,
            strip_diagram: false,
        }
    }
}

impl Config {
    /// Reads the API key at startup. A missing key is fatal for the binary;
    /// core logic never looks the key up on its own.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .map_err(|_| anyhow!("GEMINI_API_KEY (or GOOGLE_API_KEY) env var is not set"))?;
        Ok(Self { api_key, ..Self::default() })
    }
}
