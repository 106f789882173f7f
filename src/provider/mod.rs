use async_trait::async_trait;

use crate::cli::ProviderKind;
use crate::config::Config;
use crate::errors::NudgeError;
use crate::wire::{GenerationLimits, ModelResponse};

pub mod gemini;

#[async_trait]
pub trait Provider: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        limits: &GenerationLimits,
        debug: bool,
    ) -> Result<ModelResponse, NudgeError>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

pub fn make_provider(cfg: &Config) -> anyhow::Result<DynProvider> {
    match cfg.provider {
        ProviderKind::Gemini => Ok(Box::new(gemini::GeminiProvider::new(
            cfg.model.clone(),
            cfg.api_key.clone(),
            cfg.timeout_secs,
        ))),
    }
}
