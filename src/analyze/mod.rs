use crate::errors::NudgeError;
use crate::present::{self, DisplayPolicy, Presentation};
use crate::prompt;
use crate::provider::Provider;
use crate::wire::{AnalysisRequest, GenerationLimits, ModelResponse};

pub struct AnalysisOutcome {
    pub prompt: String,
    pub response: ModelResponse,
    pub presentation: Presentation,
}

/// One full request cycle: validate, build the prompt, call the endpoint,
/// choose what to display. Validation failures return before any network
/// traffic; nothing is retried.
pub async fn run(
    provider: &dyn Provider,
    request: &AnalysisRequest,
    limits: &GenerationLimits,
    policy: DisplayPolicy,
    debug: bool,
) -> Result<AnalysisOutcome, NudgeError> {
    request.validate()?;
    let prompt = prompt::analysis_prompt(request);
    let response = provider.generate(&prompt, limits, debug).await?;
    let presentation = present::present(&response.text, policy);
    Ok(AnalysisOutcome { prompt, response, presentation })
}
