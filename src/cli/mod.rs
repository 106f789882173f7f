use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(ValueEnum, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[value(alias = "google")]
    Gemini,
}

#[derive(Parser, Debug)]
#[command(name = "nudgeflow", version, about = "事業プロセス分析＆ナッジ提案 — process analysis and nudge proposals via a hosted LLM")]
pub struct Args {
    /// 事業名
    #[arg(long)]
    pub project_name: String,

    /// 目標行動
    #[arg(long)]
    pub target_action: String,

    /// 自治体名
    #[arg(long)]
    pub municipality: String,

    #[arg(long, default_value = ".")]
    pub root: String,

    #[arg(long, value_enum, default_value_t = ProviderKind::Gemini)]
    pub provider: ProviderKind,

    #[arg(long, default_value = "gemini-pro")]
    pub model: String,

    #[arg(long, default_value_t = 0.7)]
    pub temperature: f32,

    #[arg(long, default_value_t = 2048)]
    pub max_output_tokens: u32,

    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,

    /// Strip the fenced flowchart from the prose instead of rendering it.
    #[arg(long, default_value_t = false)]
    pub strip_diagram: bool,

    #[arg(long, default_value_t = false)]
    pub save_request: bool,

    #[arg(long, default_value_t = false)]
    pub save_response: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
