use clap::Parser;
use std::path::Path;

use nudgeflow::{analyze, cli, config, errors::NudgeError, log, present, provider, ux, wire};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let mut cfg = config::Config::from_env()?;
    cfg.root = args.root.clone();
    cfg.provider = args.provider;
    cfg.model = args.model.clone();
    cfg.temperature = args.temperature;
    cfg.max_output_tokens = args.max_output_tokens;
    cfg.timeout_secs = args.timeout_secs;
    cfg.strip_diagram = args.strip_diagram;

    let tx = wire::Tx::new();
    if args.debug {
        println!("debug: flag enabled");
        log::print_planned_paths(Path::new(&cfg.root), tx.id);
    }

    let request = wire::AnalysisRequest {
        project_name: args.project_name.clone(),
        target_action: args.target_action.clone(),
        municipality: args.municipality.clone(),
    };
    let limits = wire::GenerationLimits {
        temperature: cfg.temperature,
        max_output_tokens: cfg.max_output_tokens,
    };
    let policy = if cfg.strip_diagram {
        present::DisplayPolicy::Strip
    } else {
        present::DisplayPolicy::Render
    };

    let prov = provider::make_provider(&cfg)?;

    let pb = ux::spinner("分析中...");
    let outcome = analyze::run(prov.as_ref(), &request, &limits, policy, args.debug).await;
    pb.finish_and_clear();

    let outcome = match outcome {
        Ok(o) => o,
        Err(e @ NudgeError::Validation(_)) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("分析に失敗しました: {}", e);
            std::process::exit(1);
        }
    };

    let saved = log::save_analysis(
        Path::new(&cfg.root),
        &tx,
        &request,
        &outcome.prompt,
        &outcome.response,
        args.save_request,
        args.save_response,
    )?;
    if args.debug {
        log::print_saved_paths(&saved);
    }

    ux::show_presentation(&outcome.presentation);

    Ok(())
}
