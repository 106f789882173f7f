use fs_err as fs;
use serde::Serialize;
use serde_json::to_string_pretty;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::wire::{AnalysisRequest, ModelResponse, Tx};

pub struct SavedPaths {
    pub dir: PathBuf,
    pub request: Option<PathBuf>,
    pub response: Option<PathBuf>,
}

fn tx_dir(root: &Path, tx: Uuid) -> PathBuf {
    root.join(".nudge").join("tx").join(tx.to_string())
}

#[derive(Serialize)]
struct RequestArtifact<'a> {
    tx: &'a Tx,
    request: &'a AnalysisRequest,
    prompt: &'a str,
}

#[derive(Serialize)]
struct ResponseArtifact<'a> {
    tx: &'a Tx,
    response: &'a ModelResponse,
}

pub fn save_analysis(
    root: &Path,
    tx: &Tx,
    request: &AnalysisRequest,
    prompt: &str,
    response: &ModelResponse,
    save_request: bool,
    save_response: bool,
) -> anyhow::Result<SavedPaths> {
    let dir = tx_dir(root, tx.id);

    let mut request_path = None;
    let mut response_path = None;

    if save_request || save_response {
        fs::create_dir_all(&dir)?;
    }

    if save_request {
        let p = dir.join("analysis.request.json");
        fs::write(&p, to_string_pretty(&RequestArtifact { tx, request, prompt })?)?;
        request_path = Some(p);
    }

    if save_response {
        let p = dir.join("analysis.response.json");
        fs::write(&p, to_string_pretty(&ResponseArtifact { tx, response })?)?;
        response_path = Some(p);
    }

    Ok(SavedPaths { dir, request: request_path, response: response_path })
}

pub fn print_planned_paths(root: &Path, tx: Uuid) {
    let dir = tx_dir(root, tx);
    println!("debug: planned artifacts directory: {}", dir.display());
    println!("debug: planned request path: {}", dir.join("analysis.request.json").display());
    println!("debug: planned response path: {}", dir.join("analysis.response.json").display());
    std::io::stdout().flush().ok();
}

pub fn print_saved_paths(saved: &SavedPaths) {
    println!("debug: artifacts directory: {}", saved.dir.display());
    if let Some(p) = &saved.request {
        println!("debug: request saved at: {}", p.display());
    } else {
        println!("debug: request not saved (flag off)");
    }
    if let Some(p) = &saved.response {
        println!("debug: response saved at: {}", p.display());
    } else {
        println!("debug: response not saved (flag off)");
    }
    std::io::stdout().flush().ok();
}
