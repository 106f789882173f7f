use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::diagram::Diagram;
use crate::present::Presentation;

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner());
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

pub fn show_presentation(p: &Presentation) {
    match p {
        Presentation::Stripped { prose } => {
            println!("\n{}", "=== 分析結果 ===".bold());
            println!("{}", prose);
        }
        Presentation::Full { prose, diagram } => {
            println!("\n{}", "=== 分析結果 ===".bold());
            println!("{}", prose);
            println!("\n{}", "=== プロセスフロー図 ===".bold());
            show_diagram(diagram);
        }
    }
}

fn show_diagram(diagram: &Diagram) {
    match diagram {
        Diagram::NotFound => {
            println!("{}", "フローチャートは見つかりませんでした。".yellow());
        }
        Diagram::Dot(src) => {
            println!("{}", "[graphviz block found in response]".dimmed());
            println!("{}", src);
        }
        Diagram::Translated(src) => {
            // generated DOT source is echoed so the translation is auditable
            println!("{}", "[mermaid flowchart translated to graphviz]".dimmed());
            println!("{}", src);
        }
    }
}
