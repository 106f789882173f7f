use regex::Regex;

use crate::diagram::{Diagram, Translator};
use crate::prompt::FLOWCHART_HEADER;

/// Configuration-time choice of what to show for one response.
/// The two policies are mutually exclusive: never run both on one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPolicy {
    /// Remove the fenced flowchart and its heading; show prose only.
    Strip,
    /// Show the prose verbatim, then extract and translate the diagram.
    Render,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    Stripped { prose: String },
    Full { prose: String, diagram: Diagram },
}

pub fn present(text: &str, policy: DisplayPolicy) -> Presentation {
    match policy {
        DisplayPolicy::Strip => Presentation::Stripped { prose: strip_diagram(text) },
        DisplayPolicy::Render => Presentation::Full {
            prose: text.to_string(),
            diagram: Translator::new().extract(text),
        },
    }
}

/// Removes the mermaid fence and the flowchart section heading line (plain,
/// Markdown-heading, or bold), then squeezes the blank run the removal
/// leaves behind.
fn strip_diagram(text: &str) -> String {
    let fence = Regex::new(r"(?s)```mermaid[ \t]*\r?\n.*?```").expect("static pattern");
    let heading = Regex::new(&format!(r"(?m)^[#* \t]*{}.*$", regex::escape(FLOWCHART_HEADER)))
        .expect("static pattern");
    let squeeze = Regex::new(r"\n{3,}").expect("static pattern");

    let cleaned = fence.replace_all(text, "");
    let cleaned = heading.replace_all(&cleaned, "");
    squeeze.replace_all(&cleaned, "\n\n").trim_end().to_string()
}
