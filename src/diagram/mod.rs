use regex::Regex;

/// Outcome of scanning a model response for a flowchart.
/// Absence of a diagram is a normal outcome, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagram {
    NotFound,
    /// A graphviz-tagged fence was already present; contents returned verbatim.
    Dot(String),
    /// A mermaid-tagged fence was found and converted to DOT.
    Translated(String),
}

/// One directed relation parsed out of a mermaid flowchart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEdge {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
}

struct EdgeMatcher {
    re: Regex,
    labeled: bool,
}

impl EdgeMatcher {
    fn apply(&self, line: &str) -> Option<ParsedEdge> {
        let caps = self.re.captures(line)?;
        if self.labeled {
            // groups: from_id, from_label, edge_label, to_id, to_label
            Some(ParsedEdge {
                from: caps[2].trim().to_string(),
                to: caps[5].trim().to_string(),
                label: Some(caps[3].trim().to_string()),
            })
        } else {
            // groups: from_id, from_label, to_id, to_label
            Some(ParsedEdge {
                from: caps[2].trim().to_string(),
                to: caps[4].trim().to_string(),
                label: None,
            })
        }
    }
}

/// Translates mermaid `graph TD` flowcharts into graphviz DOT.
///
/// Four statement shapes are recognized, tried in a fixed order with the
/// first match winning. `[...]` and `{...}` node markers both become plain
/// labeled DOT nodes; lines matching no shape are dropped without comment.
pub struct Translator {
    dot_fence: Regex,
    mermaid_fence: Regex,
    matchers: Vec<EdgeMatcher>,
}

impl Translator {
    pub fn new() -> Self {
        let shapes: [(&str, bool); 4] = [
            // rect --|label|--> rect
            (r"^\s*([A-Za-z0-9_]+)\[([^\[\]]+)\]\s*-->\s*\|([^|]+)\|\s*([A-Za-z0-9_]+)\[([^\[\]]+)\]\s*;?\s*$", true),
            // rect --> rect
            (r"^\s*([A-Za-z0-9_]+)\[([^\[\]]+)\]\s*-->\s*([A-Za-z0-9_]+)\[([^\[\]]+)\]\s*;?\s*$", false),
            // decision --|label|--> rect
            (r"^\s*([A-Za-z0-9_]+)\{([^{}]+)\}\s*-->\s*\|([^|]+)\|\s*([A-Za-z0-9_]+)\[([^\[\]]+)\]\s*;?\s*$", true),
            // decision --> rect
            (r"^\s*([A-Za-z0-9_]+)\{([^{}]+)\}\s*-->\s*([A-Za-z0-9_]+)\[([^\[\]]+)\]\s*;?\s*$", false),
        ];
        Self {
            dot_fence: fence_pattern(&["dot", "graphviz"]),
            mermaid_fence: fence_pattern(&["mermaid"]),
            matchers: shapes
                .iter()
                .map(|(p, labeled)| EdgeMatcher {
                    re: Regex::new(p).expect("static pattern"),
                    labeled: *labeled,
                })
                .collect(),
        }
    }

    /// Scans response text for a diagram. A graphviz-tagged fence wins over a
    /// mermaid one and is passed through untouched.
    pub fn extract(&self, text: &str) -> Diagram {
        if let Some(caps) = self.dot_fence.captures(text) {
            return Diagram::Dot(caps[1].to_string());
        }
        match self.mermaid_fence.captures(text) {
            Some(caps) => Diagram::Translated(self.translate(&caps[1])),
            None => Diagram::NotFound,
        }
    }

    /// Converts one mermaid block to a DOT digraph, edge order preserved.
    pub fn translate(&self, block: &str) -> String {
        let edges: Vec<ParsedEdge> =
            block.lines().filter_map(|l| self.parse_edge(l)).collect();
        emit_dot(&edges)
    }

    /// Tries the four shapes in priority order; first match wins.
    pub fn parse_edge(&self, line: &str) -> Option<ParsedEdge> {
        self.matchers.iter().find_map(|m| m.apply(line))
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

fn fence_pattern(tags: &[&str]) -> Regex {
    Regex::new(&format!(r"(?s)```(?:{})[ \t]*\r?\n(.*?)```", tags.join("|")))
        .expect("static pattern")
}

/// Output nodes are keyed by label: two source ids sharing a label merge.
fn emit_dot(edges: &[ParsedEdge]) -> String {
    let mut out = String::from("digraph G {\n");
    for e in edges {
        match &e.label {
            Some(l) => out.push_str(&format!(
                "  \"{}\" -> \"{}\" [label=\"{}\"];\n",
                dot_escape(&e.from),
                dot_escape(&e.to),
                dot_escape(l)
            )),
            None => out.push_str(&format!(
                "  \"{}\" -> \"{}\";\n",
                dot_escape(&e.from),
                dot_escape(&e.to)
            )),
        }
    }
    out.push_str("}\n");
    out
}

fn dot_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
