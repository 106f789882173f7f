use pretty_assertions::assert_eq;

use nudgeflow::diagram::Diagram;
use nudgeflow::present::{present, DisplayPolicy, Presentation};

const RESPONSE: &str = "\
1. プロセスマップ（10ステップ程度）
住民がごみ分別の案内を受け取る。

5. Mermaid形式のフローチャート
```mermaid
graph TD
    A[開始] --> B[登録]
```
";

#[test]
fn strip_removes_fence_and_heading() {
    let got = present(RESPONSE, DisplayPolicy::Strip);
    match got {
        Presentation::Stripped { prose } => {
            assert!(prose.contains("住民がごみ分別の案内を受け取る。"));
            assert!(!prose.contains("```"));
            assert!(!prose.contains("Mermaid形式のフローチャート"));
            assert!(!prose.contains("graph TD"));
        }
        other => panic!("expected Stripped, got {:?}", other),
    }
}

#[test]
fn strip_handles_markdown_heading_markers() {
    let text = "本文です。\n## 5. Mermaid形式のフローチャート\n```mermaid\ngraph TD\n    A[a] --> B[b]\n```\n";
    let got = present(text, DisplayPolicy::Strip);
    match got {
        Presentation::Stripped { prose } => assert_eq!(prose, "本文です。"),
        other => panic!("expected Stripped, got {:?}", other),
    }
}

#[test]
fn render_keeps_prose_and_translates_diagram() {
    let got = present(RESPONSE, DisplayPolicy::Render);
    match got {
        Presentation::Full { prose, diagram } => {
            assert_eq!(prose, RESPONSE);
            match diagram {
                Diagram::Translated(dot) => {
                    assert!(dot.contains("\"開始\" -> \"登録\";"));
                }
                other => panic!("expected Translated, got {:?}", other),
            }
        }
        other => panic!("expected Full, got {:?}", other),
    }
}

#[test]
fn render_reports_not_found_without_error() {
    let got = present("図のない普通の回答です。", DisplayPolicy::Render);
    match got {
        Presentation::Full { diagram, .. } => assert_eq!(diagram, Diagram::NotFound),
        other => panic!("expected Full, got {:?}", other),
    }
}

#[test]
fn render_passes_dot_block_through() {
    let text = "結果:\n```dot\ndigraph G {\n  \"X\" -> \"Y\";\n}\n```\n";
    let got = present(text, DisplayPolicy::Render);
    match got {
        Presentation::Full { diagram, .. } => {
            assert_eq!(
                diagram,
                Diagram::Dot("digraph G {\n  \"X\" -> \"Y\";\n}\n".to_string())
            );
        }
        other => panic!("expected Full, got {:?}", other),
    }
}
