use pretty_assertions::assert_eq;

use nudgeflow::diagram::{Diagram, Translator};

#[test]
fn dot_block_passes_through_verbatim() {
    let text = "before\n```dot\ndigraph G {\n  \"X\" -> \"Y\";\n}\n```\nafter";
    let got = Translator::new().extract(text);
    assert_eq!(
        got,
        Diagram::Dot("digraph G {\n  \"X\" -> \"Y\";\n}\n".to_string())
    );
}

#[test]
fn graphviz_tag_is_accepted_as_target_notation() {
    let text = "```graphviz\ndigraph G {}\n```";
    let got = Translator::new().extract(text);
    assert_eq!(got, Diagram::Dot("digraph G {}\n".to_string()));
}

#[test]
fn dot_block_wins_over_mermaid_block() {
    let text = "\
```mermaid
graph TD
    A[a] --> B[b]
```
```dot
digraph G {}
```
";
    let got = Translator::new().extract(text);
    assert_eq!(got, Diagram::Dot("digraph G {}\n".to_string()));
}

#[test]
fn no_fence_reports_not_found() {
    let got = Translator::new().extract("ただの文章です。図はありません。");
    assert_eq!(got, Diagram::NotFound);
}

#[test]
fn simple_edge_round_trip() {
    let text = "```mermaid\ngraph TD\n    A[Start] --> B[End];\n```";
    let got = Translator::new().extract(text);
    assert_eq!(
        got,
        Diagram::Translated("digraph G {\n  \"Start\" -> \"End\";\n}\n".to_string())
    );
}

#[test]
fn edge_label_survives_translation() {
    let text = "```mermaid\ngraph TD\n    A[申請] -->|承認| B[交付]\n```";
    let got = Translator::new().extract(text);
    assert_eq!(
        got,
        Diagram::Translated(
            "digraph G {\n  \"申請\" -> \"交付\" [label=\"承認\"];\n}\n".to_string()
        )
    );
}

#[test]
fn decision_node_edges_translate() {
    let block = "\
graph TD
    A[受付] --> B{書類完備?}
    B{書類完備?} -->|はい| C[審査]
    B{書類完備?} --> D[差戻し]
";
    let dot = Translator::new().translate(block);
    // the rect -> decision line matches no shape and is dropped
    assert_eq!(
        dot,
        "digraph G {\n  \"書類完備?\" -> \"審査\" [label=\"はい\"];\n  \"書類完備?\" -> \"差戻し\";\n}\n"
    );
}

#[test]
fn edge_order_is_preserved() {
    let block = "graph TD\n    X[x] --> Y[y]\n    Y[y] --> Z[z]\n";
    let dot = Translator::new().translate(block);
    let xy = dot.find("\"x\" -> \"y\"").expect("first edge present");
    let yz = dot.find("\"y\" -> \"z\"").expect("second edge present");
    assert!(xy < yz, "edges must keep input order");
}

#[test]
fn malformed_lines_are_dropped_silently() {
    let block = "\
graph TD
    A[ok] --> B[fine]
    C[broken --> D[no
";
    let dot = Translator::new().translate(block);
    assert_eq!(dot, "digraph G {\n  \"ok\" -> \"fine\";\n}\n");
}

#[test]
fn header_line_is_not_an_edge() {
    let t = Translator::new();
    assert!(t.parse_edge("graph TD").is_none());
    assert!(t.parse_edge("flowchart LR").is_none());
}

#[test]
fn empty_block_yields_empty_digraph() {
    let dot = Translator::new().translate("graph TD\n");
    assert_eq!(dot, "digraph G {\n}\n");
}

#[test]
fn duplicate_labels_merge_in_output() {
    // distinct ids sharing a label collapse to one node; label-keyed output
    let block = "graph TD\n    A[確認] --> B[完了]\n    C[確認] --> B[完了]\n";
    let dot = Translator::new().translate(block);
    assert_eq!(
        dot,
        "digraph G {\n  \"確認\" -> \"完了\";\n  \"確認\" -> \"完了\";\n}\n"
    );
}
