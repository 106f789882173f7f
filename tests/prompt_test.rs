use nudgeflow::prompt::{analysis_prompt, SECTION_HEADERS};
use nudgeflow::wire::AnalysisRequest;

fn request() -> AnalysisRequest {
    AnalysisRequest {
        project_name: "ごみ分別促進".into(),
        target_action: "資源ごみの分別".into(),
        municipality: "横浜市".into(),
    }
}

#[test]
fn prompt_contains_all_three_fields_verbatim() {
    let p = analysis_prompt(&request());
    assert!(p.contains("事業名: ごみ分別促進"));
    assert!(p.contains("目標行動: 資源ごみの分別"));
    assert!(p.contains("自治体名: 横浜市"));
}

#[test]
fn prompt_lists_the_five_sections_in_order() {
    let p = analysis_prompt(&request());
    let mut last = 0;
    for header in SECTION_HEADERS {
        let at = p[last..]
            .find(header)
            .unwrap_or_else(|| panic!("header missing or out of order: {header}"));
        last += at + header.len();
    }
}

#[test]
fn prompt_embeds_a_mermaid_example() {
    let p = analysis_prompt(&request());
    assert!(p.contains("```mermaid"));
    assert!(p.contains("graph TD"));
}
