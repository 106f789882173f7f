use crate::wire::AnalysisRequest;

/// The five output sections the model is asked for, in the order they must
/// appear. The last one doubles as the heading the strip policy removes.
pub const SECTION_HEADERS: [&str; 5] = [
    "1. プロセスマップ（10ステップ程度）",
    "2. 摩擦ポイントの特定",
    "3. 燃料ポイントの特定",
    "4. EASTフレームワークに基づくナッジ提案",
    "5. Mermaid形式のフローチャート",
];

pub const FLOWCHART_HEADER: &str = SECTION_HEADERS[4];

/// Builds the full analysis prompt from a validated request.
/// Pure substitution into a fixed template; cannot fail.
pub fn analysis_prompt(req: &AnalysisRequest) -> String {
    format!(
        r#"以下の情報を基に、事業プロセスとナッジ提案を作成してください：

事業名: {project}
目標行動: {action}
自治体名: {municipality}

以下の形式で出力してください：

1. プロセスマップ（10ステップ程度）
2. 摩擦ポイントの特定
3. 燃料ポイントの特定
4. EASTフレームワークに基づくナッジ提案
5. Mermaid形式のフローチャート

フローチャートは次の例のように、必ず ```mermaid フェンスで囲んだ graph TD 形式で出力してください：

```mermaid
graph TD
    A[開始] --> B[ステップ1]
    B --> C[ステップ2]
    C -->|条件を満たす| D[終了]
```
"#,
        project = req.project_name,
        action = req.target_action,
        municipality = req.municipality,
    )
}
