//! 検索プラン
//!
//! レポートのタイトルと、順番に照合するターゲット一覧。
//! JSONファイルから読み込むか、組み込みのプランを使う。

use crate::error::{Error, Result};
use crate::query::Query;
use serde::{Deserialize, Serialize};

/// レポートの書式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStyle {
    /// `checking: ...` 形式のチェックリスト（JSON/Excel両方）
    #[default]
    Checklist,
    /// `--- 名前 ---` 見出しごとに `Found Row:` を並べる
    Sections,
}

/// Excel照合が0件の場合の再検索
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fallback {
    pub keywords: Vec<String>,
}

/// 1つのターゲット（品目）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,

    /// 省略時はJSON検索をスキップ
    #[serde(default)]
    pub json_keywords: Option<Vec<String>>,

    /// 省略時はExcel検索をスキップ
    #[serde(default)]
    pub excel_keywords: Option<Vec<String>>,

    #[serde(default)]
    pub fallback: Option<Fallback>,
}

impl Target {
    /// JSON・Excelで同じキーワードを使うターゲット
    pub fn both(name: &str, keywords: &[&str]) -> Self {
        let keywords: Vec<String> = keywords.iter().map(|k| k.to_string()).collect();
        Self {
            name: name.to_string(),
            json_keywords: Some(keywords.clone()),
            excel_keywords: Some(keywords),
            fallback: None,
        }
    }

    /// Excelのみを検索するターゲット
    pub fn excel_only(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            json_keywords: None,
            excel_keywords: Some(keywords.iter().map(|k| k.to_string()).collect()),
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, keywords: &[&str]) -> Self {
        self.fallback = Some(Fallback {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        });
        self
    }

    pub fn json_query(&self) -> Option<Query> {
        self.json_keywords
            .as_ref()
            .map(|k| Query::new(self.name.as_str(), k.as_slice()))
    }

    pub fn excel_query(&self) -> Option<Query> {
        self.excel_keywords
            .as_ref()
            .map(|k| Query::new(self.name.as_str(), k.as_slice()))
    }

    pub fn fallback_query(&self) -> Option<Query> {
        self.fallback
            .as_ref()
            .map(|f| Query::new(self.name.as_str(), f.keywords.as_slice()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub title: String,

    #[serde(default)]
    pub style: ReportStyle,

    /// JSON照合の対象フィールド（省略時は全フィールド）
    #[serde(default)]
    pub json_fields: Option<Vec<String>>,

    pub targets: Vec<Target>,
}

impl Plan {
    /// 組み込みの価格チェックプラン（カーテン式シャッター部品）
    pub fn price_check() -> Self {
        Self {
            title: "PRICE CHECK REPORT".into(),
            style: ReportStyle::Checklist,
            json_fields: Some(vec!["description".into()]),
            targets: vec![
                Target::both("KEPENK ALT PARÇA", &["alt", "parça"]),
                Target::both("KEPENK DİKME", &["dikme"]),
                Target::both("70 LİK SEKİZGEN BORU", &["70", "sekizgen", "boru"])
                    .with_fallback(&["70", "boru"]),
                Target::both("KEPENK ALT PARÇA LASTİĞİ", &["alt", "parça", "lastiği"]),
                Target::both("KEPENK BORU BAŞI", &["boru", "başı"])
                    .with_fallback(&["boru", "başı"]),
            ],
        }
    }

    /// Excelのみ・1ターゲットのプラン
    pub fn single(title: &str, name: &str, keywords: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            style: ReportStyle::Checklist,
            json_fields: None,
            targets: vec![Target::excel_only(name, keywords)],
        }
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let plan: Self = serde_json::from_str(json)?;
        plan.validate()?;
        Ok(plan)
    }

    pub fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(Error::Plan("ターゲットがありません".into()));
        }
        if let Some(target) = self.targets.iter().find(|t| t.name.trim().is_empty()) {
            return Err(Error::Plan(format!("ターゲット名が空です: {:?}", target)));
        }
        // 再検索はExcel照合が0件のときだけ走る
        if let Some(target) = self
            .targets
            .iter()
            .find(|t| t.fallback.is_some() && t.excel_keywords.is_none())
        {
            return Err(Error::Plan(format!(
                "excel_keywords のないターゲットに fallback があります: {}",
                target.name
            )));
        }
        Ok(())
    }

    /// JSON照合が1件でもあるか（JSON読み込みの要否判定）
    pub fn needs_json(&self) -> bool {
        self.targets.iter().any(|t| t.json_keywords.is_some())
    }

    pub fn needs_excel(&self) -> bool {
        self.targets.iter().any(|t| t.excel_keywords.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_check_plan() {
        let plan = Plan::price_check();
        assert_eq!(plan.targets.len(), 5);
        assert!(plan.validate().is_ok());
        assert!(plan.needs_json());
        assert!(plan.needs_excel());

        let with_fallback: Vec<_> = plan
            .targets
            .iter()
            .filter(|t| t.fallback.is_some())
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(with_fallback, vec!["70 LİK SEKİZGEN BORU", "KEPENK BORU BAŞI"]);
    }

    #[test]
    fn test_single_plan_is_excel_only() {
        let plan = Plan::single("PRICE CHECK REPORT (VİDA)", "VİDA", &["vida"]);
        assert!(!plan.needs_json());
        assert!(plan.needs_excel());
        assert_eq!(plan.targets[0].excel_query().unwrap().keywords(), &["vida".to_string()]);
    }

    #[test]
    fn test_from_json_defaults() {
        let json = r#"{
            "title": "TAPA",
            "style": "sections",
            "targets": [
                {"name": "TAPA SEARCH RESULTS", "excel_keywords": ["tapa"]}
            ]
        }"#;
        let plan = Plan::from_json(json).unwrap();
        assert_eq!(plan.style, ReportStyle::Sections);
        assert!(plan.json_fields.is_none());
        assert!(plan.targets[0].json_query().is_none());
        assert!(plan.targets[0].fallback_query().is_none());
    }

    #[test]
    fn test_from_json_rejects_empty_targets() {
        let result = Plan::from_json(r#"{"title": "x", "targets": []}"#);
        assert!(matches!(result, Err(Error::Plan(_))));
    }

    #[test]
    fn test_from_json_rejects_blank_name() {
        let result = Plan::from_json(r#"{"title": "x", "targets": [{"name": "  "}]}"#);
        assert!(matches!(result, Err(Error::Plan(_))));
    }

    #[test]
    fn test_from_json_rejects_orphan_fallback() {
        let json = r#"{"title": "x", "targets": [
            {"name": "BORU", "json_keywords": ["boru"], "fallback": {"keywords": ["boru"]}}
        ]}"#;
        assert!(matches!(Plan::from_json(json), Err(Error::Plan(_))));
    }

    #[test]
    fn test_from_json_invalid() {
        let result = Plan::from_json("{ invalid }");
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
