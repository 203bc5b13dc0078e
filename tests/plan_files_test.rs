//! 同梱プランファイルの検証

use price_check_common::{Plan, ReportStyle};

#[test]
fn test_kepenk_plan_matches_builtin() {
    let plan = Plan::from_json(include_str!("../plans/kepenk.json")).expect("kepenk.json が不正");
    assert_eq!(plan, Plan::price_check());
}

#[test]
fn test_vida_plan_matches_single() {
    let plan = Plan::from_json(include_str!("../plans/vida.json")).expect("vida.json が不正");
    assert_eq!(plan, Plan::single("PRICE CHECK REPORT (VİDA)", "VİDA", &["vida"]));
}

#[test]
fn test_tapa_plan() {
    let plan = Plan::from_json(include_str!("../plans/tapa.json")).expect("tapa.json が不正");
    assert_eq!(plan.style, ReportStyle::Sections);
    assert!(!plan.needs_json());
    assert_eq!(plan.targets.len(), 2);
}
