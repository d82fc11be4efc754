//! 发放标准端到端流程测试
//!
//! 模拟模板创建接口的完整路径：JSON 入参 → 解析 → 校验 → 评估。

use badge_criteria::{
    Criteria, CriteriaEvaluator, CriteriaValidator, FactSet, TemplateCatalog, facts,
};
use serde_json::json;

#[test]
fn task_criteria_full_path() {
    let payload = json!({
        "kind": "TASK",
        "conditions": [
            { "field": "taskId", "operator": "EQ", "value": "task-1" },
            { "field": "status", "operator": "EQ", "value": "completed" }
        ],
        "combinator": "ALL"
    });

    let criteria = Criteria::from_value(payload).unwrap();
    CriteriaValidator::validate(&criteria).unwrap();

    let completed = facts([("taskId", "task-1"), ("status", "completed")]);
    assert!(CriteriaEvaluator::evaluate(&criteria, &completed).unwrap());

    let pending = facts([("taskId", "task-1"), ("status", "pending")]);
    assert!(!CriteriaEvaluator::evaluate(&criteria, &pending).unwrap());
}

#[test]
fn exam_score_missing_required_field_rejected() {
    let payload = json!({
        "kind": "EXAM_SCORE",
        "conditions": [
            { "field": "score", "operator": "GTE", "value": 80 }
        ]
    });

    let criteria = Criteria::from_value(payload).unwrap();
    let err = CriteriaValidator::validate(&criteria).unwrap_err();
    assert_eq!(err.deny_code(), "MISSING_REQUIRED_FIELD");
    assert!(err.to_string().contains("examId"));
}

#[test]
fn empty_in_list_rejected() {
    let payload = json!({
        "kind": "TASK",
        "conditions": [
            { "field": "taskId", "operator": "IN", "value": [] }
        ]
    });

    let criteria = Criteria::from_value(payload).unwrap();
    let err = CriteriaValidator::validate(&criteria).unwrap_err();
    assert_eq!(err.deny_code(), "EMPTY_LIST");
    assert_eq!(err.condition_index(), Some(0));
}

#[test]
fn combined_any_combinator_is_satisfied_by_one_branch() {
    let payload = json!({
        "kind": "COMBINED",
        "conditions": [
            { "field": "hours", "operator": "GTE", "value": 20 },
            { "field": "examScore", "operator": "GTE", "value": 85 }
        ],
        "combinator": "ANY"
    });

    let criteria = Criteria::from_value(payload).unwrap();
    CriteriaValidator::validate(&criteria).unwrap();

    let fact_set = facts([("hours", 25), ("examScore", 10)]);
    assert!(CriteriaEvaluator::evaluate(&criteria, &fact_set).unwrap());
}

#[test]
fn manual_criteria_accepts_and_never_evaluates_true() {
    let criteria = Criteria::from_value(json!({ "kind": "MANUAL" })).unwrap();
    CriteriaValidator::validate(&criteria).unwrap();

    assert!(!CriteriaEvaluator::evaluate(&criteria, &FactSet::new()).unwrap());
    let rich_facts = facts([("taskId", "task-1"), ("status", "completed")]);
    assert!(!CriteriaEvaluator::evaluate(&criteria, &rich_facts).unwrap());
}

#[test]
fn unknown_kind_rejected_before_validation() {
    let err = Criteria::from_value(json!({
        "kind": "AUTO_TASK",
        "conditions": [{ "field": "taskId", "operator": "EQ", "value": "t" }]
    }))
    .unwrap_err();
    assert_eq!(err.deny_code(), "INVALID_STRUCTURE");
}

#[test]
fn combinator_outside_all_any_rejected_before_validation() {
    let err = Criteria::from_value(json!({
        "kind": "COMBINED",
        "conditions": [
            { "field": "hours", "operator": "GTE", "value": 20 },
            { "field": "examScore", "operator": "GTE", "value": 85 }
        ],
        "combinator": "SOME"
    }))
    .unwrap_err();
    assert_eq!(err.deny_code(), "INVALID_STRUCTURE");
}

#[test]
fn catalog_templates_survive_the_full_path() {
    for key in TemplateCatalog::keys() {
        let criteria = TemplateCatalog::get(key).unwrap();

        // 模板经序列化往返后仍可校验、可评估
        let json = serde_json::to_string(&criteria).unwrap();
        let parsed = Criteria::from_json(&json).unwrap();
        assert_eq!(parsed, criteria);

        CriteriaValidator::validate(&parsed).unwrap();
        assert!(!CriteriaEvaluator::evaluate(&parsed, &FactSet::new()).unwrap());
    }
}
