//! 发放标准模板目录
//!
//! 固定的只读模板注册表，用于预填充创作端 UI。条目构造即正确，
//! 运行时不再校验；字段值为占位符，由创作者替换。
//! 进程启动后不可变，可被并发读取。

use std::sync::LazyLock;

use crate::models::{Condition, Criteria, CriteriaKind};
use crate::operators::{Combinator, Operator};

/// 模板键，与 `TEMPLATES` 的注册顺序一致
const TEMPLATE_KEYS: [&str; 6] = [
    "manual",
    "task_completion",
    "learning_hours",
    "exam_score",
    "skill_level",
    "combined_criteria",
];

static TEMPLATES: LazyLock<Vec<(&'static str, Criteria)>> = LazyLock::new(|| {
    vec![
        (
            "manual",
            Criteria::manual().with_description("Manual approval by administrator"),
        ),
        (
            "task_completion",
            Criteria::new(
                CriteriaKind::Task,
                vec![
                    Condition::new("taskId", Operator::Eq, "TASK_ID_PLACEHOLDER"),
                    Condition::new("status", Operator::Eq, "completed"),
                ],
            )
            .with_combinator(Combinator::All)
            .with_description("Complete a specific task"),
        ),
        (
            "learning_hours",
            Criteria::new(
                CriteriaKind::LearningTime,
                vec![
                    Condition::new("courseId", Operator::Eq, "COURSE_ID_PLACEHOLDER"),
                    Condition::new("hours", Operator::Gte, 10),
                ],
            )
            .with_combinator(Combinator::All)
            .with_description("Complete 10+ hours of learning in a course"),
        ),
        (
            "exam_score",
            Criteria::new(
                CriteriaKind::ExamScore,
                vec![
                    Condition::new("examId", Operator::Eq, "EXAM_ID_PLACEHOLDER"),
                    Condition::new("score", Operator::Gte, 80),
                ],
            )
            .with_combinator(Combinator::All)
            .with_description("Score 80% or higher on an exam"),
        ),
        (
            "skill_level",
            Criteria::new(
                CriteriaKind::SkillLevel,
                vec![
                    Condition::new("skillId", Operator::Eq, "SKILL_ID_PLACEHOLDER"),
                    Condition::new("level", Operator::In, vec!["ADVANCED", "EXPERT"]),
                ],
            )
            .with_combinator(Combinator::All)
            .with_description("Achieve Advanced or Expert level in a skill"),
        ),
        (
            "combined_criteria",
            Criteria::new(
                CriteriaKind::Combined,
                vec![
                    Condition::new("courseId", Operator::Eq, "COURSE_ID_PLACEHOLDER"),
                    Condition::new("hours", Operator::Gte, 20),
                    Condition::new("examScore", Operator::Gte, 85),
                ],
            )
            .with_combinator(Combinator::All)
            .with_description("Complete 20+ hours AND score 85%+ on exam"),
        ),
    ]
});

/// 模板目录
pub struct TemplateCatalog;

impl TemplateCatalog {
    /// 所有模板键，按注册顺序
    pub fn keys() -> &'static [&'static str] {
        &TEMPLATE_KEYS
    }

    /// 按键取模板，未知键返回 `None`
    pub fn get(key: &str) -> Option<Criteria> {
        TEMPLATES
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, criteria)| criteria.clone())
    }
}
