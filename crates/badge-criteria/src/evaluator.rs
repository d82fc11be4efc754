//! 发放标准评估器
//!
//! 将已校验的标准与候选人的事实集匹配，产出单个布尔结论。
//! 对数据问题（事实缺失、类型不匹配）永不报错，一律降级为
//! "条件未满足"：证据缺失或含糊时绝不自动发放凭证。

use tracing::debug;

use crate::error::Result;
use crate::models::{Condition, ConditionValue, Criteria, CriteriaKind, FactSet};
use crate::operators::{Combinator, Operator};
use crate::validator::CriteriaValidator;

/// 发放标准评估器
pub struct CriteriaEvaluator;

impl CriteriaEvaluator {
    /// 评估标准是否被事实集满足
    ///
    /// 入参标准应当已通过 [`CriteriaValidator::validate`]；此处防御性地
    /// 重新校验，未通过校验的标准返回错误（属编程错误而非数据错误）。
    /// MANUAL 标准没有自动结论，恒为 `false`，由外部流程人工审批。
    pub fn evaluate(criteria: &Criteria, facts: &FactSet) -> Result<bool> {
        CriteriaValidator::validate(criteria)?;

        let matched = Self::decide(criteria, facts);
        debug!(
            kind = %criteria.kind,
            condition_count = criteria.conditions.len(),
            matched,
            "发放标准评估完成"
        );
        Ok(matched)
    }

    fn decide(criteria: &Criteria, facts: &FactSet) -> bool {
        if criteria.kind == CriteriaKind::Manual {
            return false;
        }

        let mut results = criteria
            .conditions
            .iter()
            .map(|condition| Self::evaluate_condition(condition, facts));

        // 单条件时 all/any 结果一致，组合符缺省按 All 处理
        match criteria.combinator {
            Some(Combinator::Any) => results.any(|matched| matched),
            _ => results.all(|matched| matched),
        }
    }

    /// 评估单个条件
    ///
    /// 事实集中缺失该字段时直接为 `false`（未知即不满足）。
    fn evaluate_condition(condition: &Condition, facts: &FactSet) -> bool {
        let Some(fact) = facts.get(&condition.field) else {
            return false;
        };

        let expected = &condition.value;
        match condition.operator {
            Operator::Eq => fact == expected,
            Operator::Neq => fact != expected,
            Operator::Gt => Self::compare(fact, expected, |a, b| a > b),
            Operator::Gte => Self::compare(fact, expected, |a, b| a >= b),
            Operator::Lt => Self::compare(fact, expected, |a, b| a < b),
            Operator::Lte => Self::compare(fact, expected, |a, b| a <= b),
            Operator::In => Self::in_list(fact, expected),
            Operator::NotIn => match fact.as_str() {
                // 非字符串事实对字符串列表的成员关系无从谈起，不满足
                Some(s) => expected.as_list().is_some_and(|list| !list.iter().any(|item| item == s)),
                None => false,
            },
            Operator::Contains => match (fact.as_str(), expected.as_str()) {
                (Some(s), Some(substr)) => s.contains(substr),
                _ => false,
            },
        }
    }

    /// 数值比较，IEEE-754 双精度语义，不做字符串到数字的隐式转换
    fn compare<F>(fact: &ConditionValue, expected: &ConditionValue, cmp: F) -> bool
    where
        F: Fn(f64, f64) -> bool,
    {
        match (fact.as_f64(), expected.as_f64()) {
            (Some(a), Some(b)) => cmp(a, b),
            _ => false,
        }
    }

    fn in_list(fact: &ConditionValue, expected: &ConditionValue) -> bool {
        match (fact.as_str(), expected.as_list()) {
            (Some(s), Some(list)) => list.iter().any(|item| item == s),
            _ => false,
        }
    }
}
