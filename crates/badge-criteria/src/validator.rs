//! 发放标准校验器
//!
//! 在标准持久化到徽章模板之前校验其结构合法性与各类别的语义约束。
//! 纯函数，无 I/O；快速失败，每次调用只报告首个违规项。

use tracing::{debug, warn};

use crate::error::{Result, ValidationError};
use crate::models::{Condition, ConditionValue, Criteria, CriteriaKind};
use crate::operators::Operator;

/// 发放标准校验器
///
/// 校验顺序（由廉价的结构检查到跨条件的语义检查）：
/// 1. MANUAL 类别无条件通过
/// 2. 其余类别条件集合非空
/// 3. 多条件时组合符必填
/// 4. 逐条件检查 field 非空、操作符与值形状匹配
/// 5. 类别必填字段在条件集合中出现
pub struct CriteriaValidator;

impl CriteriaValidator {
    /// 校验发放标准，返回首个违规项
    pub fn validate(criteria: &Criteria) -> Result<()> {
        let outcome = Self::check(criteria);
        match &outcome {
            Ok(()) => debug!(
                kind = %criteria.kind,
                condition_count = criteria.conditions.len(),
                "发放标准校验通过"
            ),
            Err(e) => warn!(
                kind = %criteria.kind,
                deny_code = e.deny_code(),
                condition_index = ?e.condition_index(),
                reason = %e,
                "发放标准校验未通过"
            ),
        }
        outcome
    }

    fn check(criteria: &Criteria) -> Result<()> {
        // MANUAL 不携带条件语义，条件即使存在也被忽略
        if criteria.kind == CriteriaKind::Manual {
            return Ok(());
        }

        if criteria.conditions.is_empty() {
            return Err(ValidationError::MissingConditions {
                kind: criteria.kind,
            });
        }

        // 单条件无需组合符
        if criteria.conditions.len() > 1 && criteria.combinator.is_none() {
            return Err(ValidationError::MissingCombinator);
        }

        for (index, condition) in criteria.conditions.iter().enumerate() {
            Self::check_condition(condition, index)?;
        }

        // 跨条件检查放在最后，避免单个坏条件被"缺字段"噪声掩盖
        for field in criteria.kind.required_fields() {
            if !criteria.conditions.iter().any(|c| c.field == *field) {
                return Err(ValidationError::MissingRequiredField {
                    kind: criteria.kind,
                    field,
                });
            }
        }

        Ok(())
    }

    /// 校验单个条件：field 非空，值形状与操作符匹配
    fn check_condition(condition: &Condition, index: usize) -> Result<()> {
        if condition.field.is_empty() {
            return Err(ValidationError::EmptyField { index });
        }

        let operator = condition.operator;
        let value = &condition.value;

        if operator.is_numeric() && value.as_f64().is_none() {
            return Err(ValidationError::ExpectedNumber {
                index,
                operator,
                actual: value.type_name(),
            });
        }

        if operator.is_membership() {
            match value.as_list() {
                None => {
                    return Err(ValidationError::ExpectedList {
                        index,
                        operator,
                        actual: value.type_name(),
                    });
                }
                Some(items) if items.is_empty() => {
                    return Err(ValidationError::EmptyList { index, operator });
                }
                Some(_) => {}
            }
        }

        if operator == Operator::Contains && !matches!(value, ConditionValue::String(_)) {
            return Err(ValidationError::ExpectedString {
                index,
                actual: value.type_name(),
            });
        }

        Ok(())
    }
}
