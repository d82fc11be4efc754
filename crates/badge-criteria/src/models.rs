//! 发放标准领域模型
//!
//! 徽章模板上挂载的发放标准（Criteria）及其原子条件（Condition）的
//! 结构定义和 JSON 线上格式。标准在模板创建/更新时校验一次，
//! 之后作为模板记录的一部分不可变存储。

use crate::error::{Result, ValidationError};
use crate::operators::{Combinator, Operator};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// 发放标准类别
///
/// 类别决定条件集合中必须出现哪些字段，见 [`CriteriaKind::required_fields`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CriteriaKind {
    /// 管理员人工审批，不携带条件语义
    Manual,
    /// 完成指定任务
    Task,
    /// 课程学习时长达标
    LearningTime,
    /// 考试分数达标
    ExamScore,
    /// 技能等级达标
    SkillLevel,
    /// 自由组合条件
    Combined,
}

impl CriteriaKind {
    /// 该类别条件集合中必须出现的字段名
    ///
    /// 以查找表而非每类别子类型的方式表达，保持规则声明式、可独立测试。
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Manual | Self::Combined => &[],
            Self::Task => &["taskId"],
            Self::LearningTime => &["courseId", "hours"],
            Self::ExamScore => &["examId", "score"],
            Self::SkillLevel => &["skillId", "level"],
        }
    }
}

impl fmt::Display for CriteriaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Manual => "MANUAL",
            Self::Task => "TASK",
            Self::LearningTime => "LEARNING_TIME",
            Self::ExamScore => "EXAM_SCORE",
            Self::SkillLevel => "SKILL_LEVEL",
            Self::Combined => "COMBINED",
        };
        write!(f, "{}", s)
    }
}

/// 条件值
///
/// 标准中条件的期望值与评估时事实集中的实测值共用同一个封闭类型：
/// 字符串、数字、布尔或字符串列表。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    String(String),
    Number(f64),
    Bool(bool),
    List(Vec<String>),
}

impl ConditionValue {
    /// 数字值，不做字符串到数字的隐式转换
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// 值的类型名称，用于错误信息
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::List(_) => "array",
        }
    }
}

impl From<&str> for ConditionValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for ConditionValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<f64> for ConditionValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for ConditionValue {
    fn from(v: i32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<i64> for ConditionValue {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<bool> for ConditionValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<String>> for ConditionValue {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

impl From<Vec<&str>> for ConditionValue {
    fn from(v: Vec<&str>) -> Self {
        Self::List(v.into_iter().map(String::from).collect())
    }
}

/// 原子条件：对单个事实字段的一次比较
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    pub value: ConditionValue,
}

impl Condition {
    pub fn new(
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<ConditionValue>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }
}

/// 发放标准
///
/// 条件顺序对评估无影响，仅用于校验错误信息中的下标定位。
/// `combinator` 在多条件时必填；单条件时缺省并被忽略。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub kind: CriteriaKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combinator: Option<Combinator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Criteria {
    pub fn new(kind: CriteriaKind, conditions: Vec<Condition>) -> Self {
        Self {
            kind,
            conditions,
            combinator: None,
            description: None,
        }
    }

    /// 人工审批标准，无条件
    pub fn manual() -> Self {
        Self::new(CriteriaKind::Manual, Vec::new())
    }

    pub fn with_combinator(mut self, combinator: Combinator) -> Self {
        self.combinator = Some(combinator);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 从 JSON 值解析标准
    ///
    /// 非对象输入、未知 kind/operator、缺失或形状非法的 value
    /// 都在这一步被拒绝，映射为 [`ValidationError::InvalidStructure`]。
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| ValidationError::InvalidStructure(e.to_string()))
    }

    /// 从 JSON 字符串解析标准
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ValidationError::InvalidStructure(e.to_string()))
    }
}

/// 事实集：候选人在评估时刻的实测状态
///
/// 由外部授予流程整体提供（任务完成、分数、时长、技能等级），本组件不持久化。
pub type FactSet = HashMap<String, ConditionValue>;

/// 便捷构造事实集
pub fn facts<I, K, V>(entries: I) -> FactSet
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<ConditionValue>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
