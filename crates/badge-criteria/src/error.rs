//! 发放标准校验错误类型
//!
//! 每个变体携带机器可判定的拒绝码（deny_code）和出错条件的下标，
//! 供上层 HTTP 接口映射为 4xx 响应，无需匹配错误文案。

use crate::models::CriteriaKind;
use crate::operators::Operator;
use thiserror::Error;

/// 校验失败原因
///
/// `validate` 采用快速失败策略，每次调用只报告首个违规项。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// 输入不是合法的标准对象（非对象、未知 kind、缺失或形状非法的 value 等）
    #[error("invalid issuance criteria structure: {0}")]
    InvalidStructure(String),

    #[error("issuance criteria of kind '{kind}' must have at least one condition")]
    MissingConditions { kind: CriteriaKind },

    #[error("multiple conditions require combinator to be either 'ALL' (AND) or 'ANY' (OR)")]
    MissingCombinator,

    #[error("condition at index {index}: 'field' must be a non-empty string")]
    EmptyField { index: usize },

    #[error("condition at index {index}: operator '{operator}' requires a number value, received: {actual}")]
    ExpectedNumber {
        index: usize,
        operator: Operator,
        actual: &'static str,
    },

    #[error("condition at index {index}: operator '{operator}' requires value to be an array, received: {actual}")]
    ExpectedList {
        index: usize,
        operator: Operator,
        actual: &'static str,
    },

    #[error("condition at index {index}: operator '{operator}' requires non-empty array")]
    EmptyList { index: usize, operator: Operator },

    #[error("condition at index {index}: operator 'CONTAINS' requires string value, received: {actual}")]
    ExpectedString { index: usize, actual: &'static str },

    #[error("issuance criteria of kind '{kind}' must include a condition for field '{field}'")]
    MissingRequiredField {
        kind: CriteriaKind,
        field: &'static str,
    },
}

impl ValidationError {
    /// 返回拒绝原因的错误码，用于 API 响应
    pub fn deny_code(&self) -> &'static str {
        match self {
            Self::InvalidStructure(_) => "INVALID_STRUCTURE",
            Self::MissingConditions { .. } => "MISSING_CONDITIONS",
            Self::MissingCombinator => "MISSING_COMBINATOR",
            Self::EmptyField { .. } => "EMPTY_FIELD",
            Self::ExpectedNumber { .. } => "EXPECTED_NUMBER",
            Self::ExpectedList { .. } => "EXPECTED_LIST",
            Self::EmptyList { .. } => "EMPTY_LIST",
            Self::ExpectedString { .. } => "EXPECTED_STRING",
            Self::MissingRequiredField { .. } => "MISSING_REQUIRED_FIELD",
        }
    }

    /// 触发错误的条件下标，仅条件级错误存在
    pub fn condition_index(&self) -> Option<usize> {
        match self {
            Self::EmptyField { index }
            | Self::ExpectedNumber { index, .. }
            | Self::ExpectedList { index, .. }
            | Self::EmptyList { index, .. }
            | Self::ExpectedString { index, .. } => Some(*index),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
