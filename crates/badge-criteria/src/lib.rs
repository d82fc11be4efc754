//! 徽章发放标准规则引擎
//!
//! 提供徽章模板发放标准的结构校验与评估能力：
//! - 类型化的标准/条件模式及 JSON 线上格式
//! - 持久化前的结构校验（快速失败，携带机器可判定的拒绝码）
//! - 发放时对事实集的布尔评估（数据问题一律降级为不满足）
//! - 创作端预填充用的固定模板目录
//!
//! 引擎完全同步、无共享可变状态，校验与评估均为纯函数，
//! 可被任意数量的并发调用方安全使用。

pub mod error;
pub mod evaluator;
pub mod models;
pub mod operators;
pub mod templates;
pub mod validator;

pub use error::{Result, ValidationError};
pub use evaluator::CriteriaEvaluator;
pub use models::{Condition, ConditionValue, Criteria, CriteriaKind, FactSet, facts};
pub use operators::{Combinator, Operator};
pub use templates::TemplateCatalog;
pub use validator::CriteriaValidator;
