//! Integrity Context - 跨集合引用完整性校验
//!
//! 职责:
//! - 从书籍快照构建实体索引
//! - 执行固定顺序的规则集并累积诊断

mod diagnostic;
mod engine;
mod index;
mod rules;

pub use diagnostic::{format_pct, Diagnostic, RuleId, Subject, SubjectKind};
pub use engine::IntegrityEngine;
pub use index::EntityIndex;
pub use rules::{CheckFn, Rule, RuleContext, PCT_SENTINEL, RULES};
