//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Book Context: 书籍元数据（片段、人物、地点、摘要）
//! - Integrity Context: 跨集合引用完整性规则

pub mod book;
pub mod integrity;
