//! 应用层 - 查询（读操作）
//!
//! 校验只观察外部生成的快照，不写回任何数据

mod book_queries;

pub mod handlers;

pub use book_queries::*;
