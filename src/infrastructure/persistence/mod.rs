//! Persistence Layer - 数据持久化
//!
//! JSON 文档目录实现

pub mod json;

pub use self::json::JsonBookSource;
