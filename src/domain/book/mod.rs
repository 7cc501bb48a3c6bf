//! Book Context - 书籍元数据限界上下文
//!
//! 职责:
//! - 章节片段（chunk）、人物、地点、描述、摘要实体
//! - 一次校验所需的完整书籍快照

mod documents;
mod entities;
mod errors;
mod stats;
mod value_objects;

pub use documents::{BookEntry, BookMeta, BookSnapshot, EntityCatalog};
pub use entities::{Chunk, Description, EntityMeta, Summary};
pub use errors::BookError;
pub use stats::BookStats;
pub use value_objects::{BookSlug, EntityKind};
