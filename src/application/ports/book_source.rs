//! Book Source Port - 书籍数据来源抽象
//!
//! 具体实现在 infrastructure 层（JSON 文件目录、内存）

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::book::{BookEntry, BookSlug, BookSnapshot};

/// 书籍数据加载错误
///
/// 均为致命的前置条件失败：没有可供校验的一致数据。
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Book directory not found: {}", .0.display())]
    BookNotFound(PathBuf),

    #[error("Data directory not found: {}", .0.display())]
    DataDirNotFound(PathBuf),

    #[error("Missing data file: {}", .0.display())]
    MissingDocument(PathBuf),

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Book Source Port
pub trait BookSourcePort: Send + Sync {
    /// 加载一本书的完整快照
    ///
    /// `with_summaries` 为 true 时 summaries.json 是必需文档。
    fn load_book(&self, slug: &BookSlug, with_summaries: bool)
        -> Result<BookSnapshot, SourceError>;

    /// 列出所有可用书籍（按 slug 排序）
    fn list_books(&self) -> Result<Vec<BookEntry>, SourceError>;
}
