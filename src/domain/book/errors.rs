//! Book Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("无效的书籍标识: {0}")]
    InvalidSlug(String),
}
