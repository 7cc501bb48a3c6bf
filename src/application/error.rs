//! 应用层错误定义
//!
//! 统一的查询错误类型。完整性违规不属于错误，以诊断形式返回。

use thiserror::Error;

use crate::application::ports::SourceError;
use crate::domain::book::BookError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 前置条件失败（书籍目录或文档缺失、JSON 无法解码），校验无法进行
    #[error("{0}")]
    Precondition(String),

    /// 输入验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ApplicationError {
    /// 是否为前置条件失败
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }
}

impl From<SourceError> for ApplicationError {
    fn from(err: SourceError) -> Self {
        Self::Precondition(err.to_string())
    }
}

impl From<BookError> for ApplicationError {
    fn from(err: BookError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_source_error_becomes_precondition() {
        let err: ApplicationError =
            SourceError::MissingDocument(PathBuf::from("data/hod/chunks.json")).into();

        assert!(err.is_precondition());
        assert_eq!(err.to_string(), "Missing data file: data/hod/chunks.json");
    }

    #[test]
    fn test_book_error_becomes_validation_error() {
        let err: ApplicationError = BookError::InvalidSlug("bad".to_string()).into();

        assert!(!err.is_precondition());
        assert!(err.to_string().starts_with("Validation error"));
    }
}
