//! Book Query Handlers

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::BookSourcePort;
use crate::application::queries::{CheckMode, ListBooks, ValidateBook};
use crate::domain::book::{BookEntry, BookSlug, BookStats};
use crate::domain::integrity::{Diagnostic, IntegrityEngine};

// ============================================================================
// Response DTOs
// ============================================================================

/// 单次校验运行的报告
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub slug: String,
    pub mode: CheckMode,
    pub checked_at: DateTime<Utc>,
    /// 按规则执行顺序排列
    pub diagnostics: Vec<Diagnostic>,
    /// 仅交叉检查模式提供
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<BookStats>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// ValidateBook Handler
pub struct ValidateBookHandler {
    source: Arc<dyn BookSourcePort>,
    engine: IntegrityEngine,
}

impl ValidateBookHandler {
    pub fn new(source: Arc<dyn BookSourcePort>) -> Self {
        Self {
            source,
            engine: IntegrityEngine::new(),
        }
    }

    /// 加载 -> 索引 -> 规则 -> 报告
    ///
    /// 只有前置条件失败会返回 Err；完整性违规全部收集在报告中。
    pub fn handle(&self, query: ValidateBook) -> Result<ValidationReport, ApplicationError> {
        let slug = BookSlug::new(query.slug)?;

        tracing::info!(
            slug = %slug,
            mode = query.mode.as_str(),
            rules = self.engine.rules().len(),
            "Validating book"
        );

        let snapshot = self
            .source
            .load_book(&slug, query.mode.includes_summaries())?;

        let diagnostics = self.engine.evaluate(&snapshot);
        let stats = query
            .mode
            .includes_summaries()
            .then(|| BookStats::from_snapshot(&snapshot));

        if diagnostics.is_empty() {
            tracing::info!(slug = %slug, chunks = snapshot.chunks.len(), "Validation passed");
        } else {
            tracing::warn!(slug = %slug, errors = diagnostics.len(), "Validation found errors");
        }

        Ok(ValidationReport {
            slug: slug.to_string(),
            mode: query.mode,
            checked_at: Utc::now(),
            diagnostics,
            stats,
        })
    }
}

/// ListBooks Handler
pub struct ListBooksHandler {
    source: Arc<dyn BookSourcePort>,
}

impl ListBooksHandler {
    pub fn new(source: Arc<dyn BookSourcePort>) -> Self {
        Self { source }
    }

    pub fn handle(&self, _query: ListBooks) -> Result<Vec<BookEntry>, ApplicationError> {
        let books = self.source.list_books()?;
        tracing::debug!(count = books.len(), "Listed books");
        Ok(books)
    }
}
