//! Console Report Emitter
//!
//! 文本格式面向人阅读，JSON 格式面向脚本和 CI。

use serde::Serialize;
use std::fmt::Write as _;

use crate::application::{ApplicationError, ValidationReport};
use crate::config::ReportFormat;
use crate::domain::book::{BookEntry, BookStats};
use crate::domain::integrity::format_pct;

/// 校验通过
pub const EXIT_PASS: u8 = 0;
/// 存在完整性违规
pub const EXIT_VIOLATIONS: u8 = 1;
/// 前置条件或配置失败，校验未执行
pub const EXIT_PRECONDITION: u8 = 2;

/// 报告对应的退出码
pub fn exit_code(report: &ValidationReport) -> u8 {
    if report.passed() {
        EXIT_PASS
    } else {
        EXIT_VIOLATIONS
    }
}

/// 失败输出（JSON 格式）
#[derive(Debug, Serialize)]
struct FailureBody<'a> {
    errno: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    slug: Option<&'a str>,
    error: String,
}

/// 书籍列表项（JSON 格式）
#[derive(Debug, Serialize)]
struct BookListItem<'a> {
    slug: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<&'a str>,
    sections: usize,
}

impl<'a> From<&'a BookEntry> for BookListItem<'a> {
    fn from(entry: &'a BookEntry) -> Self {
        Self {
            slug: entry.slug.as_str(),
            title: entry.meta.title.as_deref(),
            author: entry.meta.author.as_deref(),
            sections: entry.meta.sections.len(),
        }
    }
}

/// 报告渲染器
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportEmitter {
    format: ReportFormat,
}

impl ReportEmitter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// 渲染校验报告
    pub fn render(&self, report: &ValidationReport) -> Result<String, serde_json::Error> {
        match self.format {
            ReportFormat::Json => serde_json::to_string_pretty(report),
            ReportFormat::Text => Ok(render_report_text(report)),
        }
    }

    /// 渲染书籍列表
    pub fn render_books(&self, books: &[BookEntry]) -> Result<String, serde_json::Error> {
        match self.format {
            ReportFormat::Json => {
                let items: Vec<BookListItem<'_>> = books.iter().map(BookListItem::from).collect();
                serde_json::to_string_pretty(&items)
            }
            ReportFormat::Text => Ok(render_books_text(books)),
        }
    }

    /// 渲染无法完成校验时的错误
    pub fn render_failure(
        &self,
        slug: Option<&str>,
        err: &ApplicationError,
    ) -> Result<String, serde_json::Error> {
        match self.format {
            ReportFormat::Json => serde_json::to_string_pretty(&FailureBody {
                errno: EXIT_PRECONDITION,
                slug,
                error: err.to_string(),
            }),
            ReportFormat::Text => Ok(format!("ERROR: {}", err)),
        }
    }
}

fn render_report_text(report: &ValidationReport) -> String {
    let mut out = String::new();

    if report.passed() {
        let _ = writeln!(out, "Validation passed for '{}'", report.slug);
        if let Some(stats) = &report.stats {
            write_stats(&mut out, stats);
        }
    } else {
        let _ = writeln!(
            out,
            "Found {} error(s) in '{}':",
            report.error_count(),
            report.slug
        );
        for diagnostic in &report.diagnostics {
            let _ = writeln!(out, "ERROR: {}", diagnostic);
        }
    }

    out
}

fn write_stats(out: &mut String, stats: &BookStats) {
    let _ = writeln!(out, "Chunks: {}", stats.chunks);
    let _ = writeln!(out, "Characters: {}", stats.characters);
    let _ = writeln!(out, "Locations: {}", stats.locations);
    if let Some(summaries) = stats.summaries {
        let _ = writeln!(out, "Summaries: {}", summaries);
    }
    match stats.pct_range {
        Some((min, max)) => {
            let _ = writeln!(out, "PCT range: {} - {}", format_pct(min), format_pct(max));
        }
        None => {
            let _ = writeln!(out, "PCT range: n/a");
        }
    }
    let _ = writeln!(out, "Chunk IDs: {}", stats.chunk_ids.join(", "));
}

fn render_books_text(books: &[BookEntry]) -> String {
    if books.is_empty() {
        return "No books found\n".to_string();
    }

    let mut out = String::new();
    for book in books {
        let title = book.meta.title.as_deref().unwrap_or(book.slug.as_str());
        let _ = write!(out, "{}  {}", book.slug, title);
        if let Some(author) = &book.meta.author {
            let _ = write!(out, " by {}", author);
        }
        let _ = writeln!(out, " ({} sections)", book.meta.sections.len());
    }
    out
}
