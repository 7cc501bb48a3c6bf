//! In-Memory Book Source Implementation

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::application::ports::{BookSourcePort, SourceError};
use crate::domain::book::{BookEntry, BookSlug, BookSnapshot};

/// 内存书籍来源（测试和嵌入式调用时使用）
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookSource {
    books: BTreeMap<String, BookSnapshot>,
}

impl InMemoryBookSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(mut self, slug: impl Into<String>, snapshot: BookSnapshot) -> Self {
        self.books.insert(slug.into(), snapshot);
        self
    }
}

impl BookSourcePort for InMemoryBookSource {
    fn load_book(
        &self,
        slug: &BookSlug,
        with_summaries: bool,
    ) -> Result<BookSnapshot, SourceError> {
        let mut snapshot = self
            .books
            .get(slug.as_str())
            .cloned()
            .ok_or_else(|| SourceError::BookNotFound(PathBuf::from(slug.as_str())))?;

        if !with_summaries {
            snapshot.summaries = None;
        } else if snapshot.summaries.is_none() {
            return Err(SourceError::MissingDocument(
                PathBuf::from(slug.as_str()).join("summaries.json"),
            ));
        }

        Ok(snapshot)
    }

    fn list_books(&self) -> Result<Vec<BookEntry>, SourceError> {
        let mut books = Vec::with_capacity(self.books.len());
        for (slug, snapshot) in &self.books {
            // with_book 接受任意字符串，非法 slug 不列出
            let Ok(slug) = BookSlug::new(slug.as_str()) else {
                continue;
            };
            books.push(BookEntry {
                slug,
                meta: snapshot.meta.clone(),
            });
        }
        Ok(books)
    }
}
