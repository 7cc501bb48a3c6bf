//! JSON Book Source - 文件系统书籍数据加载
//!
//! 实现 BookSourcePort trait
//!
//! 目录结构:
//! ```text
//! <data_dir>/<slug>/
//!   meta.json
//!   chunks.json
//!   characters.json
//!   locations.json
//!   summaries.json   (仅交叉检查模式)
//! ```

use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::application::ports::{BookSourcePort, SourceError};
use crate::domain::book::{BookEntry, BookMeta, BookSlug, BookSnapshot};

pub const META_FILE: &str = "meta.json";
pub const CHUNKS_FILE: &str = "chunks.json";
pub const CHARACTERS_FILE: &str = "characters.json";
pub const LOCATIONS_FILE: &str = "locations.json";
pub const SUMMARIES_FILE: &str = "summaries.json";

/// 基于 JSON 文件目录的书籍来源
pub struct JsonBookSource {
    /// 数据根目录
    data_dir: PathBuf,
}

impl JsonBookSource {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn book_dir(&self, slug: &BookSlug) -> PathBuf {
        self.data_dir.join(slug.as_str())
    }

    /// 读取并解码单个文档
    fn read_document<T: DeserializeOwned>(&self, path: &Path) -> Result<T, SourceError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::MissingDocument(path.to_path_buf()),
            _ => SourceError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let document = serde_json::from_str(&content).map_err(|e| SourceError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "Loaded document");

        Ok(document)
    }
}

impl BookSourcePort for JsonBookSource {
    fn load_book(
        &self,
        slug: &BookSlug,
        with_summaries: bool,
    ) -> Result<BookSnapshot, SourceError> {
        let book_dir = self.book_dir(slug);
        if !book_dir.is_dir() {
            return Err(SourceError::BookNotFound(book_dir));
        }

        let meta = self.read_document(&book_dir.join(META_FILE))?;
        let chunks = self.read_document(&book_dir.join(CHUNKS_FILE))?;
        let characters = self.read_document(&book_dir.join(CHARACTERS_FILE))?;
        let locations = self.read_document(&book_dir.join(LOCATIONS_FILE))?;
        let summaries = if with_summaries {
            Some(self.read_document(&book_dir.join(SUMMARIES_FILE))?)
        } else {
            None
        };

        Ok(BookSnapshot {
            meta,
            chunks,
            characters,
            locations,
            summaries,
        })
    }

    fn list_books(&self) -> Result<Vec<BookEntry>, SourceError> {
        let entries = fs::read_dir(&self.data_dir).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::DataDirNotFound(self.data_dir.clone()),
            _ => SourceError::Io {
                path: self.data_dir.clone(),
                source: e,
            },
        })?;

        let mut books = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SourceError::Io {
                path: self.data_dir.clone(),
                source: e,
            })?;
            let path = entry.path();
            let meta_path = path.join(META_FILE);
            if !path.is_dir() || !meta_path.is_file() {
                continue;
            }

            let Some(slug) = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| BookSlug::new(name).ok())
            else {
                tracing::warn!(path = %path.display(), "Skipping directory with unusable name");
                continue;
            };

            let meta: BookMeta = self.read_document(&meta_path)?;
            books.push(BookEntry { slug, meta });
        }

        books.sort_by(|a, b| a.slug.as_str().cmp(b.slug.as_str()));
        Ok(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, value: Value) {
        fs::write(dir.join(name), serde_json::to_string_pretty(&value).unwrap()).unwrap();
    }

    fn write_book(root: &Path, slug: &str) -> PathBuf {
        let dir = root.join(slug);
        fs::create_dir_all(&dir).unwrap();
        write(
            &dir,
            META_FILE,
            json!({ "slug": slug, "title": "Heart of Darkness", "sections": ["I"] }),
        );
        write(
            &dir,
            CHUNKS_FILE,
            json!([{ "id": "c1", "pct": 0, "part": 1, "chars": [], "locs": [] }]),
        );
        write(&dir, CHARACTERS_FILE, json!({ "meta": {}, "descriptions": {} }));
        write(&dir, LOCATIONS_FILE, json!({ "meta": {}, "descriptions": {} }));
        dir
    }

    #[test]
    fn test_load_book_without_summaries() {
        let temp_dir = tempdir().unwrap();
        write_book(temp_dir.path(), "hod");
        let source = JsonBookSource::new(temp_dir.path());

        let snapshot = source
            .load_book(&BookSlug::new("hod").unwrap(), false)
            .unwrap();

        assert_eq!(snapshot.chunks.len(), 1);
        assert_eq!(snapshot.meta.sections, ["I"]);
        assert!(snapshot.summaries.is_none());
    }

    #[test]
    fn test_load_book_with_summaries() {
        let temp_dir = tempdir().unwrap();
        let dir = write_book(temp_dir.path(), "hod");
        write(&dir, SUMMARIES_FILE, json!([{ "chunkId": "c1", "summary": "..." }]));
        let source = JsonBookSource::new(temp_dir.path());

        let snapshot = source
            .load_book(&BookSlug::new("hod").unwrap(), true)
            .unwrap();

        assert_eq!(snapshot.summaries.map(|s| s.len()), Some(1));
    }

    #[test]
    fn test_missing_book_directory() {
        let temp_dir = tempdir().unwrap();
        let source = JsonBookSource::new(temp_dir.path());

        let err = source
            .load_book(&BookSlug::new("nope").unwrap(), false)
            .unwrap_err();

        assert!(matches!(err, SourceError::BookNotFound(_)));
        assert!(err.to_string().starts_with("Book directory not found"));
    }

    #[test]
    fn test_missing_document() {
        let temp_dir = tempdir().unwrap();
        let dir = write_book(temp_dir.path(), "hod");
        fs::remove_file(dir.join(LOCATIONS_FILE)).unwrap();
        let source = JsonBookSource::new(temp_dir.path());

        let err = source
            .load_book(&BookSlug::new("hod").unwrap(), false)
            .unwrap_err();

        match err {
            SourceError::MissingDocument(path) => assert!(path.ends_with(LOCATIONS_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_summaries_required_in_crosscheck() {
        let temp_dir = tempdir().unwrap();
        write_book(temp_dir.path(), "hod");
        let source = JsonBookSource::new(temp_dir.path());

        let err = source
            .load_book(&BookSlug::new("hod").unwrap(), true)
            .unwrap_err();

        assert!(matches!(err, SourceError::MissingDocument(_)));
    }

    #[test]
    fn test_malformed_json() {
        let temp_dir = tempdir().unwrap();
        let dir = write_book(temp_dir.path(), "hod");
        fs::write(dir.join(CHUNKS_FILE), "[{ \"id\": ").unwrap();
        let source = JsonBookSource::new(temp_dir.path());

        let err = source
            .load_book(&BookSlug::new("hod").unwrap(), false)
            .unwrap_err();

        assert!(matches!(err, SourceError::Decode { .. }));
        assert!(err.to_string().starts_with("Invalid JSON in"));
    }

    #[test]
    fn test_list_books_skips_directories_without_meta() {
        let temp_dir = tempdir().unwrap();
        write_book(temp_dir.path(), "lord-jim");
        write_book(temp_dir.path(), "heart-of-darkness");
        fs::create_dir_all(temp_dir.path().join("scratch")).unwrap();
        fs::write(temp_dir.path().join("README.md"), "notes").unwrap();
        let source = JsonBookSource::new(temp_dir.path());

        let books = source.list_books().unwrap();
        let slugs: Vec<&str> = books.iter().map(|b| b.slug.as_str()).collect();

        assert_eq!(slugs, ["heart-of-darkness", "lord-jim"]);
        assert_eq!(books[0].meta.title.as_deref(), Some("Heart of Darkness"));
    }

    #[test]
    fn test_list_books_missing_data_dir() {
        let temp_dir = tempdir().unwrap();
        let source = JsonBookSource::new(temp_dir.path().join("absent"));

        let err = source.list_books().unwrap_err();

        assert!(matches!(err, SourceError::DataDirNotFound(_)));
        assert!(err.to_string().starts_with("Data directory not found"));
    }
}
