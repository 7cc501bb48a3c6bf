//! Book Context - Value Objects

use serde::{Deserialize, Serialize};

use super::BookError;

/// 书籍标识（数据目录下的子目录名）
///
/// 不变量:
/// - 非空
/// - 不包含路径分隔符，不能是 `.` 或 `..`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookSlug(String);

impl BookSlug {
    pub fn new(slug: impl Into<String>) -> Result<Self, BookError> {
        let slug = slug.into();
        if slug.trim().is_empty() {
            return Err(BookError::InvalidSlug("slug cannot be empty".to_string()));
        }
        if slug == "." || slug == ".." {
            return Err(BookError::InvalidSlug(format!("'{}' is not a book directory", slug)));
        }
        if slug.contains(['/', '\\']) {
            return Err(BookError::InvalidSlug(format!(
                "'{}' must not contain path separators",
                slug
            )));
        }
        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BookSlug {
    type Error = BookError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BookSlug> for String {
    fn from(slug: BookSlug) -> Self {
        slug.0
    }
}

impl std::fmt::Display for BookSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 被章节片段引用的实体类型（人物 / 地点）
///
/// 两类实体结构完全相同，规则按类型参数化后各执行一次。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Character,
    Location,
}

impl EntityKind {
    /// 规则的执行顺序：先人物，后地点
    pub const ALL: [EntityKind; 2] = [EntityKind::Character, EntityKind::Location];

    /// 句首形式，如 "Character"
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Character => "Character",
            EntityKind::Location => "Location",
        }
    }

    /// 句中形式，如 "character"
    pub fn noun(&self) -> &'static str {
        match self {
            EntityKind::Character => "character",
            EntityKind::Location => "location",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.noun())
    }
}
