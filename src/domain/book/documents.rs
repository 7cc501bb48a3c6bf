//! Book Context - Documents
//!
//! 与磁盘上各 JSON 文档一一对应的结构，以及聚合后的书籍快照

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{BookSlug, Chunk, Description, EntityKind, EntityMeta, Summary};

/// 书籍级元数据（meta.json）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// 结构分组标签，每个被使用的 part 至少需要一个
    #[serde(default)]
    pub sections: Vec<String>,
}

/// 人物或地点集合（characters.json / locations.json）
///
/// 两个映射按 key 排序保存，规则遍历时输出顺序稳定。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityCatalog {
    /// id -> 元数据
    #[serde(default)]
    pub meta: BTreeMap<String, EntityMeta>,

    /// id -> 按时间顺序排列的描述
    #[serde(default)]
    pub descriptions: BTreeMap<String, Vec<Description>>,
}

impl EntityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一个实体及其描述（测试和手工构造快照时使用）
    pub fn with_entity(
        mut self,
        id: impl Into<String>,
        meta: EntityMeta,
        descriptions: Vec<Description>,
    ) -> Self {
        let id = id.into();
        self.meta.insert(id.clone(), meta);
        self.descriptions.insert(id, descriptions);
        self
    }

    pub fn len(&self) -> usize {
        self.meta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meta.is_empty()
    }
}

/// 一次校验运行所需的完整书籍快照
///
/// 加载后只读，运行结束即丢弃。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub meta: BookMeta,
    pub chunks: Vec<Chunk>,
    pub characters: EntityCatalog,
    pub locations: EntityCatalog,
    /// 仅在交叉检查模式下加载
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summaries: Option<Vec<Summary>>,
}

impl BookSnapshot {
    pub fn catalog(&self, kind: EntityKind) -> &EntityCatalog {
        match kind {
            EntityKind::Character => &self.characters,
            EntityKind::Location => &self.locations,
        }
    }

    pub fn has_summaries(&self) -> bool {
        self.summaries.is_some()
    }
}

/// 书籍目录列表项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    pub slug: BookSlug,
    pub meta: BookMeta,
}
