//! Entity Index - 从书籍快照派生查找集合
//!
//! 纯函数构建，不产生错误：字段缺失视为空集合，由规则报告具体违规。

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::domain::book::{BookSnapshot, EntityKind};

/// 单次校验运行的实体索引
///
/// 借用快照中的字符串，生命周期不超过快照本身。
#[derive(Debug, Clone)]
pub struct EntityIndex<'a> {
    /// 去重后的片段 ID（保持文档顺序）
    chunk_ids: Vec<&'a str>,
    chunk_id_set: HashSet<&'a str>,
    /// 出现不止一次的片段 ID（按第二次出现的顺序）
    duplicate_chunk_ids: Vec<&'a str>,
    character_ids: HashSet<&'a str>,
    location_ids: HashSet<&'a str>,
    /// chunkId -> 摘要数量；未加载摘要时为 None
    summary_counts: Option<HashMap<&'a str, usize>>,
    /// 片段使用的不同 part 值
    part_values: BTreeSet<String>,
}

impl<'a> EntityIndex<'a> {
    pub fn build(snapshot: &'a BookSnapshot) -> Self {
        let mut chunk_ids = Vec::with_capacity(snapshot.chunks.len());
        let mut chunk_id_set = HashSet::with_capacity(snapshot.chunks.len());
        let mut duplicate_chunk_ids = Vec::new();

        for chunk in &snapshot.chunks {
            let id = chunk.id();
            if chunk_id_set.insert(id) {
                chunk_ids.push(id);
            } else if !duplicate_chunk_ids.contains(&id) {
                duplicate_chunk_ids.push(id);
            }
        }

        let summary_counts = snapshot.summaries.as_ref().map(|summaries| {
            let mut counts: HashMap<&'a str, usize> = HashMap::new();
            for summary in summaries {
                *counts.entry(summary.chunk_id()).or_insert(0) += 1;
            }
            counts
        });

        let part_values = snapshot
            .chunks
            .iter()
            .filter_map(|chunk| chunk.part_key())
            .collect();

        Self {
            chunk_ids,
            chunk_id_set,
            duplicate_chunk_ids,
            character_ids: snapshot.characters.meta.keys().map(String::as_str).collect(),
            location_ids: snapshot.locations.meta.keys().map(String::as_str).collect(),
            summary_counts,
            part_values,
        }
    }

    /// 去重后的片段 ID，文档顺序
    pub fn chunk_ids(&self) -> &[&'a str] {
        &self.chunk_ids
    }

    pub fn is_chunk(&self, id: &str) -> bool {
        self.chunk_id_set.contains(id)
    }

    /// 引用值缺失时视为无效
    pub fn is_chunk_ref(&self, id: Option<&str>) -> bool {
        id.is_some_and(|id| self.is_chunk(id))
    }

    pub fn duplicate_chunk_ids(&self) -> &[&'a str] {
        &self.duplicate_chunk_ids
    }

    pub fn entity_ids(&self, kind: EntityKind) -> &HashSet<&'a str> {
        match kind {
            EntityKind::Character => &self.character_ids,
            EntityKind::Location => &self.location_ids,
        }
    }

    pub fn has_entity(&self, kind: EntityKind, id: &str) -> bool {
        self.entity_ids(kind).contains(id)
    }

    pub fn has_summaries(&self) -> bool {
        self.summary_counts.is_some()
    }

    /// 某片段的摘要数量
    pub fn summary_count(&self, chunk_id: &str) -> usize {
        self.summary_counts
            .as_ref()
            .and_then(|counts| counts.get(chunk_id).copied())
            .unwrap_or(0)
    }

    pub fn part_values(&self) -> &BTreeSet<String> {
        &self.part_values
    }
}
