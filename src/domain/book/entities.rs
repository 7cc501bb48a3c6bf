//! Book Context - Entities
//!
//! 字段缺失时按空集合 / `None` 处理，由完整性规则给出具体的违规信息，
//! 而不是在解码阶段失败。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::EntityKind;

/// 章节片段 - 所有其他实体引用的最小可寻址单位
///
/// 不变量（由完整性规则检查，而非构造时强制）:
/// - id 在整本书内唯一
/// - pct 按文档顺序单调不减
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// 片段 ID
    #[serde(default)]
    id: String,
    /// 阅读进度百分比（0-100）
    #[serde(default)]
    pct: f64,
    /// 结构分组（数字或字符串）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    part: Option<Value>,
    /// 出场人物 ID
    #[serde(default)]
    chars: Vec<String>,
    /// 出现地点 ID
    #[serde(default)]
    locs: Vec<String>,
}

impl Chunk {
    pub fn new(id: impl Into<String>, pct: f64, part: Option<Value>) -> Self {
        Self {
            id: id.into(),
            pct,
            part,
            chars: Vec::new(),
            locs: Vec::new(),
        }
    }

    pub fn with_chars(mut self, chars: Vec<String>) -> Self {
        self.chars = chars;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pct(&self) -> f64 {
        self.pct
    }

    pub fn part(&self) -> Option<&Value> {
        self.part.as_ref()
    }

    /// 用于去重比较的 part 键
    ///
    /// 数值按值比较（`1` 与 `1.0` 相同），其他类型使用 JSON 文本，
    /// 因此 `1` 与 `"1"` 仍是不同的值。
    pub fn part_key(&self) -> Option<String> {
        match self.part.as_ref()? {
            Value::Null => None,
            Value::Number(n) => Some(match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                    format!("{}", f as i64)
                }
                _ => n.to_string(),
            }),
            other => Some(other.to_string()),
        }
    }

    pub fn chars(&self) -> &[String] {
        &self.chars
    }

    pub fn locs(&self) -> &[String] {
        &self.locs
    }

    /// 片段引用的某类实体 ID
    pub fn refs(&self, kind: EntityKind) -> &[String] {
        match kind {
            EntityKind::Character => &self.chars,
            EntityKind::Location => &self.locs,
        }
    }
}

/// 人物 / 地点的元数据
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityMeta {
    /// 首次出场的片段 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    intro: Option<String>,
    /// 显示名称
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl EntityMeta {
    pub fn new(intro: Option<String>) -> Self {
        Self { intro, name: None }
    }

    pub fn intro(&self) -> Option<&str> {
        self.intro.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// 某一时刻对人物 / 地点的描述，来源于某个片段
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Description {
    /// 来源片段 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    from: Option<String>,
    /// 描述正文
    #[serde(default, alias = "text", skip_serializing_if = "Option::is_none")]
    desc: Option<String>,
}

impl Description {
    pub fn new(from: Option<String>, desc: Option<String>) -> Self {
        Self { from, desc }
    }

    pub fn source_chunk(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }
}

/// 单个片段的摘要
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "chunkId", default)]
    chunk_id: String,
    #[serde(default, alias = "text", skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
}

impl Summary {
    pub fn new(chunk_id: impl Into<String>, summary: Option<String>) -> Self {
        Self {
            chunk_id: chunk_id.into(),
            summary,
        }
    }

    pub fn chunk_id(&self) -> &str {
        &self.chunk_id
    }
}
