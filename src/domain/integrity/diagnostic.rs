//! Integrity Context - Diagnostics
//!
//! 每条诊断对应一次违规：哪条规则、哪个实体、具体的无效值

use serde::{Deserialize, Serialize};

use crate::domain::book::EntityKind;

/// 完整性规则标识
///
/// 声明顺序即规则执行顺序，也是报告中诊断的排列顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    ChunkIdUnique,
    ChunkCharacterRefs,
    ChunkLocationRefs,
    SummaryCoverage,
    DescriptionSource,
    DescriptionOwner,
    IntroReference,
    DescriptionCompleteness,
    SectionLabels,
    PctOrdering,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::ChunkIdUnique => "chunk-id-unique",
            RuleId::ChunkCharacterRefs => "chunk-character-refs",
            RuleId::ChunkLocationRefs => "chunk-location-refs",
            RuleId::SummaryCoverage => "summary-coverage",
            RuleId::DescriptionSource => "description-source",
            RuleId::DescriptionOwner => "description-owner",
            RuleId::IntroReference => "intro-reference",
            RuleId::DescriptionCompleteness => "description-completeness",
            RuleId::SectionLabels => "section-labels",
            RuleId::PctOrdering => "pct-ordering",
        }
    }

    /// 人类可读的规则名称
    pub fn title(&self) -> &'static str {
        match self {
            RuleId::ChunkIdUnique => "Chunk ID uniqueness",
            RuleId::ChunkCharacterRefs => "Chunk to character reference validity",
            RuleId::ChunkLocationRefs => "Chunk to location reference validity",
            RuleId::SummaryCoverage => "Summary coverage",
            RuleId::DescriptionSource => "Description source validity",
            RuleId::DescriptionOwner => "Description ownership validity",
            RuleId::IntroReference => "Intro reference validity",
            RuleId::DescriptionCompleteness => "Description completeness",
            RuleId::SectionLabels => "Section-label sufficiency",
            RuleId::PctOrdering => "Monotonic ordering",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 违规实体的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Book,
    Chunk,
    Character,
    Location,
    Summary,
}

impl From<EntityKind> for SubjectKind {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Character => SubjectKind::Character,
            EntityKind::Location => SubjectKind::Location,
        }
    }
}

/// 违规实体
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subject {
    pub kind: SubjectKind,
    pub id: String,
}

/// 单条完整性诊断
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    rule: RuleId,
    subject: Subject,
    message: String,
}

impl Diagnostic {
    pub fn new(
        rule: RuleId,
        kind: impl Into<SubjectKind>,
        id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule,
            subject: Subject {
                kind: kind.into(),
                id: id.into(),
            },
            message: message.into(),
        }
    }

    pub fn rule(&self) -> RuleId {
        self.rule
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// 格式化百分比：整数值不带小数部分（40 而不是 40.0）
pub fn format_pct(pct: f64) -> String {
    if pct.is_finite() && pct.fract() == 0.0 && pct.abs() < 1e15 {
        format!("{}", pct as i64)
    } else {
        format!("{}", pct)
    }
}

/// 格式化可能缺失的引用值
pub(crate) fn display_ref(value: Option<&str>) -> &str {
    value.unwrap_or("<missing>")
}
