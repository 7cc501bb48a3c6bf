//! Integrity Rules - 完整性规则集
//!
//! 每条规则是一个独立的纯函数，返回零或多条诊断。
//! 规则之间互不依赖：任何规则都不能假设其他规则已通过。

use super::diagnostic::{display_ref, format_pct, Diagnostic, RuleId, SubjectKind};
use super::index::EntityIndex;
use crate::domain::book::{BookSnapshot, EntityKind};

/// 第一个片段与之比较的哨兵值，低于合法范围
pub const PCT_SENTINEL: f64 = -1.0;

/// 规则执行时可见的只读上下文
pub struct RuleContext<'a> {
    pub snapshot: &'a BookSnapshot,
    pub index: &'a EntityIndex<'a>,
}

pub type CheckFn = fn(&RuleContext<'_>) -> Vec<Diagnostic>;

/// 一条规则：标识 + 检查函数
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    pub check: CheckFn,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("id", &self.id).finish()
    }
}

/// 完整规则集，按执行顺序排列
pub const RULES: [Rule; 10] = [
    Rule {
        id: RuleId::ChunkIdUnique,
        check: check_unique_chunk_ids,
    },
    Rule {
        id: RuleId::ChunkCharacterRefs,
        check: check_chunk_characters,
    },
    Rule {
        id: RuleId::ChunkLocationRefs,
        check: check_chunk_locations,
    },
    Rule {
        id: RuleId::SummaryCoverage,
        check: check_summary_coverage,
    },
    Rule {
        id: RuleId::DescriptionSource,
        check: check_description_sources,
    },
    Rule {
        id: RuleId::DescriptionOwner,
        check: check_description_owners,
    },
    Rule {
        id: RuleId::IntroReference,
        check: check_intro_references,
    },
    Rule {
        id: RuleId::DescriptionCompleteness,
        check: check_description_completeness,
    },
    Rule {
        id: RuleId::SectionLabels,
        check: check_section_labels,
    },
    Rule {
        id: RuleId::PctOrdering,
        check: check_pct_ordering,
    },
];

// ============================================================================
// Chunks
// ============================================================================

fn check_unique_chunk_ids(ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    if ctx.index.chunk_ids().len() == ctx.snapshot.chunks.len() {
        return Vec::new();
    }

    // 单条诊断列出全部重复 ID，主体是整个片段集合
    vec![Diagnostic::new(
        RuleId::ChunkIdUnique,
        SubjectKind::Book,
        "chunks",
        format!(
            "Duplicate chunk IDs found: {}",
            ctx.index.duplicate_chunk_ids().join(", ")
        ),
    )]
}

fn check_chunk_characters(ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    chunk_references(ctx, EntityKind::Character, RuleId::ChunkCharacterRefs)
}

fn check_chunk_locations(ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    chunk_references(ctx, EntityKind::Location, RuleId::ChunkLocationRefs)
}

fn chunk_references(ctx: &RuleContext<'_>, kind: EntityKind, rule: RuleId) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for chunk in &ctx.snapshot.chunks {
        for entity_id in chunk.refs(kind) {
            if !ctx.index.has_entity(kind, entity_id) {
                diagnostics.push(Diagnostic::new(
                    rule,
                    SubjectKind::Chunk,
                    chunk.id(),
                    format!(
                        "Chunk {}: {} '{}' not in {} meta",
                        chunk.id(),
                        kind.noun(),
                        entity_id,
                        kind.noun()
                    ),
                ));
            }
        }
    }

    diagnostics
}

// ============================================================================
// Summaries
// ============================================================================

/// 片段与摘要一一对应，两个方向分别报告
///
/// 未加载 summaries.json 时规则不适用。
fn check_summary_coverage(ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    let Some(summaries) = ctx.snapshot.summaries.as_deref() else {
        return Vec::new();
    };

    let mut diagnostics = Vec::new();

    for &chunk_id in ctx.index.chunk_ids() {
        let message = match ctx.index.summary_count(chunk_id) {
            0 => format!("Chunk {} has no summary", chunk_id),
            1 => continue,
            n => format!("Chunk {} has {} summaries", chunk_id, n),
        };
        diagnostics.push(Diagnostic::new(
            RuleId::SummaryCoverage,
            SubjectKind::Chunk,
            chunk_id,
            message,
        ));
    }

    for summary in summaries {
        if !ctx.index.is_chunk(summary.chunk_id()) {
            diagnostics.push(Diagnostic::new(
                RuleId::SummaryCoverage,
                SubjectKind::Summary,
                summary.chunk_id(),
                format!("Summary {} has no matching chunk", summary.chunk_id()),
            ));
        }
    }

    diagnostics
}

// ============================================================================
// Characters & Locations
// ============================================================================

fn check_description_sources(ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for kind in EntityKind::ALL {
        for (entity_id, descriptions) in &ctx.snapshot.catalog(kind).descriptions {
            for description in descriptions {
                if ctx.index.is_chunk_ref(description.source_chunk()) {
                    continue;
                }
                diagnostics.push(Diagnostic::new(
                    RuleId::DescriptionSource,
                    kind,
                    entity_id.as_str(),
                    format!(
                        "{} '{}' description: from '{}' is not a valid chunk ID",
                        kind.label(),
                        entity_id,
                        display_ref(description.source_chunk())
                    ),
                ));
            }
        }
    }

    diagnostics
}

fn check_description_owners(ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for kind in EntityKind::ALL {
        for entity_id in ctx.snapshot.catalog(kind).descriptions.keys() {
            if !ctx.index.has_entity(kind, entity_id) {
                diagnostics.push(Diagnostic::new(
                    RuleId::DescriptionOwner,
                    kind,
                    entity_id.as_str(),
                    format!(
                        "{} description for '{}' not in {} meta",
                        kind.label(),
                        entity_id,
                        kind.noun()
                    ),
                ));
            }
        }
    }

    diagnostics
}

fn check_intro_references(ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for kind in EntityKind::ALL {
        for (entity_id, meta) in &ctx.snapshot.catalog(kind).meta {
            if ctx.index.is_chunk_ref(meta.intro()) {
                continue;
            }
            diagnostics.push(Diagnostic::new(
                RuleId::IntroReference,
                kind,
                entity_id.as_str(),
                format!(
                    "{} '{}': intro '{}' is not a valid chunk ID",
                    kind.label(),
                    entity_id,
                    display_ref(meta.intro())
                ),
            ));
        }
    }

    diagnostics
}

fn check_description_completeness(ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for kind in EntityKind::ALL {
        let catalog = ctx.snapshot.catalog(kind);
        for entity_id in catalog.meta.keys() {
            let described = catalog
                .descriptions
                .get(entity_id)
                .is_some_and(|descriptions| !descriptions.is_empty());
            if !described {
                diagnostics.push(Diagnostic::new(
                    RuleId::DescriptionCompleteness,
                    kind,
                    entity_id.as_str(),
                    format!("{} '{}' has no descriptions", kind.label(), entity_id),
                ));
            }
        }
    }

    diagnostics
}

// ============================================================================
// Book structure
// ============================================================================

/// 只检查标签数量是否足够，不检查 part 与标签的具体对应关系
fn check_section_labels(ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    let labels = ctx.snapshot.meta.sections.len();
    let parts = ctx.index.part_values().len();

    if labels >= parts {
        return Vec::new();
    }

    vec![Diagnostic::new(
        RuleId::SectionLabels,
        SubjectKind::Book,
        "sections",
        format!(
            "Section labels array has {} entries but chunks use {} distinct part values",
            labels, parts
        ),
    )]
}

fn check_pct_ordering(ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut previous = PCT_SENTINEL;

    for chunk in &ctx.snapshot.chunks {
        if chunk.pct() < previous {
            diagnostics.push(Diagnostic::new(
                RuleId::PctOrdering,
                SubjectKind::Chunk,
                chunk.id(),
                format!(
                    "Chunk {}: percentage {} is less than previous {}",
                    chunk.id(),
                    format_pct(chunk.pct()),
                    format_pct(previous)
                ),
            ));
        }
        previous = chunk.pct();
    }

    diagnostics
}
