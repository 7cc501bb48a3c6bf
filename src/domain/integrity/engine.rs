//! Integrity Engine - 规则引擎
//!
//! 依次执行全部规则，累积所有诊断；单条规则失败不会中断后续规则。

use super::diagnostic::Diagnostic;
use super::index::EntityIndex;
use super::rules::{Rule, RuleContext, RULES};
use crate::domain::book::BookSnapshot;

/// 完整性规则引擎
#[derive(Debug, Clone)]
pub struct IntegrityEngine {
    rules: Vec<Rule>,
}

impl Default for IntegrityEngine {
    fn default() -> Self {
        Self {
            rules: RULES.to_vec(),
        }
    }
}

impl IntegrityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// 对快照执行全部规则
    ///
    /// 返回的诊断按规则执行顺序排列（而非实体顺序）；空列表表示通过。
    pub fn evaluate(&self, snapshot: &BookSnapshot) -> Vec<Diagnostic> {
        let index = EntityIndex::build(snapshot);
        let ctx = RuleContext {
            snapshot,
            index: &index,
        };

        let mut diagnostics = Vec::new();
        for rule in &self.rules {
            let found = (rule.check)(&ctx);
            tracing::debug!(
                rule = %rule.id,
                title = rule.id.title(),
                violations = found.len(),
                "Rule evaluated"
            );
            diagnostics.extend(found);
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::integrity::RuleId;
    use serde_json::{json, Value};

    fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
        diagnostics.iter().map(Diagnostic::message).collect()
    }

    /// c1,c2,c3 @ 10,40,40；c3 无摘要；1 个标签对应 2 个 part
    fn scenario_missing_summary_and_label() -> BookSnapshot {
        serde_json::from_value(json!({
            "meta": { "sections": ["Stave One"] },
            "chunks": [
                { "id": "c1", "pct": 10, "part": 1, "chars": ["marlow"], "locs": [] },
                { "id": "c2", "pct": 40, "part": 1, "chars": [], "locs": [] },
                { "id": "c3", "pct": 40, "part": 2, "chars": [], "locs": [] }
            ],
            "characters": {
                "meta": { "marlow": { "intro": "c1" } },
                "descriptions": { "marlow": [{ "from": "c1", "desc": "A seaman." }] }
            },
            "locations": { "meta": {}, "descriptions": {} },
            "summaries": [
                { "chunkId": "c1", "summary": "..." },
                { "chunkId": "c2", "summary": "..." }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_end_to_end_missing_summary_and_label() {
        let snapshot = scenario_missing_summary_and_label();
        let diagnostics = IntegrityEngine::new().evaluate(&snapshot);

        assert_eq!(
            messages(&diagnostics),
            [
                "Chunk c3 has no summary",
                "Section labels array has 1 entries but chunks use 2 distinct part values"
            ]
        );
        assert!(!diagnostics.iter().any(|d| d.rule() == RuleId::PctOrdering));
    }

    #[test]
    fn test_minimal_consistent_dataset() {
        let snapshot: BookSnapshot = serde_json::from_value(json!({
            "meta": { "sections": ["I"] },
            "chunks": [{ "id": "c1", "pct": 0, "part": 1, "chars": ["marlow"], "locs": [] }],
            "characters": {
                "meta": { "marlow": { "intro": "c1" } },
                "descriptions": { "marlow": [{ "from": "c1", "desc": "A seaman." }] }
            },
            "locations": {},
            "summaries": [{ "chunkId": "c1", "summary": "..." }]
        }))
        .unwrap();

        assert!(IntegrityEngine::new().evaluate(&snapshot).is_empty());
    }

    #[test]
    fn test_failures_do_not_short_circuit() {
        let snapshot: BookSnapshot = serde_json::from_value(json!({
            "meta": { "sections": [] },
            "chunks": [
                { "id": "c1", "pct": 50, "part": 1, "chars": ["ghost"], "locs": ["nowhere"] },
                { "id": "c1", "pct": 20, "part": 1 }
            ],
            "characters": {
                "meta": { "marlow": { "intro": "c9" } },
                "descriptions": { "kurtz": [{ "from": "c8" }] }
            },
            "locations": {},
            "summaries": [{ "chunkId": "c5" }]
        }))
        .unwrap();

        let diagnostics = IntegrityEngine::new().evaluate(&snapshot);
        let rules: Vec<RuleId> = diagnostics.iter().map(Diagnostic::rule).collect();

        assert_eq!(
            rules,
            [
                RuleId::ChunkIdUnique,
                RuleId::ChunkCharacterRefs,
                RuleId::ChunkLocationRefs,
                RuleId::SummaryCoverage,
                RuleId::SummaryCoverage,
                RuleId::DescriptionSource,
                RuleId::DescriptionOwner,
                RuleId::IntroReference,
                RuleId::DescriptionCompleteness,
                RuleId::SectionLabels,
                RuleId::PctOrdering,
            ]
        );
    }

    /// 每个实体都被引用且有描述的一致数据集
    fn consistent() -> Value {
        json!({
            "meta": { "sections": ["I", "II"] },
            "chunks": [
                { "id": "c1", "pct": 0, "part": 1, "chars": ["marlow"], "locs": ["thames"] },
                { "id": "c2", "pct": 45, "part": 1, "chars": ["marlow", "harlequin"], "locs": [] },
                { "id": "c3", "pct": 90, "part": 2, "chars": ["kurtz"], "locs": ["station"] }
            ],
            "characters": {
                "meta": {
                    "marlow": { "intro": "c1" },
                    "harlequin": { "intro": "c2" },
                    "kurtz": { "intro": "c3" }
                },
                "descriptions": {
                    "marlow": [{ "from": "c1", "desc": "A seaman." }],
                    "harlequin": [{ "from": "c2", "desc": "Dressed in patches." }],
                    "kurtz": [{ "from": "c3", "desc": "An ivory agent." }]
                }
            },
            "locations": {
                "meta": {
                    "thames": { "intro": "c1" },
                    "station": { "intro": "c3" }
                },
                "descriptions": {
                    "thames": [{ "from": "c1", "desc": "The river." }],
                    "station": [{ "from": "c3", "desc": "The inner station." }]
                }
            },
            "summaries": [
                { "chunkId": "c1", "summary": "..." },
                { "chunkId": "c2", "summary": "..." },
                { "chunkId": "c3", "summary": "..." }
            ]
        })
    }

    fn evaluate(data: Value) -> Vec<Diagnostic> {
        let snapshot: BookSnapshot = serde_json::from_value(data).unwrap();
        IntegrityEngine::new().evaluate(&snapshot)
    }

    #[test]
    fn test_default_engine_runs_full_rule_set() {
        let engine = IntegrityEngine::new();
        let ids: Vec<RuleId> = engine.rules().iter().map(|r| r.id).collect();

        assert_eq!(ids.len(), 10);
        assert_eq!(ids[0], RuleId::ChunkIdUnique);
        assert_eq!(ids[9], RuleId::PctOrdering);
    }

    #[test]
    fn test_consistent_dataset_has_no_diagnostics() {
        assert!(evaluate(consistent()).is_empty());
    }

    #[test]
    fn test_missing_descriptions_only_trigger_completeness() {
        let mut data = consistent();
        data["characters"]["descriptions"]["kurtz"] = json!([]);
        data["locations"]["descriptions"]
            .as_object_mut()
            .unwrap()
            .remove("station");

        let diagnostics = evaluate(data);

        assert!(diagnostics
            .iter()
            .all(|d| d.rule() == RuleId::DescriptionCompleteness));
        assert_eq!(
            messages(&diagnostics),
            [
                "Character 'kurtz' has no descriptions",
                "Location 'station' has no descriptions"
            ]
        );
    }

    #[test]
    fn test_removed_character_gives_single_reference_diagnostic() {
        let mut data = consistent();
        data["characters"]["meta"]
            .as_object_mut()
            .unwrap()
            .remove("harlequin");
        data["characters"]["descriptions"]
            .as_object_mut()
            .unwrap()
            .remove("harlequin");

        let diagnostics = evaluate(data);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule(), RuleId::ChunkCharacterRefs);
        assert_eq!(diagnostics[0].subject().id, "c2");
        assert_eq!(
            diagnostics[0].message(),
            "Chunk c2: character 'harlequin' not in character meta"
        );
    }

    #[test]
    fn test_removed_location_gives_single_reference_diagnostic() {
        let mut data = consistent();
        data["locations"]["meta"]
            .as_object_mut()
            .unwrap()
            .remove("thames");
        data["locations"]["descriptions"]
            .as_object_mut()
            .unwrap()
            .remove("thames");

        let diagnostics = evaluate(data);

        assert_eq!(
            messages(&diagnostics),
            ["Chunk c1: location 'thames' not in location meta"]
        );
        assert_eq!(diagnostics[0].rule(), RuleId::ChunkLocationRefs);
    }

    #[test]
    fn test_orphan_location_description_only_triggers_owner_rule() {
        let mut data = consistent();
        data["locations"]["descriptions"]["congo"] =
            json!([{ "from": "c2", "desc": "The great river." }]);

        let diagnostics = evaluate(data);

        assert_eq!(
            messages(&diagnostics),
            ["Location description for 'congo' not in location meta"]
        );
        assert_eq!(diagnostics[0].rule(), RuleId::DescriptionOwner);
    }

    #[test]
    fn test_numerically_equal_parts_count_once() {
        let mut data = consistent();
        data["meta"]["sections"] = json!(["I"]);
        data["chunks"][2]["part"] = json!(1.0);

        assert!(evaluate(data).is_empty());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let snapshot = scenario_missing_summary_and_label();
        let engine = IntegrityEngine::new();

        assert_eq!(engine.evaluate(&snapshot), engine.evaluate(&snapshot));
    }

    #[test]
    fn test_evaluation_does_not_mutate_snapshot() {
        let snapshot = scenario_missing_summary_and_label();
        let before = snapshot.clone();

        IntegrityEngine::new().evaluate(&snapshot);

        assert_eq!(snapshot, before);
    }
}
