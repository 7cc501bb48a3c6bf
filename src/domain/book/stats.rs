//! Book Context - 统计信息

use serde::{Deserialize, Serialize};

use super::BookSnapshot;

/// 书籍快照的汇总统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookStats {
    pub chunks: usize,
    pub characters: usize,
    pub locations: usize,
    /// 未加载摘要时为 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summaries: Option<usize>,
    /// (最小, 最大) 进度百分比；无片段时为 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_range: Option<(f64, f64)>,
    pub chunk_ids: Vec<String>,
}

impl BookStats {
    pub fn from_snapshot(snapshot: &BookSnapshot) -> Self {
        let pct_range = snapshot.chunks.iter().map(|c| c.pct()).fold(None, |range, pct| {
            Some(match range {
                None => (pct, pct),
                Some((min, max)) => (f64::min(min, pct), f64::max(max, pct)),
            })
        });

        Self {
            chunks: snapshot.chunks.len(),
            characters: snapshot.characters.len(),
            locations: snapshot.locations.len(),
            summaries: snapshot.summaries.as_ref().map(Vec::len),
            pct_range,
            chunk_ids: snapshot.chunks.iter().map(|c| c.id().to_string()).collect(),
        }
    }
}
