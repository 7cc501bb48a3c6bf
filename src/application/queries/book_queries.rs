//! Book Queries

use serde::{Deserialize, Serialize};

/// 校验模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// 结构校验：不加载摘要
    Validate,
    /// 交叉检查：加载 summaries.json，附带统计信息
    CrossCheck,
}

impl CheckMode {
    pub fn includes_summaries(&self) -> bool {
        matches!(self, CheckMode::CrossCheck)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckMode::Validate => "validate",
            CheckMode::CrossCheck => "crosscheck",
        }
    }
}

/// 校验一本书查询
#[derive(Debug, Clone)]
pub struct ValidateBook {
    pub slug: String,
    pub mode: CheckMode,
}

/// 列出所有书籍查询
#[derive(Debug, Clone)]
pub struct ListBooks;
