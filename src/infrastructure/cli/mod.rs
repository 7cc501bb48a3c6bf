//! CLI Layer - 命令行入口
//!
//! 命令:
//! - validate <SLUG>        结构校验（不含摘要）
//! - crosscheck [SLUG]      交叉检查（需要 summaries.json，附带统计）
//! - list                   列出数据目录下的书籍

mod args;
mod commands;
mod state;

pub use args::{Cli, Commands};
pub use commands::{execute, CommandOutput};
pub use state::CliState;
