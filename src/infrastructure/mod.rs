//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现，以及命令行入口和报告输出

pub mod cli;
pub mod memory;
pub mod persistence;
pub mod report;

pub use cli::{Cli, CliState};
pub use memory::InMemoryBookSource;
pub use persistence::JsonBookSource;
pub use report::ReportEmitter;
