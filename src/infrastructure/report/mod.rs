//! Report Layer - 报告输出
//!
//! 将校验报告渲染为文本或 JSON，并决定进程退出码

mod console;

pub use console::{exit_code, ReportEmitter, EXIT_PASS, EXIT_PRECONDITION, EXIT_VIOLATIONS};
