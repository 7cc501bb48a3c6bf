//! CLI Command Handlers

use anyhow::Context;

use super::args::Commands;
use super::state::CliState;
use crate::application::{ApplicationError, CheckMode, ListBooks, ValidateBook};
use crate::config::ReportFormat;
use crate::infrastructure::report::{exit_code, EXIT_PASS, EXIT_PRECONDITION};

/// 一次命令执行的输出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: u8,
}

impl CommandOutput {
    fn stdout(text: String, exit_code: u8) -> Self {
        Self {
            stdout: text,
            stderr: String::new(),
            exit_code,
        }
    }

    fn stderr(text: String, exit_code: u8) -> Self {
        Self {
            stdout: String::new(),
            stderr: text,
            exit_code,
        }
    }
}

/// 执行命令
///
/// 完整性违规和前置条件失败都体现在输出和退出码中；只有报告渲染失败返回 Err。
pub fn execute(command: &Commands, state: &CliState) -> anyhow::Result<CommandOutput> {
    match command {
        Commands::Validate { slug } => validate(state, slug, CheckMode::Validate),
        Commands::Crosscheck { slug } => {
            let slug = slug.as_deref().unwrap_or(state.default_slug.as_str());
            validate(state, slug, CheckMode::CrossCheck)
        }
        Commands::List => list(state),
    }
}

fn validate(state: &CliState, slug: &str, mode: CheckMode) -> anyhow::Result<CommandOutput> {
    let query = ValidateBook {
        slug: slug.to_string(),
        mode,
    };

    match state.validate_handler.handle(query) {
        Ok(report) => {
            let text = state
                .emitter
                .render(&report)
                .context("Failed to render validation report")?;
            Ok(CommandOutput::stdout(text, exit_code(&report)))
        }
        Err(err) => failure(state, Some(slug), &err),
    }
}

fn list(state: &CliState) -> anyhow::Result<CommandOutput> {
    match state.list_handler.handle(ListBooks) {
        Ok(books) => {
            let text = state
                .emitter
                .render_books(&books)
                .context("Failed to render book list")?;
            Ok(CommandOutput::stdout(text, EXIT_PASS))
        }
        Err(err) => failure(state, None, &err),
    }
}

/// JSON 模式下失败信息写到 stdout，便于脚本统一解析
fn failure(
    state: &CliState,
    slug: Option<&str>,
    err: &ApplicationError,
) -> anyhow::Result<CommandOutput> {
    tracing::error!(error = %err, "Validation could not run");

    let text = state
        .emitter
        .render_failure(slug, err)
        .context("Failed to render error")?;

    Ok(match state.emitter.format() {
        ReportFormat::Json => CommandOutput::stdout(text, EXIT_PRECONDITION),
        ReportFormat::Text => CommandOutput::stderr(text, EXIT_PRECONDITION),
    })
}
