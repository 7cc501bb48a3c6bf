//! Bookcheck - 书籍数据集完整性校验 CLI

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use bookcheck::config::{load_config_from_path, print_config, LogConfig};
use bookcheck::infrastructure::cli::{execute, Cli, CliState};
use bookcheck::infrastructure::report::EXIT_PRECONDITION;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("ERROR: {:#}", err);
            ExitCode::from(EXIT_PRECONDITION)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    // 加载配置（优先级：命令行 > 环境变量 > 配置文件 > 默认值）
    let mut config =
        load_config_from_path(cli.config.as_deref()).context("Failed to load config")?;
    cli.apply_overrides(&mut config);

    init_tracing(&config.log);
    print_config(&config);

    let state = CliState::from_config(&config);
    let output = execute(&cli.command, &state)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.stdout.as_bytes())
        .context("Failed to write report")?;
    if !output.stdout.is_empty() && !output.stdout.ends_with('\n') {
        writeln!(stdout).context("Failed to write report")?;
    }
    if !output.stderr.is_empty() {
        eprintln!("{}", output.stderr.trim_end());
    }

    Ok(output.exit_code)
}

/// 初始化日志，输出到 stderr，RUST_LOG 优先于配置
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},bookcheck={}", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
