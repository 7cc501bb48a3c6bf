//! 命令行参数定义

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{AppConfig, ReportFormat};

#[derive(Debug, Parser)]
#[command(name = "bookcheck")]
#[command(version, about = "Referential integrity checker for annotated book datasets")]
#[command(
    after_help = "Environment:\n  BOOKCHECK_DATA__DIR          Book data root\n  BOOKCHECK_DATA__DEFAULT_SLUG Dataset checked by `crosscheck` without a slug\n  RUST_LOG                     Log filter override"
)]
pub struct Cli {
    /// 书籍数据根目录（覆盖配置）
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// 配置文件路径
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 以 JSON 输出报告
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check structure and cross-references of one book
    Validate { slug: String },
    /// Validate including summaries and print dataset statistics
    Crosscheck { slug: Option<String> },
    /// List books under the data directory
    List,
}

impl Cli {
    /// 命令行参数优先级最高，覆盖已加载的配置
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(dir) = &self.data_dir {
            config.data.dir = dir.clone();
        }
        if self.json {
            config.report.format = ReportFormat::Json;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from(["bookcheck", "validate", "lord-jim"]).unwrap();
        assert!(matches!(cli.command, Commands::Validate { ref slug } if slug == "lord-jim"));
        assert!(!cli.json);
    }

    #[test]
    fn test_validate_requires_slug() {
        assert!(Cli::try_parse_from(["bookcheck", "validate"]).is_err());
    }

    #[test]
    fn test_crosscheck_slug_is_optional() {
        let cli = Cli::try_parse_from(["bookcheck", "crosscheck"]).unwrap();
        assert!(matches!(cli.command, Commands::Crosscheck { slug: None }));
    }

    #[test]
    fn test_global_flags_override_config() {
        let cli = Cli::try_parse_from(["bookcheck", "list", "--json", "--data-dir", "/srv/books"])
            .unwrap();
        let mut config = AppConfig::default();

        cli.apply_overrides(&mut config);

        assert_eq!(config.data.dir, PathBuf::from("/srv/books"));
        assert_eq!(config.report.format, ReportFormat::Json);
    }
}
