//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 数据目录配置
    #[serde(default)]
    pub data: DataConfig,

    /// 报告输出配置
    #[serde(default)]
    pub report: ReportConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 数据目录配置
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// 书籍数据根目录，每本书一个子目录
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    /// 交叉检查未指定书籍时使用的数据集
    #[serde(default = "default_slug")]
    pub default_slug: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_slug() -> String {
    "heart-of-darkness".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            default_slug: default_slug(),
        }
    }
}

/// 报告输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// 人类可读的文本
    #[default]
    Text,
    /// 完整报告的 JSON 序列化
    Json,
}

/// 报告输出配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.data.dir, PathBuf::from("data"));
        assert_eq!(config.data.default_slug, "heart-of-darkness");
        assert_eq!(config.report.format, ReportFormat::Text);
        assert_eq!(config.log.level, "warn");
        assert!(!config.log.json);
    }
}
