//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 命令行参数（由 main 在加载后覆盖）
//! 2. 环境变量
//! 3. 配置文件（bookcheck.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::domain::book::BookSlug;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["bookcheck", "bookcheck.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "BOOKCHECK";

/// 加载应用配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
///
/// # 环境变量示例
/// - `BOOKCHECK_DATA__DIR=/srv/books`
/// - `BOOKCHECK_DATA__DEFAULT_SLUG=lord-jim`
/// - `BOOKCHECK_REPORT__FORMAT=json`
/// - `BOOKCHECK_LOG__LEVEL=debug`
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("data.dir", "data")?
        .set_default("data.default_slug", "heart-of-darkness")?
        .set_default("report.format", "text")?
        .set_default("log.level", "warn")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 层级分隔符: __ (双下划线)
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.data.dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Data directory cannot be empty".to_string(),
        ));
    }

    if let Err(e) = BookSlug::new(config.data.default_slug.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "Invalid default slug: {}",
            e
        )));
    }

    if config.log.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Log level cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（调试日志）
pub fn print_config(config: &AppConfig) {
    tracing::debug!("=== Application Configuration ===");
    tracing::debug!("Data Directory: {:?}", config.data.dir);
    tracing::debug!("Default Slug: {}", config.data.default_slug);
    tracing::debug!("Report Format: {:?}", config.report.format);
    tracing::debug!("Log Level: {}", config.log.level);
    tracing::debug!("=================================");
}
