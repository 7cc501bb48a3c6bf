//! CLI State
//!
//! 命令执行所需的查询处理器与渲染器

use std::sync::Arc;

use crate::application::{BookSourcePort, ListBooksHandler, ValidateBookHandler};
use crate::config::AppConfig;
use crate::infrastructure::persistence::JsonBookSource;
use crate::infrastructure::report::ReportEmitter;

pub struct CliState {
    pub default_slug: String,
    pub emitter: ReportEmitter,

    // ========== Query Handlers ==========
    pub validate_handler: ValidateBookHandler,
    pub list_handler: ListBooksHandler,
}

impl CliState {
    pub fn new(source: Arc<dyn BookSourcePort>, config: &AppConfig) -> Self {
        Self {
            default_slug: config.data.default_slug.clone(),
            emitter: ReportEmitter::new(config.report.format),
            validate_handler: ValidateBookHandler::new(source.clone()),
            list_handler: ListBooksHandler::new(source),
        }
    }

    /// 以配置中的数据目录创建
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(JsonBookSource::new(&config.data.dir)), config)
    }
}
