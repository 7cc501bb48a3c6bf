//! Bookcheck - 注释书籍数据集的引用完整性校验
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Book Context: 片段、人物、地点、摘要及书籍快照
//! - Integrity Context: 实体索引、规则集、诊断
//!
//! 应用层 (application/):
//! - Ports: 端口定义（BookSource）
//! - Queries: 校验与列表查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - Persistence: JSON 文档目录加载
//! - Memory: 内存书籍来源（测试用）
//! - Report: 文本 / JSON 报告
//! - CLI: clap 命令行

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
