//! # 批量处理模块
//!
//! 提供统一的文件批量处理能力。
//!
//! ## 功能
//! - 收集匹配文件列表
//! - 外部处理器抽象（可在测试中替换）
//! - 串行逐文件执行
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用
//! - 使用 `glob` 进行文件名匹配
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod processor;
pub mod runner;

pub use collector::FileCollector;
pub use processor::{CommandProcessor, FileProcessor, ProcessStatus};
pub use runner::{BatchResult, BatchRunner, ProcessResult};
