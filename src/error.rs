//! # 统一错误处理模块
//!
//! 定义 Batchrun 的所有错误类型，使用 `thiserror` 派生。
//!
//! 只有启动阶段的配置错误才是致命的；单个文件的外部处理失败
//! 由 `batch::ProcessStatus` 表达，不会出现在这里。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Batchrun 统一错误类型
#[derive(Error, Debug)]
pub enum BatchrunError {
    // ─────────────────────────────────────────────────────────────
    // 配置错误（启动时致命）
    // ─────────────────────────────────────────────────────────────
    #[error("Input directory not found: {path}\nCreate it (e.g. 'mkdir {path}') and place your input files inside")]
    InputDirNotFound { path: String },

    #[error("Input path exists but is not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BatchrunError>;
