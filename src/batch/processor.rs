//! # 外部处理器
//!
//! 将"对单个文件调用一次外部命令"抽象为可替换的能力。
//!
//! ## 功能
//! - `FileProcessor` trait：接受一个路径，返回完成信号
//! - `CommandProcessor`：生产实现，同步调用外部命令并等待退出
//! - 测试中可用任意 mock 实现替换，无需真实子进程
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `commands/run.rs` 使用
//! - 使用 `std::process::Command`

use std::path::Path;
use std::process::Command;

/// 单次调用的完成信号
///
/// 执行器的控制流不依赖这个值（单文件失败不会中止批次），
/// 但汇总报告和测试可以观察它。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessStatus {
    /// 处理器以零退出码结束
    Success,
    /// 处理器以非零退出码结束（退出码可能不可用，如被信号终止）
    ExitFailure(Option<i32>),
    /// 处理器无法启动（命令不存在、权限不足等）
    LaunchFailure(String),
}

impl ProcessStatus {
    /// 是否为成功完成
    pub fn is_success(&self) -> bool {
        matches!(self, ProcessStatus::Success)
    }
}

/// 逐文件处理能力
pub trait FileProcessor {
    /// 同步处理一个文件，返回完成信号
    fn process(&self, path: &Path) -> ProcessStatus;
}

/// 调用外部命令的生产实现
///
/// 文件路径作为最后一个参数原样追加（`Command` 的参数传递
/// 不做分词和 glob 展开，含空格的路径保持为单个参数）。
/// 子进程继承执行器的标准输出/错误流，处理器自身的输出直接透传。
pub struct CommandProcessor {
    /// 外部命令
    program: String,
    /// 追加文件路径之前的固定参数
    args: Vec<String>,
}

impl CommandProcessor {
    /// 创建新的外部命令处理器
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// 设置固定参数
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }
}

impl FileProcessor for CommandProcessor {
    fn process(&self, path: &Path) -> ProcessStatus {
        match Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
        {
            Ok(status) if status.success() => ProcessStatus::Success,
            Ok(status) => ProcessStatus::ExitFailure(status.code()),
            Err(e) => ProcessStatus::LaunchFailure(e.to_string()),
        }
    }
}
