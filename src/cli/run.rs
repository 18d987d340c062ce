//! # run 子命令 CLI 定义
//!
//! 批量调用外部处理器处理输入文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use clap::Args;
use std::path::PathBuf;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Directory containing the input files
    #[arg(long, default_value = "inputs")]
    pub inputs: PathBuf,

    /// File name pattern selecting which entries are processed
    #[arg(long, default_value = "*.txt")]
    pub pattern: String,

    /// Processor command line; each input file's path is appended
    /// as the final argument of every invocation
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}
