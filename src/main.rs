//! # Batchrun - 批量输入文件处理执行器
//!
//! 将"遍历 inputs 目录并逐个调用外部处理命令"的散落脚本用 Rust 重构，
//! 统一成单一可执行文件。
//!
//! ## 子命令
//! - `run` - 枚举输入目录中的 .txt 文件，逐个串行调用外部处理器
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── batch/      (文件收集、外部处理器、串行执行器)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
