//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `run`: 批量处理输入目录中的文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: run

pub mod run;

use clap::{Parser, Subcommand};

/// Batchrun - 批量输入文件处理执行器
#[derive(Parser)]
#[command(name = "batchrun")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A sequential batch runner that feeds input files to an external processor", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Run an external processor once per matching input file
    Run(run::RunArgs),
}
