//! # run 命令实现
//!
//! 枚举输入目录中的匹配文件，逐个串行调用外部处理器。
//!
//! ## 功能
//! - 校验输入目录与文件名模式
//! - 收集匹配文件（空集合不是错误）
//! - 串行执行，单文件失败不中止批次
//! - 汇总报告，失败文件以表格列出
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `batch/` 模块进行收集与执行
//! - 使用 `utils/output.rs`

use crate::batch::{BatchResult, BatchRunner, CommandProcessor, FileCollector};
use crate::cli::run::RunArgs;
use crate::error::{BatchrunError, Result};
use crate::utils::output;

use glob::Pattern;
use tabled::{Table, Tabled};

/// 失败文件报告行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "Input File")]
    file: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<()> {
    output::print_header("Batch Input Processing");

    // 验证输入目录
    if !args.inputs.exists() {
        return Err(BatchrunError::InputDirNotFound {
            path: args.inputs.display().to_string(),
        });
    }
    if !args.inputs.is_dir() {
        return Err(BatchrunError::NotADirectory {
            path: args.inputs.display().to_string(),
        });
    }

    // 验证文件名模式
    let pattern = Pattern::new(&args.pattern).map_err(|e| BatchrunError::InvalidPattern {
        pattern: args.pattern.clone(),
        reason: e.to_string(),
    })?;

    // 解析处理器命令行
    let (program, fixed_args) = args
        .command
        .split_first()
        .ok_or_else(|| BatchrunError::InvalidArgument("empty processor command".to_string()))?;

    // 收集文件（一次性快照，运行期间不刷新）
    let files = FileCollector::new(args.inputs.clone())
        .with_pattern(pattern)
        .collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matching '{}' found in '{}'",
            args.pattern,
            args.inputs.display()
        ));
        output::print_done("Batch complete: nothing to process");
        return Ok(());
    }

    output::print_info(&format!(
        "Found {} input files in '{}'",
        files.len(),
        args.inputs.display()
    ));

    let processor = CommandProcessor::new(program.as_str()).with_args(fixed_args.iter().cloned());
    let result = BatchRunner::new().run(&files, &processor);

    report(&result);

    Ok(())
}

/// 打印最终汇总
fn report(result: &BatchResult) {
    output::print_done(&format!(
        "Batch complete: {} processed, {} succeeded, {} failed",
        result.total(),
        result.success,
        result.failed
    ));

    if !result.failures.is_empty() {
        let rows: Vec<FailureRow> = result
            .failures
            .iter()
            .map(|(file, reason)| FailureRow {
                file: file.clone(),
                reason: reason.clone(),
            })
            .collect();

        println!("{}", Table::new(rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn run_args(inputs: PathBuf, command: &[&str]) -> RunArgs {
        RunArgs {
            inputs,
            pattern: "*.txt".to_string(),
            command: command.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn missing_input_directory_is_fatal() {
        let args = run_args(PathBuf::from("no/such/inputs"), &["true"]);
        match execute(args) {
            Err(BatchrunError::InputDirNotFound { path }) => {
                assert!(path.contains("no/such/inputs"));
            }
            other => panic!("expected InputDirNotFound, got {:?}", other.err()),
        }
    }

    #[test]
    fn input_path_that_is_a_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("inputs");
        fs::write(&file, b"not a directory").unwrap();

        let args = run_args(file, &["true"]);
        assert!(matches!(
            execute(args),
            Err(BatchrunError::NotADirectory { .. })
        ));
    }

    #[test]
    fn invalid_pattern_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let mut args = run_args(tmp.path().to_path_buf(), &["true"]);
        args.pattern = "[".to_string();

        assert!(matches!(
            execute(args),
            Err(BatchrunError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn empty_processor_command_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let args = run_args(tmp.path().to_path_buf(), &[]);

        assert!(matches!(
            execute(args),
            Err(BatchrunError::InvalidArgument(_))
        ));
    }

    #[test]
    fn empty_input_set_is_not_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("notes.md"), b"not an input").unwrap();

        let args = run_args(tmp.path().to_path_buf(), &["true"]);
        assert!(execute(args).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn batch_with_failing_processor_still_succeeds() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), b"a").unwrap();
        fs::write(tmp.path().join("b.txt"), b"b").unwrap();

        // per-file failures never surface as a command error
        let args = run_args(tmp.path().to_path_buf(), &["false"]);
        assert!(execute(args).is_ok());
    }
}
