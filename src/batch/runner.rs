//! # 批量执行器
//!
//! 串行执行批量处理任务，一次一个文件，等待完成后再继续。
//!
//! ## 功能
//! - 逐文件打印开始横幅与分隔线
//! - 进度条显示
//! - 错误收集与汇总统计（单文件失败不会中止批次）
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `batch/processor.rs` 的 `FileProcessor`
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 打印横幅

use crate::batch::processor::{FileProcessor, ProcessStatus};
use crate::utils::{output, progress};

use std::path::PathBuf;

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 处理成功
    Success(String),
    /// 处理失败
    Failed(String, String), // (文件路径, 失败原因)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(_) => self.success += 1,
            ProcessResult::Failed(path, reason) => {
                self.failed += 1;
                self.failures.push((path, reason));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }
}

/// 串行批量执行器
#[derive(Default)]
pub struct BatchRunner;

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new() -> Self {
        Self
    }

    /// 逐个处理文件列表，按给定顺序，一次一个
    ///
    /// 每个文件：开始横幅 -> 同步调用处理器 -> 分隔线。
    /// 处理器失败只记录到统计中，批次继续。
    pub fn run<P>(&self, files: &[PathBuf], processor: &P) -> BatchResult
    where
        P: FileProcessor + ?Sized,
    {
        let pb = progress::create_progress_bar(files.len() as u64, "Processing");

        let mut batch = BatchResult::default();

        for file in files {
            let display = file.display().to_string();

            pb.suspend(|| output::print_processing(&display));

            let status = processor.process(file);

            let result = match status {
                ProcessStatus::Success => ProcessResult::Success(display.clone()),
                ProcessStatus::ExitFailure(code) => {
                    let reason = match code {
                        Some(c) => format!("processor exited with code {}", c),
                        None => "processor terminated without an exit code".to_string(),
                    };
                    ProcessResult::Failed(display.clone(), reason)
                }
                ProcessStatus::LaunchFailure(reason) => {
                    ProcessResult::Failed(display.clone(), format!("failed to launch: {}", reason))
                }
            };

            if let ProcessResult::Failed(_, reason) = &result {
                pb.suspend(|| output::print_warning(&format!("{}: {}", display, reason)));
            }

            batch.merge(result);

            pb.suspend(output::print_separator);
            pb.inc(1);
        }

        pb.finish_and_clear();

        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::Path;

    /// 记录调用顺序的 mock 处理器，可指定第几次调用失败
    struct RecordingProcessor {
        calls: RefCell<Vec<PathBuf>>,
        fail_on: Option<usize>, // 0-based call index
    }

    impl RecordingProcessor {
        fn new(fail_on: Option<usize>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_on,
            }
        }
    }

    impl FileProcessor for RecordingProcessor {
        fn process(&self, path: &Path) -> ProcessStatus {
            let index = self.calls.borrow().len();
            self.calls.borrow_mut().push(path.to_path_buf());
            match self.fail_on {
                Some(n) if n == index => ProcessStatus::ExitFailure(Some(1)),
                _ => ProcessStatus::Success,
            }
        }
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn invokes_processor_once_per_file_in_order() {
        let files = paths(&["inputs/a.txt", "inputs/b file.txt", "inputs/c.txt"]);
        let processor = RecordingProcessor::new(None);

        let result = BatchRunner::new().run(&files, &processor);

        assert_eq!(*processor.calls.borrow(), files);
        assert_eq!(result.success, 3);
        assert_eq!(result.failed, 0);
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn failure_mid_batch_does_not_stop_remaining_files() {
        let files = paths(&["inputs/1.txt", "inputs/2.txt", "inputs/3.txt"]);
        let processor = RecordingProcessor::new(Some(1));

        let result = BatchRunner::new().run(&files, &processor);

        assert_eq!(processor.calls.borrow().len(), 3);
        assert_eq!(result.success, 2);
        assert_eq!(result.failed, 1);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].0, "inputs/2.txt");
    }

    #[test]
    fn empty_file_set_means_zero_invocations() {
        let processor = RecordingProcessor::new(None);

        let result = BatchRunner::new().run(&[], &processor);

        assert!(processor.calls.borrow().is_empty());
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn launch_failure_is_tallied_with_reason() {
        struct NeverLaunches;
        impl FileProcessor for NeverLaunches {
            fn process(&self, _path: &Path) -> ProcessStatus {
                ProcessStatus::LaunchFailure("no such command".to_string())
            }
        }

        let files = paths(&["inputs/a.txt"]);
        let result = BatchRunner::new().run(&files, &NeverLaunches);

        assert_eq!(result.failed, 1);
        assert!(result.failures[0].1.contains("failed to launch"));
    }

    #[test]
    fn batch_result_merge_and_total() {
        let mut result = BatchResult::default();
        result.merge(ProcessResult::Success("a.txt".to_string()));
        result.merge(ProcessResult::Failed(
            "b.txt".to_string(),
            "processor exited with code 2".to_string(),
        ));

        assert_eq!(result.success, 1);
        assert_eq!(result.failed, 1);
        assert_eq!(result.total(), 2);
        assert_eq!(result.failures[0].0, "b.txt");
    }
}
