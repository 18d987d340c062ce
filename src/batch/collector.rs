//! # 文件收集器
//!
//! 根据输入目录和文件名模式收集待处理文件列表。
//!
//! ## 功能
//! - 枚举目录直接子项（不递归）
//! - 只保留普通文件（目录、悬空符号链接、特殊文件被静默跳过）
//! - glob 模式匹配文件名
//! - 排序输出，保证枚举顺序在多次运行间稳定
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `glob::Pattern` 匹配文件名

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
    /// 文件名匹配模式
    pattern: Pattern,
}

impl FileCollector {
    /// 创建新的文件收集器，默认匹配 `*.txt`
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            pattern: Pattern::new("*.txt").unwrap(),
        }
    }

    /// 设置文件名匹配模式
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// 收集所有匹配的文件，按路径排序
    ///
    /// 目录不存在或不可读时返回空列表；存在性检查由调用方在
    /// 收集之前完成。
    pub fn collect(&self) -> Vec<PathBuf> {
        if !self.input.is_dir() {
            return vec![];
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// 检查文件名是否匹配模式
    fn matches(&self, path: &Path) -> bool {
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => self.pattern.matches(name),
            None => false,
        }
    }
}
