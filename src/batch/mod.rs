//! # 批量处理模块
//!
//! 目录模式下收集 XRD 数据文件并并行处理。
//!
//! ## 功能
//! - 按支持的扩展名收集文件（walkdir，可选递归）
//! - 基于 rayon 的并行迭代与进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/parse.rs` 调用
//! - 使用 `models/scan.rs` 的 XrdFormat 判定扩展名
//! - 使用 `utils/progress.rs` 创建进度条

use crate::models::XrdFormat;
use crate::utils::progress;

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 处理成功
    Success(String),
    /// 跳过（如输出已存在）
    Skipped(String),
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    pub success: usize,
    pub skipped: usize,
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(_) => self.success += 1,
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 收集目录下所有受支持扩展名的 XRD 数据文件
///
/// 单文件输入原样返回；识别依据是 `XrdFormat::from_extension`，
/// 与分发器一致。
pub fn collect_scan_files(input: &Path, recursive: bool) -> Vec<PathBuf> {
    if input.is_file() {
        return vec![input.to_path_buf()];
    }

    if !input.is_dir() {
        return vec![];
    }

    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut files: Vec<PathBuf> = WalkDir::new(input)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| XrdFormat::from_extension(e.path()).is_some())
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}

/// 并行处理文件列表
pub fn run_parallel<F>(files: Vec<PathBuf>, jobs: usize, processor: F) -> BatchResult
where
    F: Fn(&PathBuf) -> ProcessResult + Sync + Send,
{
    let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
    let pb = progress::create_progress_bar(files.len() as u64, "Parsing");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .expect("failed to build thread pool");

    let results: Vec<ProcessResult> = pool.install(|| {
        files
            .par_iter()
            .map(|file| {
                let result = processor(file);
                pb.inc(1);
                result
            })
            .collect()
    });

    pb.finish_and_clear();

    let mut batch_result = BatchResult::default();
    for result in results {
        batch_result.merge(result);
    }

    batch_result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_scan_files_by_extension() {
        let dir = std::env::temp_dir().join("xrdkit_batch_collect_test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("a.ras"), "*RAS_DATA_START\n").unwrap();
        std::fs::write(dir.join("b.asc"), "*TYPE = Raw\n").unwrap();
        std::fs::write(dir.join("c.txt"), "2theta\tintensity\n").unwrap();
        std::fs::write(dir.join("ignore.csv"), "x,y\n").unwrap();

        let files = collect_scan_files(&dir, false);
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|f| XrdFormat::from_extension(f).is_some()));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_collect_single_file() {
        let path = std::env::temp_dir().join("xrdkit_batch_single_test.ras");
        std::fs::write(&path, "*RAS_DATA_START\n").unwrap();

        let files = collect_scan_files(&path, false);
        assert_eq!(files, vec![path.clone()]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_batch_result_merge() {
        let mut result = BatchResult::default();
        result.merge(ProcessResult::Success("a".to_string()));
        result.merge(ProcessResult::Skipped("b".to_string()));
        result.merge(ProcessResult::Failed("c".to_string(), "bad".to_string()));

        assert_eq!(result.total(), 3);
        assert_eq!(result.success, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.failures.len(), 1);
    }
}
