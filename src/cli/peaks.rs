//! # peaks 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/peaks.rs`

use clap::Args;
use std::path::PathBuf;

/// peaks 子命令参数
#[derive(Args, Debug)]
pub struct PeaksArgs {
    /// Input XRD data file (.ras, .asc, .txt)
    pub input: PathBuf,

    /// Minimum number of samples between neighbouring peaks
    #[arg(short, long, default_value_t = 10)]
    pub distance: usize,

    /// Minimum intensity for a peak to be kept
    #[arg(short, long, default_value_t = 0.0)]
    pub threshold: f64,

    /// Export detected peaks to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
