//! # parse 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/parse.rs`

use clap::Args;
use std::path::PathBuf;

/// parse 子命令参数
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Input: XRD data file or directory containing data files
    pub input: PathBuf,

    /// Output CSV file (single mode) or directory (batch mode, default '.')
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Tolerance for anode material identification (Angstrom)
    #[arg(long, default_value_t = 0.001)]
    pub tolerance: f64,

    // ─────────────────────────────────────────────────────────────
    // 批量处理参数
    // ─────────────────────────────────────────────────────────────
    /// Recurse into subdirectories (batch mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto, batch mode only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files (batch mode)
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
