//! # anode 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/anode.rs`

use clap::Args;
use std::path::PathBuf;

/// anode 子命令参数
///
/// 波长既可以显式给出，也可以取自一个已解析文件的头部。
#[derive(Args, Debug)]
pub struct AnodeArgs {
    /// Take wavelengths from the header of this XRD data file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// K-alpha1 wavelength (Angstrom)
    #[arg(long)]
    pub alpha1: Option<f64>,

    /// K-alpha2 wavelength (Angstrom)
    #[arg(long)]
    pub alpha2: Option<f64>,

    /// K-beta wavelength (Angstrom)
    #[arg(long)]
    pub beta: Option<f64>,

    /// Matching tolerance (Angstrom)
    #[arg(long, default_value_t = 0.001)]
    pub tolerance: f64,
}
