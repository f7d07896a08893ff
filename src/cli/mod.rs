//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `parse`: 解析 XRD 数据文件，打印元数据并导出曲线
//! - `peaks`: 峰检测
//! - `anode`: 阳极材料识别
//! - `spacing`: 2θ → d 间距转换
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: parse, peaks, anode, spacing

pub mod anode;
pub mod parse;
pub mod peaks;
pub mod spacing;

use clap::{Parser, Subcommand};

/// xrdkit - XRD 数据文件解析与分析工具箱
#[derive(Parser)]
#[command(name = "xrdkit")]
#[command(version)]
#[command(about = "A unified X-ray diffraction data file parsing and analysis toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Parse XRD data files (.ras, .asc, .txt) and export curves
    Parse(parse::ParseArgs),

    /// Detect diffraction peaks in a parsed curve
    Peaks(peaks::PeaksArgs),

    /// Identify the anode material from characteristic wavelengths
    Anode(anode::AnodeArgs),

    /// Convert two-theta angles to d-spacings via Bragg's law
    Spacing(spacing::SpacingArgs),
}
