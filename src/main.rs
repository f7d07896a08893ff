//! # xrdkit - XRD 数据文件解析与分析工具箱
//!
//! 从多种厂商格式（.ras/.asc/.txt）的 X 射线衍射仪输出文件中
//! 提取标定元数据与衍射强度曲线，并提供配套分析工具。
//!
//! ## 子命令
//! - `parse`   - 解析数据文件，打印元数据并导出曲线
//! - `peaks`   - 峰检测
//! - `anode`   - 阳极材料识别
//! - `spacing` - 2θ → d 间距转换
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/  (格式解析器 + 分发器)
//!   │     ├── analysis/ (阳极查表、Bragg 转换、峰检测)
//!   │     └── models/   (数据模型)
//!   ├── batch/      (批量收集与并行处理)
//!   ├── export.rs   (CSV 导出)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod analysis;
mod batch;
mod cli;
mod commands;
mod error;
mod export;
mod models;
mod parsers;
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
