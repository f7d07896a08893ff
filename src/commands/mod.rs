//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `analysis/`, `utils/`
//! - 子模块: parse, peaks, anode, spacing

pub mod anode;
pub mod parse;
pub mod peaks;
pub mod spacing;

use crate::cli::Commands;
use crate::error::{Result, XrdKitError};
use crate::models::XrdScan;
use crate::parsers;
use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Parse(args) => parse::execute(args),
        Commands::Peaks(args) => peaks::execute(args),
        Commands::Anode(args) => anode::execute(args),
        Commands::Spacing(args) => spacing::execute(args),
    }
}

/// 解析单个文件，把分发器的「无结果」转换为命令行友好的错误
pub(crate) fn load_scan(path: &Path) -> Result<XrdScan> {
    if !path.exists() {
        return Err(XrdKitError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    parsers::parse_xrd_file(path)?.ok_or_else(|| {
        XrdKitError::UnsupportedFormat(format!(
            "Cannot determine XRD format for: {}",
            path.display()
        ))
    })
}
