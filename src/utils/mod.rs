//! # 工具模块
//!
//! 终端输出与进度条等通用辅助。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/`, `batch/` 使用
//! - 子模块: output, progress

pub mod output;
pub mod progress;
