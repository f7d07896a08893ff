//! # 数据模型模块
//!
//! 定义 XRD 扫描数据的统一表示。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `analysis/`, `commands/` 模块使用
//! - 子模块: scan

pub mod scan;

pub use scan::{AscScan, RasScan, ScanData, TwoThetaRange, TxtScan, XrdFormat, XrdScan};
