//! # 分析工具模块
//!
//! 解析结果的下游消费者：阳极材料识别、Bragg 角度/间距转换、
//! 峰检测。
//!
//! ## 子模块
//! - `anode`: 特征波长 → 阳极材料查表
//! - `bragg`: 2θ → d 间距转换
//! - `peaks`: 局部极大值峰检测
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型

pub mod anode;
pub mod bragg;
pub mod peaks;

pub use anode::{retrieve_anode_material, AnodeQuery};
pub use bragg::{theta_to_spacing, AngleUnits};
pub use peaks::{find_peaks, PeakSet};
