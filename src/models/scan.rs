//! # XRD 扫描数据模型
//!
//! 每种厂商格式有自己的强类型扫描结构（`RasScan`/`AscScan`/`TxtScan`），
//! 只携带该格式实际能产出的字段；对外统一为 `XrdScan` 记录，
//! 缺失字段显式为 `None`，方便调用方统一判断。
//!
//! ## 依赖关系
//! - 被 `parsers/` 各格式解析器构造
//! - 被 `analysis/`, `commands/`, `export.rs` 消费

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 支持的 XRD 文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XrdFormat {
    /// Rigaku .ras（文本头 + 三列空白分隔数据）
    Ras,
    /// Rigaku .asc（文本头 + 逗号分隔的平坦计数流）
    Asc,
    /// 两列制表符分隔表（单行表头）
    Txt,
}

impl XrdFormat {
    /// 从文件扩展名推断格式
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "ras" => Some(XrdFormat::Ras),
            "asc" => Some(XrdFormat::Asc),
            "txt" => Some(XrdFormat::Txt),
            _ => None,
        }
    }
}

impl std::fmt::Display for XrdFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            XrdFormat::Ras => write!(f, "ras"),
            XrdFormat::Asc => write!(f, "asc"),
            XrdFormat::Txt => write!(f, "txt"),
        }
    }
}

/// 2θ 扫描范围（ASC 头部的 START/STOP/STEP）
///
/// 头部值保留原始文本形式，与源文件逐字节一致；
/// 数值访问通过 `*_value()` 方法。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoThetaRange {
    pub start: String,
    pub stop: String,
    pub step: String,
}

impl TwoThetaRange {
    pub fn start_value(&self) -> Option<f64> {
        self.start.parse().ok()
    }

    pub fn stop_value(&self) -> Option<f64> {
        self.stop.parse().ok()
    }

    pub fn step_value(&self) -> Option<f64> {
        self.step.parse().ok()
    }
}

/// 数据块的两种形态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScanData {
    /// 行式数据：等长的 2θ / 强度 /（可选）误差列
    Columns {
        two_theta: Vec<f64>,
        intensity: Vec<f64>,
        error: Option<Vec<f64>>,
    },
    /// 平坦计数流（ASC 的数据块没有行标签）
    Counts(Vec<i64>),
}

impl ScanData {
    /// 数据点数量
    pub fn len(&self) -> usize {
        match self {
            ScanData::Columns { two_theta, .. } => two_theta.len(),
            ScanData::Counts(counts) => counts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 统一的 XRD 扫描记录
///
/// 所有格式解析后的对外表示。某格式不产出的字段显式为 `None`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XrdScan {
    /// 来源格式
    pub format: XrdFormat,
    /// Kα1 特征波长（头部原始文本）
    pub alpha1: Option<String>,
    /// Kα2 特征波长
    pub alpha2: Option<String>,
    /// Kβ 特征波长
    pub beta: Option<String>,
    /// 2θ 扫描范围（仅 ASC）
    pub two_theta_range: Option<TwoThetaRange>,
    /// 数据块之前消耗的头部行数
    pub data_first_line: usize,
    /// 数据块
    pub data: ScanData,
}

impl XrdScan {
    pub fn alpha1_value(&self) -> Option<f64> {
        self.alpha1.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn alpha2_value(&self) -> Option<f64> {
        self.alpha2.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn beta_value(&self) -> Option<f64> {
        self.beta.as_deref().and_then(|s| s.parse().ok())
    }

    /// 取出成对的 (2θ, 强度) 曲线
    ///
    /// 行式数据直接返回两列；ASC 的平坦计数流根据头部的
    /// START/STEP 重建 2θ 轴。缺少范围信息时返回 `None`。
    pub fn axes(&self) -> Option<(Vec<f64>, Vec<f64>)> {
        match &self.data {
            ScanData::Columns {
                two_theta,
                intensity,
                ..
            } => Some((two_theta.clone(), intensity.clone())),
            ScanData::Counts(counts) => {
                let range = self.two_theta_range.as_ref()?;
                let start = range.start_value()?;
                let step = range.step_value()?;
                let x: Vec<f64> = (0..counts.len()).map(|i| start + step * i as f64).collect();
                let y: Vec<f64> = counts.iter().map(|&c| c as f64).collect();
                Some((x, y))
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 格式专属扫描结构
// ─────────────────────────────────────────────────────────────

/// RAS 文件的解析结果
#[derive(Debug, Clone, PartialEq)]
pub struct RasScan {
    pub alpha1: Option<String>,
    pub alpha2: Option<String>,
    pub beta: Option<String>,
    pub data_first_line: usize,
    pub two_theta: Vec<f64>,
    pub intensity: Vec<f64>,
    pub error: Vec<f64>,
}

impl From<RasScan> for XrdScan {
    fn from(scan: RasScan) -> Self {
        XrdScan {
            format: XrdFormat::Ras,
            alpha1: scan.alpha1,
            alpha2: scan.alpha2,
            beta: scan.beta,
            two_theta_range: None,
            data_first_line: scan.data_first_line,
            data: ScanData::Columns {
                two_theta: scan.two_theta,
                intensity: scan.intensity,
                error: Some(scan.error),
            },
        }
    }
}

/// ASC 文件的解析结果
#[derive(Debug, Clone, PartialEq)]
pub struct AscScan {
    pub alpha1: Option<String>,
    pub alpha2: Option<String>,
    pub two_theta_range: Option<TwoThetaRange>,
    pub data_first_line: usize,
    pub counts: Vec<i64>,
}

impl From<AscScan> for XrdScan {
    fn from(scan: AscScan) -> Self {
        XrdScan {
            format: XrdFormat::Asc,
            alpha1: scan.alpha1,
            alpha2: scan.alpha2,
            beta: None,
            two_theta_range: scan.two_theta_range,
            data_first_line: scan.data_first_line,
            data: ScanData::Counts(scan.counts),
        }
    }
}

/// TXT 文件的解析结果
#[derive(Debug, Clone, PartialEq)]
pub struct TxtScan {
    pub two_theta: Vec<f64>,
    pub intensity: Vec<f64>,
}

impl From<TxtScan> for XrdScan {
    fn from(scan: TxtScan) -> Self {
        XrdScan {
            format: XrdFormat::Txt,
            alpha1: None,
            alpha2: None,
            beta: None,
            two_theta_range: None,
            // 固定跳过一行表头
            data_first_line: 1,
            data: ScanData::Columns {
                two_theta: scan.two_theta,
                intensity: scan.intensity,
                error: None,
            },
        }
    }
}
