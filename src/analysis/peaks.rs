//! # 峰检测
//!
//! 在 (x, y) 曲线上寻找局部极大值：先按最小间隔约束筛选
//! 候选峰（间隔内保留较高者），再按强度阈值过滤。
//! 结果保持原始顺序的成对 (x, y) 序列。
//!
//! ## 依赖关系
//! - 被 `commands/peaks.rs` 调用
//! - 消费 `models/scan.rs` 的 axes() 输出

use crate::error::{Result, XrdKitError};

/// 峰检测结果：成对的 (x, y) 序列，按原始顺序排列
#[derive(Debug, Clone, PartialEq)]
pub struct PeakSet {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl PeakSet {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// 峰检测
///
/// 两条轴都必须给定且等长，否则立即报错。
/// `distance` 是相邻峰的最小样本间隔，`threshold` 是保留峰的
/// 最低 y 值（严格大于）。
pub fn find_peaks(
    x: Option<&[f64]>,
    y: Option<&[f64]>,
    distance: usize,
    threshold: f64,
) -> Result<PeakSet> {
    let x = x.ok_or_else(|| XrdKitError::InvalidArgument("x axis is required".to_string()))?;
    let y = y.ok_or_else(|| XrdKitError::InvalidArgument("y axis is required".to_string()))?;

    if x.len() != y.len() {
        return Err(XrdKitError::InvalidArgument(format!(
            "x and y must have equal length ({} vs {})",
            x.len(),
            y.len()
        )));
    }

    // 局部极大值候选（严格高于两侧邻点）
    let mut candidates: Vec<usize> = Vec::new();
    for i in 1..y.len().saturating_sub(1) {
        if y[i] > y[i - 1] && y[i] > y[i + 1] {
            candidates.push(i);
        }
    }

    // 间隔约束：从最高峰开始保留，压制间隔内的较低峰
    let mut by_height = candidates.clone();
    by_height.sort_by(|&a, &b| y[b].partial_cmp(&y[a]).unwrap_or(std::cmp::Ordering::Equal));

    let mut suppressed = vec![false; y.len()];
    let mut kept: Vec<usize> = Vec::new();
    for &idx in &by_height {
        if suppressed[idx] {
            continue;
        }
        kept.push(idx);
        for &other in &candidates {
            if other != idx && other.abs_diff(idx) < distance.max(1) {
                suppressed[other] = true;
            }
        }
    }

    // 恢复原始顺序，再按阈值过滤
    kept.sort_unstable();

    let mut peaks = PeakSet {
        x: Vec::new(),
        y: Vec::new(),
    };
    for idx in kept {
        if y[idx] > threshold {
            peaks.x.push(x[idx]);
            peaks.y.push(y[idx]);
        }
    }

    Ok(peaks)
}
