//! # 数据导出
//!
//! 解析结果、峰列表和 d 间距的 CSV 导出。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块调用
//! - 使用 `csv` 库写入 CSV 文件
//! - 消费 `models/scan.rs`, `analysis/peaks.rs` 的结构

use crate::analysis::PeakSet;
use crate::error::{Result, XrdKitError};
use crate::models::{ScanData, XrdScan};

use std::path::Path;

/// 导出扫描曲线为 CSV
///
/// 行式数据输出 2θ/强度（/误差）列；平坦计数流在能重建
/// 2θ 轴时输出 2θ/强度，否则输出序号/计数。
pub fn scan_to_csv(scan: &XrdScan, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(XrdKitError::CsvError)?;

    match &scan.data {
        ScanData::Columns {
            two_theta,
            intensity,
            error,
        } => match error {
            Some(error) => {
                wtr.write_record(["2theta", "intensity", "error"])?;
                for i in 0..two_theta.len() {
                    wtr.write_record(&[
                        format!("{:.4}", two_theta[i]),
                        format!("{:.4}", intensity[i]),
                        format!("{:.4}", error[i]),
                    ])?;
                }
            }
            None => {
                wtr.write_record(["2theta", "intensity"])?;
                for i in 0..two_theta.len() {
                    wtr.write_record(&[
                        format!("{:.4}", two_theta[i]),
                        format!("{:.4}", intensity[i]),
                    ])?;
                }
            }
        },
        ScanData::Counts(counts) => {
            if let Some((x, y)) = scan.axes() {
                wtr.write_record(["2theta", "intensity"])?;
                for i in 0..x.len() {
                    wtr.write_record(&[format!("{:.4}", x[i]), format!("{:.0}", y[i])])?;
                }
            } else {
                wtr.write_record(["index", "count"])?;
                for (i, count) in counts.iter().enumerate() {
                    wtr.write_record(&[i.to_string(), count.to_string()])?;
                }
            }
        }
    }

    wtr.flush().map_err(|e| XrdKitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出峰列表为 CSV
pub fn peaks_to_csv(peaks: &PeakSet, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(XrdKitError::CsvError)?;

    wtr.write_record(["2theta", "intensity"])?;
    for i in 0..peaks.len() {
        wtr.write_record(&[format!("{:.4}", peaks.x[i]), format!("{:.4}", peaks.y[i])])?;
    }

    wtr.flush().map_err(|e| XrdKitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出 d 间距为 CSV
pub fn spacings_to_csv(two_theta: &[f64], spacings: &[f64], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(XrdKitError::CsvError)?;

    wtr.write_record(["2theta", "d_spacing"])?;
    for i in 0..two_theta.len() {
        wtr.write_record(&[
            format!("{:.4}", two_theta[i]),
            format!("{:.6}", spacings[i]),
        ])?;
    }

    wtr.flush().map_err(|e| XrdKitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
