//! # peaks 子命令实现
//!
//! 解析文件、重建 (2θ, 强度) 曲线并检测峰，结果以表格输出。
//!
//! ## 依赖关系
//! - 使用 `cli/peaks.rs` 定义的 PeaksArgs
//! - 使用 `analysis/peaks.rs` 检测峰
//! - 使用 `export.rs` 写 CSV

use crate::analysis::find_peaks;
use crate::cli::peaks::PeaksArgs;
use crate::error::{Result, XrdKitError};
use crate::export;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 峰表格行
#[derive(Debug, Clone, Tabled)]
struct PeakRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "2theta (deg)")]
    two_theta: String,
    #[tabled(rename = "Intensity")]
    intensity: String,
}

/// 执行 peaks 命令
pub fn execute(args: PeaksArgs) -> Result<()> {
    output::print_header("Diffraction Peak Detection");

    let scan = super::load_scan(&args.input)?;
    let (x, y) = scan.axes().ok_or_else(|| {
        XrdKitError::Other(format!(
            "'{}' has no reconstructible two-theta axis",
            args.input.display()
        ))
    })?;

    output::print_info(&format!(
        "Searching {} points (distance >= {}, intensity > {})",
        x.len(),
        args.distance,
        args.threshold
    ));

    let peaks = find_peaks(Some(&x), Some(&y), args.distance, args.threshold)?;

    if peaks.is_empty() {
        output::print_warning("No peaks found");
        return Ok(());
    }

    let rows: Vec<PeakRow> = (0..peaks.len())
        .map(|i| PeakRow {
            rank: i + 1,
            two_theta: format!("{:.4}", peaks.x[i]),
            intensity: format!("{:.1}", peaks.y[i]),
        })
        .collect();

    println!("{}", Table::new(rows));
    output::print_success(&format!("Found {} peaks", peaks.len()));

    if let Some(output_path) = &args.output {
        export::peaks_to_csv(&peaks, output_path)?;
        output::print_success(&format!("Peaks written to '{}'", output_path.display()));
    }

    Ok(())
}
