//! # spacing 子命令实现
//!
//! 把文件的 2θ 轴按 Bragg 关系转换为 d 间距。
//!
//! ## 依赖关系
//! - 使用 `cli/spacing.rs` 定义的 SpacingArgs
//! - 使用 `analysis/bragg.rs` 转换
//! - 使用 `export.rs` 写 CSV

use crate::analysis::theta_to_spacing;
use crate::cli::spacing::{parse_wavelength, SpacingArgs};
use crate::error::{Result, XrdKitError};
use crate::export;
use crate::utils::output;

/// 执行 spacing 命令
pub fn execute(args: SpacingArgs) -> Result<()> {
    output::print_header("Two-Theta to d-Spacing Conversion");

    let wavelength = parse_wavelength(&args.wavelength).map_err(XrdKitError::InvalidArgument)?;
    output::print_info(&format!("Using wavelength: {:.4} A", wavelength));

    let scan = super::load_scan(&args.input)?;
    let (two_theta, _) = scan.axes().ok_or_else(|| {
        XrdKitError::Other(format!(
            "'{}' has no reconstructible two-theta axis",
            args.input.display()
        ))
    })?;

    let spacings = theta_to_spacing(&two_theta, args.units, wavelength);
    output::print_info(&format!(
        "Converted {} angles ({})",
        spacings.len(),
        args.units
    ));

    match &args.output {
        Some(output_path) => {
            export::spacings_to_csv(&two_theta, &spacings, output_path)?;
            output::print_success(&format!("d-spacings written to '{}'", output_path.display()));
        }
        None => {
            // 无输出文件时打印前若干行
            for (theta, d) in two_theta.iter().zip(&spacings).take(10) {
                println!("  {:>10.4}  ->  {:.6} A", theta, d);
            }
            if spacings.len() > 10 {
                println!("  ... and {} more", spacings.len() - 10);
            }
        }
    }

    Ok(())
}
