//! # spacing 子命令 CLI 定义
//!
//! 2θ → d 间距转换的参数。波长既接受辐射源名称也接受数值。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/spacing.rs`

use crate::analysis::AngleUnits;
use clap::Args;
use std::path::PathBuf;

/// 预定义辐射源波长 (Å)
pub fn get_predefined_wavelength(name: &str) -> Option<f64> {
    match name.to_lowercase().as_str() {
        "cu-ka" | "cuka" => Some(1.5418),
        "cu-ka1" | "cuka1" => Some(1.5406),
        "cu-ka2" | "cuka2" => Some(1.5444),
        "cu-kb1" | "cukb1" => Some(1.3922),
        "mo-ka" | "moka" => Some(0.7107),
        "mo-ka1" | "moka1" => Some(0.7093),
        "co-ka" | "coka" => Some(1.7903),
        "fe-ka" | "feka" => Some(1.9373),
        "cr-ka" | "crka" => Some(2.2910),
        "ag-ka" | "agka" => Some(0.5609),
        _ => None,
    }
}

/// 解析波长输入（辐射源名称或数值）
pub fn parse_wavelength(input: &str) -> Result<f64, String> {
    // 先尝试解析为预定义辐射源
    if let Some(wl) = get_predefined_wavelength(input) {
        return Ok(wl);
    }
    // 再尝试解析为数值
    input.parse::<f64>().map_err(|_| {
        format!(
            "Invalid wavelength '{}'. Use a number (e.g., 1.54056) or a name: cu-ka, mo-ka, co-ka, fe-ka, cr-ka, ag-ka",
            input
        )
    })
}

/// spacing 子命令参数
#[derive(Args, Debug)]
pub struct SpacingArgs {
    /// Input XRD data file (.ras, .asc, .txt)
    pub input: PathBuf,

    /// X-ray wavelength: radiation source name (cu-ka1, mo-ka, ...) or value in Angstrom
    #[arg(short, long, default_value = "cu-ka1")]
    pub wavelength: String,

    /// Units of the two-theta values in the file
    #[arg(short, long, value_enum, default_value = "deg")]
    pub units: AngleUnits,

    /// Export d-spacings to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_wavelengths() {
        assert_eq!(get_predefined_wavelength("cu-ka1"), Some(1.5406));
        assert_eq!(get_predefined_wavelength("CuKa1"), Some(1.5406));
        assert_eq!(get_predefined_wavelength("unknown"), None);
    }

    #[test]
    fn test_parse_wavelength() {
        assert_eq!(parse_wavelength("mo-ka"), Ok(0.7107));
        assert_eq!(parse_wavelength("1.54056"), Ok(1.54056));
        assert!(parse_wavelength("not-a-source").is_err());
    }
}
