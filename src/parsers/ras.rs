//! # Rigaku .ras 格式解析器
//!
//! 逐行扫描头部提取特征波长，遇到 `*RAS_INT_START` 标记后
//! 将剩余内容按三列（2θ、强度、误差）空白分隔表读取。
//!
//! ## .ras 格式说明
//! ```text
//! *RAS_DATA_START
//! *RAS_HEADER_START
//! *HW_XG_WAVE_LENGTH_ALPHA1 "1.540593"
//! ...
//! *RAS_INT_START
//! 20.0000 165.0000 1.0000
//! ...
//! *RAS_INT_END
//! *RAS_DATA_END
//! ```
//! 文件末尾两行是尾标记，不属于数据。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 分发调用
//! - 使用 `parsers/registry.rs`, `parsers/scanner.rs`
//! - 使用 `models/scan.rs` 的 RasScan

use crate::error::{Result, XrdKitError};
use crate::models::{RasScan, XrdFormat};
use crate::parsers::{registry, ScanSource};
use std::path::Path;

/// 数据块后的尾行数（厂商文件约定）
const RAS_FOOTER_LINES: usize = 2;

/// 解析 .ras 文件
pub fn parse_ras_file(path: &Path) -> Result<RasScan> {
    parse_ras(&ScanSource::from_path(path))
}

/// 解析 .ras 输入
pub fn parse_ras(source: &ScanSource) -> Result<RasScan> {
    let lines = source.lines()?;
    let rules = registry::rules_for(XrdFormat::Ras);

    let mut alpha1: Option<String> = None;
    let mut alpha2: Option<String> = None;
    let mut beta: Option<String> = None;
    let mut data_first_line = 0usize;

    for line in &lines {
        // 每行依次尝试各字段规则，首个命中即止
        for (slot, rule) in [
            (&mut alpha1, rules.alpha1.as_ref()),
            (&mut alpha2, rules.alpha2.as_ref()),
            (&mut beta, rules.beta.as_ref()),
        ] {
            if let Some(rule) = rule {
                if let Some(value) = rule.apply(line) {
                    *slot = Some(value);
                    break;
                }
            }
        }

        // 标记行本身也计入头部行数
        data_first_line += 1;

        if let Some(marker) = rules.data_start {
            if line.starts_with(marker) {
                break;
            }
        }
    }

    // 数据块：跳过头部行，丢弃末尾两行尾标记
    let end = lines.len().saturating_sub(RAS_FOOTER_LINES);
    let mut two_theta = Vec::new();
    let mut intensity = Vec::new();
    let mut error = Vec::new();

    for line in lines.iter().take(end).skip(data_first_line) {
        let cols: Vec<&str> = line.split_whitespace().collect();
        if cols.len() < 3 {
            return Err(XrdKitError::ParseError {
                format: "ras".to_string(),
                path: source.describe(),
                reason: format!("expected 3 data columns, got {}: '{}'", cols.len(), line),
            });
        }
        two_theta.push(parse_value(cols[0], source)?);
        intensity.push(parse_value(cols[1], source)?);
        error.push(parse_value(cols[2], source)?);
    }

    Ok(RasScan {
        alpha1,
        alpha2,
        beta,
        data_first_line,
        two_theta,
        intensity,
        error,
    })
}

/// 将 RasScan 写回 .ras 格式字符串
pub fn to_ras_string(scan: &RasScan) -> String {
    let mut result = String::new();
    result.push_str("*RAS_DATA_START\n");
    result.push_str("*RAS_HEADER_START\n");

    if let Some(alpha1) = &scan.alpha1 {
        result.push_str(&format!("*HW_XG_WAVE_LENGTH_ALPHA1 \"{}\"\n", alpha1));
    }
    if let Some(alpha2) = &scan.alpha2 {
        result.push_str(&format!("*HW_XG_WAVE_LENGTH_ALPHA2 \"{}\"\n", alpha2));
    }
    if let Some(beta) = &scan.beta {
        result.push_str(&format!("*HW_XG_WAVE_LENGTH_BETA \"{}\"\n", beta));
    }

    result.push_str("*RAS_HEADER_END\n");
    result.push_str("*RAS_INT_START\n");

    for i in 0..scan.two_theta.len() {
        result.push_str(&format!(
            "{:.4} {:.4} {:.4}\n",
            scan.two_theta[i], scan.intensity[i], scan.error[i]
        ));
    }

    result.push_str("*RAS_INT_END\n");
    result.push_str("*RAS_DATA_END\n");
    result
}

fn parse_value(token: &str, source: &ScanSource) -> Result<f64> {
    token.parse().map_err(|_| XrdKitError::ParseError {
        format: "ras".to_string(),
        path: source.describe(),
        reason: format!("invalid numeric value '{}'", token),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/xrd_file.ras")
    }

    #[test]
    fn test_parse_ras_fixture() {
        let scan = parse_ras_file(&fixture_path()).unwrap();

        assert_eq!(scan.alpha1.as_deref(), Some("1.540593"));
        assert_eq!(scan.alpha2.as_deref(), Some("1.544414"));
        assert_eq!(scan.beta.as_deref(), Some("1.392250"));
        assert_eq!(scan.data_first_line, 19);

        let two_theta_expected = [20.0, 20.01, 20.02, 20.03, 20.04, 20.05, 20.06];
        let intensity_expected = [165.0, 187.0, 159.0, 160.0, 153.0, 203.0, 168.0];

        assert_eq!(scan.two_theta.len(), scan.intensity.len());
        assert_eq!(scan.two_theta.len(), scan.error.len());

        for (returned, expected) in scan.two_theta.iter().zip(two_theta_expected) {
            assert!((returned - expected).abs() < 1e-10);
        }
        for (returned, expected) in scan.intensity.iter().zip(intensity_expected) {
            assert!((returned - expected).abs() < 1e-10);
        }
        for returned in &scan.error {
            assert!((returned - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_ras_round_trip() {
        let scan = RasScan {
            alpha1: Some("1.540593".to_string()),
            alpha2: Some("1.544414".to_string()),
            beta: Some("1.392250".to_string()),
            data_first_line: 0,
            two_theta: vec![20.0, 20.01, 20.02],
            intensity: vec![165.0, 187.0, 159.0],
            error: vec![1.0, 1.0, 1.0],
        };

        let content = to_ras_string(&scan);
        let lines: Vec<String> = content.lines().map(|l| l.to_string()).collect();
        let parsed = parse_ras(&ScanSource::from_content(lines)).unwrap();

        assert_eq!(parsed.alpha1, scan.alpha1);
        assert_eq!(parsed.alpha2, scan.alpha2);
        assert_eq!(parsed.beta, scan.beta);
        assert_eq!(parsed.two_theta, scan.two_theta);
        assert_eq!(parsed.intensity, scan.intensity);
        assert_eq!(parsed.error, scan.error);
    }

    #[test]
    fn test_parse_ras_malformed_row() {
        let content = "\
*RAS_DATA_START
*RAS_INT_START
20.0000 abc 1.0000
*RAS_INT_END
*RAS_DATA_END";
        let lines: Vec<String> = content.lines().map(|l| l.to_string()).collect();
        let result = parse_ras(&ScanSource::from_content(lines));
        assert!(result.is_err());
    }
}
