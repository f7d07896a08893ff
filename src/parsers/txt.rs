//! # 两列 .txt 格式解析器
//!
//! 制表符分隔的两列（2θ、强度）数值表，首行为表头。
//! 该格式没有任何头部元数据字段。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 分发调用
//! - 使用 `models/scan.rs` 的 TxtScan

use crate::error::{Result, XrdKitError};
use crate::models::TxtScan;
use crate::parsers::ScanSource;
use std::path::Path;

/// 跳过的表头行数
const TXT_HEADER_ROWS: usize = 1;

/// 解析 .txt 文件
pub fn parse_txt_file(path: &Path) -> Result<TxtScan> {
    parse_txt(&ScanSource::from_path(path))
}

/// 解析 .txt 输入
pub fn parse_txt(source: &ScanSource) -> Result<TxtScan> {
    let lines = source.lines()?;

    let mut two_theta = Vec::new();
    let mut intensity = Vec::new();

    for line in lines.iter().skip(TXT_HEADER_ROWS) {
        if line.trim().is_empty() {
            continue;
        }

        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() < 2 {
            return Err(XrdKitError::ParseError {
                format: "txt".to_string(),
                path: source.describe(),
                reason: format!("expected 2 tab-separated columns: '{}'", line),
            });
        }
        two_theta.push(parse_value(cols[0], source)?);
        intensity.push(parse_value(cols[1], source)?);
    }

    Ok(TxtScan {
        two_theta,
        intensity,
    })
}

fn parse_value(token: &str, source: &ScanSource) -> Result<f64> {
    token.trim().parse().map_err(|_| XrdKitError::ParseError {
        format: "txt".to_string(),
        path: source.describe(),
        reason: format!("invalid numeric value '{}'", token),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/xrd_file.txt")
    }

    #[test]
    fn test_parse_txt_fixture() {
        let scan = parse_txt_file(&fixture_path()).unwrap();

        let two_theta_expected = [7.0144, 7.0314, 7.0484, 7.0654, 7.0824];
        let intensity_expected = [24868.9923, 24723.026, 24776.6393, 24816.3415, 24855.5135];

        assert_eq!(scan.two_theta.len(), scan.intensity.len());

        for (returned, expected) in scan.two_theta.iter().zip(two_theta_expected) {
            assert!((returned - expected).abs() < 1e-10);
        }
        for (returned, expected) in scan.intensity.iter().zip(intensity_expected) {
            assert!((returned - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn test_parse_txt_from_content() {
        let content = "2theta\tintensity\n7.0144\t24868.9923\n7.0314\t24723.0260\n";
        let lines: Vec<String> = content.lines().map(|l| l.to_string()).collect();
        let scan = parse_txt(&ScanSource::from_content(lines)).unwrap();

        assert_eq!(scan.two_theta.len(), 2);
        assert!((scan.two_theta[0] - 7.0144).abs() < 1e-10);
        assert!((scan.intensity[1] - 24723.026).abs() < 1e-10);
    }

    #[test]
    fn test_parse_txt_malformed_column() {
        let content = "2theta\tintensity\n7.0144 24868.9923\n";
        let lines: Vec<String> = content.lines().map(|l| l.to_string()).collect();
        // 空格而非制表符分隔，列数不足
        assert!(parse_txt(&ScanSource::from_content(lines)).is_err());
    }
}
