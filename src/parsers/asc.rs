//! # Rigaku .asc 格式解析器
//!
//! 头部是 `*KEY = value` 键值对；`*COUNT` 行标记数据块开始。
//! 数据块是逗号分隔的平坦计数流，没有行标签，2θ 轴由头部的
//! START/STOP/STEP 描述。
//!
//! ## .asc 格式说明
//! ```text
//! *TYPE        =  Raw
//! ...
//! *WAVE_LENGTH1    =  1.54059
//! *WAVE_LENGTH2    =  1.54441
//! ...
//! *START       =  20
//! *STOP        =  120
//! *STEP        =  0.01
//! *COUNT       =  10001
//! 165, 187, 159, 160
//! ...
//! *END
//! *EOF
//! ```
//! 文件末尾三行是尾标记，不属于数据。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 分发调用
//! - 使用 `parsers/registry.rs`, `parsers/scanner.rs`
//! - 使用 `models/scan.rs` 的 AscScan

use crate::error::{Result, XrdKitError};
use crate::models::{AscScan, TwoThetaRange, XrdFormat};
use crate::parsers::{registry, ScanSource};
use std::path::Path;

/// 数据块后的尾行数（厂商文件约定）
const ASC_FOOTER_LINES: usize = 3;

/// 解析 .asc 文件
pub fn parse_asc_file(path: &Path) -> Result<AscScan> {
    parse_asc(&ScanSource::from_path(path))
}

/// 解析 .asc 输入
pub fn parse_asc(source: &ScanSource) -> Result<AscScan> {
    let lines = source.lines()?;
    let rules = registry::rules_for(XrdFormat::Asc);

    let mut alpha1: Option<String> = None;
    let mut alpha2: Option<String> = None;
    let mut start: Option<String> = None;
    let mut stop: Option<String> = None;
    let mut step: Option<String> = None;

    let mut count = 0usize;
    let mut data_first_line = 0usize;

    for line in &lines {
        // 每行依次尝试各字段规则，首个命中即止
        for (slot, rule) in [
            (&mut alpha1, rules.alpha1.as_ref()),
            (&mut alpha2, rules.alpha2.as_ref()),
            (&mut start, rules.range_start.as_ref()),
            (&mut stop, rules.range_stop.as_ref()),
            (&mut step, rules.range_step.as_ref()),
        ] {
            if let Some(rule) = rule {
                if let Some(value) = rule.apply(line) {
                    *slot = Some(value);
                    break;
                }
            }
        }

        count += 1;

        if let Some(marker) = rules.data_start {
            if line.starts_with(marker) {
                // 数据从标记行的下一行开始
                data_first_line = count + 1;
                break;
            }
        }
    }

    // 数据块：标记行之后、末尾三行尾标记之前，逗号分隔展平
    let mut counts = Vec::new();
    if data_first_line > 0 {
        let end = lines.len().saturating_sub(ASC_FOOTER_LINES);
        for line in lines.iter().take(end).skip(data_first_line - 1) {
            for token in line.split(',') {
                let token = token.trim();
                if token.is_empty() {
                    continue;
                }
                counts.push(parse_count(token, source)?);
            }
        }
    }

    let two_theta_range = match (start, stop, step) {
        (Some(start), Some(stop), Some(step)) => Some(TwoThetaRange { start, stop, step }),
        _ => None,
    };

    Ok(AscScan {
        alpha1,
        alpha2,
        two_theta_range,
        data_first_line,
        counts,
    })
}

/// 将 AscScan 写回 .asc 格式字符串
pub fn to_asc_string(scan: &AscScan) -> String {
    let mut result = String::new();

    if let Some(alpha1) = &scan.alpha1 {
        result.push_str(&format!("*WAVE_LENGTH1\t=  {}\n", alpha1));
    }
    if let Some(alpha2) = &scan.alpha2 {
        result.push_str(&format!("*WAVE_LENGTH2\t=  {}\n", alpha2));
    }
    if let Some(range) = &scan.two_theta_range {
        result.push_str(&format!("*START\t\t=  {}\n", range.start));
        result.push_str(&format!("*STOP\t\t=  {}\n", range.stop));
        result.push_str(&format!("*STEP\t\t=  {}\n", range.step));
    }
    result.push_str(&format!("*COUNT\t\t=  {}\n", scan.counts.len()));

    // 每行四个计数，逗号分隔
    for chunk in scan.counts.chunks(4) {
        let row: Vec<String> = chunk.iter().map(|c| c.to_string()).collect();
        result.push_str(&row.join(", "));
        result.push('\n');
    }

    // 末尾三行尾标记（最后一行为空行）
    result.push_str("*END\n*EOF\n\n");
    result
}

fn parse_count(token: &str, source: &ScanSource) -> Result<i64> {
    token.parse().map_err(|_| XrdKitError::ParseError {
        format: "asc".to_string(),
        path: source.describe(),
        reason: format!("invalid count value '{}'", token),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/xrd_file.asc")
    }

    #[test]
    fn test_parse_asc_fixture() {
        let scan = parse_asc_file(&fixture_path()).unwrap();

        assert_eq!(scan.alpha1.as_deref(), Some("1.54059"));
        assert_eq!(scan.alpha2.as_deref(), Some("1.54441"));
        assert_eq!(scan.data_first_line, 28);

        let range = scan.two_theta_range.as_ref().unwrap();
        assert_eq!(range.start, "20");
        assert_eq!(range.stop, "120");
        assert_eq!(range.step, "0.01");

        let expected = [165, 187, 159, 160, 153, 203, 168, 161, 153, 167, 159, 175];
        assert_eq!(scan.counts, expected);
    }

    #[test]
    fn test_parse_asc_from_content() {
        let lines = crate::parsers::scanner::file_content(&fixture_path()).unwrap();
        let scan = parse_asc(&ScanSource::from_content(lines)).unwrap();

        assert_eq!(scan.alpha1.as_deref(), Some("1.54059"));
        assert_eq!(scan.data_first_line, 28);
        assert_eq!(scan.counts[0], 165);
    }

    #[test]
    fn test_asc_round_trip() {
        let scan = AscScan {
            alpha1: Some("1.54059".to_string()),
            alpha2: Some("1.54441".to_string()),
            two_theta_range: Some(TwoThetaRange {
                start: "20".to_string(),
                stop: "120".to_string(),
                step: "0.01".to_string(),
            }),
            data_first_line: 0,
            counts: vec![165, 187, 159, 160, 153, 203],
        };

        let content = to_asc_string(&scan);
        let lines: Vec<String> = content.lines().map(|l| l.to_string()).collect();
        let parsed = parse_asc(&ScanSource::from_content(lines)).unwrap();

        assert_eq!(parsed.alpha1, scan.alpha1);
        assert_eq!(parsed.alpha2, scan.alpha2);
        assert_eq!(parsed.two_theta_range, scan.two_theta_range);
        assert_eq!(parsed.counts, scan.counts);
    }

    #[test]
    fn test_parse_asc_malformed_count() {
        let content = "*WAVE_LENGTH1\t=  1.54059\n*COUNT\t\t=  4\n165, abc\n*END\n*EOF\n\n";
        let lines: Vec<String> = content.lines().map(|l| l.to_string()).collect();
        let result = parse_asc(&ScanSource::from_content(lines));
        assert!(result.is_err());
    }
}
