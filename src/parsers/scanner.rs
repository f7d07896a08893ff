//! # 行扫描器
//!
//! 头部逐行扫描的共享原语：读入文件全部行、按
//! 「前缀 + 捕获模式」规则匹配单行。前缀检查便宜，
//! 先于正则执行，不满足时直接跳过。
//!
//! ## 依赖关系
//! - 被 `parsers/ras.rs`, `parsers/asc.rs` 使用
//! - 使用 `parsers/registry.rs` 的 FieldRule

use crate::error::{Result, XrdKitError};
use regex::Regex;
use std::fs;
use std::path::Path;

/// 读取文件全部行
///
/// 无效字节以替换字符容错处理，不视为读取失败。
pub fn file_content(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|e| XrdKitError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(|line| line.to_string())
        .collect())
}

/// 按「前缀 + 捕获模式」匹配一行
///
/// 行以 `starts_with` 开头且匹配 `pattern` 时返回第一个捕获组，
/// 否则返回 `None`。
pub fn pattern_match(line: &str, starts_with: &str, pattern: &Regex) -> Option<String> {
    if line.starts_with(starts_with) {
        if let Some(caps) = pattern.captures(line) {
            return caps.get(1).map(|m| m.as_str().to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_match_ras_alpha1() {
        let pattern = Regex::new(r#"\*HW_XG_WAVE_LENGTH_ALPHA1\s{1}"(\d\.\d*)""#).unwrap();
        let line = r#"*HW_XG_WAVE_LENGTH_ALPHA1 "1.540593""#;

        let value = pattern_match(line, "*HW_XG_WAVE_LENGTH_ALPHA1", &pattern);
        assert_eq!(value, Some("1.540593".to_string()));
    }

    #[test]
    fn test_pattern_match_prefix_rejected() {
        let pattern = Regex::new(r#"\*HW_XG_WAVE_LENGTH_ALPHA1\s{1}"(\d\.\d*)""#).unwrap();
        let line = r#"*HW_XG_WAVE_LENGTH_ALPHA2 "1.544414""#;

        assert_eq!(pattern_match(line, "*HW_XG_WAVE_LENGTH_ALPHA1", &pattern), None);
    }

    #[test]
    fn test_pattern_match_prefix_without_capture() {
        // 前缀命中但模式不匹配（缺少引号）
        let pattern = Regex::new(r#"\*HW_XG_WAVE_LENGTH_ALPHA1\s{1}"(\d\.\d*)""#).unwrap();
        let line = "*HW_XG_WAVE_LENGTH_ALPHA1 1.540593";

        assert_eq!(pattern_match(line, "*HW_XG_WAVE_LENGTH_ALPHA1", &pattern), None);
    }

    #[test]
    fn test_file_content_replaces_invalid_bytes() {
        let path = std::env::temp_dir().join("xrdkit_scanner_lossy_test.ras");
        std::fs::write(&path, b"*FILE_COMMENT \"ok\"\n\xff\xfe bad bytes\n").unwrap();

        let lines = file_content(&path).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "*FILE_COMMENT \"ok\"");
        assert!(lines[1].contains('\u{FFFD}'));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_file_content_missing_file() {
        let result = file_content(Path::new("/nonexistent/xrdkit_no_such_file.ras"));
        assert!(result.is_err());
    }
}
