//! # 解析器模块
//!
//! 多格式 XRD 数据文件的元数据/数据提取管线。
//! 入口 `parse_xrd_file` 按扩展名分发到对应格式解析器；
//! 各格式解析器也可独立调用。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: scanner, registry, ras, asc, txt

pub mod asc;
pub mod ras;
pub mod registry;
pub mod scanner;
pub mod txt;

use crate::error::Result;
use crate::models::{XrdFormat, XrdScan};
use std::path::{Path, PathBuf};

/// 解析输入来源：文件路径或内存中的行序列
///
/// 所有格式解析器统一接受该类型，路径与内容二选一在
/// 类型层面保证，不存在“两者都缺”的状态。
#[derive(Debug, Clone)]
pub enum ScanSource {
    Path(PathBuf),
    Content(Vec<String>),
}

impl ScanSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        ScanSource::Path(path.into())
    }

    pub fn from_content(lines: Vec<String>) -> Self {
        ScanSource::Content(lines)
    }

    /// 取出全部行（路径来源时容错读取文件）
    pub(crate) fn lines(&self) -> Result<Vec<String>> {
        match self {
            ScanSource::Path(path) => scanner::file_content(path),
            ScanSource::Content(lines) => Ok(lines.clone()),
        }
    }

    /// 错误信息用的来源描述
    pub(crate) fn describe(&self) -> String {
        match self {
            ScanSource::Path(path) => path.display().to_string(),
            ScanSource::Content(_) => "<in-memory content>".to_string(),
        }
    }
}

/// 按文件扩展名分发解析
///
/// 路径不存在或扩展名不被识别时返回 `Ok(None)`；
/// 解析本身的失败仍然作为错误返回。
pub fn parse_xrd_file(path: &Path) -> Result<Option<XrdScan>> {
    if !path.exists() {
        return Ok(None);
    }

    let format = match XrdFormat::from_extension(path) {
        Some(format) => format,
        None => return Ok(None),
    };

    let source = ScanSource::from_path(path);
    parse_source(&source, format).map(Some)
}

/// 解析内存中的行内容（需显式给定格式）
pub fn parse_xrd_content(lines: Vec<String>, format: XrdFormat) -> Result<XrdScan> {
    parse_source(&ScanSource::from_content(lines), format)
}

/// 路由到格式专属解析器
fn parse_source(source: &ScanSource, format: XrdFormat) -> Result<XrdScan> {
    match format {
        XrdFormat::Ras => ras::parse_ras(source).map(XrdScan::from),
        XrdFormat::Asc => asc::parse_asc(source).map(XrdScan::from),
        XrdFormat::Txt => txt::parse_txt(source).map(XrdScan::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScanData;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/data")
            .join(name)
    }

    #[test]
    fn test_dispatch_missing_path() {
        let result = parse_xrd_file(Path::new("/nonexistent/scan.ras")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_dispatch_unknown_extension() {
        // 存在但扩展名不被识别
        let path = fixture("xrd_file.ras");
        let renamed = std::env::temp_dir().join("xrdkit_dispatch_test.dat");
        std::fs::copy(&path, &renamed).unwrap();

        let result = parse_xrd_file(&renamed).unwrap();
        assert!(result.is_none());

        std::fs::remove_file(&renamed).ok();
    }

    #[test]
    fn test_dispatch_ras_matches_direct_parser() {
        let path = fixture("xrd_file.ras");
        let dispatched = parse_xrd_file(&path).unwrap().unwrap();
        let direct: XrdScan = ras::parse_ras_file(&path).unwrap().into();

        assert_eq!(dispatched.format, XrdFormat::Ras);
        assert_eq!(dispatched.alpha1, direct.alpha1);
        assert_eq!(dispatched.alpha2, direct.alpha2);
        assert_eq!(dispatched.beta, direct.beta);
        assert_eq!(dispatched.data_first_line, direct.data_first_line);
        assert_eq!(dispatched.data, direct.data);
    }

    #[test]
    fn test_dispatch_asc_matches_direct_parser() {
        let path = fixture("xrd_file.asc");
        let dispatched = parse_xrd_file(&path).unwrap().unwrap();
        let direct: XrdScan = asc::parse_asc(&ScanSource::from_path(&path)).unwrap().into();

        assert_eq!(dispatched.format, XrdFormat::Asc);
        assert_eq!(dispatched.alpha1, direct.alpha1);
        assert_eq!(dispatched.two_theta_range, direct.two_theta_range);
        assert_eq!(dispatched.data_first_line, direct.data_first_line);
        assert_eq!(dispatched.data, direct.data);
    }

    #[test]
    fn test_dispatch_txt_matches_direct_parser() {
        let path = fixture("xrd_file.txt");
        let dispatched = parse_xrd_file(&path).unwrap().unwrap();
        let direct: XrdScan = txt::parse_txt(&ScanSource::from_path(&path)).unwrap().into();

        assert_eq!(dispatched.format, XrdFormat::Txt);
        assert_eq!(dispatched.data, direct.data);
    }

    #[test]
    fn test_parse_content_with_hint() {
        let lines = scanner::file_content(&fixture("xrd_file.asc")).unwrap();
        let scan = parse_xrd_content(lines, XrdFormat::Asc).unwrap();

        assert_eq!(scan.alpha1.as_deref(), Some("1.54059"));
        match scan.data {
            ScanData::Counts(counts) => assert_eq!(counts[0], 165),
            _ => panic!("ASC data should be a flat count stream"),
        }
    }
}
