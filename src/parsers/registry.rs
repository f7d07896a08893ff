//! # 格式规则注册表
//!
//! 每种厂商格式的头部字段规则：字段 → (行前缀, 捕获正则)。
//! 某格式不编码的字段显式为 `None`，解析器据此跳过查找。
//! 新增厂商格式只需在此添加一个表项，扫描器与分发器不变。
//!
//! ## 依赖关系
//! - 被 `parsers/ras.rs`, `parsers/asc.rs` 消费
//! - 进程级只读静态数据，加载时初始化，之后不再变更

use crate::models::XrdFormat;
use crate::parsers::scanner;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// 单个头部字段的匹配规则
#[derive(Debug)]
pub struct FieldRule {
    /// 行必须以此字面前缀开头，才尝试正则
    pub starts_with: &'static str,
    /// 捕获字段值的正则（第一个捕获组）
    pub pattern: Regex,
}

impl FieldRule {
    fn new(starts_with: &'static str, pattern: &str) -> Self {
        FieldRule {
            starts_with,
            pattern: Regex::new(pattern).expect("invalid field pattern"),
        }
    }

    /// 对一行应用规则，命中时返回捕获值
    pub fn apply(&self, line: &str) -> Option<String> {
        scanner::pattern_match(line, self.starts_with, &self.pattern)
    }
}

/// 一种格式的全部头部字段规则
#[derive(Debug)]
pub struct FormatRules {
    pub alpha1: Option<FieldRule>,
    pub alpha2: Option<FieldRule>,
    pub beta: Option<FieldRule>,
    pub range_start: Option<FieldRule>,
    pub range_stop: Option<FieldRule>,
    pub range_step: Option<FieldRule>,
    /// 头部/数据边界标记行的字面前缀
    pub data_start: Option<&'static str>,
}

/// 格式规则注册表
static FORMAT_RULES: LazyLock<HashMap<XrdFormat, FormatRules>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Rigaku .ras：波长字段带引号，数据块由 *RAS_INT_START 开始
    m.insert(
        XrdFormat::Ras,
        FormatRules {
            alpha1: Some(FieldRule::new(
                "*HW_XG_WAVE_LENGTH_ALPHA1",
                r#"\*HW_XG_WAVE_LENGTH_ALPHA1\s{1}"(\d\.\d*)""#,
            )),
            alpha2: Some(FieldRule::new(
                "*HW_XG_WAVE_LENGTH_ALPHA2",
                r#"\*HW_XG_WAVE_LENGTH_ALPHA2\s{1}"(\d\.\d*)""#,
            )),
            beta: Some(FieldRule::new(
                "*HW_XG_WAVE_LENGTH_BETA",
                r#"\*HW_XG_WAVE_LENGTH_BETA\s{1}"(\d\.\d*)""#,
            )),
            range_start: None,
            range_stop: None,
            range_step: None,
            data_start: Some("*RAS_INT_START"),
        },
    );

    // Rigaku .asc：键值对风格头部，数据块由 *COUNT 行开始
    m.insert(
        XrdFormat::Asc,
        FormatRules {
            alpha1: Some(FieldRule::new(
                "*WAVE_LENGTH1",
                r"\*WAVE_LENGTH1\s*=\s*(\d\.\d*)",
            )),
            alpha2: Some(FieldRule::new(
                "*WAVE_LENGTH2",
                r"\*WAVE_LENGTH2\s*=\s*(\d\.\d*)",
            )),
            beta: None,
            range_start: Some(FieldRule::new("*START", r"\*START\s*=\s*(\d+\.?\d*)")),
            range_stop: Some(FieldRule::new("*STOP", r"\*STOP\s*=\s*(\d+\.?\d*)")),
            range_step: Some(FieldRule::new("*STEP", r"\*STEP\s*=\s*(\d+\.?\d*)")),
            data_start: Some("*COUNT"),
        },
    );

    // 两列 .txt：没有任何头部元数据字段
    m.insert(
        XrdFormat::Txt,
        FormatRules {
            alpha1: None,
            alpha2: None,
            beta: None,
            range_start: None,
            range_stop: None,
            range_step: None,
            data_start: None,
        },
    );

    m
});

/// 获取某格式的规则表项
pub fn rules_for(format: XrdFormat) -> &'static FormatRules {
    // 三种格式在表中都有表项
    &FORMAT_RULES[&format]
}
