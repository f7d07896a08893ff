//! # parse 子命令实现
//!
//! 解析 XRD 数据文件，打印头部元数据摘要（含阳极材料推断），
//! 并可导出曲线到 CSV。目录输入时批量并行处理。
//!
//! ## 依赖关系
//! - 使用 `cli/parse.rs` 定义的 ParseArgs
//! - 使用 `parsers/` 解析、`analysis/anode.rs` 识别阳极
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `export.rs` 写 CSV

use crate::analysis::{retrieve_anode_material, AnodeQuery};
use crate::batch::{self, ProcessResult};
use crate::cli::parse::ParseArgs;
use crate::error::{Result, XrdKitError};
use crate::export;
use crate::models::XrdScan;
use crate::parsers;
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};

/// 执行 parse 命令
pub fn execute(args: ParseArgs) -> Result<()> {
    output::print_header("XRD Data File Parsing");

    if args.input.is_file() {
        execute_single(&args)
    } else if args.input.is_dir() {
        execute_batch(&args)
    } else {
        Err(XrdKitError::FileNotFound {
            path: args.input.display().to_string(),
        })
    }
}

/// 单文件模式
fn execute_single(args: &ParseArgs) -> Result<()> {
    output::print_info(&format!("Parsing '{}'", args.input.display()));

    let scan = super::load_scan(&args.input)?;
    print_summary(&scan, args.tolerance);

    if let Some(output_path) = &args.output {
        export::scan_to_csv(&scan, output_path)?;
        output::print_success(&format!("Curve written to '{}'", output_path.display()));
    }

    Ok(())
}

/// 批量处理模式
fn execute_batch(args: &ParseArgs) -> Result<()> {
    output::print_info(&format!("Batch mode: directory '{}'", args.input.display()));

    let files = batch::collect_scan_files(&args.input, args.recursive);
    if files.is_empty() {
        output::print_warning("No .ras/.asc/.txt files found");
        return Ok(());
    }

    output::print_info(&format!("Found {} data files", files.len()));

    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir).map_err(|e| XrdKitError::FileWriteError {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let overwrite = args.overwrite;
    let result = batch::run_parallel(files, args.jobs, |file| {
        process_batch_file(file, &output_dir, overwrite)
    });

    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} success, {} skipped, {} failed",
        result.success, result.skipped, result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 处理批量模式中的单个文件
fn process_batch_file(input: &Path, output_dir: &Path, overwrite: bool) -> ProcessResult {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("scan");
    let output_path = output_dir.join(format!("{}.csv", stem));

    if output_path.exists() && !overwrite {
        return ProcessResult::Skipped(output_path.display().to_string());
    }

    let scan = match parsers::parse_xrd_file(input) {
        Ok(Some(scan)) => scan,
        Ok(None) => {
            return ProcessResult::Failed(
                input.display().to_string(),
                "unrecognized format".to_string(),
            )
        }
        Err(e) => return ProcessResult::Failed(input.display().to_string(), e.to_string()),
    };

    match export::scan_to_csv(&scan, &output_path) {
        Ok(()) => ProcessResult::Success(output_path.display().to_string()),
        Err(e) => ProcessResult::Failed(input.display().to_string(), e.to_string()),
    }
}

/// 打印元数据摘要
fn print_summary(scan: &XrdScan, tolerance: f64) {
    output::print_separator();
    output::print_field("Format", Some(&scan.format.to_string()));
    output::print_field("alpha1 (A)", scan.alpha1.as_deref());
    output::print_field("alpha2 (A)", scan.alpha2.as_deref());
    output::print_field("beta (A)", scan.beta.as_deref());

    match &scan.two_theta_range {
        Some(range) => output::print_field(
            "2theta range",
            Some(&format!(
                "{} .. {} step {}",
                range.start, range.stop, range.step
            )),
        ),
        None => output::print_field("2theta range", None),
    }

    output::print_field("Header lines", Some(&scan.data_first_line.to_string()));
    output::print_field("Data points", Some(&scan.data.len().to_string()));

    // 头部有波长时尝试推断阳极材料
    let query = AnodeQuery {
        alpha1: scan.alpha1_value(),
        alpha2: scan.alpha2_value(),
        beta: scan.beta_value(),
    };
    output::print_field("Anode material", retrieve_anode_material(&query, tolerance));
    output::print_separator();
}
