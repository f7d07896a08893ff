//! # anode 子命令实现
//!
//! 从显式波长或已解析文件的头部识别阳极材料。
//!
//! ## 依赖关系
//! - 使用 `cli/anode.rs` 定义的 AnodeArgs
//! - 使用 `analysis/anode.rs` 查表

use crate::analysis::{retrieve_anode_material, AnodeQuery};
use crate::cli::anode::AnodeArgs;
use crate::error::{Result, XrdKitError};
use crate::utils::output;

/// 执行 anode 命令
pub fn execute(args: AnodeArgs) -> Result<()> {
    output::print_header("Anode Material Identification");

    // 文件头部的波长作为基底，显式参数覆盖
    let mut query = AnodeQuery {
        alpha1: args.alpha1,
        alpha2: args.alpha2,
        beta: args.beta,
    };

    if let Some(input) = &args.input {
        let scan = super::load_scan(input)?;
        query.alpha1 = args.alpha1.or(scan.alpha1_value());
        query.alpha2 = args.alpha2.or(scan.alpha2_value());
        query.beta = args.beta.or(scan.beta_value());
    }

    if query.alpha1.is_none() && query.alpha2.is_none() && query.beta.is_none() {
        return Err(XrdKitError::InvalidArgument(
            "supply at least one of --alpha1/--alpha2/--beta, or --input with wavelength headers"
                .to_string(),
        ));
    }

    if let Some(alpha1) = query.alpha1 {
        output::print_info(&format!("alpha1 = {} A", alpha1));
    }
    if let Some(alpha2) = query.alpha2 {
        output::print_info(&format!("alpha2 = {} A", alpha2));
    }
    if let Some(beta) = query.beta {
        output::print_info(&format!("beta   = {} A", beta));
    }

    match retrieve_anode_material(&query, args.tolerance) {
        Some(material) => {
            output::print_success(&format!("Anode material: {}", material));
        }
        None => {
            output::print_warning(&format!(
                "No anode material within tolerance {} A",
                args.tolerance
            ));
        }
    }

    Ok(())
}
