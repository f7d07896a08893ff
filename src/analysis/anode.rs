//! # 阳极材料查表
//!
//! X 射线管阳极材料的特征发射波长表，以及按波长的最近匹配查询。
//!
//! ## 数据来源
//! International Tables for Crystallography, Vol. C,
//! 常用衍射阳极的 Kα1/Kα2/Kβ 特征波长（Å）。
//!
//! ## 依赖关系
//! - 被 `commands/anode.rs`, `commands/parse.rs` 调用
//! - 纯静态数据，无外部依赖

use std::sync::LazyLock;

/// 一种阳极材料的特征波长（Å）
#[derive(Debug, Clone, Copy)]
pub struct AnodeWavelengths {
    pub average: f64,
    pub alpha1: f64,
    pub alpha2: f64,
    pub beta: f64,
}

/// 阳极材料波长表
///
/// 顺序即匹配优先级，查询按插入顺序返回首个满足者。
pub static ANODE_WAVELENGTHS: LazyLock<Vec<(&'static str, AnodeWavelengths)>> =
    LazyLock::new(|| {
        vec![
            (
                "cu",
                AnodeWavelengths {
                    average: 1.54184,
                    alpha1: 1.54056,
                    alpha2: 1.54439,
                    beta: 1.39222,
                },
            ),
            (
                "mo",
                AnodeWavelengths {
                    average: 0.71073,
                    alpha1: 0.7093,
                    alpha2: 0.71359,
                    beta: 0.63229,
                },
            ),
            (
                "ag",
                AnodeWavelengths {
                    average: 0.56088,
                    alpha1: 0.55942,
                    alpha2: 0.56381,
                    beta: 0.49708,
                },
            ),
            (
                "cr",
                AnodeWavelengths {
                    average: 2.291,
                    alpha1: 2.2897,
                    alpha2: 2.29361,
                    beta: 2.08487,
                },
            ),
            (
                "fe",
                AnodeWavelengths {
                    average: 1.93736,
                    alpha1: 1.93604,
                    alpha2: 1.93998,
                    beta: 1.75661,
                },
            ),
            (
                "co",
                AnodeWavelengths {
                    average: 1.79026,
                    alpha1: 1.78897,
                    alpha2: 1.79285,
                    beta: 1.62079,
                },
            ),
        ]
    });

/// 阳极材料查询条件（各字段可选）
#[derive(Debug, Clone, Copy, Default)]
pub struct AnodeQuery {
    pub alpha1: Option<f64>,
    pub alpha2: Option<f64>,
    pub beta: Option<f64>,
}

impl AnodeQuery {
    fn is_empty(&self) -> bool {
        self.alpha1.is_none() && self.alpha2.is_none() && self.beta.is_none()
    }
}

/// 根据特征波长识别阳极材料
///
/// 按表序扫描，返回首个「所有给定字段都在容差内」的材料；
/// 未给定的字段不参与比较。不给任何字段时返回 `None`，
/// 避免空查询平凡匹配到表中第一项。
pub fn retrieve_anode_material(query: &AnodeQuery, tolerance: f64) -> Option<&'static str> {
    if query.is_empty() {
        return None;
    }

    for (material, wavelengths) in ANODE_WAVELENGTHS.iter() {
        if let Some(alpha1) = query.alpha1 {
            if (alpha1 - wavelengths.alpha1).abs() > tolerance {
                continue;
            }
        }
        if let Some(alpha2) = query.alpha2 {
            if (alpha2 - wavelengths.alpha2).abs() > tolerance {
                continue;
            }
        }
        if let Some(beta) = query.beta {
            if (beta - wavelengths.beta).abs() > tolerance {
                continue;
            }
        }
        return Some(material);
    }

    None
}
