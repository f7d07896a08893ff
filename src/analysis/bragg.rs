//! # Bragg 角度/间距转换
//!
//! 由 2θ 序列和波长逐点计算晶面间距：d = λ / (2·sin(θ/2))。
//!
//! ## 依赖关系
//! - 被 `commands/spacing.rs` 调用
//! - 纯函数，无状态

use clap::ValueEnum;

/// 输入角度单位
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum AngleUnits {
    /// 弧度
    #[default]
    Rad,
    /// 度（先转换为弧度）
    Deg,
}

impl std::fmt::Display for AngleUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AngleUnits::Rad => write!(f, "rad"),
            AngleUnits::Deg => write!(f, "deg"),
        }
    }
}

/// 2θ 序列 → d 间距序列
///
/// sin(θ/2) 为零时产生非有限值，按原样传播，不做拦截。
pub fn theta_to_spacing(two_theta: &[f64], units: AngleUnits, wavelength: f64) -> Vec<f64> {
    two_theta
        .iter()
        .map(|&theta| {
            let theta = match units {
                AngleUnits::Deg => theta.to_radians(),
                AngleUnits::Rad => theta,
            };
            wavelength / (2.0 * (theta / 2.0).sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_conversion_radians() {
        let d = theta_to_spacing(&[PI / 2.0, PI / 3.0], AngleUnits::Rad, 1.25);
        assert!((d[0] - 0.88388).abs() < 1e-4);
        assert!((d[1] - 1.25).abs() < 1e-4);
    }

    #[test]
    fn test_conversion_degrees() {
        let d = theta_to_spacing(&[90.0, 60.0], AngleUnits::Deg, 1.25);
        assert!((d[0] - 0.88388).abs() < 1e-4);
        assert!((d[1] - 1.25).abs() < 1e-4);
    }

    #[test]
    fn test_conversion_preserves_length() {
        let d = theta_to_spacing(&[20.0, 20.01, 20.02, 20.03], AngleUnits::Deg, 1.54056);
        assert_eq!(d.len(), 4);
    }

    #[test]
    fn test_zero_angle_propagates_non_finite() {
        let d = theta_to_spacing(&[0.0], AngleUnits::Rad, 1.25);
        assert!(!d[0].is_finite());
    }
}
