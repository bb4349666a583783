//! 六峰驼背函数（Six-Hump Camel Back）

use super::目标函数;

/// f(x1, x2) = 4x1² - 2.1x1⁴ + x1⁶/3 + x1·x2 - 4x2² + 4x2⁴
///
/// 全局最小值约为 -1.0316，位于 (0.0898, -0.7126) 和 (-0.0898, 0.7126)
#[derive(Debug, Clone, Copy)]
pub struct 六峰驼背;

impl 目标函数 for 六峰驼背 {
    fn 名称(&self) -> &'static str {
        "Six-Hump Camel Back"
    }

    fn 维数(&self) -> Option<usize> {
        Some(2)
    }

    fn 计算(&self, 变量: &[f64]) -> f64 {
        let (x1, x2) = (变量[0], 变量[1]);
        let 第一项 = 4.0 * x1.powi(2) - 2.1 * x1.powi(4) + x1.powi(6) / 3.0;
        let 第二项 = x1 * x2;
        let 第三项 = -4.0 * x2.powi(2) + 4.0 * x2.powi(4);
        第一项 + 第二项 + 第三项
    }

    // 去掉恒为非正的两项，其余各项取绝对值的最大值
    fn 上确界(&self, 下界: f64, 上界: f64, _变量数: usize) -> f64 {
        let a = 下界.abs().max(上界.abs());
        4.0 * a.powi(2) + a.powi(6) / 3.0 + a * a + 4.0 * a.powi(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_known_points() {
        assert_eq!(六峰驼背.计算(&[0.0, 0.0]), 0.0);
        assert!((六峰驼背.计算(&[0.0898, -0.7126]) + 1.0316).abs() < 1e-4);
        assert!((六峰驼背.计算(&[-0.0898, 0.7126]) + 1.0316).abs() < 1e-4);
    }

    #[test]
    fn preset_offset_is_safe() {
        assert!(六峰驼背.上确界(-5.0, 5.0, 2) < 10000.0);
        assert!(六峰驼背.计算(&[5.0, 5.0]) <= 六峰驼背.上确界(-5.0, 5.0, 2));
        assert!(六峰驼背.计算(&[-5.0, -5.0]) <= 六峰驼背.上确界(-5.0, 5.0, 2));
    }
}
