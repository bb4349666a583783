//! Schwefel 函数

use super::目标函数;

/// f(x) = Σ -xi·sin(√|xi|)，常用定义域为 [-500, 500]
#[derive(Debug, Clone, Copy)]
pub struct Schwefel;

impl 目标函数 for Schwefel {
    fn 名称(&self) -> &'static str {
        "Schwefel"
    }

    fn 维数(&self) -> Option<usize> {
        None
    }

    fn 计算(&self, 变量: &[f64]) -> f64 {
        变量.iter().map(|x| -x * x.abs().sqrt().sin()).sum()
    }

    // 每一项都不超过 |xi|
    fn 上确界(&self, 下界: f64, 上界: f64, 变量数: usize) -> f64 {
        下界.abs().max(上界.abs()) * 变量数 as f64
    }
}
