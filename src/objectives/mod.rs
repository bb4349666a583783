//! 目标函数接口，以及两个基准函数和适应度转换的实现
//!
//! 目标函数都是最小化问题，适应度函数负责把它们转换为越大越好的适应度

pub mod camel;
pub mod fitness;
pub mod schwefel;

pub trait 目标函数 {
    fn 名称(&self) -> &'static str;

    /// 目标函数要求的变量个数，`None` 表示任意维数
    fn 维数(&self) -> Option<usize>;

    fn 计算(&self, 变量: &[f64]) -> f64;

    /// 目标函数在 [下界, 上界]^变量数 上取值的一个上界，用于确定安全的适应度偏移量
    fn 上确界(&self, 下界: f64, 上界: f64, 变量数: usize) -> f64;
}
