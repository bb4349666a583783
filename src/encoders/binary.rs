//! 定长二进制编码器

use super::{解码区块, 染色体, 编码器};
use crate::config::配置;

#[derive(Debug, Clone, PartialEq)]
pub struct 二进制编码器 {
    pub 变量数: usize,
    pub 每变量位数: usize,
    pub 下界: f64,
    pub 上界: f64,
}

impl 二进制编码器 {
    /// 配置应当已经通过校验
    pub fn 新建(配置: &配置) -> Self {
        let (下界, 上界) = 配置.var_range;
        Self {
            变量数: 配置.n_vars,
            每变量位数: 配置.bits_per_var,
            下界,
            上界,
        }
    }

    fn 最大整数值(&self) -> u64 {
        (1u64 << self.每变量位数) - 1
    }

    /// 相邻两个可表示值之间的距离
    pub fn 量化误差(&self) -> f64 {
        (self.上界 - self.下界) / self.最大整数值() as f64
    }
}

impl 编码器 for 二进制编码器 {
    fn 染色体长度(&self) -> usize {
        self.变量数 * self.每变量位数
    }

    fn 解码(&self, 染色体: &[bool]) -> Vec<f64> {
        解码区块(染色体, self.每变量位数, self.下界, self.上界)
    }

    fn 编码(&self, 变量: &[f64]) -> 染色体 {
        let 最大值 = self.最大整数值();
        let mut 染色体 = Vec::with_capacity(self.染色体长度());
        for &x in 变量.iter().take(self.变量数) {
            let 比例 = ((x - self.下界) / (self.上界 - self.下界)).clamp(0.0, 1.0);
            let 整数值 = (比例 * 最大值 as f64).round() as u64;
            for 位序 in (0..self.每变量位数).rev() {
                染色体.push((整数值 >> 位序) & 1 == 1);
            }
        }
        染色体
    }
}
