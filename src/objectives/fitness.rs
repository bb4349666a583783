//! 适应度函数：把最小化的目标函数值转换为最大化的适应度
//!
//! 适应度 = 偏移量 - 目标函数值。这是整个程序中唯一处理“最小化”与“最大化”方向的地方，进化引擎只知道适应度越大越好。

use super::目标函数;
use crate::config::配置;
use crate::encoders::binary::二进制编码器;
use crate::encoders::编码器;
use crate::错误;

/// 目标函数返回了非有限数时的诊断信息
#[derive(Debug, Clone, PartialEq)]
pub struct 求值失败 {
    pub 变量: Vec<f64>,
    pub 目标值: f64,
}

impl 求值失败 {
    pub fn 发生于(self, 代数: usize) -> 错误 {
        错误::求值错误 {
            代数,
            变量: self.变量,
            目标值: self.目标值,
        }
    }
}

pub struct 适应度函数 {
    pub 编码器: 二进制编码器,
    目标函数: Box<dyn 目标函数 + Send + Sync>,
    偏移量: f64,
}

impl 适应度函数 {
    pub fn 新建(配置: &配置) -> Result<Self, 错误> {
        Ok(Self {
            编码器: 二进制编码器::新建(配置),
            目标函数: 配置.objective.构建(),
            偏移量: 配置.偏移量()?,
        })
    }

    /// 使用内置预设以外的目标函数，同样检查维数和偏移量
    pub fn 从目标函数创建(
        编码器: 二进制编码器,
        目标函数: Box<dyn 目标函数 + Send + Sync>,
        偏移量: f64,
    ) -> Result<Self, 错误> {
        if let Some(维数) = 目标函数.维数() {
            if 维数 != 编码器.变量数 {
                return Err(format!(
                    "目标函数 {} 要求 {维数} 个变量，但编码器有 {} 个",
                    目标函数.名称(),
                    编码器.变量数
                )
                .into());
            }
        }
        let 上确界 = 目标函数.上确界(编码器.下界, 编码器.上界, 编码器.变量数);
        if !偏移量.is_finite() || !上确界.is_finite() || 偏移量 <= 上确界 {
            return Err(format!(
                "适应度偏移量 {偏移量} 不足以保证适应度为正，目标函数在定义域上的上界为 {上确界}"
            )
            .into());
        }
        Ok(Self {
            编码器,
            目标函数,
            偏移量,
        })
    }

    pub fn 偏移量(&self) -> f64 {
        self.偏移量
    }

    pub fn 目标函数名称(&self) -> &'static str {
        self.目标函数.名称()
    }

    pub fn 评估(&self, 染色体: &[bool]) -> Result<f64, 求值失败> {
        let 变量 = self.编码器.解码(染色体);
        let 目标值 = self.目标函数.计算(&变量);
        if !目标值.is_finite() {
            return Err(求值失败 { 变量, 目标值 });
        }
        Ok(self.偏移量 - 目标值)
    }

    /// 由适应度还原目标函数值
    pub fn 目标值(&self, 适应度: f64) -> f64 {
        self.偏移量 - 适应度
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::目标函数类型;
    use crate::encoders::随机染色体;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fitness_is_offset_minus_objective() {
        let 问题 = 适应度函数::新建(&配置::预设(目标函数类型::SixHumpCamelBack)).unwrap();
        // 全零染色体解码为 (-5, -5)
        let 适应度 = 问题.评估(&[false; 40]).unwrap();
        let 目标值 = 4.0 * 25.0 - 2.1 * 625.0 + 15625.0 / 3.0 + 25.0 - 100.0 + 2500.0;
        assert!((适应度 - (10000.0 - 目标值)).abs() < 1e-9);
        assert!((问题.目标值(适应度) - 目标值).abs() < 1e-9);
    }

    fn 单变量编码器() -> 二进制编码器 {
        二进制编码器 {
            变量数: 1,
            每变量位数: 8,
            下界: -5.0,
            上界: 5.0,
        }
    }

    #[test]
    fn custom_objective_must_match_dimension() {
        let 结果 = 适应度函数::从目标函数创建(单变量编码器(), 目标函数类型::SixHumpCamelBack.构建(), 10000.0);
        assert!(matches!(结果, Err(错误::配置错误(_))));
    }

    #[test]
    fn custom_objective_needs_safe_offset() {
        for 偏移量 in [1.0, 5.0, f64::INFINITY, f64::NAN] {
            let 结果 = 适应度函数::从目标函数创建(单变量编码器(), 目标函数类型::Schwefel.构建(), 偏移量);
            assert!(matches!(结果, Err(错误::配置错误(_))), "偏移量 {偏移量} 应当被拒绝");
        }
        let 问题 = 适应度函数::从目标函数创建(单变量编码器(), 目标函数类型::Schwefel.构建(), 6.0).unwrap();
        assert!(问题.评估(&[true; 8]).unwrap() > 0.0);
    }

    #[test]
    fn fitness_is_always_positive() {
        let mut rng = StdRng::seed_from_u64(3);
        for 类型 in [目标函数类型::Schwefel, 目标函数类型::SixHumpCamelBack] {
            let mut 配置 = 配置::预设(类型);
            配置.fitness_offset = None;
            let 问题 = 适应度函数::新建(&配置).unwrap();
            let 长度 = 配置.染色体长度();
            for _ in 0..500 {
                assert!(问题.评估(&随机染色体(长度, &mut rng)).unwrap() > 0.0);
            }
            assert!(问题.评估(&vec![true; 长度]).unwrap() > 0.0);
            assert!(问题.评估(&vec![false; 长度]).unwrap() > 0.0);
        }
    }
}
