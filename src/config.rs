//! 问题配置的定义、内置预设以及运行前的校验

use crate::objectives::camel::六峰驼背;
use crate::objectives::schwefel::Schwefel;
use crate::objectives::目标函数;
use crate::错误;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// 每个变量最多允许的二进制位数，保证区块的整数值在 f64 中可以精确表示
pub const 最大位数: usize = 53;

pub const 默认种子: u64 = 42;
pub const 默认杂交概率: f64 = 0.8;
pub const 默认变异概率: f64 = 0.01;

/// 可供选择的目标函数，每次运行只能选择其中一个
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum 目标函数类型 {
    Schwefel,
    SixHumpCamelBack,
}

impl 目标函数类型 {
    pub fn 构建(&self) -> Box<dyn 目标函数 + Send + Sync> {
        match self {
            目标函数类型::Schwefel => Box::new(Schwefel),
            目标函数类型::SixHumpCamelBack => Box::new(六峰驼背),
        }
    }
}

/// 一次运行的全部参数，运行期间不可变
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct 配置 {
    pub objective: 目标函数类型,
    pub n_vars: usize,
    pub bits_per_var: usize,
    pub var_range: (f64, f64),
    pub population_size: usize,
    pub generations: usize,
    pub crossover_prob: f64,
    pub mutation_prob: f64,
    /// 适应度偏移量，不提供时根据目标函数在定义域上的上界自动计算
    pub fitness_offset: Option<f64>,
    /// 是否在日志中记录平均适应度，默认为是
    pub record_mean: Option<bool>,
}

impl 配置 {
    /// 内置的两个问题预设
    pub fn 预设(类型: 目标函数类型) -> Self {
        match 类型 {
            目标函数类型::Schwefel => Self {
                objective: 类型,
                n_vars: 30,
                bits_per_var: 16,
                var_range: (-500.0, 500.0),
                population_size: 1000,
                generations: 200,
                crossover_prob: 默认杂交概率,
                mutation_prob: 默认变异概率,
                fitness_offset: Some(30000.0),
                record_mean: None,
            },
            目标函数类型::SixHumpCamelBack => Self {
                objective: 类型,
                n_vars: 2,
                bits_per_var: 20,
                var_range: (-5.0, 5.0),
                population_size: 200,
                generations: 100,
                crossover_prob: 默认杂交概率,
                mutation_prob: 默认变异概率,
                fitness_offset: Some(10000.0),
                record_mean: None,
            },
        }
    }

    pub fn 染色体长度(&self) -> usize {
        self.n_vars * self.bits_per_var
    }

    pub fn 记录平均值(&self) -> bool {
        self.record_mean.unwrap_or(true)
    }

    /// 返回本次运行实际使用的适应度偏移量
    ///
    /// 偏移量必须严格大于目标函数在整个定义域上的上界，这样所有个体的适应度都是正数，轮盘赌选择才有意义
    pub fn 偏移量(&self) -> Result<f64, 错误> {
        let (下界, 上界) = self.var_range;
        let 上确界 = self.objective.构建().上确界(下界, 上界, self.n_vars);
        if !上确界.is_finite() {
            return Err(format!("目标函数在 [{下界}, {上界}] 上的取值超出了浮点数的范围").into());
        }
        match self.fitness_offset {
            Some(偏移量) if !偏移量.is_finite() || 偏移量 <= 上确界 => Err(format!(
                "适应度偏移量 {偏移量} 不足以保证适应度为正，目标函数在定义域上的上界为 {上确界}"
            )
            .into()),
            Some(偏移量) => Ok(偏移量),
            None => {
                // 上界很大时加 1 会被舍入掉，至少要加上一个最小精度单位
                let 偏移量 = 上确界 + 1.0_f64.max(上确界.abs() * f64::EPSILON);
                if 偏移量.is_finite() {
                    Ok(偏移量)
                } else {
                    Err(format!("目标函数在定义域上的上界 {上确界} 太大，无法计算适应度偏移量").into())
                }
            }
        }
    }

    /// 在运行开始之前检查所有参数，任何一项不合法都会立即返回配置错误
    pub fn 校验(&self) -> Result<(), 错误> {
        if self.n_vars == 0 {
            return Err("变量数必须为正".into());
        }
        if self.bits_per_var == 0 {
            return Err("每个变量的位数必须为正".into());
        }
        if self.bits_per_var > 最大位数 {
            return Err(format!("每个变量的位数不能超过 {最大位数}").into());
        }
        if self.n_vars.checked_mul(self.bits_per_var).is_none() {
            return Err("染色体长度溢出".into());
        }
        let (下界, 上界) = self.var_range;
        if !下界.is_finite() || !上界.is_finite() || !(上界 - 下界).is_finite() {
            return Err(format!("变量范围 [{下界}, {上界}] 的端点或宽度超出了浮点数的范围").into());
        }
        if 下界 >= 上界 {
            return Err(format!("变量范围 [{下界}, {上界}] 不合法，下界必须小于上界").into());
        }
        if self.population_size == 0 {
            return Err("种群规模必须为正".into());
        }
        for (名称, 概率) in [
            ("杂交概率", self.crossover_prob),
            ("变异概率", self.mutation_prob),
        ] {
            if !(0.0..=1.0).contains(&概率) {
                return Err(format!("{名称}必须在 0 到 1 之间，实际为 {概率}").into());
            }
        }
        if let Some(维数) = self.objective.构建().维数() {
            if 维数 != self.n_vars {
                return Err(format!(
                    "目标函数 {:?} 要求 {维数} 个变量，但配置了 {} 个",
                    self.objective, self.n_vars
                )
                .into());
            }
        }
        self.偏移量()?;
        Ok(())
    }
}
