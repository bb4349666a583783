//! 优化方法接口，以及遗传算法的实现
//!

use crate::encoders::{染色体, 染色体字符串, 编码器};
use crate::interfaces::界面;
use crate::objectives::fitness::适应度函数;
use crate::错误;
use logbook::代记录;
use rand::Rng;
use serde::{Serialize, Serializer};

pub mod genetic;
pub mod logbook;

/// 染色体和它的适应度；适应度为 None 表示染色体被修改过，需要重新评估
#[derive(Debug, Clone, PartialEq)]
pub struct 个体 {
    pub 染色体: 染色体,
    pub 适应度: Option<f64>,
}

impl 个体 {
    pub fn 新建(染色体: 染色体) -> Self {
        Self {
            染色体,
            适应度: None,
        }
    }
}

fn 序列化染色体<S: Serializer>(染色体: &染色体, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&染色体字符串(染色体))
}

/// 历代最优个体，以及它解码后的变量和原始的目标函数值
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct 最优个体 {
    #[serde(serialize_with = "序列化染色体")]
    pub chromosome: 染色体,
    pub variables: Vec<f64>,
    pub objective_value: f64,
    pub fitness: f64,
}

impl 最优个体 {
    pub fn 解读(个体: &个体, 适应度: f64, 问题: &适应度函数) -> Self {
        Self {
            chromosome: 个体.染色体.clone(),
            variables: 问题.编码器.解码(&个体.染色体),
            objective_value: 问题.目标值(适应度),
            fitness: 适应度,
        }
    }
}

pub struct 优化结果 {
    /// 最后一代的种群
    pub 种群: Vec<个体>,
    pub 日志: Vec<代记录>,
    pub 最优个体: 最优个体,
}

pub trait 优化方法 {
    fn 优化<R: Rng>(
        &self,
        问题: &适应度函数,
        rng: &mut R,
        界面: &dyn 界面,
    ) -> Result<优化结果, 错误>;
}
