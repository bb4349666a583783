//! libgenetic 是一个二进制编码遗传算法的教学实现。它在 Schwefel 和六峰驼背（Six-Hump Camel Back）两个基准函数上运行遗传算法，并逐代记录收敛过程。
//!
//! genetic 是使用 libgenetic 实现的命令行程序，用户提供问题配置文件或者选择内置预设，本程序运行遗传算法，输出每一代的统计日志以及历代最优个体。

pub mod config;
pub mod encoders;
pub mod interfaces;
pub mod objectives;
pub mod operators;
pub mod optimizers;

use config::配置;
use interfaces::{界面, 静默界面};
use objectives::fitness::适应度函数;
use optimizers::genetic::遗传算法;
use optimizers::{优化方法, 优化结果};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt::{self, Display};

/// 错误类型
///
/// 配置错误在运行开始之前就会被发现；求值错误和选择错误会中止当前的运行，并报告出错的代数
#[derive(Debug, Clone, PartialEq)]
pub enum 错误 {
    配置错误(String),
    求值错误 {
        代数: usize,
        变量: Vec<f64>,
        目标值: f64,
    },
    选择错误(String),
    输入输出错误(String),
}

impl Display for 错误 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            错误::配置错误(message) => write!(f, "配置错误：{message}"),
            错误::求值错误 {
                代数,
                变量,
                目标值,
            } => write!(
                f,
                "求值错误：第 {代数} 代中的个体 {变量:?} 的目标函数值 {目标值} 不是有限数"
            ),
            错误::选择错误(message) => write!(f, "选择错误：{message}"),
            错误::输入输出错误(message) => write!(f, "输入输出错误：{message}"),
        }
    }
}

impl std::error::Error for 错误 {}

impl From<String> for 错误 {
    fn from(value: String) -> Self {
        Self::配置错误(value)
    }
}

impl From<&str> for 错误 {
    fn from(value: &str) -> Self {
        Self::配置错误(value.to_string())
    }
}

impl From<std::io::Error> for 错误 {
    fn from(value: std::io::Error) -> Self {
        Self::输入输出错误(value.to_string())
    }
}

impl From<serde_yaml::Error> for 错误 {
    fn from(value: serde_yaml::Error) -> Self {
        Self::输入输出错误(value.to_string())
    }
}

impl From<csv::Error> for 错误 {
    fn from(value: csv::Error) -> Self {
        Self::输入输出错误(value.to_string())
    }
}

/// 使用给定的配置和随机数种子运行一次遗传算法，不向外报告中间过程
///
/// 相同的配置和种子总是得到完全相同的日志和最优个体
pub fn 运行(配置: &配置, 种子: u64) -> Result<优化结果, 错误> {
    运行并报告(配置, 种子, &静默界面)
}

/// 与 [`运行`] 相同，但是每一代的统计数据和最优个体的更新都会通过界面发送出去
pub fn 运行并报告(配置: &配置, 种子: u64, 界面: &dyn 界面) -> Result<优化结果, 错误> {
    配置.校验()?;
    let 问题 = 适应度函数::新建(配置)?;
    let 算法 = 遗传算法::从配置创建(配置);
    let mut 随机数生成器 = StdRng::seed_from_u64(种子);
    算法.优化(&问题, &mut 随机数生成器, 界面)
}
