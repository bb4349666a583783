use crate::optimizers::logbook::代记录;
use crate::optimizers::最优个体;
use serde::Serialize;
use serde_with::skip_serializing_none;

pub mod command_line;

/// 向用户反馈的消息类型
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum 消息 {
    Started {
        objective: String,
        population_size: usize,
        generations: usize,
        chromosome_length: usize,
        fitness_offset: f64,
    },
    Generation(代记录),
    BetterSolution {
        generation: usize,
        fitness: f64,
        objective_value: f64,
        variables: Vec<f64>,
    },
    Finished {
        best: 最优个体,
        found_at: Option<usize>,
    },
}

/// 定义了向用户报告消息的接口，用于统一命令行和其他展示层的输出方式
///
/// 展示层只需要实现 发送 方法，就可接收每一代的统计数据和最优个体的变化
pub trait 界面 {
    fn 发送(&self, 消息: 消息);
}

/// 丢弃所有消息
pub struct 静默界面;

impl 界面 for 静默界面 {
    fn 发送(&self, _消息: 消息) {}
}
