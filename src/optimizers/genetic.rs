//! 遗传算法
//!
//! 每一代依次执行：评估、记录、选择、杂交、变异、替换。种群整体被后代替换，除了名人堂之外没有任何精英保留。

use super::logbook::{统计记录器, 首次达到代数};
use super::{个体, 优化方法, 优化结果, 最优个体};
use crate::config::配置;
use crate::encoders::编码器;
use crate::interfaces::{消息, 界面};
use crate::objectives::fitness::适应度函数;
use crate::operators::crossover::单点杂交;
use crate::operators::mutation::逐位翻转;
use crate::operators::selection::轮盘赌;
use crate::operators::{变异, 杂交, 选择};
use crate::错误;
use rand::Rng;
use tracing::{debug, info};

pub struct 遗传算法 {
    pub population_size: usize,
    pub generations: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    pub record_mean: bool,
}

impl 遗传算法 {
    pub fn 从配置创建(配置: &配置) -> Self {
        Self {
            population_size: 配置.population_size,
            generations: 配置.generations,
            mutation_rate: 配置.mutation_prob,
            crossover_rate: 配置.crossover_prob,
            record_mean: 配置.记录平均值(),
        }
    }

    fn 初始化种群<R: Rng>(&self, 问题: &适应度函数, rng: &mut R) -> Vec<个体> {
        (0..self.population_size)
            .map(|_| 个体::新建(问题.编码器.随机染色体(rng)))
            .collect()
    }

    /// 评估所有没有适应度的个体，返回评估的个数
    fn 评估(
        问题: &适应度函数,
        种群: &mut [个体],
        代数: usize,
    ) -> Result<(usize, Vec<f64>), 错误> {
        let mut 评估数 = 0;
        let mut 适应度 = Vec::with_capacity(种群.len());
        for 个体 in 种群.iter_mut() {
            let 值 = match 个体.适应度 {
                Some(值) => 值,
                None => {
                    let 值 = 问题.评估(&个体.染色体).map_err(|失败| 失败.发生于(代数))?;
                    个体.适应度 = Some(值);
                    评估数 += 1;
                    值
                }
            };
            适应度.push(值);
        }
        Ok((评估数, 适应度))
    }

    /// 轮盘赌选出与种群等大的交配池，相邻两个个体配对杂交，然后逐位变异
    fn 繁殖<R: Rng>(
        &self,
        种群: &[个体],
        适应度: &[f64],
        rng: &mut R,
    ) -> Result<Vec<个体>, 错误> {
        let 交配池 = 轮盘赌.选择(适应度, 种群.len(), rng)?;
        // 复制而不是引用，杂交和变异不能影响亲本
        let mut 后代: Vec<个体> = 交配池.into_iter().map(|序号| 种群[序号].clone()).collect();

        let 杂交算子 = 单点杂交 {
            概率: self.crossover_rate,
        };
        for 一对 in 后代.chunks_exact_mut(2) {
            let (左, 右) = 一对.split_at_mut(1);
            let (甲, 乙) = (&mut 左[0], &mut 右[0]);
            if 杂交算子.杂交(&mut 甲.染色体, &mut 乙.染色体, rng) {
                甲.适应度 = None;
                乙.适应度 = None;
            }
        }

        let 变异算子 = 逐位翻转 {
            概率: self.mutation_rate,
        };
        for 子代 in 后代.iter_mut() {
            if 变异算子.变异(&mut 子代.染色体, rng) > 0 {
                子代.适应度 = None;
            }
        }
        Ok(后代)
    }
}

/// 适应度相同时取序号最小的个体
fn 本代最优(适应度: &[f64]) -> Option<usize> {
    let mut 最优: Option<usize> = None;
    for (序号, &值) in 适应度.iter().enumerate() {
        if 最优.is_none_or(|i| 值 > 适应度[i]) {
            最优 = Some(序号);
        }
    }
    最优
}

impl 优化方法 for 遗传算法 {
    fn 优化<R: Rng>(
        &self,
        问题: &适应度函数,
        rng: &mut R,
        界面: &dyn 界面,
    ) -> Result<优化结果, 错误> {
        let 染色体长度 = 问题.编码器.染色体长度();
        info!(
            objective = 问题.目标函数名称(),
            population_size = self.population_size,
            generations = self.generations,
            chromosome_length = 染色体长度,
            "开始运行遗传算法"
        );
        界面.发送(消息::Started {
            objective: 问题.目标函数名称().to_string(),
            population_size: self.population_size,
            generations: self.generations,
            chromosome_length: 染色体长度,
            fitness_offset: 问题.偏移量(),
        });

        let mut 种群 = self.初始化种群(问题, rng);
        let mut 记录器 = 统计记录器::新建(self.record_mean);
        // 名人堂只保存一个个体，只有严格更优的个体才能替换它
        let mut 名人堂: Option<(个体, f64)> = None;
        let mut 代数 = 0;
        loop {
            let (评估数, 适应度) = Self::评估(问题, &mut 种群, 代数)?;
            let 记录 = 记录器.记录(评估数, &适应度).clone();
            debug!(
                generation = 代数,
                evaluations = 评估数,
                max_fitness = 记录.max_fitness,
                "完成一代"
            );
            界面.发送(消息::Generation(记录));

            if let Some(序号) = 本代最优(&适应度) {
                let 值 = 适应度[序号];
                if 名人堂.as_ref().is_none_or(|(_, 最优值)| 值 > *最优值) {
                    let 候选 = &种群[序号];
                    界面.发送(消息::BetterSolution {
                        generation: 代数,
                        fitness: 值,
                        objective_value: 问题.目标值(值),
                        variables: 问题.编码器.解码(&候选.染色体),
                    });
                    名人堂 = Some((候选.clone(), 值));
                }
            }

            if 代数 == self.generations {
                break;
            }
            种群 = self.繁殖(&种群, &适应度, rng)?;
            代数 += 1;
        }

        let (冠军, 最优值) = 名人堂.ok_or("种群为空，没有最优个体")?;
        let 最优个体 = 最优个体::解读(&冠军, 最优值, 问题);
        let 日志 = 记录器.完成();
        let 发现代数 = 首次达到代数(&日志, 最优值);
        info!(
            objective_value = 最优个体.objective_value,
            found_at = 发现代数,
            "遗传算法运行结束"
        );
        界面.发送(消息::Finished {
            best: 最优个体.clone(),
            found_at: 发现代数,
        });
        Ok(优化结果 {
            种群,
            日志,
            最优个体,
        })
    }
}
