//! 逐代统计日志

use serde::Serialize;
use serde_with::skip_serializing_none;

/// 一代的统计数据
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct 代记录 {
    pub generation: usize,
    /// 本代实际重新评估的个体数
    pub evaluations: usize,
    pub max_fitness: f64,
    pub mean_fitness: Option<f64>,
    pub min_fitness: f64,
}

/// 只读地观察每一代已经评估完的种群，向日志追加一条记录
///
/// 代数由已有记录的条数决定，所以同一代不可能被记录两次
pub struct 统计记录器 {
    日志: Vec<代记录>,
    记录平均值: bool,
}

impl 统计记录器 {
    pub fn 新建(记录平均值: bool) -> Self {
        Self {
            日志: vec![],
            记录平均值,
        }
    }

    pub fn 记录(&mut self, 评估数: usize, 适应度: &[f64]) -> &代记录 {
        let 最大值 = 适应度.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let 最小值 = 适应度.iter().copied().fold(f64::INFINITY, f64::min);
        let 平均值 = (self.记录平均值 && !适应度.is_empty())
            .then(|| 适应度.iter().sum::<f64>() / 适应度.len() as f64);
        self.日志.push(代记录 {
            generation: self.日志.len(),
            evaluations: 评估数,
            max_fitness: 最大值,
            mean_fitness: 平均值,
            min_fitness: 最小值,
        });
        &self.日志[self.日志.len() - 1]
    }

    pub fn 日志(&self) -> &[代记录] {
        &self.日志
    }

    pub fn 完成(self) -> Vec<代记录> {
        self.日志
    }
}

/// 从前往后扫描日志，返回第一条最大适应度达到给定值的记录所在的代数
pub fn 首次达到代数(日志: &[代记录], 最优适应度: f64) -> Option<usize> {
    日志
        .iter()
        .find(|记录| 记录.max_fitness >= 最优适应度)
        .map(|记录| 记录.generation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_one_record_per_generation() {
        let mut 记录器 = 统计记录器::新建(true);
        let 第零代 = 记录器.记录(4, &[1.0, 2.0, 3.0, 6.0]).clone();
        assert_eq!(
            第零代,
            代记录 {
                generation: 0,
                evaluations: 4,
                max_fitness: 6.0,
                mean_fitness: Some(3.0),
                min_fitness: 1.0,
            }
        );
        记录器.记录(1, &[5.0, 5.0]);
        let 日志 = 记录器.完成();
        assert_eq!(日志.len(), 2);
        assert_eq!(日志[1].generation, 1);
    }

    #[test]
    fn mean_is_optional() {
        let mut 记录器 = 统计记录器::新建(false);
        assert_eq!(记录器.记录(2, &[1.0, 2.0]).mean_fitness, None);
    }

    #[test]
    fn finds_first_generation_reaching_best() {
        let mut 记录器 = 统计记录器::新建(false);
        for 最大值 in [1.0, 3.0, 7.0, 7.0, 5.0] {
            记录器.记录(0, &[最大值]);
        }
        assert_eq!(首次达到代数(记录器.日志(), 7.0), Some(2));
        assert_eq!(首次达到代数(记录器.日志(), 3.0), Some(1));
        assert_eq!(首次达到代数(记录器.日志(), 8.0), None);
    }
}
