use super::选择;
use crate::错误;
use rand::Rng;

/// 轮盘赌选择：每个个体被选中的概率等于它的适应度占种群总适应度的比例
///
/// 所有适应度都必须是正的有限数
#[derive(Debug, Clone, Copy, Default)]
pub struct 轮盘赌;

impl 选择 for 轮盘赌 {
    fn 选择<R: Rng>(&self, 适应度: &[f64], 数量: usize, rng: &mut R) -> Result<Vec<usize>, 错误> {
        if 适应度.is_empty() {
            return Err(错误::选择错误("种群为空".to_string()));
        }
        if let Some(序号) = 适应度.iter().position(|&f| !(f.is_finite() && f > 0.0)) {
            return Err(错误::选择错误(format!(
                "第 {序号} 个个体的适应度 {} 不是正数，无法进行轮盘赌选择",
                适应度[序号]
            )));
        }
        let 累积: Vec<f64> = 适应度
            .iter()
            .scan(0.0, |总和, &f| {
                *总和 += f;
                Some(*总和)
            })
            .collect();
        let 总和 = 累积[累积.len() - 1];
        if !总和.is_finite() {
            return Err(错误::选择错误("总适应度溢出".to_string()));
        }
        (0..数量)
            .map(|_| {
                let 指针 = rng.random_range(0.0..总和);
                let 序号 = 累积.partition_point(|&c| c <= 指针);
                if 序号 < 累积.len() {
                    Ok(序号)
                } else {
                    Err(错误::选择错误("轮盘赌未能选中任何个体".to_string()))
                }
            })
            .collect()
    }
}
