//! 染色体的表示，以及染色体与实数向量之间的编码、解码
//!

use crate::config::最大位数;
use crate::错误;
use rand::Rng;
pub mod binary;

/// 定长的二进制位序列，每一位都可以独立变异
pub type 染色体 = Vec<bool>;

pub trait 编码器 {
    fn 染色体长度(&self) -> usize;

    /// 将染色体还原为实数向量
    fn 解码(&self, 染色体: &[bool]) -> Vec<f64>;

    /// 找到与给定实数向量最接近的可表示染色体，超出范围的分量会被截断到边界
    fn 编码(&self, 变量: &[f64]) -> 染色体;

    fn 随机染色体<R: Rng>(&self, rng: &mut R) -> 染色体 {
        随机染色体(self.染色体长度(), rng)
    }
}

/// 生成指定长度、每一位独立均匀随机的染色体，只在种群初始化时使用
pub fn 随机染色体<R: Rng>(长度: usize, rng: &mut R) -> 染色体 {
    (0..长度).map(|_| rng.random_bool(0.5)).collect()
}

/// 把染色体切分为若干个等长区块，每个区块按照高位在前的无符号整数线性映射到 [下界, 上界]
///
/// 染色体长度必须能被变量数整除，且每个区块至少有一位
pub fn 解码(染色体: &[bool], 下界: f64, 上界: f64, 变量数: usize) -> Result<Vec<f64>, 错误> {
    if 变量数 == 0 || 染色体.len() % 变量数 != 0 {
        return Err(format!("长度为 {} 的染色体无法均分为 {变量数} 个变量", 染色体.len()).into());
    }
    let 位数 = 染色体.len() / 变量数;
    if 位数 == 0 || 位数 > 最大位数 {
        return Err(format!("每个变量的位数 {位数} 不在 1 到 {最大位数} 之间").into());
    }
    Ok(解码区块(染色体, 位数, 下界, 上界))
}

pub(crate) fn 解码区块(染色体: &[bool], 位数: usize, 下界: f64, 上界: f64) -> Vec<f64> {
    let 最大值 = (1u64 << 位数) - 1;
    染色体
        .chunks_exact(位数)
        .map(|区块| {
            let 整数值 = 区块.iter().fold(0u64, |累积, &位| (累积 << 1) | 位 as u64);
            映射到区间(整数值, 最大值, 下界, 上界)
        })
        .collect()
}

fn 映射到区间(整数值: u64, 最大值: u64, 下界: f64, 上界: f64) -> f64 {
    // 端点必须精确落在边界上
    if 整数值 == 最大值 {
        return 上界;
    }
    let 比例 = 整数值 as f64 / 最大值 as f64;
    (下界 + 比例 * (上界 - 下界)).min(上界)
}

/// 以 0、1 字符串的形式展示染色体
pub fn 染色体字符串(染色体: &[bool]) -> String {
    染色体.iter().map(|&位| if 位 { '1' } else { '0' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_endpoints_exactly() {
        let 全零 = vec![false; 40];
        let 全一 = vec![true; 40];
        assert_eq!(解码(&全零, -5.0, 5.0, 2).unwrap(), vec![-5.0, -5.0]);
        assert_eq!(解码(&全一, -5.0, 5.0, 2).unwrap(), vec![5.0, 5.0]);
        assert_eq!(解码(&全一, -0.1, 0.3, 4).unwrap(), vec![0.3; 4]);
    }

    #[test]
    fn reads_chunks_most_significant_bit_first() {
        // 0b0001 = 1, 0b1000 = 8
        let 染色体 = vec![false, false, false, true, true, false, false, false];
        let 变量 = 解码(&染色体, 0.0, 15.0, 2).unwrap();
        assert_eq!(变量, vec![1.0, 8.0]);
    }

    #[test]
    fn rejects_uneven_chunks() {
        assert!(解码(&[true; 7], 0.0, 1.0, 2).is_err());
        assert!(解码(&[true; 4], 0.0, 1.0, 0).is_err());
        assert!(解码(&[], 0.0, 1.0, 3).is_err());
    }

    #[test]
    fn renders_bit_string() {
        assert_eq!(染色体字符串(&[true, false, false, true]), "1001");
    }
}
