//! 算子接口，以及逐位翻转变异、单点杂交和轮盘赌选择的实现
//!

use crate::encoders::染色体;
use crate::错误;
use rand::Rng;

pub mod crossover;
pub mod mutation;
pub mod selection;

pub trait 变异 {
    /// 就地扰动一个染色体，返回被翻转的位数
    fn 变异<R: Rng>(&self, 染色体: &mut 染色体, rng: &mut R) -> usize;
}

pub trait 杂交 {
    /// 就地交换两个染色体的部分基因，返回是否真的执行了杂交
    fn 杂交<R: Rng>(&self, 染色体一: &mut 染色体, 染色体二: &mut 染色体, rng: &mut R) -> bool;
}

pub trait 选择 {
    /// 根据适应度有放回地选出若干个个体，返回它们在种群中的序号
    fn 选择<R: Rng>(&self, 适应度: &[f64], 数量: usize, rng: &mut R) -> Result<Vec<usize>, 错误>;
}
