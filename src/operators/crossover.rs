use super::杂交;
use crate::encoders::染色体;
use rand::Rng;

/// 在切点处交换两个染色体的尾部
fn 交换尾部(染色体一: &mut [bool], 染色体二: &mut [bool], 切点: usize) {
    染色体一[切点..].swap_with_slice(&mut 染色体二[切点..]);
}

/// 单点杂交：以给定概率在 [1, 长度 - 1] 中均匀选取一个切点，交换两个亲本的尾部
#[derive(Debug, Clone, Copy)]
pub struct 单点杂交 {
    pub 概率: f64,
}

impl 杂交 for 单点杂交 {
    fn 杂交<R: Rng>(&self, 染色体一: &mut 染色体, 染色体二: &mut 染色体, rng: &mut R) -> bool {
        if !rng.random_bool(self.概率) {
            return false;
        }
        let 长度 = 染色体一.len().min(染色体二.len());
        // 少于两位的染色体没有合法的切点
        if 长度 < 2 {
            return false;
        }
        let 切点 = rng.random_range(1..长度);
        交换尾部(染色体一, 染色体二, 切点);
        true
    }
}
