use super::变异;
use crate::encoders::染色体;
use rand::Rng;

/// 对每一位独立地以给定概率取反
#[derive(Debug, Clone, Copy)]
pub struct 逐位翻转 {
    pub 概率: f64,
}

impl 变异 for 逐位翻转 {
    fn 变异<R: Rng>(&self, 染色体: &mut 染色体, rng: &mut R) -> usize {
        let mut 翻转数 = 0;
        for 位 in 染色体.iter_mut() {
            if rng.random_bool(self.概率) {
                *位 = !*位;
                翻转数 += 1;
            }
        }
        翻转数
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_probability_keeps_chromosome() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut 染色体 = vec![true, false, true, true];
        assert_eq!(逐位翻转 { 概率: 0.0 }.变异(&mut 染色体, &mut rng), 0);
        assert_eq!(染色体, vec![true, false, true, true]);
    }

    #[test]
    fn full_probability_flips_every_bit() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut 染色体 = vec![true, false, true, true];
        assert_eq!(逐位翻转 { 概率: 1.0 }.变异(&mut 染色体, &mut rng), 4);
        assert_eq!(染色体, vec![false, true, false, false]);
    }

    #[test]
    fn flips_bits_independently() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut 染色体 = vec![false; 10000];
        let 翻转数 = 逐位翻转 { 概率: 0.1 }.变异(&mut 染色体, &mut rng);
        assert_eq!(染色体.iter().filter(|&&位| 位).count(), 翻转数);
        assert!((800..1200).contains(&翻转数));
    }
}
