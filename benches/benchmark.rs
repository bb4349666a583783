use criterion::{criterion_group, criterion_main, Criterion};
use genetic::config::{配置, 目标函数类型};
use genetic::encoders::编码器;
use genetic::objectives::fitness::适应度函数;
use genetic::{运行, 错误};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn 计时评估(配置: 配置, 名称: &str, b: &mut Criterion) -> Result<(), 错误> {
    let 问题 = 适应度函数::新建(&配置)?;
    let mut rng = StdRng::seed_from_u64(0);
    let 种群: Vec<_> = (0..配置.population_size)
        .map(|_| 问题.编码器.随机染色体(&mut rng))
        .collect();
    b.bench_function(名称, |b| {
        b.iter(|| {
            for 染色体 in &种群 {
                let _ = black_box(问题.评估(染色体));
            }
        })
    });
    Ok(())
}

fn 评估一代(b: &mut Criterion) {
    计时评估(配置::预设(目标函数类型::Schwefel), "评估一代 Schwefel", b).unwrap();
    计时评估(配置::预设(目标函数类型::SixHumpCamelBack), "评估一代六峰驼背", b).unwrap();
}

fn 短程运行(b: &mut Criterion) {
    let mut 配置 = 配置::预设(目标函数类型::Schwefel);
    配置.population_size = 200;
    配置.generations = 10;
    b.bench_function("短程运行 Schwefel", |b| {
        b.iter(|| 运行(black_box(&配置), 42).unwrap())
    });
}

criterion_group!(benches, 评估一代, 短程运行);
criterion_main!(benches);
