use crate::config::{配置, 目标函数类型, 默认种子};
use crate::interfaces::{消息, 界面};
use crate::optimizers::logbook::{代记录, 首次达到代数};
use crate::optimizers::{优化结果, 最优个体};
use crate::错误;
use chrono::Local;
use clap::{Parser, Subcommand};
use csv::WriterBuilder;
use itertools::Itertools;
use serde::Serialize;
use std::fs::{create_dir_all, read_to_string, write, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

pub trait 命令行参数: Clone {
    fn 是否为多线程(&self) -> bool;
    fn 是否输出JSON(&self) -> bool;
}

/// 命令行参数的定义
#[derive(Parser, Clone)]
#[command(name = "二进制编码遗传算法")]
#[command(author, version, about, long_about)]
#[command(propagate_version = true)]
pub struct 默认命令行参数 {
    #[command(subcommand)]
    pub command: 命令,
    /// 配置文件；不提供时使用 --problem 指定的内置预设
    pub config: Option<PathBuf>,
    /// 内置预设，默认为 schwefel
    #[arg(short, long, value_enum)]
    pub problem: Option<目标函数类型>,
    /// 随机数种子，默认为 42；多线程时第 i 个线程使用 种子 + i
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// 线程数，默认为 1
    #[arg(short, long)]
    pub threads: Option<usize>,
    /// 覆盖种群大小
    #[arg(long, value_name = "N")]
    pub population_size: Option<usize>,
    /// 覆盖代数
    #[arg(long, value_name = "N")]
    pub generations: Option<usize>,
    /// 覆盖杂交概率
    #[arg(long, value_name = "P")]
    pub crossover_prob: Option<f64>,
    /// 覆盖逐位变异概率
    #[arg(long, value_name = "P")]
    pub mutation_prob: Option<f64>,
    /// 以 JSON 行的形式输出所有消息
    #[arg(long)]
    pub json: bool,
}

impl 命令行参数 for 默认命令行参数 {
    fn 是否为多线程(&self) -> bool {
        self.threads.is_some_and(|线程数| 线程数 > 1)
    }

    fn 是否输出JSON(&self) -> bool {
        self.json
    }
}

impl 默认命令行参数 {
    pub fn 种子(&self) -> u64 {
        self.seed.unwrap_or(默认种子)
    }

    /// 读取配置文件或者内置预设，再用命令行上的参数覆盖
    pub fn 读取配置(&self) -> Result<配置, 错误> {
        let mut 配置 = match &self.config {
            Some(路径) => {
                if self.problem.is_some() {
                    warn!("已经提供了配置文件，忽略 --problem 参数");
                }
                let 内容 = read_to_string(路径)
                    .map_err(|e| 错误::输入输出错误(format!("无法读取 {}：{e}", 路径.display())))?;
                serde_yaml::from_str(&内容)?
            }
            None => 配置::预设(self.problem.unwrap_or(目标函数类型::Schwefel)),
        };
        if let Some(种群大小) = self.population_size {
            配置.population_size = 种群大小;
        }
        if let Some(代数) = self.generations {
            配置.generations = 代数;
        }
        if let Some(概率) = self.crossover_prob {
            配置.crossover_prob = 概率;
        }
        if let Some(概率) = self.mutation_prob {
            配置.mutation_prob = 概率;
        }
        Ok(配置)
    }
}

/// 命令行中所有可用的子命令
#[derive(Subcommand, Clone)]
pub enum 命令 {
    /// 运行遗传算法，输出逐代日志和最优解
    Optimize,
    /// 校验配置，并输出实际使用的完整配置
    Validate,
}

/// 一次运行的摘要，保存为 result.yaml
#[derive(Debug, Clone, Serialize)]
pub struct 运行摘要 {
    pub seed: u64,
    pub objective: 目标函数类型,
    pub best: 最优个体,
    pub found_at: Option<usize>,
}

impl 运行摘要 {
    pub fn 新建(配置: &配置, 种子: u64, 结果: &优化结果) -> Self {
        Self {
            seed: 种子,
            objective: 配置.objective,
            best: 结果.最优个体.clone(),
            found_at: 首次达到代数(&结果.日志, 结果.最优个体.fitness),
        }
    }
}

/// 通过命令行来运行遗传算法的入口，实现了界面特征
pub struct 命令行<P: 命令行参数> {
    pub 参数: P,
    pub 输出目录: PathBuf,
}

impl<P: 命令行参数> 命令行<P> {
    pub fn 新建(args: P, maybe_output_dir: Option<PathBuf>) -> Result<Self, 错误> {
        let output_dir = maybe_output_dir.unwrap_or_else(|| {
            let time = Local::now().format("%m-%d+%H_%M_%S").to_string();
            PathBuf::from(format!("output-{time}"))
        });
        create_dir_all(&output_dir)?;
        Ok(Self {
            参数: args,
            输出目录: output_dir,
        })
    }

    /// 逐代日志写入 logbook.csv，最后一列是最大适应度对应的目标函数值
    pub fn 输出日志(&self, 日志: &[代记录], 偏移量: f64) -> Result<(), 错误> {
        let path = self.输出目录.join("logbook.csv");
        let mut writer = WriterBuilder::new().has_headers(false).from_path(&path)?;
        writer.write_record(["generation", "evaluations", "max", "mean", "min", "objective"])?;
        for 记录 in 日志 {
            writer.serialize((
                记录.generation,
                记录.evaluations,
                记录.max_fitness,
                记录.mean_fitness,
                记录.min_fitness,
                偏移量 - 记录.max_fitness,
            ))?;
        }
        writer.flush()?;
        info!(path = %path.display(), "逐代日志已保存");
        Ok(())
    }

    pub fn 输出结果(&self, 摘要: &运行摘要) -> Result<(), 错误> {
        let path = self.输出目录.join("result.yaml");
        write(&path, serde_yaml::to_string(摘要)?)?;
        info!(path = %path.display(), "最优解已保存");
        Ok(())
    }

    pub fn 报告结果(摘要: &运行摘要) {
        let 最优 = &摘要.best;
        let 代数 = 摘要
            .found_at
            .map_or("未知".to_string(), |代数| 代数.to_string());
        println!(
            "种子 {}：最小值 {:.6}，变量 ({})，首次出现于第 {} 代",
            摘要.seed,
            最优.objective_value,
            最优.variables.iter().map(|x| format!("{x:.6}")).join(", "),
            代数
        );
    }

    pub fn 生成子命令行(&self, index: usize) -> Result<命令行<P>, 错误> {
        let child_dir = self.输出目录.join(format!("{index}"));
        命令行::新建(self.参数.clone(), Some(child_dir))
    }

    fn 写入表格(writer: &mut dyn Write, message: 消息) -> std::io::Result<()> {
        match message {
            消息::Started {
                objective,
                population_size,
                generations,
                chromosome_length,
                fitness_offset,
            } => {
                writeln!(
                    writer,
                    "目标函数 {objective}，种群 {population_size}，代数 {generations}，染色体长度 {chromosome_length}，适应度偏移量 {fitness_offset}"
                )?;
                writeln!(writer, "gen\tnevals\tmax\tavg\tmin")
            }
            消息::Generation(记录) => {
                let 平均值 = 记录
                    .mean_fitness
                    .map_or("-".to_string(), |x| format!("{x:.4}"));
                writeln!(
                    writer,
                    "{}\t{}\t{:.4}\t{}\t{:.4}",
                    记录.generation, 记录.evaluations, 记录.max_fitness, 平均值, 记录.min_fitness
                )
            }
            消息::BetterSolution {
                generation,
                objective_value,
                variables,
                ..
            } => writeln!(
                writer,
                "第 {generation} 代搜索到了更好的解：目标函数值 {objective_value:.6}，变量 ({})",
                variables.iter().map(|x| format!("{x:.6}")).join(", ")
            ),
            消息::Finished { best, found_at } => writeln!(
                writer,
                "运行结束，最小值 {:.6}，首次出现于第 {} 代",
                best.objective_value,
                found_at.map_or("未知".to_string(), |代数| 代数.to_string())
            ),
        }
    }
}

impl<P: 命令行参数> 界面 for 命令行<P> {
    fn 发送(&self, message: 消息) {
        let mut writer: Box<dyn Write> = if self.参数.是否为多线程() {
            let log_path = self.输出目录.join("log.txt");
            match OpenOptions::new().create(true).append(true).open(&log_path) {
                Ok(file) => Box::new(file),
                Err(e) => {
                    warn!(path = %log_path.display(), error = %e, "无法打开日志文件");
                    return;
                }
            }
        } else {
            Box::new(std::io::stdout())
        };
        let result = if self.参数.是否输出JSON() {
            serde_json::to_string(&message)
                .map_err(std::io::Error::from)
                .and_then(|line| writeln!(writer, "{line}"))
        } else {
            Self::写入表格(writer.as_mut(), message)
        };
        if let Err(e) = result {
            warn!(error = %e, "无法输出消息");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn 解析(参数: &[&str]) -> 默认命令行参数 {
        默认命令行参数::parse_from(参数.iter().copied())
    }

    #[test]
    fn preset_with_overrides() {
        let 参数 = 解析(&[
            "genetic",
            "--problem",
            "six-hump-camel-back",
            "--generations",
            "7",
            "--mutation-prob",
            "0.05",
            "optimize",
        ]);
        let 配置 = 参数.读取配置().unwrap();
        assert_eq!(配置.objective, 目标函数类型::SixHumpCamelBack);
        assert_eq!(配置.generations, 7);
        assert_eq!(配置.mutation_prob, 0.05);
        assert_eq!(配置.population_size, 200);
        assert_eq!(参数.种子(), 默认种子);
        assert!(!参数.是否为多线程());
    }

    #[test]
    fn defaults_to_schwefel() {
        let 参数 = 解析(&["genetic", "--threads", "4", "validate"]);
        assert_eq!(参数.读取配置().unwrap(), 配置::预设(目标函数类型::Schwefel));
        assert!(参数.是否为多线程());
        assert!(matches!(参数.command, 命令::Validate));
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let 参数 = 解析(&["genetic", "no-such-config.yaml", "optimize"]);
        assert!(matches!(参数.读取配置(), Err(错误::输入输出错误(_))));
    }

    #[test]
    fn table_rows_follow_records() {
        let mut 输出 = Vec::new();
        命令行::<默认命令行参数>::写入表格(
            &mut 输出,
            消息::Generation(代记录 {
                generation: 3,
                evaluations: 12,
                max_fitness: 10.0,
                mean_fitness: None,
                min_fitness: 1.5,
            }),
        )
        .unwrap();
        assert_eq!(String::from_utf8(输出).unwrap(), "3\t12\t10.0000\t-\t1.5000\n");
    }
}
