//! genetic: 二进制编码遗传算法［命令行版］
//!
//! 用户选择内置预设或者提供配置文件，本程序在 Schwefel 函数或六峰驼背函数上运行遗传算法，输出逐代日志和找到的最小值。

use clap::Parser;
use genetic::config::配置;
use genetic::interfaces::command_line::{命令, 命令行, 运行摘要, 默认命令行参数};
use genetic::{运行并报告, 错误};
use std::{panic, thread};
use tracing::info;

type 默认命令行 = 命令行<默认命令行参数>;

fn 运行一次(配置: &配置, 种子: u64, 命令行: &默认命令行) -> Result<运行摘要, 错误> {
    let 结果 = 运行并报告(配置, 种子, 命令行)?;
    命令行.输出日志(&结果.日志, 配置.偏移量()?)?;
    let 摘要 = 运行摘要::新建(配置, 种子, &结果);
    命令行.输出结果(&摘要)?;
    Ok(摘要)
}

fn main() -> Result<(), 错误> {
    tracing_subscriber::fmt::init();
    let 参数 = 默认命令行参数::parse();
    let 配置 = 参数.读取配置()?;
    match 参数.command {
        命令::Validate => {
            配置.校验()?;
            let mut 完整配置 = 配置.clone();
            完整配置.fitness_offset = Some(配置.偏移量()?);
            完整配置.record_mean = Some(配置.记录平均值());
            print!("{}", serde_yaml::to_string(&完整配置)?);
        }
        命令::Optimize => {
            // 先校验，避免创建无用的输出目录
            配置.校验()?;
            let 种子 = 参数.种子();
            let 线程数 = 参数.threads.unwrap_or(1).max(1);
            let 命令行 = 默认命令行::新建(参数, None)?;
            info!(output = %命令行.输出目录.display(), threads = 线程数, "开始优化");
            if 线程数 == 1 {
                let 摘要 = 运行一次(&配置, 种子, &命令行)?;
                默认命令行::报告结果(&摘要);
            } else {
                let mut handles = vec![];
                for index in 0..线程数 {
                    let 子命令行 = 命令行.生成子命令行(index)?;
                    let 配置 = 配置.clone();
                    let 种子 = 种子.wrapping_add(index as u64);
                    let handle = thread::spawn(move || 运行一次(&配置, 种子, &子命令行));
                    handles.push(handle);
                }
                let mut 摘要列表 = handles
                    .into_iter()
                    .map(|handle| handle.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                    .collect::<Result<Vec<_>, 错误>>()?;
                摘要列表.sort_by(|a, b| a.best.objective_value.total_cmp(&b.best.objective_value));
                摘要列表.iter().for_each(默认命令行::报告结果);
            }
        }
    }
    Ok(())
}
