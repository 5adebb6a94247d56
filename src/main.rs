//! # fitcalc - BMI 计算工具箱
//!
//! 把健身俱乐部网页上的 BMI 计算器做成单一可执行文件。
//!
//! ## 子命令
//! - `calc`        - 单次 BMI 计算
//! - `interactive` - 交互式表单会话（保留上一次有效结果）
//! - `batch`       - CSV 批量计算、分类统计与散点图
//! - `chart`       - 体重状态参考表
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── calculator/ (BMI 计算与表单状态)
//!   │     ├── parsers/    (CSV 输入解析)
//!   │     ├── report/     (统计、导出、绘图)
//!   │     ├── batch/      (文件收集与并行执行)
//!   │     └── models/     (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod calculator;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod report;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::output::init_color(cli.no_color);

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
