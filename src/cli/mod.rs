//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `calc`: 单次 BMI 计算
//! - `interactive`: 交互式表单会话
//! - `batch`: CSV 批量计算
//! - `chart`: 体重状态参考表
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: calc, batch, chart

pub mod batch;
pub mod calc;
pub mod chart;

use clap::{Parser, Subcommand};

/// fitcalc - BMI 计算工具箱
#[derive(Parser)]
#[command(name = "fitcalc")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Body mass index calculator toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable coloured output
    #[arg(long, global = true, env = "FITCALC_NO_COLOR", default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate BMI from a single height/weight pair
    Calc(calc::CalcArgs),

    /// Run an interactive BMI form session
    Interactive(calc::InteractiveArgs),

    /// Calculate BMI for every row of one or more CSV files
    Batch(batch::BatchArgs),

    /// Print the BMI weight-status reference chart
    Chart(chart::ChartArgs),
}
