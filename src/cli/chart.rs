//! # chart 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/chart.rs`

use clap::Args;

/// chart 子命令参数
#[derive(Args, Debug)]
pub struct ChartArgs {
    /// Also print the healthy weight range for this height (cm)
    #[arg(long)]
    pub height: Option<f64>,
}
