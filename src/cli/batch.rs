//! # batch 子命令 CLI 定义
//!
//! 对 CSV 文件（或目录中的多个 CSV 文件）逐行计算 BMI。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input: CSV file or directory containing CSV files
    pub input: PathBuf,

    /// Output directory for per-file result CSVs
    #[arg(short, long, default_value = "bmi_results")]
    pub output: PathBuf,

    /// Glob pattern for input files (directory mode, e.g., "*.csv,*.txt")
    #[arg(long, default_value = "*.csv")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Number of rows to print (single file mode)
    #[arg(long, default_value_t = 10)]
    pub top_n: usize,

    /// Write a height/weight scatter plot (PNG, or SVG by extension)
    #[arg(long)]
    pub plot: Option<PathBuf>,
}
