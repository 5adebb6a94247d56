//! # calc / interactive 子命令 CLI 定义
//!
//! 身高、体重以原始字符串接收，由计算器决定是否有效；
//! 性别和活动水平在参数解析阶段就校验。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/calc.rs`, `commands/interactive.rs`

use crate::models::{ActivityLevel, Gender};
use clap::Args;

/// calc 子命令参数
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Height in centimeters
    #[arg(long, allow_hyphen_values = true)]
    pub height: String,

    /// Weight in kilograms
    #[arg(long, allow_hyphen_values = true)]
    pub weight: String,

    /// Age in years (informational only)
    #[arg(long)]
    pub age: Option<String>,

    /// Gender: male, female, other (informational only)
    #[arg(long, default_value = "male")]
    pub gender: Gender,

    /// Activity level: sedentary, light, moderate, active, very-active (informational only)
    #[arg(long, default_value = "moderate")]
    pub activity: ActivityLevel,

    /// Print only "<bmi>,<category>" (nothing when no result)
    #[arg(long, default_value_t = false)]
    pub plain: bool,
}

/// interactive 子命令参数
#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Initial height in centimeters
    #[arg(long, allow_hyphen_values = true)]
    pub height: Option<String>,

    /// Initial weight in kilograms
    #[arg(long, allow_hyphen_values = true)]
    pub weight: Option<String>,
}
