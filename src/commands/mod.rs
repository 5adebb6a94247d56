//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `calculator/`, `parsers/`, `report/`, `utils/`
//! - 子模块: calc, interactive, batch, chart

pub mod batch;
pub mod calc;
pub mod chart;
pub mod interactive;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Calc(args) => calc::execute(args),
        Commands::Interactive(args) => interactive::execute(args),
        Commands::Batch(args) => batch::execute(args),
        Commands::Chart(args) => chart::execute(args),
    }
}
