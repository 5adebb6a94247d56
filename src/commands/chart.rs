//! # chart 命令实现
//!
//! 打印 BMI / 体重状态参考表，可选给出某一身高下的健康体重区间。
//!
//! ## 依赖关系
//! - 使用 `cli/chart.rs` 定义的参数
//! - 使用 `report/summary.rs` 的参考表, `calculator/bmi.rs` 的区间计算

use crate::calculator::healthy_weight_range;
use crate::cli::chart::ChartArgs;
use crate::error::{FitcalcError, Result};
use crate::report::chart_rows;
use crate::utils::output;

use tabled::Table;

/// 执行 chart 命令
pub fn execute(args: ChartArgs) -> Result<()> {
    output::print_header("BMI Weight Status");

    println!("{}", Table::new(chart_rows()));
    println!();
    output::print_info("BMI: Body Mass Index = weight (kg) / height (m)²");

    if let Some(height) = args.height {
        let (min, max) = healthy_weight_range(height).ok_or_else(|| {
            FitcalcError::InvalidArgument(format!("Height must be a positive number, got {}", height))
        })?;
        output::print_success(&format!(
            "Healthy weight for {} cm: {:.1} - {:.1} kg",
            height, min, max
        ));
    }

    Ok(())
}
