//! # calc 命令实现
//!
//! 用命令行参数填充表单，计算一次并渲染结果。
//! 输入无效时不输出结果，只给出一行跳过提示，退出码仍为 0。
//!
//! ## 依赖关系
//! - 使用 `cli/calc.rs` 定义的参数
//! - 使用 `calculator/form.rs`
//! - 使用 `utils/output.rs`

use crate::calculator::BmiForm;
use crate::cli::calc::CalcArgs;
use crate::error::Result;
use crate::models::BmiResult;
use crate::utils::output;

/// 由参数构造表单
fn form_from_args(args: CalcArgs) -> BmiForm {
    let mut form = BmiForm::new();
    form.set_height(args.height);
    form.set_weight(args.weight);
    form.set_age(args.age.unwrap_or_default());
    form.set_gender(args.gender);
    form.set_activity(args.activity);
    form
}

/// 机器可读的单行输出
fn plain_line(result: &BmiResult) -> String {
    format!("{:.1},{}", result.value(), result.category())
}

/// 执行 calc 命令
pub fn execute(args: CalcArgs) -> Result<()> {
    let plain = args.plain;
    let mut form = form_from_args(args);
    form.calculate();

    if plain {
        if let Some(result) = form.result() {
            println!("{}", plain_line(result));
        }
        return Ok(());
    }

    output::print_header("BMI Calculator");
    output::print_form_fields(form.input());

    match form.result() {
        Some(result) => output::print_bmi_result(Some(result)),
        None => {
            println!();
            output::print_skip("Height and weight must be positive numbers; no result");
        }
    }

    Ok(())
}
