//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use crate::models::{BmiInput, BmiResult, WeightCategory};

use colored::{ColoredString, Colorize};

/// 关闭彩色输出（--no-color / FITCALC_NO_COLOR）
pub fn init_color(no_color: bool) {
    if no_color {
        colored::control::set_override(false);
    }
}

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 分类着色
pub fn colorize_category(category: WeightCategory) -> ColoredString {
    let label = category.to_string();
    match category {
        WeightCategory::Underweight => label.blue().bold(),
        WeightCategory::Healthy => label.green().bold(),
        WeightCategory::Overweight => label.yellow().bold(),
        WeightCategory::Obese => label.red().bold(),
    }
}

/// 回显表单字段
pub fn print_form_fields(input: &BmiInput) {
    let show = |v: &str| {
        if v.is_empty() {
            "-".dimmed().to_string()
        } else {
            v.to_string()
        }
    };
    println!("  {:<10} {}", "Height".dimmed(), show(&input.height_cm));
    println!("  {:<10} {}", "Weight".dimmed(), show(&input.weight_kg));
    println!("  {:<10} {}", "Age".dimmed(), show(&input.age));
    println!("  {:<10} {}", "Gender".dimmed(), input.gender);
    println!("  {:<10} {}", "Activity".dimmed(), input.activity.description());
}

/// 渲染结果块；无结果时什么也不输出
pub fn print_bmi_result(result: Option<&BmiResult>) {
    if let Some(result) = result {
        println!();
        println!("  {} {}", "Your BMI:".bold(), format!("{:.1}", result.value()).bold());
        println!(
            "  {} {}",
            "Category:".bold(),
            colorize_category(result.category())
        );
        println!(
            "  {}",
            format!("(BMI range {})", result.category().range_label()).dimmed()
        );
        println!();
    }
}
