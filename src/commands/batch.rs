//! # batch 命令实现
//!
//! 对 CSV 文件逐行计算 BMI。
//!
//! ## 功能
//! - 支持单文件和目录批量处理
//! - 并行处理多个文件（rayon）
//! - 每个输入文件导出 `<stem>_bmi.csv`
//! - 汇总分类分布表格
//! - 可选绘制身高-体重散点图
//!
//! 无结果的行（身高/体重无效）计为 skipped，不算错误；
//! 性别/活动水平非法的行计为 invalid，同样不会中断整个文件。
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的参数
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `parsers/records.rs` 读取输入, `report/` 导出与绘图

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::calculator::bmi;
use crate::cli::batch::BatchArgs;
use crate::error::{FitcalcError, Result};
use crate::parsers::{self, BmiRecord};
use crate::report::{export, plot, BmiEntry, CategorySummary, EntryRow};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tabled::Table;

/// 单个文件的计算结果
#[derive(Debug, Default)]
pub struct FileOutcome {
    pub entries: Vec<BmiEntry>,
    pub summary: CategorySummary,
    /// (行号, 原因)
    pub invalid: Vec<(usize, String)>,
}

/// 计算一组记录
pub fn evaluate_records(records: &[BmiRecord]) -> FileOutcome {
    let mut outcome = FileOutcome::default();

    for record in records {
        let input = match record.to_input() {
            Ok(input) => input,
            Err(e) => {
                outcome.summary.invalid_rows += 1;
                outcome.invalid.push((record.row, e.to_string()));
                continue;
            }
        };

        let Some((height_cm, weight_kg)) = bmi::parse_measurements(&input) else {
            outcome.summary.skipped_rows += 1;
            continue;
        };

        // 极端数值下商可能不是有限值
        let Some(result) = bmi::calculate_metric(height_cm, weight_kg) else {
            outcome.summary.skipped_rows += 1;
            continue;
        };

        outcome.entries.push(BmiEntry {
            row: record.row,
            name: record.label(),
            height_cm,
            weight_kg,
            bmi: result.value(),
            category: result.category(),
        });
    }

    outcome.summary.add_entries(&outcome.entries);
    outcome
}

/// 前 N 行的表格行；`top_n` 为 0 时为空
fn top_entry_rows(entries: &[BmiEntry], top_n: usize) -> Vec<EntryRow> {
    entries.iter().take(top_n).map(EntryRow::from).collect()
}

/// 输出文件路径
fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    output_dir.join(format!("{}_bmi.csv", stem))
}

/// 读取、计算并导出单个文件
fn process_file(input: &Path, output_file: &Path) -> Result<FileOutcome> {
    let records = parsers::parse_records_file(input)?;
    let outcome = evaluate_records(&records);
    export::to_csv(&outcome.entries, output_file)?;
    Ok(outcome)
}

/// 执行 batch 命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Batch BMI Calculation");

    if !args.input.exists() {
        return Err(FitcalcError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    fs::create_dir_all(&args.output).map_err(|e| FitcalcError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    if args.input.is_file() {
        execute_single_file(&args)
    } else {
        execute_batch(&args)
    }
}

/// 单文件模式
fn execute_single_file(args: &BatchArgs) -> Result<()> {
    output::print_info(&format!("Single file mode: '{}'", args.input.display()));

    let output_file = output_path_for(&args.input, &args.output);
    if output_file.exists() && !args.overwrite {
        output::print_warning(&format!(
            "Output exists, skipping: {} (use --overwrite)",
            output_file.display()
        ));
        return Ok(());
    }

    let outcome = process_file(&args.input, &output_file)?;

    report_invalid_rows(&args.input, &outcome.invalid);

    let rows = top_entry_rows(&outcome.entries, args.top_n);
    if outcome.entries.is_empty() {
        output::print_warning("No rows produced a BMI result.");
    } else if !rows.is_empty() {
        output::print_header(&format!("First {} Results", rows.len()));
        println!("{}", Table::new(&rows));
    }

    print_summary(&outcome.summary);
    output::print_success(&format!("Results saved to '{}'", output_file.display()));

    if let Some(plot_path) = &args.plot {
        write_plot(&outcome.entries, plot_path, &args.input)?;
    }

    Ok(())
}

/// 目录批量模式
fn execute_batch(args: &BatchArgs) -> Result<()> {
    output::print_info(&format!("Batch mode: directory '{}'", args.input.display()));

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        return Err(FitcalcError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }

    output::print_info(&format!("Found {} CSV files", files.len()));

    let totals = Mutex::new(CategorySummary::default());
    let all_entries = Mutex::new(Vec::<BmiEntry>::new());
    let want_plot = args.plot.is_some();

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!("Using {} parallel jobs", runner.jobs()));
    let result = runner.run(files, |file| {
        let output_file = output_path_for(file, &args.output);
        if output_file.exists() && !args.overwrite {
            return ProcessResult::Skipped(format!(
                "Output exists, skipping: {}",
                output_file.display()
            ));
        }

        match process_file(file, &output_file) {
            Ok(outcome) => {
                if let Ok(mut totals) = totals.lock() {
                    totals.merge(&outcome.summary);
                }
                if want_plot {
                    if let Ok(mut all) = all_entries.lock() {
                        all.extend(outcome.entries.iter().cloned());
                    }
                }
                ProcessResult::Success(format!(
                    "{} -> {} ({} rows)",
                    file.display(),
                    output_file.display(),
                    outcome.entries.len()
                ))
            }
            Err(e) => ProcessResult::Failed(file.display().to_string(), e.to_string()),
        }
    })?;

    // 打印统计
    output::print_separator();
    output::print_success(&format!(
        "Batch complete ({} files): {} success, {} skipped, {} failed",
        result.total(),
        result.success,
        result.skipped,
        result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    let totals = totals
        .into_inner()
        .map_err(|_| FitcalcError::Other("Summary lock poisoned".to_string()))?;
    print_summary(&totals);

    if let Some(plot_path) = &args.plot {
        let entries = all_entries
            .into_inner()
            .map_err(|_| FitcalcError::Other("Result lock poisoned".to_string()))?;
        write_plot(&entries, plot_path, &args.input)?;
    }

    Ok(())
}

/// 打印非法行
fn report_invalid_rows(input: &Path, invalid: &[(usize, String)]) {
    for (row, reason) in invalid.iter().take(10) {
        output::print_warning(&format!("{} row {}: {}", input.display(), row, reason));
    }
    if invalid.len() > 10 {
        output::print_warning(&format!("  ... and {} more", invalid.len() - 10));
    }
}

/// 打印分类分布
fn print_summary(summary: &CategorySummary) {
    output::print_header("Weight Status Distribution");
    println!("{}", Table::new(summary.rows()));
    println!();
    output::print_info(&format!(
        "{} rows with result, {} without result, {} invalid",
        summary.total(),
        summary.skipped_rows,
        summary.invalid_rows
    ));
}

/// 绘制散点图
fn write_plot(entries: &[BmiEntry], plot_path: &Path, input: &Path) -> Result<()> {
    if entries.is_empty() {
        output::print_warning("No results to plot.");
        return Ok(());
    }

    let title = input
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| format!("BMI: {}", s))
        .unwrap_or_else(|| "BMI".to_string());

    plot::generate_scatter_plot(entries, plot_path, &title)?;
    output::print_success(&format!("Scatter plot saved to '{}'", plot_path.display()));
    Ok(())
}
