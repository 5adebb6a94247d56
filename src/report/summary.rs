//! # 分类统计
//!
//! 汇总批量计算结果的分类分布，并生成终端表格行。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs`, `commands/chart.rs` 使用
//! - 使用 `tabled` 渲染

use crate::models::WeightCategory;

use std::collections::BTreeMap;
use tabled::Tabled;

/// 单条计算结果（已带上原始数值，便于导出和绘图）
#[derive(Debug, Clone, PartialEq)]
pub struct BmiEntry {
    pub row: usize,
    pub name: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub category: WeightCategory,
}

/// 分类计数
#[derive(Debug, Default, Clone)]
pub struct CategorySummary {
    counts: BTreeMap<WeightCategory, usize>,
    /// 没有产生结果的行
    pub skipped_rows: usize,
    /// 上下文字段非法的行
    pub invalid_rows: usize,
}

impl CategorySummary {
    pub fn add(&mut self, category: WeightCategory) {
        *self.counts.entry(category).or_insert(0) += 1;
    }

    pub fn add_entries(&mut self, entries: &[BmiEntry]) {
        for entry in entries {
            self.add(entry.category);
        }
    }

    /// 合并另一份统计
    pub fn merge(&mut self, other: &CategorySummary) {
        for (category, count) in &other.counts {
            *self.counts.entry(*category).or_insert(0) += count;
        }
        self.skipped_rows += other.skipped_rows;
        self.invalid_rows += other.invalid_rows;
    }

    pub fn count(&self, category: WeightCategory) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// 有结果的总行数
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// 生成表格行（四个分类全部列出）
    pub fn rows(&self) -> Vec<SummaryRow> {
        let total = self.total();
        WeightCategory::ALL
            .iter()
            .map(|&category| {
                let count = self.count(category);
                let share = if total > 0 {
                    count as f64 / total as f64 * 100.0
                } else {
                    0.0
                };
                SummaryRow {
                    category: category.to_string(),
                    range: category.range_label(),
                    count,
                    share: format!("{:.1}%", share),
                }
            })
            .collect()
    }
}

/// 分类分布表格行
#[derive(Debug, Clone, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "Weight Status")]
    pub category: String,
    #[tabled(rename = "BMI")]
    pub range: String,
    #[tabled(rename = "Count")]
    pub count: usize,
    #[tabled(rename = "Share")]
    pub share: String,
}

/// 结果明细表格行
#[derive(Debug, Clone, Tabled)]
pub struct EntryRow {
    #[tabled(rename = "Row")]
    pub row: usize,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Height (cm)")]
    pub height: String,
    #[tabled(rename = "Weight (kg)")]
    pub weight: String,
    #[tabled(rename = "BMI")]
    pub bmi: String,
    #[tabled(rename = "Category")]
    pub category: String,
}

impl From<&BmiEntry> for EntryRow {
    fn from(entry: &BmiEntry) -> Self {
        EntryRow {
            row: entry.row,
            name: entry.name.clone(),
            height: format!("{}", entry.height_cm),
            weight: format!("{}", entry.weight_kg),
            bmi: format!("{:.1}", entry.bmi),
            category: entry.category.to_string(),
        }
    }
}

/// 参考表行（对应网页上 BMI / WEIGHT STATUS 表）
#[derive(Debug, Clone, Tabled)]
pub struct ChartRow {
    #[tabled(rename = "BMI")]
    pub range: String,
    #[tabled(rename = "Weight Status")]
    pub category: String,
}

/// 生成参考表
pub fn chart_rows() -> Vec<ChartRow> {
    WeightCategory::ALL
        .iter()
        .map(|category| ChartRow {
            range: category.range_label(),
            category: category.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_and_shares() {
        let mut summary = CategorySummary::default();
        summary.add(WeightCategory::Healthy);
        summary.add(WeightCategory::Healthy);
        summary.add(WeightCategory::Obese);
        summary.add(WeightCategory::Underweight);

        assert_eq!(summary.total(), 4);
        let rows = summary.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].category, "Healthy");
        assert_eq!(rows[1].count, 2);
        assert_eq!(rows[1].share, "50.0%");
        assert_eq!(rows[2].count, 0);
    }

    #[test]
    fn test_summary_merge() {
        let mut a = CategorySummary::default();
        a.add(WeightCategory::Overweight);
        a.skipped_rows = 2;

        let mut b = CategorySummary::default();
        b.add(WeightCategory::Overweight);
        b.invalid_rows = 1;

        a.merge(&b);
        assert_eq!(a.count(WeightCategory::Overweight), 2);
        assert_eq!(a.skipped_rows, 2);
        assert_eq!(a.invalid_rows, 1);
    }

    #[test]
    fn test_empty_summary_has_zero_shares() {
        let rows = CategorySummary::default().rows();
        assert!(rows.iter().all(|r| r.share == "0.0%"));
    }

    #[test]
    fn test_chart_rows() {
        let rows = chart_rows();
        assert_eq!(rows[0].range, "Below 18.5");
        assert_eq!(rows[3].category, "Obese");
    }
}
