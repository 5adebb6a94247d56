//! # 报告模块
//!
//! 批量计算结果的统计、导出与可视化。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 子模块: summary, export, plot

pub mod export;
pub mod plot;
pub mod summary;

pub use summary::{chart_rows, BmiEntry, CategorySummary, EntryRow};
