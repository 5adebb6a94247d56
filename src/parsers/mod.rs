//! # 解析器模块
//!
//! 批量计算的输入格式解析。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: records

pub mod records;

pub use records::{parse_records_file, BmiRecord};
