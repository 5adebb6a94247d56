//! # 数据模型模块
//!
//! 定义 BMI 输入、结果与体重状态分类。
//!
//! ## 依赖关系
//! - 被 `calculator/`, `parsers/` 和 `commands/` 使用
//! - 子模块: input, result

pub mod input;
pub mod result;

pub use input::{ActivityLevel, BmiInput, Gender};
pub use result::{BmiResult, WeightCategory};
