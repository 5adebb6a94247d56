//! # 计算器模块
//!
//! BMI 计算核心与持有结果状态的表单控制器。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: bmi, form

pub mod bmi;
pub mod form;

pub use bmi::healthy_weight_range;
pub use form::BmiForm;
