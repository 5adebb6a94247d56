//! # BMI 表单控制器
//!
//! 持有表单字段的当前值和唯一的结果槽 `Option<BmiResult>`。
//! 结果只在显式调用 `calculate()` 且输入有效时被替换；无效输入不改变任何状态。
//!
//! ## 状态
//! - `NoResult`（初始）
//! - `HasResult`（最近一次成功的结果）
//!
//! ## 依赖关系
//! - 被 `commands/calc.rs`, `commands/interactive.rs` 使用
//! - 使用 `calculator/bmi.rs` 计算

use super::bmi;
use crate::models::{ActivityLevel, BmiInput, BmiResult, Gender};

/// 表单控制器
#[derive(Debug, Default)]
pub struct BmiForm {
    fields: BmiInput,
    result: Option<BmiResult>,
}

impl BmiForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_height(&mut self, height_cm: impl Into<String>) {
        self.fields.height_cm = height_cm.into();
    }

    pub fn set_weight(&mut self, weight_kg: impl Into<String>) {
        self.fields.weight_kg = weight_kg.into();
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.fields.age = age.into();
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.fields.gender = gender;
    }

    pub fn set_activity(&mut self, activity: ActivityLevel) {
        self.fields.activity = activity;
    }

    /// 用当前字段计算；成功时替换结果并返回 `true`
    pub fn calculate(&mut self) -> bool {
        match bmi::calculate(&self.fields) {
            Some(result) => {
                self.result = Some(result);
                true
            }
            None => false,
        }
    }

    /// 最近一次成功的结果
    pub fn result(&self) -> Option<&BmiResult> {
        self.result.as_ref()
    }

    /// 当前字段值（用于回显）
    pub fn input(&self) -> &BmiInput {
        &self.fields
    }

    /// 清空字段并丢弃结果
    pub fn reset(&mut self) {
        self.fields = BmiInput::default();
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeightCategory;

    #[test]
    fn test_initial_state_has_no_result() {
        let form = BmiForm::new();
        assert!(form.result().is_none());
    }

    #[test]
    fn test_valid_calculation_sets_result() {
        let mut form = BmiForm::new();
        form.set_height("170");
        form.set_weight("65");
        assert!(form.calculate());

        let result = form.result().unwrap();
        assert_eq!(result.value(), 22.5);
        assert_eq!(result.category(), WeightCategory::Healthy);
    }

    #[test]
    fn test_invalid_input_keeps_previous_result() {
        let mut form = BmiForm::new();
        form.set_height("170");
        form.set_weight("65");
        form.calculate();
        let before = *form.result().unwrap();

        form.set_height("");
        form.set_weight("70");
        assert!(!form.calculate());
        assert_eq!(form.result(), Some(&before));

        form.set_height("175");
        form.set_weight("-5");
        assert!(!form.calculate());
        assert_eq!(form.result(), Some(&before));
    }

    #[test]
    fn test_invalid_input_without_prior_result() {
        let mut form = BmiForm::new();
        form.set_height("abc");
        form.set_weight("70");
        assert!(!form.calculate());
        assert!(form.result().is_none());
    }

    #[test]
    fn test_new_calculation_replaces_result() {
        let mut form = BmiForm::new();
        form.set_height("160");
        form.set_weight("45");
        form.calculate();
        assert_eq!(
            form.result().map(|r| r.category()),
            Some(WeightCategory::Underweight)
        );

        form.set_height("180");
        form.set_weight("100");
        form.calculate();
        assert_eq!(form.result().map(|r| r.value()), Some(30.9));
    }

    #[test]
    fn test_editing_fields_does_not_touch_result() {
        let mut form = BmiForm::new();
        form.set_height("170");
        form.set_weight("65");
        form.calculate();

        form.set_weight("90");
        form.set_gender(Gender::Female);
        form.set_activity(ActivityLevel::Active);
        form.set_age("41");
        assert_eq!(form.result().map(|r| r.value()), Some(22.5));
        assert_eq!(form.input().weight_kg, "90");
    }

    #[test]
    fn test_contextual_fields_do_not_change_result() {
        let mut form = BmiForm::new();
        form.set_height("170");
        form.set_weight("65");
        form.calculate();
        let plain = *form.result().unwrap();

        form.set_age("70");
        form.set_gender(Gender::Other);
        form.set_activity(ActivityLevel::VeryActive);
        form.calculate();
        assert_eq!(form.result(), Some(&plain));
    }

    #[test]
    fn test_reset() {
        let mut form = BmiForm::new();
        form.set_height("170");
        form.set_weight("65");
        form.set_gender(Gender::Female);
        form.calculate();

        form.reset();
        assert!(form.result().is_none());
        assert_eq!(form.input(), &BmiInput::default());
    }
}
