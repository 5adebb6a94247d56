//! # BMI 结果数据模型
//!
//! 计算结果与体重状态分类。分类阈值表同时供分类器和参考图表使用。
//!
//! ## 依赖关系
//! - 被 `calculator/bmi.rs` 构造
//! - 被 `commands/` 渲染

use serde::{Deserialize, Serialize};

/// 体重状态分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeightCategory {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl WeightCategory {
    /// 按 BMI 从低到高排列的全部分类
    pub const ALL: [WeightCategory; 4] = [
        WeightCategory::Underweight,
        WeightCategory::Healthy,
        WeightCategory::Overweight,
        WeightCategory::Obese,
    ];

    /// 该分类的 BMI 区间 [lower, upper)，`None` 表示无界
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match self {
            WeightCategory::Underweight => (None, Some(UNDERWEIGHT_LIMIT)),
            WeightCategory::Healthy => (Some(UNDERWEIGHT_LIMIT), Some(HEALTHY_LIMIT)),
            WeightCategory::Overweight => (Some(HEALTHY_LIMIT), Some(OVERWEIGHT_LIMIT)),
            WeightCategory::Obese => (Some(OVERWEIGHT_LIMIT), None),
        }
    }

    /// 参考表中的区间描述，例如 "18.5 - 24.9"
    pub fn range_label(&self) -> String {
        match self.bounds() {
            (None, Some(upper)) => format!("Below {:.1}", upper),
            (Some(lower), Some(upper)) => format!("{:.1} - {:.1}", lower, upper - 0.1),
            (Some(lower), None) => format!("{:.1} and Above", lower),
            (None, None) => "Any".to_string(),
        }
    }
}

impl std::fmt::Display for WeightCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightCategory::Underweight => write!(f, "Underweight"),
            WeightCategory::Healthy => write!(f, "Healthy"),
            WeightCategory::Overweight => write!(f, "Overweight"),
            WeightCategory::Obese => write!(f, "Obese"),
        }
    }
}

/// Underweight / Healthy 分界
pub const UNDERWEIGHT_LIMIT: f64 = 18.5;
/// Healthy / Overweight 分界
pub const HEALTHY_LIMIT: f64 = 25.0;
/// Overweight / Obese 分界
pub const OVERWEIGHT_LIMIT: f64 = 30.0;

/// BMI 计算结果
///
/// 只能由计算器从合法输入构造，数值与分类总是同时存在。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    value: f64,
    category: WeightCategory,
}

impl BmiResult {
    pub(crate) fn new(value: f64, category: WeightCategory) -> Self {
        BmiResult { value, category }
    }

    /// 保留一位小数后的 BMI
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn category(&self) -> WeightCategory {
        self.category
    }
}

impl std::fmt::Display for BmiResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} ({})", self.value, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_labels() {
        assert_eq!(WeightCategory::Underweight.range_label(), "Below 18.5");
        assert_eq!(WeightCategory::Healthy.range_label(), "18.5 - 24.9");
        assert_eq!(WeightCategory::Overweight.range_label(), "25.0 - 29.9");
        assert_eq!(WeightCategory::Obese.range_label(), "30.0 and Above");
    }

    #[test]
    fn test_bands_are_contiguous() {
        for pair in WeightCategory::ALL.windows(2) {
            assert_eq!(pair[0].bounds().1, pair[1].bounds().0);
        }
    }
}
