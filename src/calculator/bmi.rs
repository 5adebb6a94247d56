//! # BMI 计算器
//!
//! 纯函数实现：解析身高/体重，厘米转米，计算 BMI，保留一位小数并分类。
//!
//! ## 计算流程
//! 1. 解析 `height_cm`, `weight_kg`（必须是有限正数，否则不产生结果）
//! 2. `height_m = height_cm / 100`
//! 3. `bmi = weight_kg / height_m²`
//! 4. 数值四舍五入到 0.1，分类使用**未取整**的 bmi
//!
//! ## 依赖关系
//! - 被 `calculator/form.rs` 和 `commands/` 调用
//! - 使用 `models/` 的 BmiInput, BmiResult, WeightCategory

use crate::models::result::{HEALTHY_LIMIT, OVERWEIGHT_LIMIT, UNDERWEIGHT_LIMIT};
use crate::models::{BmiInput, BmiResult, WeightCategory};

/// 厘米到米
const CM_PER_M: f64 = 100.0;

/// 计算 BMI
///
/// 输入无效（空、非数字、非有限值、零或负数）时返回 `None`，不视为错误。
pub fn calculate(input: &BmiInput) -> Option<BmiResult> {
    let (height_cm, weight_kg) = parse_measurements(input)?;
    calculate_metric(height_cm, weight_kg)
}

/// 由已解析的公制数值计算结果
pub fn calculate_metric(height_cm: f64, weight_kg: f64) -> Option<BmiResult> {
    let bmi = bmi_from_metric(height_cm, weight_kg)?;
    Some(BmiResult::new(round1(bmi), classify(bmi)))
}

/// 由公制数值计算未取整的 BMI
pub fn bmi_from_metric(height_cm: f64, weight_kg: f64) -> Option<f64> {
    if !(height_cm > 0.0 && weight_kg > 0.0) {
        return None;
    }

    let height_m = height_cm / CM_PER_M;
    let bmi = weight_kg / (height_m * height_m);

    // 极端浮点输入下 height_m² 可能下溢为 0
    if bmi.is_finite() {
        Some(bmi)
    } else {
        None
    }
}

/// 解析身高 (cm) 与体重 (kg)，任一无效则返回 `None`
pub fn parse_measurements(input: &BmiInput) -> Option<(f64, f64)> {
    Some((
        parse_positive(&input.height_cm)?,
        parse_positive(&input.weight_kg)?,
    ))
}

/// 解析严格为正的有限数值
pub fn parse_positive(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}

/// 超过该量级的 f64 都是整数
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// 保留一位小数（远离零方向舍入）
///
/// 按存储的精确值舍入：`value * 10` 落在 `.5` 上时，用 FMA 取回乘法的舍入误差
/// 判断真实值在中点哪一侧，只有精确的中点才远离零。
pub fn round1(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }

    let scaled = value * 10.0;
    if (scaled - scaled.trunc()).abs() != 0.5 {
        return scaled.round() / 10.0;
    }

    // value * 10 - scaled，无舍入
    let residual = value.mul_add(10.0, -scaled);
    let rounded = if residual > 0.0 {
        scaled.ceil()
    } else if residual < 0.0 {
        scaled.floor()
    } else {
        scaled.round()
    };
    rounded / 10.0
}

/// 按半开区间分类，先匹配先得
pub fn classify(bmi: f64) -> WeightCategory {
    if bmi < UNDERWEIGHT_LIMIT {
        WeightCategory::Underweight
    } else if bmi < HEALTHY_LIMIT {
        WeightCategory::Healthy
    } else if bmi < OVERWEIGHT_LIMIT {
        WeightCategory::Overweight
    } else {
        WeightCategory::Obese
    }
}

/// 给定身高下的健康体重区间 [min, max)，单位 kg
pub fn healthy_weight_range(height_cm: f64) -> Option<(f64, f64)> {
    if !(height_cm.is_finite() && height_cm > 0.0) {
        return None;
    }
    let height_m = height_cm / CM_PER_M;
    let h2 = height_m * height_m;

    // 与 bmi_from_metric 相同：下溢为 0 或上溢时没有区间
    let (min, max) = (UNDERWEIGHT_LIMIT * h2, HEALTHY_LIMIT * h2);
    if h2 > 0.0 && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(height: &str, weight: &str) -> Option<BmiResult> {
        calculate(&BmiInput::new(height, weight))
    }

    #[test]
    fn test_healthy_adult() {
        // 65 / 1.70² = 22.49...
        let result = calc("170", "65").unwrap();
        assert_eq!(result.value(), 22.5);
        assert_eq!(result.category(), WeightCategory::Healthy);
    }

    #[test]
    fn test_underweight() {
        let result = calc("160", "45").unwrap();
        assert_eq!(result.value(), 17.6);
        assert_eq!(result.category(), WeightCategory::Underweight);
    }

    #[test]
    fn test_obese() {
        let result = calc("180", "100").unwrap();
        assert_eq!(result.value(), 30.9);
        assert_eq!(result.category(), WeightCategory::Obese);
    }

    #[test]
    fn test_invalid_inputs_produce_nothing() {
        assert!(calc("", "70").is_none());
        assert!(calc("175", "-5").is_none());
        assert!(calc("0", "70").is_none());
        assert!(calc("175", "0").is_none());
        assert!(calc("-170", "70").is_none());
        assert!(calc("abc", "70").is_none());
        assert!(calc("175", "seventy").is_none());
        assert!(calc("NaN", "70").is_none());
        assert!(calc("inf", "70").is_none());
        assert!(calc("175", "").is_none());
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let result = calc(" 170 ", "65\n").unwrap();
        assert_eq!(result.value(), 22.5);
    }

    #[test]
    fn test_value_matches_formula() {
        for (h, w) in [(150.0, 50.0), (165.5, 72.3), (190.0, 88.8), (201.0, 140.0)] {
            let result = calc(&h.to_string(), &w.to_string()).unwrap();
            let expected = round1(w / ((h / 100.0) * (h / 100.0)));
            assert!((result.value() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(18.499), WeightCategory::Underweight);
        assert_eq!(classify(18.5), WeightCategory::Healthy);
        assert_eq!(classify(24.999), WeightCategory::Healthy);
        assert_eq!(classify(25.0), WeightCategory::Overweight);
        assert_eq!(classify(29.999), WeightCategory::Overweight);
        assert_eq!(classify(30.0), WeightCategory::Obese);
    }

    #[test]
    fn test_category_uses_unrounded_value() {
        // 100 cm, 24.96 kg -> bmi 24.96，显示为 25.0 但仍属 Healthy
        let result = calc("100", "24.96").unwrap();
        assert_eq!(result.value(), 25.0);
        assert_eq!(result.category(), WeightCategory::Healthy);
    }

    #[test]
    fn test_idempotent() {
        let input = BmiInput::new("182", "77");
        assert_eq!(calculate(&input), calculate(&input));
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(22.46), 22.5);
        assert_eq!(round1(17.578), 17.6);
        assert_eq!(round1(30.04), 30.0);
        // 精确中点远离零
        assert_eq!(round1(22.25), 22.3);
        assert_eq!(round1(-22.25), -22.3);
    }

    #[test]
    fn test_rounds_stored_value_not_scaled_product() {
        // 22.45 存储为 22.4499999...，乘 10 后恰好得到 224.5
        let result = calc("100", "22.45").unwrap();
        assert_eq!(result.value(), 22.4);
        assert_eq!(round1(22.45), 22.4);
        assert_eq!(round1(0.15), 0.1);
        assert_eq!(round1(0.35), 0.3);
    }

    #[test]
    fn test_huge_value_stays_finite() {
        let result = calc("100", "1e308").unwrap();
        assert!(result.value().is_finite());
        assert_eq!(result.value(), 1e308);
        assert_eq!(result.category(), WeightCategory::Obese);
        assert_eq!(round1(f64::MAX), f64::MAX);
    }

    #[test]
    fn test_calculate_metric_matches_calculate() {
        assert_eq!(calculate_metric(170.0, 65.0), calc("170", "65"));
        assert!(calculate_metric(1e-300, 70.0).is_none());
        assert!(calculate_metric(0.0, 70.0).is_none());
    }

    #[test]
    fn test_healthy_weight_range() {
        let (min, max) = healthy_weight_range(200.0).unwrap();
        assert!((min - 74.0).abs() < 1e-9);
        assert!((max - 100.0).abs() < 1e-9);
        assert!(healthy_weight_range(0.0).is_none());
    }

    #[test]
    fn test_healthy_weight_range_extreme_heights() {
        assert!(healthy_weight_range(1e-200).is_none());
        assert!(healthy_weight_range(1e200).is_none());
        assert!(healthy_weight_range(f64::NAN).is_none());
    }
}
