//! # BMI 输入数据模型
//!
//! 表单在用户点击计算时组装出的一次性输入。身高、体重保留原始字符串，
//! 由计算器负责解析与校验；年龄、性别、活动水平只是上下文信息，不参与计算。
//!
//! ## 依赖关系
//! - 被 `calculator/` 和 `commands/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 性别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const VARIANTS: &'static [&'static str] = &["male", "female", "other"];
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!(
                "Invalid gender '{}'. Use one of: {}",
                s,
                Self::VARIANTS.join(", ")
            )),
        }
    }
}

/// 活动水平
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// little or no exercise
    Sedentary,
    /// exercise 1-3 days/week
    Light,
    /// exercise 3-5 days/week
    #[default]
    Moderate,
    /// exercise 6-7 days/week
    Active,
    /// intense exercise daily
    VeryActive,
}

impl ActivityLevel {
    pub const VARIANTS: &'static [&'static str] =
        &["sedentary", "light", "moderate", "active", "very-active"];

    /// 表单下拉框中显示的说明
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::Light => "Light (exercise 1-3 days/week)",
            ActivityLevel::Moderate => "Moderate (exercise 3-5 days/week)",
            ActivityLevel::Active => "Active (exercise 6-7 days/week)",
            ActivityLevel::VeryActive => "Very Active (intense exercise daily)",
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityLevel::Sedentary => write!(f, "sedentary"),
            ActivityLevel::Light => write!(f, "light"),
            ActivityLevel::Moderate => write!(f, "moderate"),
            ActivityLevel::Active => write!(f, "active"),
            ActivityLevel::VeryActive => write!(f, "very-active"),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very-active" | "veryactive" => Ok(ActivityLevel::VeryActive),
            _ => Err(format!(
                "Invalid activity level '{}'. Use one of: {}",
                s,
                Self::VARIANTS.join(", ")
            )),
        }
    }
}

/// 一次计算请求的输入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    /// 身高原始输入 (cm)
    pub height_cm: String,

    /// 体重原始输入 (kg)
    pub weight_kg: String,

    /// 年龄原始输入（不参与计算）
    pub age: String,

    /// 性别（不参与计算）
    pub gender: Gender,

    /// 活动水平（不参与计算）
    pub activity: ActivityLevel,
}

impl BmiInput {
    pub fn new(height_cm: impl Into<String>, weight_kg: impl Into<String>) -> Self {
        BmiInput {
            height_cm: height_cm.into(),
            weight_kg: weight_kg.into(),
            ..Default::default()
        }
    }

    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = age.into();
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_activity(mut self, activity: ActivityLevel) -> Self {
        self.activity = activity;
        self
    }
}
