//! # CSV 测量记录解析器
//!
//! 读取批量计算的输入 CSV。第一行为表头（大小写不敏感）：
//! - 必需列: `height` (或 `height_cm`), `weight` (或 `weight_kg`)
//! - 可选列: `name`, `age`, `gender`, `activity`
//!
//! 单元格按原始字符串保存，数值校验交给计算器。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `models/` 的 BmiInput
//! - 使用 `csv` 库读取

use crate::error::{FitcalcError, Result};
use crate::models::{ActivityLevel, BmiInput, Gender};

use std::fs;
use std::path::Path;

/// 一行输入记录
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BmiRecord {
    /// 数据行号（从 1 开始，不含表头）
    pub row: usize,
    pub name: Option<String>,
    pub height: String,
    pub weight: String,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub activity: Option<String>,
}

impl BmiRecord {
    /// 转换为计算输入；性别/活动水平非法时返回错误
    pub fn to_input(&self) -> Result<BmiInput> {
        let gender = match self.gender.as_deref() {
            Some(g) => g
                .parse::<Gender>()
                .map_err(|_| FitcalcError::InvalidField {
                    field: "gender".to_string(),
                    value: g.to_string(),
                    expected: Gender::VARIANTS.join(", "),
                })?,
            None => Gender::default(),
        };

        let activity = match self.activity.as_deref() {
            Some(a) => a
                .parse::<ActivityLevel>()
                .map_err(|_| FitcalcError::InvalidField {
                    field: "activity".to_string(),
                    value: a.to_string(),
                    expected: ActivityLevel::VARIANTS.join(", "),
                })?,
            None => ActivityLevel::default(),
        };

        Ok(BmiInput::new(self.height.clone(), self.weight.clone())
            .with_age(self.age.clone().unwrap_or_default())
            .with_gender(gender)
            .with_activity(activity))
    }

    /// 显示名称，没有 name 列时使用行号
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("#{}", self.row),
        }
    }
}

/// 表头列位置
struct Columns {
    height: usize,
    weight: usize,
    name: Option<usize>,
    age: Option<usize>,
    gender: Option<usize>,
    activity: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord, source: &str) -> Result<Self> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
        };

        let height = find(&["height", "height_cm"]).ok_or_else(|| FitcalcError::MissingColumn {
            column: "height".to_string(),
            path: source.to_string(),
        })?;
        let weight = find(&["weight", "weight_kg"]).ok_or_else(|| FitcalcError::MissingColumn {
            column: "weight".to_string(),
            path: source.to_string(),
        })?;

        Ok(Columns {
            height,
            weight,
            name: find(&["name"]),
            age: find(&["age"]),
            gender: find(&["gender"]),
            activity: find(&["activity", "activity_level"]),
        })
    }
}

/// 读取 CSV 文件
pub fn parse_records_file(path: &Path) -> Result<Vec<BmiRecord>> {
    let content = fs::read_to_string(path).map_err(|e| FitcalcError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_records_content(&content, &path.display().to_string())
}

/// 解析 CSV 内容
pub fn parse_records_content(content: &str, source: &str) -> Result<Vec<BmiRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let columns = Columns::from_headers(rdr.headers()?, source)?;

    let mut records = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row?;

        // 全空行忽略
        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }

        let cell = |idx: usize| row.get(idx).unwrap_or("").to_string();
        let optional = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
        };

        records.push(BmiRecord {
            row: i + 1,
            name: optional(columns.name),
            height: cell(columns.height),
            weight: cell(columns.weight),
            age: optional(columns.age),
            gender: optional(columns.gender),
            activity: optional(columns.activity),
        });
    }

    Ok(records)
}
