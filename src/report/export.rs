//! # 结果导出
//!
//! 将批量计算结果写为 CSV。只导出有结果的行。
//!
//! ## 输出列
//! `row, name, height_cm, weight_kg, bmi, category`
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `report/summary.rs` 的 BmiEntry
//! - 使用 `csv` 库写入

use super::summary::BmiEntry;
use crate::error::{FitcalcError, Result};

use std::path::Path;

/// 导出结果到 CSV 文件
pub fn to_csv(entries: &[BmiEntry], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    write_entries(&mut wtr, entries)?;

    wtr.flush().map_err(|e| FitcalcError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 写入表头和全部结果行
pub fn write_entries<W: std::io::Write>(
    wtr: &mut csv::Writer<W>,
    entries: &[BmiEntry],
) -> Result<()> {
    wtr.write_record(["row", "name", "height_cm", "weight_kg", "bmi", "category"])?;

    for entry in entries {
        wtr.write_record(&[
            entry.row.to_string(),
            entry.name.clone(),
            entry.height_cm.to_string(),
            entry.weight_kg.to_string(),
            format!("{:.1}", entry.bmi),
            entry.category.to_string(),
        ])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeightCategory;

    #[test]
    fn test_write_entries() {
        let entries = vec![
            BmiEntry {
                row: 1,
                name: "Alice".to_string(),
                height_cm: 170.0,
                weight_kg: 65.0,
                bmi: 22.5,
                category: WeightCategory::Healthy,
            },
            BmiEntry {
                row: 3,
                name: "#3".to_string(),
                height_cm: 180.0,
                weight_kg: 100.5,
                bmi: 31.0,
                category: WeightCategory::Obese,
            },
        ];

        let mut wtr = csv::Writer::from_writer(Vec::new());
        write_entries(&mut wtr, &entries).unwrap();
        let text = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "row,name,height_cm,weight_kg,bmi,category");
        assert_eq!(lines[1], "1,Alice,170,65,22.5,Healthy");
        assert_eq!(lines[2], "3,#3,180,100.5,31.0,Obese");
    }

    #[test]
    fn test_to_csv_file() {
        let dir = std::env::temp_dir().join("fitcalc_export_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.csv");

        to_csv(&[], &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim(), "row,name,height_cm,weight_kg,bmi,category");
    }
}
