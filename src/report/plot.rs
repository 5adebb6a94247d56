//! # BMI 散点图
//!
//! 使用 `plotters` 绘制身高-体重散点图，按分类着色，
//! 并叠加 BMI = 18.5 / 25 / 30 的等值曲线。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `report/summary.rs` 的 BmiEntry
//! - 使用 `plotters` 渲染图表

use super::summary::BmiEntry;
use crate::error::{FitcalcError, Result};
use crate::models::result::{HEALTHY_LIMIT, OVERWEIGHT_LIMIT, UNDERWEIGHT_LIMIT};
use crate::models::WeightCategory;

use plotters::prelude::*;
use std::path::Path;

/// 图像尺寸
const PLOT_SIZE: (u32, u32) = (1000, 750);

/// 分类颜色
fn category_color(category: WeightCategory) -> RGBColor {
    match category {
        WeightCategory::Underweight => RGBColor(0, 102, 204),
        WeightCategory::Healthy => RGBColor(0, 153, 76),
        WeightCategory::Overweight => RGBColor(255, 140, 0),
        WeightCategory::Obese => RGBColor(204, 0, 0),
    }
}

/// 生成散点图，扩展名为 `.svg` 时输出 SVG，否则输出 PNG
pub fn generate_scatter_plot(entries: &[BmiEntry], output_path: &Path, title: &str) -> Result<()> {
    if entries.is_empty() {
        return Err(FitcalcError::Other("No data to plot".to_string()));
    }

    let use_svg = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if use_svg {
        let root = SVGBackend::new(output_path, PLOT_SIZE).into_drawing_area();
        draw_scatter_chart(&root, entries, title)?;
        root.present()
            .map_err(|e| FitcalcError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, PLOT_SIZE).into_drawing_area();
        draw_scatter_chart(&root, entries, title)?;
        root.present()
            .map_err(|e| FitcalcError::PlotError(e.to_string()))?;
    }

    Ok(())
}

/// 坐标范围（留 5% 边距）
fn axis_ranges(entries: &[BmiEntry]) -> ((f64, f64), (f64, f64)) {
    let fold = |f: fn(&BmiEntry) -> f64| {
        entries.iter().map(f).fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
    };

    let (h_min, h_max) = fold(|e| e.height_cm);
    let (w_min, w_max) = fold(|e| e.weight_kg);

    let pad = |lo: f64, hi: f64| {
        let margin = ((hi - lo) * 0.05).max(1.0);
        ((lo - margin).max(0.0), hi + margin)
    };

    (pad(h_min, h_max), pad(w_min, w_max))
}

/// 绘制图表
fn draw_scatter_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    entries: &[BmiEntry],
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| FitcalcError::PlotError(format!("{:?}", e)))?;

    let ((x_min, x_max), (y_min, y_max)) = axis_ranges(entries);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| FitcalcError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Height (cm)")
        .y_desc("Weight (kg)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| FitcalcError::PlotError(format!("{:?}", e)))?;

    // 等 BMI 曲线: weight = bmi * (height / 100)²
    let steps = 200;
    for limit in [UNDERWEIGHT_LIMIT, HEALTHY_LIMIT, OVERWEIGHT_LIMIT] {
        let curve: Vec<(f64, f64)> = (0..=steps)
            .map(|i| {
                let h = x_min + (x_max - x_min) * i as f64 / steps as f64;
                (h, limit * (h / 100.0) * (h / 100.0))
            })
            .filter(|(_, w)| *w >= y_min && *w <= y_max)
            .collect();

        if curve.is_empty() {
            continue;
        }

        let label_pos = curve[curve.len() - 1];
        chart
            .draw_series(LineSeries::new(curve, BLACK.mix(0.4).stroke_width(1)))
            .map_err(|e| FitcalcError::PlotError(format!("{:?}", e)))?;

        chart
            .draw_series(std::iter::once(Text::new(
                format!("BMI {:.1}", limit),
                label_pos,
                ("sans-serif", 13).into_font().color(&BLACK),
            )))
            .map_err(|e| FitcalcError::PlotError(format!("{:?}", e)))?;
    }

    // 按分类绘制数据点
    for category in WeightCategory::ALL {
        let color = category_color(category);
        let points: Vec<(f64, f64)> = entries
            .iter()
            .filter(|e| e.category == category)
            .map(|e| (e.height_cm, e.weight_kg))
            .collect();

        if points.is_empty() {
            continue;
        }

        chart
            .draw_series(
                points
                    .into_iter()
                    .map(move |p| Circle::new(p, 4, color.filled())),
            )
            .map_err(|e| FitcalcError::PlotError(format!("{:?}", e)))?
            .label(category.to_string())
            .legend(move |(x, y)| Circle::new((x + 10, y), 5, color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| FitcalcError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(height_cm: f64, weight_kg: f64) -> BmiEntry {
        BmiEntry {
            row: 1,
            name: String::new(),
            height_cm,
            weight_kg,
            bmi: 0.0,
            category: WeightCategory::Healthy,
        }
    }

    #[test]
    fn test_axis_ranges_padding() {
        let entries = vec![entry(150.0, 50.0), entry(190.0, 110.0)];
        let ((x_min, x_max), (y_min, y_max)) = axis_ranges(&entries);
        assert!((x_min - 148.0).abs() < 1e-9);
        assert!((x_max - 192.0).abs() < 1e-9);
        assert!((y_min - 47.0).abs() < 1e-9);
        assert!((y_max - 113.0).abs() < 1e-9);
    }

    #[test]
    fn test_axis_ranges_single_point() {
        let ((x_min, x_max), _) = axis_ranges(&[entry(170.0, 65.0)]);
        assert!(x_max > x_min);
    }

    #[test]
    fn test_empty_plot_is_error() {
        let path = std::env::temp_dir().join("fitcalc_empty_plot.png");
        assert!(generate_scatter_plot(&[], &path, "Empty").is_err());
    }
}
