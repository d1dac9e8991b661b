// src/io/charts.rs

use plotters::prelude::*;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InventoryError, Result};
use crate::model::product::{ProductId, Quantity};
use crate::simulation::agent_comm::DayRecord;

const PANEL_SIZE: (u32, u32) = (800, 400);
const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);

/// Forecast and fulfilled units for one product on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductBars {
    pub product_id: ProductId,
    pub forecast: Quantity,
    pub fulfilled: Quantity,
}

/// Draws `day_<n>.svg` in `dir` with one bar panel per product.
pub fn render_day_chart(dir: &Path, day: usize, bars: &[ProductBars]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("day_{day}.svg"));
    draw_day_chart(&path, day, bars).map_err(|e| InventoryError::Chart(e.to_string()))?;
    Ok(path)
}

/// Draws `behavior_<product>.svg` in `dir`: forecast, store stock and reorder size per day.
pub fn render_behavior_chart(dir: &Path, product_id: &ProductId, history: &[DayRecord]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("behavior_{product_id}.svg"));
    draw_behavior_chart(&path, product_id, history).map_err(|e| InventoryError::Chart(e.to_string()))?;
    Ok(path)
}

fn bar_label(value: &SegmentValue<u32>) -> String {
    match value {
        SegmentValue::CenterOf(0) => "Forecast".to_string(),
        SegmentValue::CenterOf(1) => "Fulfilled".to_string(),
        _ => String::new(),
    }
}

/// Upper bound for a value axis; an all-zero chart still gets a visible range.
fn axis_max(peak: f64, headroom: f64) -> f64 {
    let max = peak * headroom;
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

fn draw_day_chart(path: &Path, day: usize, bars: &[ProductBars]) -> std::result::Result<(), Box<dyn Error>> {
    let panels = bars.len().max(1);
    let root = SVGBackend::new(path, (PANEL_SIZE.0, PANEL_SIZE.1 * panels as u32)).into_drawing_area();
    root.fill(&WHITE)?;

    for (area, bar) in root.split_evenly((panels, 1)).iter().zip(bars) {
        let y_max = axis_max(bar.forecast.max(bar.fulfilled), 1.5);
        let mut chart = ChartBuilder::on(area)
            .caption(format!("Product {} - Day {}", bar.product_id, day), ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(60)
            .build_cartesian_2d((0u32..2u32).into_segmented(), 0f64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("Units")
            .x_label_formatter(&bar_label)
            .draw()?;

        let values = [(0u32, bar.forecast, SKY_BLUE), (1u32, bar.fulfilled, GREEN)];
        chart.draw_series(values.iter().map(|&(x, value, color)| {
            let mut rect = Rectangle::new(
                [(SegmentValue::Exact(x), 0.0), (SegmentValue::Exact(x + 1), value.max(0.0))],
                color.filled(),
            );
            rect.set_margin(0, 0, 30, 30);
            rect
        }))?;
    }

    root.present()?;
    Ok(())
}

fn draw_behavior_chart(
    path: &Path,
    product_id: &ProductId,
    history: &[DayRecord],
) -> std::result::Result<(), Box<dyn Error>> {
    let last_day = history.iter().map(|r| r.day).max().unwrap_or(1) as u32;
    let peak = history
        .iter()
        .flat_map(|r| [r.forecasted_demand, r.store_stock, r.reorder_qty])
        .fold(0.0, f64::max);

    let root = SVGBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Inventory Behavior for Product {product_id}"), ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0u32..last_day + 1, 0f64..axis_max(peak, 1.1))?;

    chart.configure_mesh().x_desc("Day").y_desc("Units").draw()?;

    let series: [(&str, RGBColor, fn(&DayRecord) -> f64); 3] = [
        ("Forecasted Demand", BLUE, |r| r.forecasted_demand),
        ("Store Stock", RED, |r| r.store_stock),
        ("Reorder Qty", GREEN, |r| r.reorder_qty),
    ];
    for (label, color, value) in series {
        chart
            .draw_series(LineSeries::new(
                history.iter().map(|r| (r.day as u32, value(r))),
                color.stroke_width(2),
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
