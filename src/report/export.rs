use std::path::Path;

use anyhow::{Context, Result};
use image::RgbImage;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::config::PlotConfig;
use crate::data::Dataset;
use crate::regression::Fit;

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

const PLOT_AREA: RGBColor = RGBColor(234, 234, 242);
const POINT: RGBColor = RGBColor(31, 119, 180);
const LINE: RGBColor = RGBColor(214, 39, 40);

const POINT_RADIUS: u32 = 4;
const LINE_WIDTH: u32 = 2;

type Chart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw the data as blue markers and `fit` as a red line over
/// `[0, x_max] x [0, y_max]`. Points outside that window are left out.
pub fn render(data: &Dataset, fit: &Fit, plot: &PlotConfig) -> Result<RgbImage> {
    plot.validate()?;
    let (width, height) = (plot.width, plot.height);
    let mut buffer = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0.0..plot.x_max, 0.0..plot.y_max)?;
        chart.plotting_area().fill(&PLOT_AREA)?;
        draw_mesh(&mut chart)?;

        if let Some((from, to)) = clip_line(fit, plot.x_max, plot.y_max) {
            chart.draw_series(LineSeries::new([from, to], LINE.stroke_width(LINE_WIDTH)))?;
        }

        let inside = |&(x, y): &(f64, f64)| {
            (0.0..=plot.x_max).contains(&x) && (0.0..=plot.y_max).contains(&y)
        };
        chart.draw_series(
            data.points()
                .filter(inside)
                .map(|p| Circle::new(p, POINT_RADIUS, POINT.filled())),
        )?;

        root.present()?;
    }

    RgbImage::from_raw(width, height, buffer).context("plot buffer does not match the canvas")
}

/// Render and save as PNG.
pub fn export_png(data: &Dataset, fit: &Fit, plot: &PlotConfig, path: &Path) -> Result<()> {
    render(data, fit, plot)?
        .save(path)
        .with_context(|| format!("writing plot to {}", path.display()))?;
    log::info!("plot written to {}", path.display());
    Ok(())
}

/// End points of `y = w * x + b` inside `[0, x_max] x [0, y_max]`, or
/// `None` when the line misses the window or is not finite.
pub fn clip_line(fit: &Fit, x_max: f64, y_max: f64) -> Option<((f64, f64), (f64, f64))> {
    let (w, b) = (fit.weight, fit.bias);
    if !(w.is_finite() && b.is_finite()) {
        return None;
    }

    let (lo, hi) = if w == 0.0 {
        if !(0.0..=y_max).contains(&b) {
            return None;
        }
        (0.0, x_max)
    } else {
        // x where the line crosses the bottom and top edges
        let (at_bottom, at_top) = (-b / w, (y_max - b) / w);
        (
            at_bottom.min(at_top).max(0.0),
            at_bottom.max(at_top).min(x_max),
        )
    };
    if lo > hi {
        return None;
    }

    let y = |x: f64| fit.predict(x).clamp(0.0, y_max);
    Some(((lo, y(lo)), (hi, y(hi))))
}

fn draw_mesh(chart: &mut Chart<'_, '_>) -> Result<()> {
    let labelled = chart
        .configure_mesh()
        .bold_line_style(WHITE)
        .light_line_style(PLOT_AREA)
        .x_desc("Reservations")
        .y_desc("Pizzas")
        .axis_desc_style(("sans-serif", 16))
        .draw();

    // text needs a system font; without one keep the grid only
    if let Err(e) = labelled {
        log::warn!("axis labels not drawn: {e}");
        chart
            .configure_mesh()
            .bold_line_style(WHITE)
            .light_line_style(PLOT_AREA)
            .x_labels(0)
            .y_labels(0)
            .draw()?;
    }
    Ok(())
}
