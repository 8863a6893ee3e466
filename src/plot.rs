//! Scatter-plot rendering for the per-cell MCS series

use anyhow::Result;
use plotters::prelude::*;
use tracing::info;

use crate::config::PlotConfig;
use crate::trace::CellSeries;

/// MCS indices live in 0..=28; the axis is pinned a little wider so the
/// extremes stay visible. Values outside are clipped from view, not errors.
const Y_RANGE: std::ops::Range<i32> = -1..30;

/// Render both series as one scatter chart and write it as a PNG.
///
/// Cell 1 is always drawn; cell 2 only when it has points. The caller is
/// responsible for rejecting an empty cell-1 series before rendering.
pub fn render_scatter(series: &CellSeries, config: &PlotConfig) -> Result<()> {
    let root = BitMapBackend::new(&config.plot_name, (1280, 720)).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_min, x_max) = time_bounds(series);

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, Y_RANGE)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("MCS")
        .label_style(("sans-serif", 16))
        .draw()?;

    chart
        .draw_series(
            series
                .cell1
                .iter()
                .map(|p| Circle::new((p.time_s, p.mcs), 2, RED.filled())),
        )?
        .label("cell 1")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, RED.filled()));

    if !series.cell2.is_empty() {
        chart
            .draw_series(
                series
                    .cell2
                    .iter()
                    .map(|p| Circle::new((p.time_s, p.mcs), 2, BLUE.filled())),
            )?
            .label("cell 2")
            .legend(|(x, y)| Circle::new((x + 10, y), 3, BLUE.filled()));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    info!("Wrote plot to {}", config.plot_name.display());
    Ok(())
}

/// X-axis bounds across both series. A single distinct timestamp is widened
/// into a non-empty range so the chart still builds.
fn time_bounds(series: &CellSeries) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in series.cell1.iter().chain(series.cell2.iter()) {
        min = min.min(p.time_s);
        max = max.max(p.time_s);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 0.5, max + 0.5);
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::McsPoint;

    fn series_with(points1: &[(f64, i32)], points2: &[(f64, i32)]) -> CellSeries {
        let mut series = CellSeries::default();
        series.cell1 = points1
            .iter()
            .map(|&(time_s, mcs)| McsPoint { time_s, mcs })
            .collect();
        series.cell2 = points2
            .iter()
            .map(|&(time_s, mcs)| McsPoint { time_s, mcs })
            .collect();
        series
    }

    #[test]
    fn test_time_bounds_spans_both_series() {
        let series = series_with(&[(1.0, 5), (2.0, 6)], &[(0.5, 7), (3.5, 8)]);
        assert_eq!(time_bounds(&series), (0.5, 3.5));
    }

    #[test]
    fn test_time_bounds_single_point_widens() {
        let series = series_with(&[(2.0, 5)], &[]);
        assert_eq!(time_bounds(&series), (1.5, 2.5));
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlotConfig {
            plot_name: dir.path().join("out.png"),
            ..Default::default()
        };
        let series = series_with(&[(0.0, 5), (0.1, 9)], &[(0.05, 12)]);
        render_scatter(&series, &config).unwrap();

        let bytes = std::fs::read(&config.plot_name).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_render_clips_out_of_range_mcs() {
        // An MCS past the pinned axis stays in the series and renders
        // clipped rather than erroring.
        let dir = tempfile::tempdir().unwrap();
        let config = PlotConfig {
            plot_name: dir.path().join("clipped.png"),
            ..Default::default()
        };
        let series = series_with(&[(0.0, 35), (0.1, 9)], &[]);
        render_scatter(&series, &config).unwrap();
        assert!(config.plot_name.exists());
    }
}
