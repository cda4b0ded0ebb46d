use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use super::figure::{Figure, Panel};
use crate::data::model::Marker;

const FONT: &str = "sans-serif";
const DOT_SIZE: i32 = 3;
const CROSS_SIZE: i32 = 5;

// ---------------------------------------------------------------------------
// PNG output
// ---------------------------------------------------------------------------

/// Rasterize `figure` and write it as a PNG to `path`, replacing any
/// existing file. Parent directories are created as needed.
pub fn render_png(figure: &Figure, size: (u32, u32), path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }

    let (width, height) = size;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    draw_figure(figure, &mut buffer, size).context("drawing figure")?;

    let image = image::RgbImage::from_raw(width, height, buffer)
        .context("pixel buffer does not match image size")?;
    image
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;

    log::info!("Wrote {}x{} plot to {}", width, height, path.display());
    Ok(())
}

/// Draw the whole figure into an RGB pixel buffer of `size`.
pub fn draw_figure(figure: &Figure, buffer: &mut [u8], size: (u32, u32)) -> Result<()> {
    let root = BitMapBackend::with_buffer(buffer, size).into_drawing_area();
    root.fill(&WHITE)?;
    let body = root.titled(&figure.title, (FONT, 30).into_font())?;

    let areas = body.split_evenly((1, figure.panels.len().max(1)));
    for (area, panel) in areas.iter().zip(&figure.panels) {
        draw_panel(area, panel).with_context(|| format!("drawing panel '{}'", panel.title))?;
    }

    root.present()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Single panel
// ---------------------------------------------------------------------------

fn draw_panel(area: &DrawingArea<BitMapBackend<'_>, Shift>, panel: &Panel) -> Result<()> {
    let visible: usize = panel
        .series
        .iter()
        .map(|s| panel.visible_points(s).count())
        .sum();
    let clipped = panel.point_count() - visible;
    log::debug!(
        "{}: {} series, {} points ({clipped} outside axes)",
        panel.title,
        panel.series.len(),
        panel.point_count()
    );

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (FONT, 24).into_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(panel.x.start..panel.x.end, panel.y.start..panel.y.end)?;

    chart
        .configure_mesh()
        .x_desc("Recall")
        .y_desc("Precision")
        .x_labels(panel.x.ticks().len())
        .y_labels(panel.y.ticks().len())
        .x_label_formatter(&|v: &f64| panel.x.format_tick(*v))
        .y_label_formatter(&|v: &f64| panel.y.format_tick(*v))
        .draw()?;

    for s in &panel.series {
        let color = s.color;
        let points = panel.visible_points(s);
        match s.marker {
            Marker::Dot => {
                chart
                    .draw_series(points.map(|xy| Circle::new(xy, DOT_SIZE, color.filled())))?
                    .label(s.label.as_str())
                    .legend(move |(x, y)| Circle::new((x, y), DOT_SIZE, color.filled()));
            }
            Marker::Cross => {
                chart
                    .draw_series(points.map(|xy| Cross::new(xy, CROSS_SIZE, color.stroke_width(2))))?
                    .label(s.label.as_str())
                    .legend(move |(x, y)| Cross::new((x, y), CROSS_SIZE, color.stroke_width(2)));
            }
        }
    }

    if !panel.series.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_output_dir_blocked_by_file_is_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("img");
        fs::write(&blocker, b"not a directory").unwrap();

        let figure = Figure::new("blocked");
        let err = render_png(&figure, (200, 100), &blocker.join("out.png")).unwrap_err();
        assert!(format!("{err:#}").contains("creating output directory"));
        assert!(!blocker.join("out.png").exists());
    }
}
