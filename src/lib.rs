pub mod color;
pub mod config;
pub mod data;
pub mod plot;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::color::ColorMap;
use crate::config::RunConfig;
use crate::data::aggregate::ReportAggregator;
use crate::plot::figure::Figure;
use crate::plot::render::render_png;

/// Load every configured report pair, build the two-panel figure and write
/// it to `config.output_path`. Returns the path written.
pub fn run(config: &RunConfig) -> Result<PathBuf> {
    let aggregator = ReportAggregator::new(&config.results_dir);
    let results = aggregator
        .aggregate_all(&config.calls, &config.truths)
        .with_context(|| {
            format!(
                "loading reports from {}",
                aggregator.results_dir().display()
            )
        })?;

    let colors = ColorMap::new(&config.calls);
    let figure = Figure::from_results(config.title.clone(), results, &colors);
    for panel in &figure.panels {
        log::info!(
            "{}: {} legend entries, {} points",
            panel.title,
            panel.legend_entries().len(),
            panel.point_count()
        );
        if !panel.is_populated() {
            log::warn!("{}: no points to draw", panel.title);
        }
    }

    render_png(&figure, config.image_size, &config.output_path)?;
    Ok(config.output_path.clone())
}
