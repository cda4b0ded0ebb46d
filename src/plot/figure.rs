use plotters::style::RGBColor;

use crate::color::ColorMap;
use crate::data::model::{ConfigurationResult, Marker, PrPoint, SourceTool, ToolReport, VariantType};

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// Fixed range and tick spacing of one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub start: f64,
    pub end: f64,
    pub step: f64,
    /// Decimal places used for tick labels.
    pub precision: usize,
}

impl AxisSpec {
    pub fn new(start: f64, end: f64, step: f64, precision: usize) -> Self {
        Self {
            start,
            end,
            step,
            precision,
        }
    }

    /// Tick positions from `start` to `end` inclusive.
    pub fn ticks(&self) -> Vec<f64> {
        let n = ((self.end - self.start) / self.step + 1e-9).floor() as usize;
        (0..=n).map(|i| self.start + i as f64 * self.step).collect()
    }

    pub fn format_tick(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }
}

// ---------------------------------------------------------------------------
// Panel
// ---------------------------------------------------------------------------

/// One labelled point cloud inside a panel.
#[derive(Debug, Clone)]
pub struct PlottedSeries {
    pub label: String,
    pub color: RGBColor,
    pub marker: Marker,
    pub points: Vec<PrPoint>,
}

/// One scatter plot: a variant type with its axes and series.
#[derive(Debug, Clone)]
pub struct Panel {
    pub variant: VariantType,
    pub title: String,
    pub x: AxisSpec,
    pub y: AxisSpec,
    pub series: Vec<PlottedSeries>,
}

impl Panel {
    /// SNP precision sits very close to 1, so the view is zoomed in.
    pub fn snp() -> Self {
        Self {
            variant: VariantType::Snp,
            title: "SNPs".to_string(),
            x: AxisSpec::new(0.9, 1.0, 0.01, 2),
            y: AxisSpec::new(0.995, 1.0, 0.001, 3),
            series: Vec::new(),
        }
    }

    pub fn indel() -> Self {
        Self {
            variant: VariantType::Indel,
            title: "INDELs".to_string(),
            x: AxisSpec::new(0.0, 1.0, 0.1, 1),
            y: AxisSpec::new(0.6, 1.0, 0.05, 2),
            series: Vec::new(),
        }
    }

    /// Distinct series labels in draw order, with their colour and marker.
    pub fn legend_entries(&self) -> Vec<(&str, RGBColor, Marker)> {
        let mut entries: Vec<(&str, RGBColor, Marker)> = Vec::new();
        for s in &self.series {
            if !entries.iter().any(|(label, _, _)| *label == s.label) {
                entries.push((s.label.as_str(), s.color, s.marker));
            }
        }
        entries
    }

    /// Whether at least one point will be drawn.
    pub fn is_populated(&self) -> bool {
        self.series.iter().any(|s| !s.points.is_empty())
    }

    /// Points of `series` that fall inside both axis ranges. The chart pins
    /// out-of-range coordinates to its border, so these are the only ones
    /// to draw.
    pub fn visible_points<'a>(
        &'a self,
        series: &'a PlottedSeries,
    ) -> impl Iterator<Item = (f64, f64)> + 'a {
        series
            .points
            .iter()
            .filter(|p| self.x.contains(p.recall) && self.y.contains(p.precision))
            .map(|p| (p.recall, p.precision))
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Figure
// ---------------------------------------------------------------------------

/// The whole image: a title and the SNP and INDEL panels, side by side.
#[derive(Debug, Clone)]
pub struct Figure {
    pub title: String,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            panels: vec![Panel::snp(), Panel::indel()],
        }
    }

    /// Build the figure from aggregated results, consuming them.
    /// Colours are looked up by calls name.
    pub fn from_results(
        title: impl Into<String>,
        results: Vec<ConfigurationResult>,
        colors: &ColorMap,
    ) -> Self {
        let mut figure = Self::new(title);
        for result in results {
            let color = colors.color_for(&result.calls);
            figure.add_configuration(result, color);
        }
        figure
    }

    /// Add one configuration's vcfeval and vcfdist series to both panels.
    pub fn add_configuration(&mut self, mut result: ConfigurationResult, color: RGBColor) {
        for tool in [SourceTool::Vcfeval, SourceTool::Vcfdist] {
            let label = tool.label(&result.calls, &result.truth);
            let ToolReport { snp, indel } = result.take_report(tool);
            for (variant, series) in [(VariantType::Snp, snp), (VariantType::Indel, indel)] {
                if let Some(panel) = self.panel_mut(variant) {
                    panel.series.push(PlottedSeries {
                        label: label.clone(),
                        color,
                        marker: tool.marker(),
                        points: series.points,
                    });
                }
            }
        }
    }

    pub fn panel(&self, variant: VariantType) -> Option<&Panel> {
        self.panels.iter().find(|p| p.variant == variant)
    }

    fn panel_mut(&mut self, variant: VariantType) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.variant == variant)
    }
}
