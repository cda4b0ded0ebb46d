use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Result alias for report loading.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Everything that can go wrong while reading a benchmark report.
/// Any of these aborts the whole run; there is no partial recovery.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: malformed row: {reason}", path.display())]
    MalformedRow {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("{}:{line}: column '{column}' is not a number: '{raw}'", path.display())]
    InvalidNumber {
        path: PathBuf,
        line: usize,
        column: &'static str,
        raw: String,
    },

    #[error("{}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// VariantType / SourceTool
// ---------------------------------------------------------------------------

/// Variant-call category a report row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantType {
    Snp,
    Indel,
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantType::Snp => write!(f, "SNP"),
            VariantType::Indel => write!(f, "INDEL"),
        }
    }
}

/// Marker shape used for a tool's points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Dot,
    Cross,
}

/// The evaluation tool that produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceTool {
    /// `*.roc.all.csv`
    Vcfeval,
    /// `*_precision-recall.tsv`
    Vcfdist,
}

impl SourceTool {
    pub fn marker(self) -> Marker {
        match self {
            SourceTool::Vcfeval => Marker::Dot,
            SourceTool::Vcfdist => Marker::Cross,
        }
    }

    /// Legend label for one configuration's series.
    pub fn label(self, calls: &str, truth: &str) -> String {
        format!("{self} Calls={calls} Truth={truth}")
    }
}

impl fmt::Display for SourceTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceTool::Vcfeval => write!(f, "VCFeval"),
            SourceTool::Vcfdist => write!(f, "VCFdist"),
        }
    }
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

/// One point of a precision/recall curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrPoint {
    pub recall: f64,
    pub precision: f64,
}

/// Points for one (configuration, variant type, tool) triple, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSeries {
    pub points: Vec<PrPoint>,
    /// Raw F1 field of the last matching ROC row. Never plotted.
    pub last_f1: Option<String>,
}

impl MetricSeries {
    pub fn push(&mut self, recall: f64, precision: f64) {
        self.points.push(PrPoint { recall, precision });
    }

    pub fn recalls(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.recall).collect()
    }

    pub fn precisions(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.precision).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// SNP and INDEL series parsed from a single report file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolReport {
    pub snp: MetricSeries,
    pub indel: MetricSeries,
}

impl ToolReport {
    pub fn series_mut(&mut self, variant: VariantType) -> &mut MetricSeries {
        match variant {
            VariantType::Snp => &mut self.snp,
            VariantType::Indel => &mut self.indel,
        }
    }
}

// ---------------------------------------------------------------------------
// ConfigurationResult
// ---------------------------------------------------------------------------

/// Both reports for one calls/truth configuration pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationResult {
    pub calls: String,
    pub truth: String,
    pub vcfeval: ToolReport,
    pub vcfdist: ToolReport,
}

impl ConfigurationResult {
    /// Move one tool's report out, leaving an empty one behind.
    pub fn take_report(&mut self, tool: SourceTool) -> ToolReport {
        match tool {
            SourceTool::Vcfeval => std::mem::take(&mut self.vcfeval),
            SourceTool::Vcfdist => std::mem::take(&mut self.vcfdist),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_tool_prefix() {
        assert_eq!(
            SourceTool::Vcfeval.label("A", "C"),
            "VCFeval Calls=A Truth=C"
        );
        assert_eq!(
            SourceTool::Vcfdist.label("B", "C"),
            "VCFdist Calls=B Truth=C"
        );
    }

    #[test]
    fn markers_differ_per_tool() {
        assert_eq!(SourceTool::Vcfeval.marker(), Marker::Dot);
        assert_eq!(SourceTool::Vcfdist.marker(), Marker::Cross);
    }

    #[test]
    fn series_keeps_insertion_order() {
        let mut s = MetricSeries::default();
        s.push(0.9, 0.99);
        s.push(0.5, 0.7);
        s.push(0.9, 0.99);
        assert_eq!(s.recalls(), vec![0.9, 0.5, 0.9]);
        assert_eq!(s.precisions(), vec![0.99, 0.7, 0.99]);
    }
}
