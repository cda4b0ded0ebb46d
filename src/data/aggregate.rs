use std::path::{Path, PathBuf};

use super::loader::{
    load_precision_recall_tsv, load_roc_csv, precision_recall_tsv_path, roc_csv_path,
};
use super::model::{ConfigurationResult, Result};

// ---------------------------------------------------------------------------
// ReportAggregator
// ---------------------------------------------------------------------------

/// Reads the vcfeval/vcfdist report pair of every calls/truth configuration
/// found under one results directory.
#[derive(Debug, Clone)]
pub struct ReportAggregator {
    results_dir: PathBuf,
}

impl ReportAggregator {
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
        }
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Load both reports for a single configuration.
    pub fn aggregate(&self, calls: &str, truth: &str) -> Result<ConfigurationResult> {
        let roc_path = roc_csv_path(&self.results_dir, calls, truth);
        let vcfeval = load_roc_csv(&roc_path)?;
        log::info!(
            "Loaded {}: {} SNP, {} INDEL points",
            roc_path.display(),
            vcfeval.snp.len(),
            vcfeval.indel.len()
        );
        if let Some(f1) = &vcfeval.snp.last_f1 {
            log::debug!("calls={calls} truth={truth}: last vcfeval SNP F1 {f1}");
        }
        if let Some(f1) = &vcfeval.indel.last_f1 {
            log::debug!("calls={calls} truth={truth}: last vcfeval INDEL F1 {f1}");
        }

        let tsv_path = precision_recall_tsv_path(&self.results_dir, calls, truth);
        let vcfdist = load_precision_recall_tsv(&tsv_path)?;
        log::info!(
            "Loaded {}: {} SNP, {} INDEL points",
            tsv_path.display(),
            vcfdist.snp.len(),
            vcfdist.indel.len()
        );

        Ok(ConfigurationResult {
            calls: calls.to_string(),
            truth: truth.to_string(),
            vcfeval,
            vcfdist,
        })
    }

    /// Load every `calls × truth` combination, calls-major, in the given
    /// order. The first failing report aborts the whole run.
    pub fn aggregate_all<C, T>(&self, calls: &[C], truths: &[T]) -> Result<Vec<ConfigurationResult>>
    where
        C: AsRef<str>,
        T: AsRef<str>,
    {
        let mut results = Vec::with_capacity(calls.len() * truths.len());
        for c in calls {
            for t in truths {
                results.push(self.aggregate(c.as_ref(), t.as_ref())?);
            }
        }
        Ok(results)
    }
}
