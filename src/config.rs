use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Fixed inputs and outputs of one plotting run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory holding the vcfeval/vcfdist reports.
    pub results_dir: PathBuf,

    /// Where the PNG is written (overwritten if present).
    pub output_path: PathBuf,

    /// Smith-Waterman parameter sets used for the calls, in plot order.
    pub calls: Vec<String>,

    /// Parameter sets used for the truth. Only one in this run.
    pub truths: Vec<String>,

    /// Output image size in pixels.
    pub image_size: (u32, u32),

    /// Figure-level title drawn above both panels.
    pub title: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("1_results"),
            output_path: PathBuf::from("img/1_sw_pr_curve.png"),
            calls: ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect(),
            truths: vec!["C".to_string()],
            image_size: (2000, 800),
            title: "Varying Truth/Calls Smith-Waterman Parameters".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_layout() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.results_dir, PathBuf::from("1_results"));
        assert_eq!(cfg.output_path, PathBuf::from("img/1_sw_pr_curve.png"));
        assert_eq!(cfg.calls, vec!["A", "B", "C", "D"]);
        assert_eq!(cfg.truths, vec!["C"]);
    }
}
