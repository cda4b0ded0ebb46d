//! Writes a synthetic `1_results/` directory with one vcfeval ROC report and
//! one vcfdist precision-recall report per configuration, so the plotter can
//! be tried without running the benchmarks.

use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result};
use sw_pr_curve::config::RunConfig;
use sw_pr_curve::data::loader::{precision_recall_tsv_path, roc_csv_path};

const THRESHOLDS: u32 = 30;
const TRUTH_SNPS: f64 = 3_500_000.0;
const TRUTH_INDELS: f64 = 500_000.0;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform jitter in `[-scale, scale)`.
    fn jitter(&mut self, scale: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * scale
    }
}

/// Recall/precision at one QUAL threshold.
struct CurvePoint {
    qual: u32,
    recall: f64,
    precision: f64,
}

impl CurvePoint {
    fn f1(&self) -> f64 {
        if self.recall + self.precision == 0.0 {
            0.0
        } else {
            2.0 * self.recall * self.precision / (self.recall + self.precision)
        }
    }
}

/// Recall drops linearly and precision rises with the threshold.
fn curve(
    rng: &mut SimpleRng,
    recall_top: f64,
    recall_slope: f64,
    precision_base: f64,
    precision_slope: f64,
) -> Vec<CurvePoint> {
    (0..=THRESHOLDS)
        .map(|qual| {
            let q = qual as f64;
            let recall = (recall_top - recall_slope * q + rng.jitter(recall_slope / 4.0)).clamp(0.0, 1.0);
            let precision =
                (precision_base + precision_slope * q.sqrt() + rng.jitter(precision_slope / 4.0)).min(1.0);
            CurvePoint {
                qual,
                recall,
                precision,
            }
        })
        .collect()
}

fn roc_report(snp: &[CurvePoint], indel: &[CurvePoint]) -> String {
    let mut out = String::new();
    out.push_str("#Version vcfeval synthetic\n");
    out.push_str("#score field: QUAL\n");
    out.push_str(
        "VARIANT_TYPE,SAMPLE,CONTIG,FILTER,SUBSET,THRESHOLD_TYPE,THRESHOLD,RECALL,PRECISION,FP_RATE,F1\n",
    );
    for (kind, points) in [("SNP", snp), ("INDEL", indel)] {
        for p in points {
            let _ = writeln!(
                out,
                "{kind},*,*,PASS,*,QUAL,{},{:.6},{:.6},{:.6},{:.6}",
                p.qual,
                p.recall,
                p.precision,
                1.0 - p.precision,
                p.f1()
            );
        }
        // Threshold past every call: vcfeval reports zero precision.
        let _ = writeln!(out, "{kind},*,*,PASS,*,QUAL,{},0,0,0,0", THRESHOLDS + 1);
        // Unfiltered rows are present in real reports but never plotted.
        let _ = writeln!(out, "{kind},*,*,ALL,*,QUAL,0,0.5,0.5,0.5,0.5");
    }
    out
}

fn precision_recall_report(snp: &[CurvePoint], indel: &[CurvePoint]) -> String {
    let mut out = String::from(
        "VAR_TYPE\tMIN_QUAL\tPREC\tRECALL\tF1_SCORE\tTRUTH_TOT\tTRUTH_TP\tTRUTH_PP\tTRUTH_FN\tQUERY_TOT\tQUERY_TP\tQUERY_PP\tQUERY_FP\n",
    );
    for (kind, points, total) in [("SNP", snp, TRUTH_SNPS), ("INDEL", indel, TRUTH_INDELS)] {
        for p in points {
            let truth_tp = (total * p.recall).round();
            let truth_fn = total - truth_tp;
            let calls_tp = truth_tp;
            let calls_fp = if p.precision > 0.0 {
                (calls_tp / p.precision - calls_tp).round()
            } else {
                0.0
            };
            let _ = writeln!(
                out,
                "{kind}\t{}\t{:.6}\t{:.6}\t{:.6}\t{total}\t{truth_tp}\t0\t{truth_fn}\t{}\t{calls_tp}\t0\t{calls_fp}",
                p.qual,
                p.precision,
                p.recall,
                p.f1(),
                calls_tp + calls_fp,
            );
        }
    }
    out
}

fn main() -> Result<()> {
    env_logger::init();

    let config = RunConfig::default();
    let mut rng = SimpleRng::new(42);

    fs::create_dir_all(&config.results_dir)
        .with_context(|| format!("creating {}", config.results_dir.display()))?;

    for (i, calls) in config.calls.iter().enumerate() {
        let shift = i as f64;
        for truth in &config.truths {
            let eval_snp = curve(&mut rng, 0.995 - 0.002 * shift, 0.0025, 0.9962, 0.0006);
            let eval_indel = curve(&mut rng, 0.93 - 0.02 * shift, 0.02, 0.80 - 0.01 * shift, 0.03);
            let dist_snp = curve(&mut rng, 0.997 - 0.002 * shift, 0.0025, 0.9968, 0.0005);
            let dist_indel = curve(&mut rng, 0.96 - 0.02 * shift, 0.02, 0.86 - 0.01 * shift, 0.025);

            let roc_path = roc_csv_path(&config.results_dir, calls, truth);
            fs::write(&roc_path, roc_report(&eval_snp, &eval_indel))
                .with_context(|| format!("writing {}", roc_path.display()))?;

            let tsv_path = precision_recall_tsv_path(&config.results_dir, calls, truth);
            fs::write(&tsv_path, precision_recall_report(&dist_snp, &dist_indel))
                .with_context(|| format!("writing {}", tsv_path.display()))?;

            log::info!("Wrote {} and {}", roc_path.display(), tsv_path.display());
        }
    }

    println!(
        "Wrote {} report pairs to {}",
        config.calls.len() * config.truths.len(),
        config.results_dir.display()
    );
    Ok(())
}
