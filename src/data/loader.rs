use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use serde::de::IgnoredAny;
use serde::Deserialize;

use super::filter::{remap_roc_precision, roc_row_variant, tsv_row_variant};
use super::model::{ReportError, Result, ToolReport};

// ---------------------------------------------------------------------------
// File naming
// ---------------------------------------------------------------------------

/// `{dir}/{calls}-calls_{truth}-truth.roc.all.csv`
pub fn roc_csv_path(dir: &Path, calls: &str, truth: &str) -> PathBuf {
    dir.join(format!("{calls}-calls_{truth}-truth.roc.all.csv"))
}

/// `{dir}/{calls}-calls_{truth}-truth_precision-recall.tsv`
pub fn precision_recall_tsv_path(dir: &Path, calls: &str, truth: &str) -> PathBuf {
    dir.join(format!("{calls}-calls_{truth}-truth_precision-recall.tsv"))
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_number(raw: &str, path: &Path, line: usize, column: &'static str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ReportError::InvalidNumber {
            path: path.to_path_buf(),
            line,
            column,
            raw: raw.to_string(),
        })
}

// ---------------------------------------------------------------------------
// vcfeval ROC CSV
// ---------------------------------------------------------------------------

const ROC_RECALL_FIELD: usize = 7;
const ROC_PRECISION_FIELD: usize = 8;
const ROC_F1_FIELD: usize = 10;

/// Load a vcfeval `*.roc.all.csv` report.
pub fn load_roc_csv(path: &Path) -> Result<ToolReport> {
    let file = open(path)?;
    parse_roc_csv(BufReader::new(file), path)
}

/// Parse a vcfeval ROC report from any line source.
///
/// The stream has no header. Only lines starting with the exact SNP/INDEL
/// PASS/QUAL prefixes contribute a point; every other line is skipped.
/// `path` is used for error messages only.
pub fn parse_roc_csv<R: BufRead>(reader: R, path: &Path) -> Result<ToolReport> {
    let mut report = ToolReport::default();
    let mut skipped = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let line = line.trim_end_matches('\r');

        let Some(variant) = roc_row_variant(line) else {
            skipped += 1;
            continue;
        };

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() <= ROC_F1_FIELD {
            return Err(ReportError::MalformedRow {
                path: path.to_path_buf(),
                line: line_no,
                reason: format!(
                    "expected at least {} fields, found {}",
                    ROC_F1_FIELD + 1,
                    fields.len()
                ),
            });
        }

        let recall = parse_number(fields[ROC_RECALL_FIELD], path, line_no, "recall")?;
        let precision = parse_number(fields[ROC_PRECISION_FIELD], path, line_no, "precision")?;

        let series = report.series_mut(variant);
        series.push(recall, remap_roc_precision(variant, precision));
        series.last_f1 = Some(fields[ROC_F1_FIELD].to_string());
    }

    log::debug!(
        "{}: {} SNP / {} INDEL points, {skipped} lines skipped",
        path.display(),
        report.snp.len(),
        report.indel.len()
    );
    Ok(report)
}

// ---------------------------------------------------------------------------
// vcfdist precision-recall TSV
// ---------------------------------------------------------------------------

const TSV_FIELD_COUNT: usize = 13;

/// One data row of a vcfdist `precision-recall.tsv`, by position.
#[derive(Debug, Deserialize)]
struct PrecisionRecallRow<'a> {
    kind: &'a str,
    qual: &'a str,
    precision: &'a str,
    recall: &'a str,
    f1: &'a str,
    _truth_total: IgnoredAny,
    _truth_tp: IgnoredAny,
    _truth_pp: IgnoredAny,
    _truth_fn: IgnoredAny,
    _calls_total: IgnoredAny,
    _calls_tp: IgnoredAny,
    _calls_pp: IgnoredAny,
    _calls_fp: IgnoredAny,
}

/// Load a vcfdist `*_precision-recall.tsv` report.
pub fn load_precision_recall_tsv(path: &Path) -> Result<ToolReport> {
    let file = open(path)?;
    parse_precision_recall_tsv(file, path)
}

/// Parse a vcfdist precision-recall report.
///
/// The first line is a header and is skipped. Every other line must have
/// exactly 13 tab-separated fields, so a blank line is malformed too;
/// `SNP` and `INDEL` rows contribute a point, other types are skipped
/// without their numbers being parsed.
pub fn parse_precision_recall_tsv<R: Read>(mut reader: R, path: &Path) -> Result<ToolReport> {
    let csv_err = |source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    if text.is_empty() {
        return Err(ReportError::MalformedRow {
            path: path.to_path_buf(),
            line: 1,
            reason: "missing header line".to_string(),
        });
    }
    let body = text.split_once('\n').map_or("", |(_, rest)| rest);

    // csv skips empty lines, so reject them before it sees the body.
    if let Some(idx) = body
        .lines()
        .position(|line| line.trim_end_matches('\r').is_empty())
    {
        return Err(ReportError::MalformedRow {
            path: path.to_path_buf(),
            line: idx + 2,
            reason: format!("expected {TSV_FIELD_COUNT} fields, found an empty line"),
        });
    }

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(body.as_bytes());

    let mut report = ToolReport::default();
    let mut skipped = 0usize;

    for result in rdr.records() {
        let record = result.map_err(csv_err)?;
        // +1 for the header line split off above.
        let line_no = record.position().map_or(0, |p| p.line() as usize + 1);

        if record.len() != TSV_FIELD_COUNT {
            return Err(ReportError::MalformedRow {
                path: path.to_path_buf(),
                line: line_no,
                reason: format!(
                    "expected {TSV_FIELD_COUNT} fields, found {}",
                    record.len()
                ),
            });
        }

        let row: PrecisionRecallRow<'_> = record.deserialize(None).map_err(csv_err)?;
        let Some(variant) = tsv_row_variant(row.kind) else {
            skipped += 1;
            continue;
        };

        let recall = parse_number(row.recall, path, line_no, "recall")?;
        let precision = parse_number(row.precision, path, line_no, "precision")?;
        log::trace!("{variant} qual={} -> ({recall}, {precision})", row.qual);

        let series = report.series_mut(variant);
        series.push(recall, precision);
        series.last_f1 = Some(row.f1.to_string());
    }

    log::debug!(
        "{}: {} SNP / {} INDEL points, {skipped} rows skipped",
        path.display(),
        report.snp.len(),
        report.indel.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn roc(content: &str) -> Result<ToolReport> {
        parse_roc_csv(Cursor::new(content), Path::new("test.roc.all.csv"))
    }

    fn tsv(content: &str) -> Result<ToolReport> {
        parse_precision_recall_tsv(Cursor::new(content), Path::new("test.tsv"))
    }

    const TSV_HEADER: &str = "TYPE\tQUAL\tPREC\tRECALL\tF1_SCORE\tTRUTH_TOT\tTRUTH_TP\tTRUTH_PP\tTRUTH_FN\tQUERY_TOT\tQUERY_TP\tQUERY_PP\tQUERY_FP\n";

    #[test]
    fn test_roc_indel_row() {
        let report = roc("INDEL,*,*,PASS,*,QUAL,10,0.85,0.90,x,0.87\n").unwrap();
        assert_eq!(report.indel.recalls(), vec![0.85]);
        assert_eq!(report.indel.precisions(), vec![0.90]);
        assert_eq!(report.indel.last_f1.as_deref(), Some("0.87"));
        assert!(report.snp.is_empty());
    }

    #[test]
    fn test_roc_snp_zero_precision_becomes_one() {
        let report = roc(
            "SNP,*,*,PASS,*,QUAL,50,0.92,0,x,0.5\n\
             SNP,*,*,PASS,*,QUAL,40,0.95,0.998,x,0.97\n",
        )
        .unwrap();
        assert_eq!(report.snp.recalls(), vec![0.92, 0.95]);
        assert_eq!(report.snp.precisions(), vec![1.0, 0.998]);
    }

    #[test]
    fn test_roc_indel_zero_precision_kept() {
        let report = roc("INDEL,*,*,PASS,*,QUAL,50,0.3,0,x,0\n").unwrap();
        assert_eq!(report.indel.precisions(), vec![0.0]);
    }

    #[test]
    fn test_roc_skips_unmatched_lines() {
        let content = "#comment line\n\
                       VARIANT,SAMPLE,FILTER\n\
                       SNP,*,*,NONE,*,QUAL,10,0.1,0.2,x,0.3\n\
                       SNP,HG002,*,PASS,*,QUAL,10,0.1,0.2,x,0.3\n\
                       SNP,*,*,PASS,*,QUAL,10,0.97,0.999,x,0.98\n\
                       \n\
                       INDEL,*,*,PASS,*,GQ,10,0.1,0.2,x,0.3\n";
        let report = roc(content).unwrap();
        assert_eq!(report.snp.len(), 1);
        assert_eq!(report.snp.recalls(), vec![0.97]);
        assert!(report.indel.is_empty());
    }

    #[test]
    fn test_roc_crlf_line_endings() {
        let report = roc("SNP,*,*,PASS,*,QUAL,1,0.5,0.6,x,0.55\r\n").unwrap();
        assert_eq!(report.snp.precisions(), vec![0.6]);
        assert_eq!(report.snp.last_f1.as_deref(), Some("0.55"));
    }

    #[test]
    fn test_roc_short_row_is_error() {
        let err = roc("SNP,*,*,PASS,*,QUAL,1,0.5,0.6\n").unwrap_err();
        match err {
            ReportError::MalformedRow { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_roc_non_numeric_is_error() {
        let err = roc("header\nINDEL,*,*,PASS,*,QUAL,1,abc,0.6,x,0.5\n").unwrap_err();
        match err {
            ReportError::InvalidNumber { line, column, raw, .. } => {
                assert_eq!(line, 2);
                assert_eq!(column, "recall");
                assert_eq!(raw, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_tsv_snp_row() {
        let content = format!(
            "{TSV_HEADER}SNP\t30\t0.95\t0.80\t0.87\t100\t80\t80\t20\t84\t80\t80\t4\n"
        );
        let report = tsv(&content).unwrap();
        assert_eq!(report.snp.recalls(), vec![0.80]);
        assert_eq!(report.snp.precisions(), vec![0.95]);
        assert!(report.indel.is_empty());
    }

    #[test]
    fn test_tsv_zero_precision_not_remapped() {
        let content = format!(
            "{TSV_HEADER}SNP\t60\t0\t0.10\t0\t100\t10\t10\t90\t0\t0\t0\t0\n\
             INDEL\t60\t0\t0.10\t0\t100\t10\t10\t90\t0\t0\t0\t0\n"
        );
        let report = tsv(&content).unwrap();
        assert_eq!(report.snp.precisions(), vec![0.0]);
        assert_eq!(report.indel.precisions(), vec![0.0]);
    }

    #[test]
    fn test_tsv_skips_other_types_and_header() {
        let content = format!(
            "{TSV_HEADER}ALL\t0\tn/a\tn/a\t0\t1\t1\t1\t0\t1\t1\t1\t0\n\
             INDEL\t0\t0.91\t0.88\t0.89\t1\t1\t1\t0\t1\t1\t1\t0\n\
             INDEL\t5\t0.93\t0.86\t0.89\t1\t1\t1\t0\t1\t1\t1\t0\n"
        );
        let report = tsv(&content).unwrap();
        assert_eq!(report.indel.recalls(), vec![0.88, 0.86]);
        assert_eq!(report.indel.precisions(), vec![0.91, 0.93]);
        assert!(report.snp.is_empty());
    }

    #[test]
    fn test_tsv_wrong_field_count_is_error() {
        let content = format!("{TSV_HEADER}SNP\t30\t0.95\t0.80\n");
        let err = tsv(&content).unwrap_err();
        match err {
            ReportError::MalformedRow { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_tsv_non_numeric_is_error() {
        let content = format!(
            "{TSV_HEADER}SNP\t30\tprec\t0.80\t0.87\t100\t80\t80\t20\t84\t80\t80\t4\n"
        );
        assert!(matches!(
            tsv(&content),
            Err(ReportError::InvalidNumber { column: "precision", .. })
        ));
    }

    #[test]
    fn test_tsv_blank_line_is_error() {
        let content = format!(
            "{TSV_HEADER}SNP\t30\t0.95\t0.80\t0.87\t100\t80\t80\t20\t84\t80\t80\t4\n\
             \n\
             INDEL\t30\t0.90\t0.70\t0.79\t100\t70\t70\t30\t78\t70\t70\t8\n"
        );
        match tsv(&content).unwrap_err() {
            ReportError::MalformedRow { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_tsv_trailing_blank_line_is_error() {
        let content = format!(
            "{TSV_HEADER}SNP\t30\t0.95\t0.80\t0.87\t100\t80\t80\t20\t84\t80\t80\t4\n\n"
        );
        assert!(matches!(tsv(&content), Err(ReportError::MalformedRow { line: 3, .. })));
    }

    #[test]
    fn test_tsv_header_only_is_empty_report() {
        let report = tsv(TSV_HEADER).unwrap();
        assert!(report.snp.is_empty());
        assert!(report.indel.is_empty());
    }

    #[test]
    fn test_tsv_empty_file_is_error() {
        assert!(matches!(tsv(""), Err(ReportError::MalformedRow { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = Path::new("definitely/not/here.roc.all.csv");
        assert!(matches!(load_roc_csv(path), Err(ReportError::Io { .. })));
        assert!(matches!(
            load_precision_recall_tsv(path),
            Err(ReportError::Io { .. })
        ));
    }

    #[test]
    fn test_paths_follow_naming_convention() {
        let dir = Path::new("1_results");
        assert_eq!(
            roc_csv_path(dir, "A", "C"),
            PathBuf::from("1_results/A-calls_C-truth.roc.all.csv")
        );
        assert_eq!(
            precision_recall_tsv_path(dir, "D", "C"),
            PathBuf::from("1_results/D-calls_C-truth_precision-recall.tsv")
        );
    }
}
