/// Data layer: report parsing and per-configuration aggregation.
///
/// Architecture:
/// ```text
///  *.roc.all.csv   *_precision-recall.tsv
///        │                 │
///        ▼                 ▼
///   ┌──────────────────────────┐
///   │  loader  (+ filter)       │  matching rows → ToolReport
///   └──────────────────────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ ReportAggregator  │  calls × truth → Vec<ConfigurationResult>
///   └──────────────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
