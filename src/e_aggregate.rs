use crate::e_classify::Classifier;
use crate::e_parser::{count_entries, parse_output};
use crate::e_types::{CategoryLabel, Diagnostic, Severity, Verdict};
use std::collections::BTreeMap;

/// Counts collected over one run of analyzer output.
///
/// `error_count` always equals the sum of `errors_by_category`, and
/// `warning_count` the sum of `warnings_by_category`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "uses_serde", derive(serde::Serialize))]
pub struct AggregateReport {
    pub error_count: usize,
    pub warning_count: usize,
    pub errors_by_category: BTreeMap<CategoryLabel, usize>,
    pub warnings_by_category: BTreeMap<CategoryLabel, usize>,
    /// Every error line, verbatim and in input order.
    pub error_lines: Vec<String>,
    /// Diagnostics whose severity is neither `Error` nor `Warning`.
    pub ignored_count: usize,
    /// Number of line-feed separated entries in the raw output.
    pub entry_count: usize,
}

impl AggregateReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one diagnostic into the counts.
    pub fn record(&mut self, diag: &Diagnostic, classifier: &Classifier) {
        match &diag.severity {
            Severity::Error => {
                let label = classifier.classify(&diag.message);
                self.error_count += 1;
                *self.errors_by_category.entry(label).or_insert(0) += 1;
                self.error_lines.push(diag.raw_line.clone());
            }
            Severity::Warning => {
                let label = classifier.classify(&diag.message);
                self.warning_count += 1;
                *self.warnings_by_category.entry(label).or_insert(0) += 1;
            }
            Severity::Other(token) => {
                log::debug!(
                    "ignoring diagnostic with severity {:?} at {}:{}:{}",
                    token,
                    diag.file_path,
                    diag.start_line,
                    diag.start_column
                );
                self.ignored_count += 1;
            }
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_error_count(self.error_count)
    }

    /// Total of the counted diagnostics (errors plus warnings).
    pub fn total(&self) -> usize {
        self.error_count + self.warning_count
    }
}

/// Parses, classifies and counts the whole raw output in one pass.
///
/// # Example
/// ```
/// use lint_e::{aggregate, Classifier, Verdict};
///
/// let raw = "foo.lua: [Error] line 3, column 1 - line 3, column 10: Unused variable: x";
/// let report = aggregate(raw, &Classifier::builtin());
/// assert_eq!(report.error_count, 1);
/// assert_eq!(report.errors_by_category["Unused variable(s)"], 1);
/// assert_eq!(report.verdict(), Verdict::Fail);
/// ```
pub fn aggregate(raw: &str, classifier: &Classifier) -> AggregateReport {
    let mut report = AggregateReport::new();
    report.entry_count = count_entries(raw);
    for diag in parse_output(raw) {
        report.record(&diag, classifier);
    }
    log::debug!(
        "aggregated {} error(s), {} warning(s), {} ignored over {} entries",
        report.error_count,
        report.warning_count,
        report.ignored_count,
        report.entry_count
    );
    report
}
