use crate::e_aggregate::AggregateReport;
use comfy_table::{Cell, ContentArrangement, Row, Table};
use nu_ansi_term::Color;
use std::collections::BTreeMap;

/// Separator printed before the raw analyzer output.
pub const RAW_OUTPUT_SEPARATOR: &str = "------------------------------------------";

fn paint(color: Color, text: String, uses_color: bool) -> String {
    if uses_color {
        color.paint(text).to_string()
    } else {
        text
    }
}

fn push_section(
    out: &mut String,
    count: usize,
    noun: &str,
    categories: &BTreeMap<String, usize>,
    color: Color,
    uses_color: bool,
) {
    out.push_str(&paint(color, format!("{} {}(s):", count, noun), uses_color));
    out.push('\n');
    for (label, n) in categories {
        out.push_str(&format!("{}: {}x\n", label, n));
    }
    out.push('\n');
}

/// Renders warning counts per category, then error counts per category.
///
/// # Example
/// ```
/// use lint_e::{aggregate, Classifier};
/// use lint_e::e_reports::render_summary;
///
/// let raw = "a.lua: [Warning] line 1, column 1 - line 1, column 4: Deprecated: foo()";
/// let summary = render_summary(&aggregate(raw, &Classifier::builtin()), false);
/// assert!(summary.starts_with("1 warning(s):\nDeprecation(s): 1x\n"));
/// assert!(summary.contains("0 error(s):"));
/// ```
pub fn render_summary(report: &AggregateReport, uses_color: bool) -> String {
    let mut out = String::new();
    push_section(
        &mut out,
        report.warning_count,
        "warning",
        &report.warnings_by_category,
        Color::Yellow,
        uses_color,
    );
    push_section(
        &mut out,
        report.error_count,
        "error",
        &report.errors_by_category,
        Color::Red,
        uses_color,
    );
    out
}

/// The untouched analyzer output, behind a separator and an entry count header.
pub fn render_full_output(report: &AggregateReport, raw: &str) -> String {
    format!(
        "\n\n{}\nFull Linter Output ({} entries):\n\n\n{}\n",
        RAW_OUTPUT_SEPARATOR, report.entry_count, raw
    )
}

/// The failure message handed to the pipeline, or `None` when the run passes.
///
/// Lists the totals and every error line verbatim. Warnings alone never
/// produce a message.
pub fn render_failure(report: &AggregateReport) -> Option<String> {
    if !report.verdict().is_failure() {
        return None;
    }
    let mut message = format!(
        " Found {} error(s) and {} warning(s):\n",
        report.error_count, report.warning_count
    );
    for line in &report.error_lines {
        message.push_str(line);
        message.push('\n');
    }
    Some(message)
}

/// Same counts as [`render_summary`], laid out as a table.
pub fn render_table(report: &AggregateReport) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(100);
    table.set_header(Row::from(vec![
        Cell::new("Severity"),
        Cell::new("Category"),
        Cell::new("Count"),
    ]));

    for (label, n) in &report.warnings_by_category {
        table.add_row(Row::from(vec![
            Cell::new("Warning"),
            Cell::new(label),
            Cell::new(n),
        ]));
    }
    for (label, n) in &report.errors_by_category {
        table.add_row(Row::from(vec![
            Cell::new("Error"),
            Cell::new(label),
            Cell::new(n),
        ]));
    }

    let mut totals = Table::new();
    totals.set_content_arrangement(ContentArrangement::Dynamic);
    totals.set_width(100);
    totals.add_row(Row::from(vec![
        Cell::new("warnings"),
        Cell::new(report.warning_count),
    ]));
    totals.add_row(Row::from(vec![
        Cell::new("errors"),
        Cell::new(report.error_count),
    ]));
    if report.ignored_count > 0 {
        totals.add_row(Row::from(vec![
            Cell::new("ignored"),
            Cell::new(report.ignored_count),
        ]));
    }
    totals.add_row(Row::from(vec![
        Cell::new("verdict"),
        Cell::new(report.verdict()),
    ]));

    format!("{}\n\n{}\n", table, totals)
}

#[cfg(feature = "uses_serde")]
#[derive(serde::Serialize)]
struct JsonReport<'a> {
    verdict: crate::e_types::Verdict,
    #[serde(flatten)]
    report: &'a AggregateReport,
}

/// The report and its verdict as pretty printed JSON.
#[cfg(feature = "uses_serde")]
pub fn render_json(report: &AggregateReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        verdict: report.verdict(),
        report,
    })
}
