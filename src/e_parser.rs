use crate::e_types::{Diagnostic, Severity};
use once_cell::sync::Lazy;
use regex::Regex;

/// `<path>: [<Severity>] line <N>, column <N> - line <N>, column <N>: <message>`
///
/// Searched anywhere in the line. The message is everything after the
/// whitespace that follows the range, up to the end of the line.
pub const DIAGNOSTIC_PATTERN: &str = r"(?P<file>[a-zA-Z_\-/.]+):\s\[(?P<severity>[a-zA-Z]+)\]\sline\s(?P<start_line>[0-9]+),\scolumn\s(?P<start_col>[0-9]+)\s-\sline\s(?P<end_line>[0-9]+),\scolumn\s(?P<end_col>[0-9]+):\s+(?P<msg>.*)";

static DIAGNOSTIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DIAGNOSTIC_PATTERN).expect("diagnostic pattern is valid"));

/// Parses a single line of analyzer output into a [`Diagnostic`].
///
/// Lines that are not diagnostics (banners, version strings, blank lines)
/// return `None`. A position number too large for a `u32` is clamped to
/// `u32::MAX`; the line still counts.
///
/// # Example
/// ```
/// use lint_e::e_parser::parse_line;
///
/// let diag = parse_line("foo.lua: [Error] line 3, column 1 - line 3, column 10: Unused variable: x").unwrap();
/// assert_eq!(diag.start_line, 3);
/// assert_eq!(diag.message, "Unused variable: x");
/// assert!(parse_line("Running analyzer v1.2.3").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<Diagnostic> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let Some(caps) = DIAGNOSTIC_REGEX.captures(line) else {
        log::trace!("skipping non-diagnostic line: {:?}", line);
        return None;
    };

    // The pattern only admits digits, so a parse failure means overflow.
    let number = |name: &str| -> u32 {
        caps[name].parse::<u32>().unwrap_or_else(|e| {
            log::trace!("position `{}` out of range in {:?}: {}", name, line, e);
            u32::MAX
        })
    };

    Some(Diagnostic {
        file_path: caps["file"].to_string(),
        severity: Severity::from_token(&caps["severity"]),
        start_line: number("start_line"),
        start_column: number("start_col"),
        end_line: number("end_line"),
        end_column: number("end_col"),
        message: caps["msg"].to_string(),
        raw_line: line.to_string(),
    })
}

/// Splits the raw output on line feeds and parses every line on its own.
/// Diagnostics are never merged across lines.
///
/// # Example
/// ```
/// use lint_e::e_parser::parse_output;
///
/// let raw = "glualint 1.24\na.lua: [Warning] line 1, column 1 - line 1, column 2: Empty if statement\n";
/// assert_eq!(parse_output(raw).count(), 1);
/// ```
pub fn parse_output(raw: &str) -> impl Iterator<Item = Diagnostic> + '_ {
    raw.split('\n').filter_map(parse_line)
}

/// Number of `\n` separated entries in the raw output, blank ones included.
pub fn count_entries(raw: &str) -> usize {
    raw.split('\n').count()
}
