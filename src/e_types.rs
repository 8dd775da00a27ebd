use std::fmt;

/// Severity token reported by the analyzer between square brackets.
///
/// Only `Error` and `Warning` take part in counting. Any other alphabetic
/// token is kept verbatim in `Other` so the record is not lost.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Other(String),
}

impl Severity {
    /// Maps the raw token to a severity. Matching is case sensitive,
    /// `error` is an `Other`.
    ///
    /// # Example
    /// ```
    /// use lint_e::Severity;
    ///
    /// assert_eq!(Severity::from_token("Error"), Severity::Error);
    /// assert_eq!(Severity::from_token("Info"), Severity::Other("Info".to_string()));
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token {
            "Error" => Severity::Error,
            "Warning" => Severity::Warning,
            other => Severity::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Other(token) => token,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents one finding parsed from a line of analyzer output.
///
/// # Fields
/// - `file_path`: the analyzed source file as printed by the analyzer.
/// - `severity`: the bracketed severity token.
/// - `start_line`, `start_column`, `end_line`, `end_column`: the reported range.
/// - `message`: free text after the range, up to the end of the line.
/// - `raw_line`: the input line the record came from, without a trailing `\r`.
///
/// # Example
/// ```
/// use lint_e::{parse_line, Severity};
///
/// let diag = parse_line("a.lua: [Warning] line 1, column 2 - line 1, column 5: Empty if statement").unwrap();
/// assert_eq!(diag.file_path, "a.lua");
/// assert_eq!(diag.severity, Severity::Warning);
/// assert_eq!(diag.end_column, 5);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Diagnostic {
    pub file_path: String,
    pub severity: Severity,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub message: String,
    pub raw_line: String,
}

/// A short grouping name such as `"Unused variable(s)"`.
pub type CategoryLabel = String;

/// The pass/fail outcome surfaced to the calling pipeline.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "uses_serde", derive(serde::Serialize))]
#[cfg_attr(feature = "uses_serde", serde(rename_all = "lowercase"))]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// Errors fail the run, warnings never do.
    pub fn from_error_count(error_count: usize) -> Self {
        if error_count > 0 {
            Verdict::Fail
        } else {
            Verdict::Pass
        }
    }

    pub fn is_failure(self) -> bool {
        self == Verdict::Fail
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => f.write_str("pass"),
            Verdict::Fail => f.write_str("fail"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_tokens() {
        assert_eq!(Severity::from_token("Warning"), Severity::Warning);
        assert_eq!(Severity::from_token("error"), Severity::Other("error".into()));
        assert_eq!(Severity::Other("Hint".into()).to_string(), "Hint");
    }

    #[test]
    fn test_verdict_only_depends_on_errors() {
        assert_eq!(Verdict::from_error_count(0), Verdict::Pass);
        assert_eq!(Verdict::from_error_count(3), Verdict::Fail);
        assert!(Verdict::Fail.is_failure());
        assert_eq!(Verdict::Pass.to_string(), "pass");
    }
}
