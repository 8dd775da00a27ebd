use crate::e_types::CategoryLabel;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// A pattern-label pair.
#[derive(Clone)]
pub struct CategoryRule {
    pub pattern: Regex,
    pub label: String,
}

impl fmt::Debug for CategoryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryRule")
            .field("pattern", &self.pattern.as_str())
            .field("label", &self.label)
            .finish()
    }
}

impl CategoryRule {
    pub fn new(pattern: &str, label: &str) -> Result<Self, regex::Error> {
        Ok(CategoryRule {
            pattern: Regex::new(pattern)?,
            label: label.to_string(),
        })
    }

    pub fn matches(&self, message: &str) -> bool {
        self.pattern.is_match(message)
    }
}

/// Built-in rules, evaluated top to bottom. Order matters: the first match wins.
pub const BUILTIN_RULES: &[(&str, &str)] = &[
    (r"Unused variable:\s(.*)", "Unused variable(s)"),
    (r"Deprecated: (.*)", "Deprecation(s)"),
    (r"Empty if statement", "Empty If-Statement(s)"),
    (r"Double if statement\..*combine", "Double If-Statement(s)"),
    (
        r"Variable '(.*)' shadows existing binding, defined at line ([0-9]+), column ([0-9]+)",
        "Shadow existing binding(s)",
    ),
    (
        r"Inconsistent use of '(!|not)' and '(!|not)'",
        "Inconsistent usage(s) - ('!' and 'not')",
    ),
    (
        r"Inconsistent use of '(&&|and)' and '(&&|and)'",
        "Inconsistent usage(s) - ('&&' and 'and')",
    ),
    (
        r"Inconsistent use of '(\|\||or)' and '(\|\||or)'",
        "Inconsistent usage(s) - ('||' and 'or')",
    ),
    (
        r"Inconsistent use of '(//|--)' and '(//|--)'",
        "Inconsistent usage(s) - ('//' and '--')",
    ),
    (
        r"Style: Please put some whitespace (after|before)(.*)",
        "Missing whitespace(s)",
    ),
];

static BUILTIN: Lazy<Vec<CategoryRule>> = Lazy::new(|| {
    BUILTIN_RULES
        .iter()
        .map(|(pattern, label)| {
            CategoryRule::new(pattern, label).expect("built-in category pattern is valid")
        })
        .collect()
});

/// Maps diagnostic messages to category labels with an ordered rule list.
///
/// Built-in rules always come first; user rules are appended after them.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<CategoryRule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Classifier {
    /// A classifier with only the built-in rule table.
    pub fn builtin() -> Self {
        Classifier {
            rules: BUILTIN.clone(),
        }
    }

    /// The built-in table followed by `extra`, in the given order.
    pub fn with_rules(extra: Vec<CategoryRule>) -> Self {
        let mut rules = BUILTIN.clone();
        rules.extend(extra);
        Classifier { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Returns the label of the first matching rule, or the message itself.
    ///
    /// # Example
    /// ```
    /// use lint_e::Classifier;
    ///
    /// let classifier = Classifier::builtin();
    /// assert_eq!(classifier.classify("Unused variable: x"), "Unused variable(s)");
    /// assert_eq!(classifier.classify("Something new"), "Something new");
    /// ```
    pub fn classify(&self, message: &str) -> CategoryLabel {
        classify_with(&self.rules, message)
    }
}

fn classify_with(rules: &[CategoryRule], message: &str) -> CategoryLabel {
    match rules.iter().find(|rule| rule.matches(message)) {
        Some(rule) => {
            log::trace!("classified {:?} as {:?}", message, rule.label);
            rule.label.clone()
        }
        None => {
            log::trace!("no rule for {:?}, keeping it as its own category", message);
            message.to_string()
        }
    }
}

/// Classifies with the built-in rule table only.
pub fn classify(message: &str) -> CategoryLabel {
    classify_with(&BUILTIN, message)
}
