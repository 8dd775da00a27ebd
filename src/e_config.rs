//! Optional TOML configuration.
//!
//! ```toml
//! [[rules]]
//! pattern = "Trailing whitespace"
//! label = "Trailing whitespace(s)"
//! ```
//!
//! User rules are appended after the built-in rule table.

use crate::e_classify::{CategoryRule, Classifier};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    pub pattern: String,
    pub label: String,
}

impl LintConfig {
    /// Reads and parses a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: LintConfig = toml::from_str(contents)?;
        log::debug!("loaded {} user rule(s)", config.rules.len());
        Ok(config)
    }

    /// Compiles the user rules and appends them to the built-in table.
    pub fn classifier(&self) -> Result<Classifier> {
        let extra = self
            .rules
            .iter()
            .map(|rule| {
                CategoryRule::new(&rule.pattern, &rule.label).with_context(|| {
                    format!("invalid pattern {:?} for rule {:?}", rule.pattern, rule.label)
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Classifier::with_rules(extra))
    }
}
