#![doc = include_str!("../README.md")]

// Re-export std common modules
pub mod prelude {
    pub use std::env;
    pub use std::fs;
    pub use std::io;
    pub use std::path::{Path, PathBuf};
    pub use std::process::exit;
    pub use log::{debug, error, info, log_enabled, trace, Level};
}

pub mod e_types;
pub use e_types::*;
pub mod e_parser;
pub use e_parser::{parse_line, parse_output};
pub mod e_classify;
pub use e_classify::{classify, CategoryRule, Classifier};
pub mod e_aggregate;
pub use e_aggregate::{aggregate, AggregateReport};
pub mod e_cli;
pub use e_cli::Cli;
#[cfg(feature = "uses_serde")]
pub mod e_config;
pub mod e_reports;
