use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How the summary is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Category counts followed by the full analyzer output.
    Text,
    /// Category counts as a table.
    Table,
    /// Machine readable report.
    #[cfg(feature = "uses_serde")]
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "lint-e is for Errors.", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version and feature flags in JSON format.
    #[arg(
        long,
        short = 'v',
        help = "Print version and feature flags in JSON format."
    )]
    pub version: bool,

    #[arg(
        help = "Captured analyzer output to classify. Reads stdin when omitted or '-'."
    )]
    pub input: Option<PathBuf>,

    #[cfg(feature = "uses_serde")]
    #[arg(
        long,
        short = 'c',
        value_name = "FILE",
        help = "TOML file with extra category rules."
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        short = 'f',
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Summary format (default: text)."
    )]
    pub format: OutputFormat,

    #[arg(long, default_value_t = false, help = "Disable colored headers.")]
    pub no_color: bool,

    #[arg(
        long,
        default_value_t = false,
        help = "Do not echo the full analyzer output after the summary."
    )]
    pub no_raw: bool,
}

impl Cli {
    /// `None` means stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input
            .as_ref()
            .filter(|p| p.as_os_str() != std::ffi::OsStr::new("-"))
    }
}

/// Print the version and the JSON array of feature flags.
pub fn print_version_and_features() {
    let version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");
    let json_features = format!(
        "[{}]",
        get_feature_flags()
            .iter()
            .map(|f| format!("\"{}\"", f))
            .collect::<Vec<String>>()
            .join(", ")
    );
    println!("lint-e {}", version);
    println!("{}", json_features);
}

/// Returns a vector of feature flag strings.
/// Enabled features are listed as-is while disabled ones are prefixed with "!".
pub fn get_feature_flags() -> Vec<&'static str> {
    let mut flags = Vec::new();
    if cfg!(feature = "uses_serde") {
        flags.push("uses_serde");
    } else {
        flags.push("!uses_serde");
    }
    flags
}
