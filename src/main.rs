//! # lint-e
//!
//! `lint-e` turns the captured output of a glualint-style analyzer into a
//! per-category summary and a pass/fail exit code for CI.
//!
//! ## Quick Start
//! ```sh
//! glualint lint . > lint.txt
//! lint-e lint.txt
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use lint_e::e_cli::OutputFormat;
use lint_e::prelude::*;
use lint_e::{aggregate, e_reports, Classifier, Cli, Verdict};
use std::io::{IsTerminal, Read, Write};

fn read_input(cli: &Cli) -> Result<String> {
    let raw = match cli.input_path() {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read analyzer output {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read analyzer output from stdin")?;
            buf
        }
    };
    Ok(raw.trim().to_string())
}

#[cfg(feature = "uses_serde")]
fn load_classifier(cli: &Cli) -> Result<Classifier> {
    match &cli.config {
        Some(path) => lint_e::e_config::LintConfig::load(path)?.classifier(),
        None => Ok(Classifier::builtin()),
    }
}

#[cfg(not(feature = "uses_serde"))]
fn load_classifier(_cli: &Cli) -> Result<Classifier> {
    Ok(Classifier::builtin())
}

/// Runs the pipeline and returns its verdict. Errors are front-end failures.
fn run(cli: &Cli) -> Result<Verdict> {
    let classifier = load_classifier(cli)?;
    let raw = read_input(cli)?;
    let report = aggregate(&raw, &classifier);
    info!(
        "{} error(s), {} warning(s), verdict {}",
        report.error_count,
        report.warning_count,
        report.verdict()
    );

    let uses_color = !cli.no_color && io::stdout().is_terminal();
    let mut stdout = io::stdout().lock();
    match cli.format {
        OutputFormat::Text => {
            writeln!(stdout, "Done! Result:")?;
            writeln!(stdout, "-------------\n")?;
            write!(stdout, "{}", e_reports::render_summary(&report, uses_color))?;
            if !cli.no_raw {
                write!(stdout, "{}", e_reports::render_full_output(&report, &raw))?;
            }
        }
        OutputFormat::Table => {
            write!(stdout, "{}", e_reports::render_table(&report))?;
        }
        #[cfg(feature = "uses_serde")]
        OutputFormat::Json => {
            let json = e_reports::render_json(&report).context("failed to serialize report")?;
            writeln!(stdout, "{}", json)?;
        }
    }
    stdout.flush()?;
    drop(stdout);

    if let Some(message) = e_reports::render_failure(&report) {
        eprint!("{}", message);
    }
    Ok(report.verdict())
}

/// Exit codes: 0 pass, 1 lint failure, 2 front-end error.
pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::parse();
    if cli.version {
        lint_e::e_cli::print_version_and_features();
        exit(0);
    }

    match run(&cli) {
        Ok(Verdict::Pass) => {}
        Ok(Verdict::Fail) => exit(1),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:?}", e);
            exit(2);
        }
    }
}
