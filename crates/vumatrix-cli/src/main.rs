use std::ffi::OsString;
use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use vumatrix_meter::{generate, report, report_json, MeterConfig};

/// Prints the row thresholds of a level-meter matrix.
///
/// Every argument other than `--format` is ignored, including the usual
/// help and version flags.
#[derive(Parser, Debug, Default)]
#[command(name = "vumatrix", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Output format for the threshold table [default: text].
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One `i=<row> l=<threshold>` line per row.
    Text,
    /// The table and its config as JSON.
    Json,
}

impl Cli {
    /// Parses the last `--format` found anywhere in `args`. Anything clap
    /// would reject, such as an unknown format name, falls back to defaults.
    fn from_any_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut kept: Vec<OsString> = args.next().into_iter().collect();
        let mut format = None;
        while let Some(arg) = args.next() {
            if arg == "--format" {
                format = args.next().map(|value| vec![arg, value]);
            } else if arg.to_str().is_some_and(|arg| arg.starts_with("--format=")) {
                format = Some(vec![arg]);
            }
        }
        kept.extend(format.into_iter().flatten());
        Self::try_parse_from(kept).unwrap_or_default()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
        .ok();

    let cli = Cli::from_any_args(std::env::args_os());
    let format = cli.format.unwrap_or(OutputFormat::Text);
    let config = MeterConfig::DEFAULT;
    let table = generate(config).context("invalid meter configuration")?;

    let stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => report(&table, stdout),
        OutputFormat::Json => report_json(&table, stdout),
    }
    .context("failed to write threshold report")?;

    tracing::debug!(rows = table.len(), format = ?format, "report written");
    Ok(())
}
