use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use csvstat::config::ServiceConfig;
use csvstat::ingestion::{LoadOptions, TracingObserver};
use csvstat::report::{Report, TopRequest};
use csvstat::summarizer::Summarizer;
use csvstat::{ErrorKind, SummaryError};

/// Row counts, numeric column summaries and value frequencies for CSV files.
#[derive(Parser)]
#[command(name = "csvstat", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Print shell completions for the given shell.
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the report (row count, numeric summary, top values) as JSON.
    Summarize {
        /// CSV file with a header row.
        file: PathBuf,

        /// Column whose most frequent values are listed.
        #[arg(long, default_value = "value")]
        top_column: String,

        /// Number of top values to list.
        #[arg(long, default_value_t = 5)]
        limit: usize,

        /// Leave `top_values` out of the report.
        #[arg(long)]
        no_top: bool,

        /// Field delimiter.
        #[arg(long, default_value_t = ',')]
        delimiter: char,

        /// Single-line JSON instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },

    /// Print the rows whose column equals a value, as a JSON array of objects.
    Filter {
        /// CSV file with a header row.
        file: PathBuf,

        #[arg(long)]
        column: String,

        #[arg(long)]
        value: String,

        /// Field delimiter.
        #[arg(long, default_value_t = ',')]
        delimiter: char,

        /// Single-line JSON instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },

    /// Run the HTTP service.
    Serve {
        /// TOML config file (default: ./csvstat.toml if present).
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },

    /// Write the ten-row sample dataset.
    Sample {
        #[arg(long, default_value = "data/sample.csv")]
        out: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "csvstat", &mut io::stdout());
        return;
    }

    let Some(command) = cli.command else {
        eprintln!("usage: csvstat <summarize|filter|serve|sample> ...  (see --help)");
        process::exit(1);
    };

    let code = match command {
        Command::Summarize {
            file,
            top_column,
            limit,
            no_top,
            delimiter,
            compact,
        } => {
            csvstat::telemetry::init_tracing("warn");
            let top = (!no_top).then(|| TopRequest::new(top_column, limit));
            run_core(compact, || {
                let s = Summarizer::from_path(&file, &load_options(delimiter)?)?;
                let report = Report::build(&s, top.as_ref())?;
                Ok(serde_json::to_value(report)?)
            })
        }
        Command::Filter {
            file,
            column,
            value,
            delimiter,
            compact,
        } => {
            csvstat::telemetry::init_tracing("warn");
            run_core(compact, || {
                let s = Summarizer::from_path(&file, &load_options(delimiter)?)?;
                let matches = s.filter_by_value(&column, &value)?;
                let records: Vec<_> = matches.records().collect();
                Ok(serde_json::to_value(records)?)
            })
        }
        Command::Serve { config, host, port } => match serve(config.as_deref(), host, port) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("serve error: {e:#}");
                1
            }
        },
        Command::Sample { out } => match csvstat::sample::write_sample(&out) {
            Ok(()) => {
                println!("wrote sample data to {}", out.display());
                0
            }
            Err(e) => {
                eprintln!("error: {e}");
                exit_code(&e)
            }
        },
    };
    process::exit(code);
}

/// Errors from a one-shot command: either the core failed or the output could not be
/// produced.
enum CliError {
    Core(SummaryError),
    Usage(String),
}

impl From<SummaryError> for CliError {
    fn from(e: SummaryError) -> Self {
        Self::Core(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Usage(format!("cannot encode output: {e}"))
    }
}

fn run_core<F>(compact: bool, f: F) -> i32
where
    F: FnOnce() -> Result<serde_json::Value, CliError>,
{
    match f() {
        Ok(value) => {
            let rendered = if compact {
                serde_json::to_string(&value)
            } else {
                serde_json::to_string_pretty(&value)
            };
            match rendered {
                Ok(text) => emit(&mut io::stdout().lock(), &text),
                Err(e) => {
                    eprintln!("error: cannot encode output: {e}");
                    1
                }
            }
        }
        Err(CliError::Core(e)) => {
            eprintln!("error: {e}");
            exit_code(&e)
        }
        Err(CliError::Usage(msg)) => {
            eprintln!("error: {msg}");
            1
        }
    }
}

/// Write one rendered document; a failed write is exit code 1.
fn emit(out: &mut impl Write, text: &str) -> i32 {
    match writeln!(out, "{text}").and_then(|()| out.flush()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: cannot write output: {e}");
            1
        }
    }
}

fn load_options(delimiter: char) -> Result<LoadOptions, CliError> {
    let delimiter = u8::try_from(delimiter)
        .map_err(|_| CliError::Usage(format!("delimiter must be a single-byte character, got '{delimiter}'")))?;
    Ok(LoadOptions {
        delimiter,
        observer: Some(std::sync::Arc::new(TracingObserver)),
        ..LoadOptions::default()
    })
}

fn exit_code(e: &SummaryError) -> i32 {
    match e.kind() {
        ErrorKind::Io => 2,
        ErrorKind::Parse | ErrorKind::ValueFormat => 3,
        ErrorKind::MissingColumn => 4,
    }
}

fn serve(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = ServiceConfig::load(config_path).context("failed to load configuration")?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    csvstat::telemetry::init_tracing(&config.log_filter);

    actix_web::rt::System::new()
        .block_on(csvstat::server::run(config))
        .context("http service stopped with an error")
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::emit;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_output_write_exits_nonzero() {
        assert_eq!(emit(&mut ClosedPipe, "{}"), 1);

        let mut buf = Vec::new();
        assert_eq!(emit(&mut buf, "{}"), 0);
        assert_eq!(buf, b"{}\n");
    }
}
