// CLI module
// Command-line interface, argument parsing and logging setup

mod args;

pub use args::{CliArgs, InputFormat};

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const PROMPT: &str = "Enter the path of the CSV or XML file you want to process: ";

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., invalid arguments or --help flag), clap displays
/// an error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the stderr log subscriber
///
/// Stdout is reserved for the report.
pub fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::new(format!("statement_validator={}", level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Ask for the input path on `output` and read one line from `input`
///
/// Surrounding whitespace and the line terminator are stripped.
pub fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<PathBuf> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}
