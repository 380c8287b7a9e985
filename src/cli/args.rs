use clap::{ArgAction, Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Validate a customer statement and report failed records
#[derive(Parser, Debug)]
#[command(name = "statement-validator")]
#[command(about = "Validate customer statement records from CSV or XML", long_about = None)]
pub struct CliArgs {
    /// Input statement file (.csv or .xml); prompted for when omitted
    #[arg(value_name = "INPUT", help = "Path to the CSV or XML statement file")]
    pub input_file: Option<PathBuf>,

    /// Input format, overriding the file extension
    #[arg(
        long = "format",
        value_name = "FORMAT",
        help = "Input format: 'csv' or 'xml' (default: from the file extension)"
    )]
    pub format: Option<InputFormat>,

    /// Log verbosity on stderr
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log output (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,
}

/// Supported statement file formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Csv,
    Xml,
}

impl InputFormat {
    /// Detect the format from a file extension, ignoring case
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("csv") {
            Some(InputFormat::Csv)
        } else if extension.eq_ignore_ascii_case("xml") {
            Some(InputFormat::Xml)
        } else {
            None
        }
    }
}

impl CliArgs {
    /// Log filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::with_input(&["program", "records.csv"], Some("records.csv"))]
    #[case::without_input(&["program"], None)]
    fn test_input_parsing(#[case] args: &[&str], #[case] expected: Option<&str>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.input_file, expected.map(PathBuf::from));
    }

    #[rstest]
    #[case::default(&["program", "in.txt"], None)]
    #[case::csv(&["program", "--format", "csv", "in.txt"], Some(InputFormat::Csv))]
    #[case::xml(&["program", "--format", "xml", "in.txt"], Some(InputFormat::Xml))]
    fn test_format_parsing(#[case] args: &[&str], #[case] expected: Option<InputFormat>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.format, expected);
    }

    #[rstest]
    #[case::quiet(&["program"], "warn")]
    #[case::info(&["program", "-v"], "info")]
    #[case::debug(&["program", "-vv"], "debug")]
    #[case::trace(&["program", "-vvvv"], "trace")]
    #[case::long(&["program", "--verbose"], "info")]
    fn test_log_level(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.log_level(), expected);
    }

    #[rstest]
    #[case::csv("records.csv", Some(InputFormat::Csv))]
    #[case::xml("dir/records.xml", Some(InputFormat::Xml))]
    #[case::upper_case("RECORDS.CSV", Some(InputFormat::Csv))]
    #[case::txt("records.txt", None)]
    #[case::no_extension("records", None)]
    #[case::csv_in_name("records.csv.bak", None)]
    fn test_format_from_path(#[case] path: &str, #[case] expected: Option<InputFormat>) {
        assert_eq!(InputFormat::from_path(Path::new(path)), expected);
    }

    #[rstest]
    #[case::invalid_format(&["program", "--format", "json", "in.json"])]
    #[case::two_inputs(&["program", "a.csv", "b.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
