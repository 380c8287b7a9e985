//! Customer Statement Validator CLI
//!
//! Command-line interface for validating customer statement files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- records.csv
//! cargo run -- records.xml
//! cargo run -- --format csv export.txt
//! cargo run                      # prompts for the path
//! cargo run -- -vv records.csv   # debug logging on stderr
//! ```
//!
//! The program reads the statement, validates every record and prints the
//! failed records report to stdout.
//!
//! # Exit Codes
//!
//! - 0: Report printed, or unsupported file type
//! - 1: Error (file not found, unreadable file, invalid numbers, malformed input)

use statement_validator::cli;
use statement_validator::pipeline;
use statement_validator::StatementError;
use std::io;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(args.log_level());

    let input_path = match args.input_file.clone() {
        Some(path) => path,
        None => {
            let stdin = io::stdin();
            match cli::prompt_for_path(&mut stdin.lock(), &mut io::stdout()) {
                Ok(path) => path,
                Err(e) => {
                    eprintln!("Error: could not read the file path: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    match pipeline::process_file(&input_path, args.format) {
        Ok(report) => println!("{}", report),
        Err(e @ StatementError::UnsupportedFileType { .. }) => println!("{}", e),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
