//! shiftbox CLI - Caesar shift cipher for text files
//!
//! Without a subcommand, runs the interactive menu on stdin/stdout.

use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use shiftbox::error::Result;
use shiftbox::file_ops;
use shiftbox::menu::Menu;
use shiftbox::shifter::Shift;

#[derive(Parser)]
#[command(name = "shiftbox")]
#[command(version)]
#[command(about = "Caesar shift cipher for text files.", long_about = None)]
struct Cli {
    /// Log filter (overridden by RUST_LOG)
    #[arg(long, global = true, value_name = "FILTER", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Shift every letter of a file forward
    #[command(alias = "e")]
    Encode {
        /// Path to the file whose contents is to be shifted
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Path to the file to write the shifted text to
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Number of positions to rotate each letter by
        #[arg(short, long, allow_negative_numbers = true)]
        shift: i64,
    },

    /// Undo an encode that used the same shift
    #[command(alias = "d")]
    Decode {
        /// Path to the shifted file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Path to the file to write the restored text to
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Shift that was used to encode the file
        #[arg(short, long, allow_negative_numbers = true)]
        shift: i64,
    },

    /// Run the interactive menu (the default)
    #[command(alias = "m")]
    Menu,
}

fn main() {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --log-level CLI arg
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(log_filter(rust_log.as_deref(), &cli.log_level))
        .init();

    let result = match cli.command {
        Some(Commands::Encode {
            input,
            output,
            shift,
        }) => transform(&input, &output, Shift::new(shift)),
        Some(Commands::Decode {
            input,
            output,
            shift,
        }) => transform(&input, &output, Shift::new(shift).inverse()),
        Some(Commands::Menu) | None => run_menu(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

/// Build the log filter from `RUST_LOG` if it is set and valid, otherwise
/// from `--log-level`.
fn log_filter(rust_log: Option<&str>, log_level: &str) -> EnvFilter {
    match rust_log {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|e| {
            eprintln!("warning: ignoring invalid RUST_LOG {:?}: {}", directives, e);
            EnvFilter::new(log_level)
        }),
        None => EnvFilter::new(log_level),
    }
}

fn transform(input: &Path, output: &Path, shift: Shift) -> Result<()> {
    file_ops::transform_file(input, output, shift)?;
    Ok(())
}

fn run_menu() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock()).run()
}
