//! Terminal front end for the project board.
//!
//! # Responsibility
//! - Collect title/description/people from stdin, one submission at a time.
//! - Print both project lists after each accepted submission.

use clap::{Parser, ValueEnum};
use log::info;
use projectboard_core::{core_version, default_log_level, init_logging, ProjectBoard};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "projectboard", version = core_version(), about = "Collect projects into active/finished lists")]
struct Cli {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, default_value = default_log_level())]
    log_level: String,
    /// Absolute directory for rolling log files. Logging is off when omitted.
    #[arg(long)]
    log_dir: Option<String>,
    /// How to print the lists after each submission.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(&cli.log_level, log_dir)?;
    }

    let mut board = ProjectBoard::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout().lock();

    print_board(&mut stdout, &board, cli.format)?;
    loop {
        let Some(title) = prompt(&mut stdout, &mut lines, "Title")? else {
            break;
        };
        let Some(description) = prompt(&mut stdout, &mut lines, "Description")? else {
            break;
        };
        let Some(people) = prompt(&mut stdout, &mut lines, "People")? else {
            break;
        };

        match board.submit(&title, &description, &people) {
            Ok(_) => print_board(&mut stdout, &board, cli.format)?,
            Err(err) => writeln!(stdout, "{err}")?,
        }
    }

    info!(
        "event=session_end module=cli status=ok projects={}",
        board.store().len()
    );
    Ok(())
}

/// Reads one field; `None` on end of input.
fn prompt(
    out: &mut impl Write,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;
    lines.next().transpose()
}

fn print_board(
    out: &mut impl Write,
    board: &ProjectBoard,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", board.render())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &board.snapshot())?;
            writeln!(out)?;
        }
    }
    Ok(())
}
