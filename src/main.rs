//! CLI entry point for the grade calculator.
//!
//! Provides subcommands for grading a single score set, running the form
//! interactively on a terminal, and listing the grade bands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use grade_calculator::assigner::{GradeReport, assign};
use grade_calculator::form::{
    CALCULATE_BUTTON, FormOutcome, GradeForm, SCORES_LABEL, TOTAL_NUMBER_LABEL, WINDOW_TITLE,
};
use grade_calculator::grade::GRADE_BANDS;
use grade_calculator::output::print_json;
use std::ffi::OsStr;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_calculator")]
#[command(about = "Assign letter grades to student scores", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade one set of scores
    Assign {
        /// Total number of students
        #[arg(short, long, allow_hyphen_values = true)]
        total: String,

        /// Scores separated by spaces, e.g. "95 82 59"
        #[arg(short, long, allow_hyphen_values = true)]
        scores: String,

        /// Also log the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Read totals and scores from stdin until end of input
    Interactive,
    /// Print the grade bands
    Bands,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/grade_calculator.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("grade_calculator.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Assign {
            total,
            scores,
            json,
        } => {
            // Validation errors surface as `Error: {message}` with a non-zero exit
            let report = run_assign(&total, &scores, json)?;
            print!("{report}");
        }
        Commands::Interactive => {
            let stdin = std::io::stdin();
            run_interactive(stdin.lock(), std::io::stdout().lock())?;
        }
        Commands::Bands => {
            for band in &GRADE_BANDS {
                println!("{}: {}-{}", band.grade, band.lower, band.upper);
            }
        }
    }

    Ok(())
}

/// Grades one score set, optionally logging the report as JSON.
fn run_assign(total: &str, scores: &str, json: bool) -> Result<GradeReport> {
    let report = assign(total, scores)?;
    if json {
        print_json(&report)?;
    }
    Ok(report)
}

/// Drives a [`GradeForm`] from line-oriented input: one line for the total,
/// one for the scores, then the button is pressed. Stops at end of input.
fn run_interactive<R: BufRead, W: Write>(mut input: R, mut out: W) -> Result<()> {
    writeln!(out, "{WINDOW_TITLE}")?;
    let mut form = GradeForm::new();

    loop {
        let Some(total) = prompt(&mut input, &mut out, TOTAL_NUMBER_LABEL)? else {
            break;
        };
        let Some(scores) = prompt(&mut input, &mut out, SCORES_LABEL)? else {
            break;
        };
        form.total_number = total;
        form.scores = scores;

        debug!(button = CALCULATE_BUTTON, "Form submitted");
        match form.calculate_grades() {
            FormOutcome::Report(text) => write!(out, "{text}")?,
            FormOutcome::Alert { title, message } => writeln!(out, "{title}: {message}")?,
        }
    }

    out.flush()?;
    Ok(())
}

/// Reads one line after printing `label`. Invalid UTF-8 is replaced with
/// U+FFFD so the form rejects the line instead of ending the session.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(out, "{label} ")?;
    out.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
