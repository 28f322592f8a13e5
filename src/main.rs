mod report;

use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;

use chrono::{Local, NaiveDateTime};
use clap::Parser;
use tarih::{Context, Options, OverlapPolicy, find_all_numbers, find_all_with};
use tracing_subscriber::EnvFilter;

/// Tag Turkish date and time expressions.
///
/// Reads the sentence from the arguments, or one sentence per line from
/// stdin when none are given.
#[derive(Parser)]
#[command(name = "tarih", version, about, long_about = None)]
struct Cli {
    /// Sentence to tag.
    input: Vec<String>,

    /// Reference time in YYYY-MM-DDTHH:MM:SS. Default: the local clock.
    #[arg(long, value_parser = parse_reference)]
    reference: Option<NaiveDateTime>,

    /// Print spans as JSON.
    #[arg(long)]
    json: bool,

    /// List numerals instead of date expressions.
    #[arg(long)]
    numbers: bool,

    /// Do not hand unmatched expressions to the fallback parser.
    #[arg(long)]
    no_fallback: bool,

    /// Keep the longest window when windows overlap.
    #[arg(long)]
    longest_match: bool,

    /// Force ANSI color output.
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn color(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            io::stdout().is_terminal()
        }
    }

    fn options(&self) -> Options {
        let mut options = Options::default();
        if self.no_fallback {
            options = options.without_fallback();
        }
        if self.longest_match {
            options = options.with_overlap(OverlapPolicy::LongestMatch);
        }
        options
    }
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| format!("invalid reference '{value}' (expected YYYY-MM-DDTHH:MM:SS)"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("TARIH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let lines = if cli.input.is_empty() {
        match io::stdin().lock().lines().collect::<io::Result<Vec<_>>>() {
            Ok(lines) => lines,
            Err(err) => {
                eprintln!("error: failed to read stdin: {err}");
                return ExitCode::from(2);
            }
        }
    } else {
        vec![cli.input.join(" ")]
    };

    if lines.iter().all(|line| line.trim().is_empty()) {
        eprintln!("error: no input provided");
        return ExitCode::from(2);
    }

    let context = Context { reference_time: cli.reference.unwrap_or_else(|| Local::now().naive_local()) };
    let options = cli.options();
    let color = cli.color();

    for line in lines.iter().filter(|line| !line.trim().is_empty()) {
        if cli.numbers {
            let found = find_all_numbers(line);
            if cli.json {
                report::print_json(&found);
            } else {
                report::print_numbers(line, &found, color);
            }
            continue;
        }

        let spans = match find_all_with(line, &context, &options) {
            Ok(spans) => spans,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        };
        if cli.json {
            report::print_json(&spans);
        } else {
            report::print_spans(line, &spans, color);
        }
    }

    ExitCode::SUCCESS
}
