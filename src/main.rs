use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use chordname::{identify, iterable_to_str, Resolution};

#[derive(Parser, Debug)]
#[command(author, version, about = "Name the note, interval or chord formed by one to four notes")]
struct Args {
    /// Note names such as `C E G` or `Bb D F Ab`. Without them, every line of stdin is one query.
    notes: Vec<String>,
    /// Also print the chord components, root first
    #[arg(short, long)]
    components: bool,
    /// Debug logging, overrides RUST_LOG
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let ok = if args.notes.is_empty() {
        run_stdin(args.components)
    } else {
        report(&args.notes.join(" "), args.components)
    };
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_stdin(show_components: bool) -> bool {
    let mut all_ok = true;
    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => all_ok &= report(&line, show_components),
            Err(e) => {
                error!("could not read stdin: {}", e);
                return false;
            }
        }
    }
    all_ok
}

fn report(query: &str, show_components: bool) -> bool {
    match identify(query) {
        Ok(resolution) => {
            println!("{}", render(&resolution, show_components));
            true
        }
        Err(e) => {
            debug!("query {:?} failed, syntax error: {}", query, e.is_syntax());
            eprintln!("error: {}", e);
            false
        }
    }
}

fn render(resolution: &Resolution, show_components: bool) -> String {
    match resolution.components() {
        Some(components) if show_components => {
            format!("{} {}", resolution, iterable_to_str(components))
        }
        _ => resolution.to_string(),
    }
}
