//! picr - interactive REPL for postfix curve expressions
//!
//! Each line is compiled and rendered to an SVG file, replacing the
//! previous picture. Open the file in a viewer that reloads on change.
//!
//! Usage:
//!   picr                    # Render to ./pic.svg
//!   picr -o spiral.svg      # Render to another file
//!
//! Commands:
//!   :quit, :q               # Exit
//!   :show                   # Print the last expression
//!   :help                   # Show help

mod engine;

use clap::Parser as ClapParser;
use engine::{HELP, Outcome, Session};
use picc::RenderConfig;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Samples per picture; finer than the batch default since REPL curves tend to be busy
const REPL_POINTS: usize = 4000;

#[derive(ClapParser)]
#[command(name = "picr")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive REPL for postfix curve expressions", long_about = None)]
struct Args {
    /// SVG file to render into
    #[arg(short, long, default_value = "pic.svg")]
    output: PathBuf,

    /// Number of samples over [0, 1)
    #[arg(long, default_value_t = REPL_POINTS)]
    points: usize,

    /// Render configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("picr=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match RenderConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => RenderConfig::default(),
    }
    .with_points(args.points);

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    repl_loop(Session::new(config, args.output));
}

/// Main REPL loop
fn repl_loop(mut session: Session) {
    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Error initializing readline: {}", e);
            std::process::exit(1);
        }
    };

    // Load history if available
    let history_file = dirs_history_file();
    if let Some(ref path) = history_file {
        let _ = rl.load_history(path);
    }

    print!("{}", HELP);
    println!("\nRendering to {}\n", session.output().display());

    loop {
        match rl.readline("€ ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                match session.handle(&line) {
                    Outcome::Print(message) => println!("{}", message),
                    Outcome::Quit => break,
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    // Save history
    if let Some(ref path) = history_file {
        if let Err(e) = rl.save_history(path) {
            tracing::warn!(path = %path.display(), error = %e, "could not save history");
        }
    }
}

/// Get history file path
fn dirs_history_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("picr_history"))
}
