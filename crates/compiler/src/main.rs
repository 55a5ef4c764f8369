//! Pic Compiler CLI
//!
//! Command-line interface for rendering postfix curve expressions.
//!
//! Usage:
//!   picc render "circle line scale" -o spiral.svg
//!   picc points "circle" --points 8
//!   picc eval "circle (0, 1) +" 0.25

use clap::{CommandFactory, Parser as ClapParser, Subcommand};
use clap_complete::{Shell, generate};
use picc::{RenderConfig, compile, render_json, render_svg};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "picc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pic compiler - render postfix curve expressions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an expression to SVG
    Render {
        /// Postfix expression ("-" reads standard input)
        expr: String,

        /// Output SVG path (defaults to standard output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of samples over [0, 1)
        #[arg(long)]
        points: Option<usize>,

        /// Canvas size in pixels
        #[arg(long)]
        size: Option<u32>,

        /// Stroke colour
        #[arg(long)]
        stroke: Option<String>,

        /// Render configuration file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print sampled points as JSON
    Points {
        /// Postfix expression ("-" reads standard input)
        expr: String,

        /// Number of samples over [0, 1)
        #[arg(long, default_value_t = picc::config::DEFAULT_POINTS)]
        points: usize,
    },

    /// Evaluate an expression at a single parameter
    Eval {
        /// Postfix expression ("-" reads standard input)
        expr: String,

        /// Parameter value
        #[arg(allow_negative_numbers = true)]
        t: f64,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("picc=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            expr,
            output,
            points,
            size,
            stroke,
            config,
        } => run_render(&expr, output.as_deref(), points, size, stroke, config.as_deref()),
        Commands::Points { expr, points } => run_points(&expr, points),
        Commands::Eval { expr, t } => run_eval(&expr, t),
        Commands::Completions { shell } => {
            run_completions(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "picc", &mut io::stdout());
}

/// Read the expression argument, with "-" meaning standard input
fn read_source(expr: &str) -> Result<String, String> {
    if expr != "-" {
        return Ok(expr.to_string());
    }
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .map_err(|e| format!("Failed to read standard input: {}", e))?;
    Ok(source)
}

fn run_render(
    expr: &str,
    output: Option<&Path>,
    points: Option<usize>,
    size: Option<u32>,
    stroke: Option<String>,
    config_path: Option<&Path>,
) -> Result<(), String> {
    let mut config = match config_path {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };
    if let Some(points) = points {
        config = config.with_points(points);
    }
    if let Some(size) = size {
        config = config.with_size(size);
    }
    if let Some(stroke) = stroke {
        config = config.with_stroke(stroke);
    }
    config.validate()?;

    let curve = compile(&read_source(expr)?)?;
    let svg = render_svg(&curve, &config);

    match output {
        Some(path) => {
            fs::write(path, svg)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            tracing::info!(path = %path.display(), points = config.points, "rendered");
        }
        None => print!("{}", svg),
    }
    Ok(())
}

fn run_points(expr: &str, points: usize) -> Result<(), String> {
    let curve = compile(&read_source(expr)?)?;
    println!("{}", render_json(&curve, points)?);
    Ok(())
}

fn run_eval(expr: &str, t: f64) -> Result<(), String> {
    let curve = compile(&read_source(expr)?)?;
    let p = curve.evaluate(t);
    println!("{} {}", p.x, p.y);
    Ok(())
}
