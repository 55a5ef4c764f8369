//! REPL session state
//!
//! Each expression replaces the previous one: it is compiled, rendered with
//! the session's configuration and written to the output file. The last
//! good curve is kept for `:show`.

use pic_core::Curve;
use picc::{RenderConfig, compile, render_svg};
use std::fs;
use std::path::{Path, PathBuf};

/// What the loop should do after a line
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Print this and keep reading
    Print(String),
    /// Leave the loop
    Quit,
}

pub struct Session {
    config: RenderConfig,
    output: PathBuf,
    last: Option<Curve>,
}

impl Session {
    pub fn new(config: RenderConfig, output: PathBuf) -> Self {
        Session {
            config,
            output,
            last: None,
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Handle one line of input: a command or an expression
    pub fn handle(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        match line {
            ":quit" | ":q" => Outcome::Quit,
            ":help" => Outcome::Print(HELP.to_string()),
            ":show" => Outcome::Print(match &self.last {
                Some(curve) => curve.to_string(),
                None => "No expression yet.".to_string(),
            }),
            _ if line.starts_with(':') => Outcome::Print(format!(
                "Unknown command: {}. Type :help for available commands.",
                line
            )),
            _ => Outcome::Print(match self.render(line) {
                Ok(()) => format!(
                    "Wrote {} ({} points)",
                    self.output.display(),
                    self.config.points
                ),
                Err(e) => format!("Error: {}", e),
            }),
        }
    }

    fn render(&mut self, source: &str) -> Result<(), String> {
        let curve = compile(source)?;
        let svg = render_svg(&curve, &self.config);
        fs::write(&self.output, svg)
            .map_err(|e| format!("Failed to write {}: {}", self.output.display(), e))?;
        tracing::debug!(expr = %curve, "rendered");
        self.last = Some(curve);
        Ok(())
    }
}

/// Help and examples shown at startup and on `:help`
pub const HELP: &str = r#"
Postfix curve expressions: operands first, then the combinator.

Primitives:   circle  line  numbers  (x, y)
Combinators:  translate (+)  scale (*)  rotate  concat
              repeat (**)  step (//)  reverse  boustro

Combinators take their operands from the top of the stack down, so
"n c repeat" repeats c n times and "b a concat" runs a, then b.

Commands:
  :quit, :q     Exit
  :show         Print the last expression
  :help         Show this help

Some examples to try:
  circle line *
  20 circle ** circle *
  30 circle //  30 line circle * boustro  rotate
  30 line boustro  29 circle **  *
  (0, 1) line *  (1, 0) circle *  +
  (-1, -1) line 20 circle ** + +
  0.2 61 circle ** *  0.8 30 circle ** *  +
  0.7  5 circle **  32 line boustro  rotate  *
  (1, 0) 3 circle ** *  (0, 1) 5 circle ** *  +
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> (Session, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("pic.svg");
        let config = RenderConfig::new().with_points(32);
        (Session::new(config, output), dir)
    }

    #[test]
    fn test_quit() {
        let (mut s, _dir) = session();
        assert_eq!(s.handle(":q"), Outcome::Quit);
        assert_eq!(s.handle("  :quit "), Outcome::Quit);
    }

    #[test]
    fn test_expression_writes_svg() {
        let (mut s, _dir) = session();
        let outcome = s.handle("circle line *");
        assert!(matches!(outcome, Outcome::Print(ref msg) if msg.starts_with("Wrote ")));
        let svg = fs::read_to_string(s.output()).unwrap();
        assert!(svg.contains("<polyline"));
    }

    #[test]
    fn test_error_keeps_previous_curve() {
        let (mut s, _dir) = session();
        s.handle("circle (1, 0) +");
        let outcome = s.handle("circle blob");
        assert!(
            matches!(outcome, Outcome::Print(ref msg) if msg.starts_with("Error: Unknown word"))
        );
        assert_eq!(
            s.handle(":show"),
            Outcome::Print("circle (1, 0) translate".to_string())
        );
    }

    #[test]
    fn test_show_before_any_expression() {
        let (mut s, _dir) = session();
        assert_eq!(
            s.handle(":show"),
            Outcome::Print("No expression yet.".to_string())
        );
    }

    #[test]
    fn test_unknown_command() {
        let (mut s, _dir) = session();
        let outcome = s.handle(":frobnicate");
        assert!(
            matches!(outcome, Outcome::Print(ref msg) if msg.starts_with("Unknown command"))
        );
    }

    #[test]
    fn test_help_examples_compile() {
        for line in HELP.lines().skip_while(|l| !l.starts_with("Some examples")).skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            assert!(compile(line).is_ok(), "example failed: {}", line);
        }
    }
}
