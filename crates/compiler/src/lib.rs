//! Pic Compiler Library
//!
//! Turns postfix curve source into curve trees and pictures:
//!
//! ```text
//! source ──tokenize──▶ [Token] ──stackparse──▶ Curve ──render_svg──▶ SVG
//! ```
//!
//! # Example
//!
//! ```rust
//! use picc::{RenderConfig, compile, render_svg};
//!
//! // circle * line: a one-turn spiral
//! let curve = compile("circle line scale")?;
//! let svg = render_svg(&curve, &RenderConfig::new().with_points(200));
//! assert!(svg.contains("<polyline"));
//! # Ok::<(), String>(())
//! ```

pub mod config;
pub mod lexer;
pub mod render;

pub use config::RenderConfig;
pub use lexer::tokenize;
pub use render::{canvas_points, render_json, render_svg};

use pic_core::{Curve, stackparse};

/// Compile postfix source into a curve
pub fn compile(source: &str) -> Result<Curve, String> {
    let tokens = tokenize(source)?;
    tracing::debug!(tokens = tokens.len(), "tokenized");
    stackparse(&tokens).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pic_core::Point;

    #[test]
    fn test_compile_translate() {
        let curve = compile("circle (0, 1) translate").unwrap();
        let p = curve.evaluate(0.0);
        assert!((p.x - 0.0).abs() < 1e-12 && (p.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_compile_reports_lex_errors() {
        assert!(compile("circle wiggle").unwrap_err().contains("Unknown word"));
    }

    #[test]
    fn test_compile_reports_coercion_errors() {
        let err = compile("(1, 2, 3) circle +").unwrap_err();
        assert_eq!(
            err,
            "Expected function, number, or 2-tuple, got (1, 2, 3), a 3-tuple"
        );
    }

    #[test]
    fn test_compile_count_must_be_number() {
        let err = compile("circle circle repeat").unwrap_err();
        assert!(err.contains("Expected number"));
    }

    #[test]
    fn test_compile_empty_source() {
        let curve = compile("").unwrap();
        assert_eq!(curve.evaluate(0.5), Point::new(0.0, 0.0));
    }
}
