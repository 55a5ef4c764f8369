//! Rendering sampled curves
//!
//! The canvas maps curve space `[-1, 1]²` onto `size × size` pixels with +y
//! pointing up. The viewport transform is itself a curve expression
//! (`curve * (size/2) + size/2`), so the renderer only samples and writes.
//! Consecutive samples are always joined, including across jumps.

use crate::config::RenderConfig;
use pic_core::{Curve, Point, interpolate};
use std::fmt::Write as _;

/// Sample `curve` in canvas coordinates
pub fn canvas_points(curve: &Curve, config: &RenderConfig) -> Vec<Point> {
    let half = config.size as f64 / 2.0;
    let placed = curve.clone().scale(half).translate(half);
    let size = config.size as f64;
    interpolate(&placed, config.points)
        .into_iter()
        .map(|p| Point::new(p.x, size - p.y))
        .collect()
}

/// Render `curve` as an SVG document with a single polyline
pub fn render_svg(curve: &Curve, config: &RenderConfig) -> String {
    let points = canvas_points(curve, config);
    tracing::debug!(points = points.len(), size = config.size, "rendering svg");

    let mut svg = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
        size = config.size
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        config.background
    );
    let _ = write!(
        svg,
        r#"  <polyline fill="none" stroke="{}" stroke-width="{}" points=""#,
        config.stroke, config.stroke_width
    );
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            svg.push(' ');
        }
        let _ = write!(svg, "{:.3},{:.3}", p.x, p.y);
    }
    svg.push_str("\"/>\n</svg>\n");
    svg
}

/// The curve's samples in curve space, as a JSON array of `{"x", "y"}`
pub fn render_json(curve: &Curve, points: usize) -> Result<String, String> {
    serde_json::to_string_pretty(&interpolate(curve, points))
        .map_err(|e| format!("Failed to serialize points: {}", e))
}
