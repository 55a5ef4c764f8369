//! End-to-end: source text through the tree builder to rendered output

use pic_core::{Curve, Point};
use picc::{RenderConfig, compile, render_svg, tokenize};

const EPSILON: f64 = 1e-9;

fn assert_same_curve(a: &Curve, b: &Curve) {
    for i in 0..200 {
        let t = i as f64 / 200.0;
        let (p, q) = (a.evaluate(t), b.evaluate(t));
        assert!(
            (p.x - q.x).abs() < EPSILON && (p.y - q.y).abs() < EPSILON,
            "t={}: {:?} != {:?}",
            t,
            p,
            q
        );
    }
}

#[test]
fn test_spiral_matches_direct_algebra() {
    // circle * circle**20
    let parsed = compile("20 circle repeat circle *").unwrap();
    let direct = Curve::circle().scale(Curve::circle().repeat(20.0));
    assert_same_curve(&parsed, &direct);
}

#[test]
fn test_ellipse_sum() {
    // circle**5 * (0, 1) + circle**3 * (1, 0)
    let parsed = compile("(1, 0) 3 circle ** * (0, 1) 5 circle ** * +").unwrap();
    let direct = Curve::circle()
        .repeat(5.0)
        .scale((0.0, 1.0))
        .translate(Curve::circle().repeat(3.0).scale((1.0, 0.0)));
    assert_same_curve(&parsed, &direct);
}

#[test]
fn test_boustro_source() {
    // rotate(boustro(line, 32), circle ** 5) * 0.7
    let parsed = compile("0.7  5 circle **  32 line boustro  rotate  *").unwrap();
    let direct = Curve::line()
        .boustro(32.0)
        .rotate(Curve::circle().repeat(5.0))
        .scale(0.7);
    assert_same_curve(&parsed, &direct);
}

#[test]
fn test_display_recompiles_to_same_curve() {
    let original = Curve::circle()
        .step(30.0)
        .rotate(Curve::line().scale((0.3, 0.1)).translate(0.1))
        .concat(Curve::line().reverse());
    let recompiled = compile(&original.to_string()).unwrap();
    assert_same_curve(&recompiled, &original);
}

#[test]
fn test_underfull_source_still_renders() {
    let curve = compile("circle scale rotate").unwrap();
    let svg = render_svg(&curve, &RenderConfig::new().with_points(16));
    assert!(svg.contains("<polyline"));
}

#[test]
fn test_tokens_feed_stackparse() {
    let tokens = tokenize("circle (0, 1) translate").unwrap();
    let curve = pic_core::stackparse(&tokens).unwrap();
    let p = curve.evaluate(0.0);
    assert!((p.x - 0.0).abs() < EPSILON);
    assert!((p.y - 2.0).abs() < EPSILON);
}

#[test]
fn test_svg_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spiral.svg");
    let curve = compile("circle line *").unwrap();
    std::fs::write(&path, render_svg(&curve, &RenderConfig::new())).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("<svg"));
    assert_eq!(curve.evaluate(0.0), Point::new(0.0, 0.0));
}
