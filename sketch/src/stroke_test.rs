use super::*;

fn p(x: f64, y: f64) -> Position {
    Position::new(x, y)
}

/// Evaluate a quadratic Bézier at `t`.
fn quad_at(from: Position, ctrl: Position, to: Position, t: f64) -> Position {
    let u = 1.0 - t;
    Position::new(
        u * u * from.x + 2.0 * u * t * ctrl.x + t * t * to.x,
        u * u * from.y + 2.0 * u * t * ctrl.y + t * t * to.y,
    )
}

fn dist(a: Position, b: Position) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Densely sample every curve segment of a smoothed path.
fn sample_curve(path: &StrokePath) -> Vec<Position> {
    let StrokePath::Curve { start, segments } = path else {
        panic!("expected a curve, got {path:?}");
    };
    let mut samples = Vec::new();
    let mut from = *start;
    for seg in segments {
        for step in 0..=100 {
            samples.push(quad_at(from, seg.ctrl, seg.to, f64::from(step) / 100.0));
        }
        from = seg.to;
    }
    samples
}

// =============================================================
// midpoint
// =============================================================

#[test]
fn midpoint_is_halfway() {
    assert_eq!(midpoint(p(0.0, 0.0), p(4.0, -2.0)), p(2.0, -1.0));
}

#[test]
fn midpoint_of_identical_points_is_the_point() {
    assert_eq!(midpoint(p(3.0, 3.0), p(3.0, 3.0)), p(3.0, 3.0));
}

// =============================================================
// Degenerate strokes
// =============================================================

#[test]
fn no_points_yields_empty() {
    assert_eq!(smooth(&[], 5.0), StrokePath::Empty);
}

#[test]
fn single_point_yields_dot_at_point() {
    let path = smooth(&[p(10.0, 10.0)], 5.0);
    assert_eq!(path, StrokePath::Dot { center: p(10.0, 10.0), radius: 2.5 });
}

#[test]
fn two_points_yield_dot_at_most_recent_point() {
    let path = smooth(&[p(10.0, 10.0), p(12.0, 11.0)], 5.0);
    assert_eq!(path, StrokePath::Dot { center: p(12.0, 11.0), radius: 2.5 });
}

#[test]
fn dot_radius_is_half_the_line_width() {
    let path = smooth(&[p(0.0, 0.0)], 8.0);
    assert_eq!(path, StrokePath::Dot { center: p(0.0, 0.0), radius: 4.0 });
}

#[test]
fn short_strokes_never_produce_a_curve() {
    for points in [vec![p(1.0, 1.0)], vec![p(1.0, 1.0), p(2.0, 2.0)]] {
        assert!(matches!(smooth(&points, 5.0), StrokePath::Dot { .. }));
    }
}

// =============================================================
// Smoothed curves
// =============================================================

#[test]
fn three_points_yield_one_closing_segment() {
    let path = smooth(&[p(10.0, 10.0), p(12.0, 11.0), p(15.0, 9.0)], 5.0);
    assert_eq!(
        path,
        StrokePath::Curve {
            start: p(10.0, 10.0),
            segments: vec![QuadSegment { ctrl: p(12.0, 11.0), to: p(15.0, 9.0) }],
        }
    );
}

#[test]
fn four_points_yield_midpoint_then_closing_segment() {
    let path = smooth(&[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(20.0, 10.0)], 5.0);
    assert_eq!(
        path,
        StrokePath::Curve {
            start: p(0.0, 0.0),
            segments: vec![
                QuadSegment { ctrl: p(10.0, 0.0), to: p(10.0, 5.0) },
                QuadSegment { ctrl: p(10.0, 10.0), to: p(20.0, 10.0) },
            ],
        }
    );
}

#[test]
fn curve_starts_at_first_sample_and_ends_at_last() {
    let points: Vec<Position> = (0..10).map(|i| p(f64::from(i) * 4.0, f64::from(i % 3))).collect();
    let StrokePath::Curve { start, segments } = smooth(&points, 5.0) else {
        panic!("expected a curve");
    };
    assert_eq!(start, points[0]);
    assert_eq!(segments.last().map(|s| s.to), points.last().copied());
}

#[test]
fn interior_segments_end_at_sample_midpoints() {
    let points: Vec<Position> = (0..6).map(|i| p(f64::from(i) * 5.0, f64::from(i * i))).collect();
    let StrokePath::Curve { segments, .. } = smooth(&points, 5.0) else {
        panic!("expected a curve");
    };
    assert_eq!(segments.len(), points.len() - 2);
    for (i, seg) in segments.iter().take(segments.len() - 1).enumerate() {
        assert_eq!(seg.ctrl, points[i + 1]);
        assert_eq!(seg.to, midpoint(points[i + 1], points[i + 2]));
    }
}

#[test]
fn smoothed_path_passes_near_every_interior_sample() {
    // A wavy freehand-like stroke sampled every ~5px.
    let points: Vec<Position> = (0..40)
        .map(|i| {
            let x = f64::from(i) * 5.0;
            p(x, 50.0 + 12.0 * (x / 17.0).sin())
        })
        .collect();
    let samples = sample_curve(&smooth(&points, 5.0));

    for sample in points.iter().take(points.len() - 1).skip(1) {
        let nearest = samples
            .iter()
            .map(|c| dist(*c, *sample))
            .fold(f64::INFINITY, f64::min);
        assert!(
            nearest < 3.0,
            "interior sample {sample:?} is {nearest:.2}px from the curve"
        );
    }
}

#[test]
fn identical_sequences_smooth_identically() {
    let points = vec![p(1.0, 2.0), p(3.0, 4.0), p(5.0, 4.0), p(7.0, 1.0)];
    assert_eq!(smooth(&points, 5.0), smooth(&points.clone(), 5.0));
}
