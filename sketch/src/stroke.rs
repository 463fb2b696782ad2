//! Geometry smoothing: converts a sampled point sequence into a drawable path.
//!
//! The smoother is renderer-independent — it produces a [`StrokePath`]
//! description that [`crate::render`] replays onto a 2D context. Keeping the
//! geometry out of the browser layer makes it testable on the native target
//! and guarantees that local and remote strokes with identical point
//! sequences produce identical paths.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use wire::Position;

/// One quadratic curve segment of a smoothed stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSegment {
    /// Control point (an original sampled point).
    pub ctrl: Position,
    /// Curve end point (a midpoint between samples, or the final sample).
    pub to: Position,
}

/// A drawable description of a stroke-so-far.
#[derive(Debug, Clone, PartialEq)]
pub enum StrokePath {
    /// Nothing to draw.
    Empty,
    /// Degenerate stroke (fewer than three samples): a filled dot at the
    /// most recent point. Avoids the zero-length-curve artifact on a tap.
    Dot {
        center: Position,
        radius: f64,
    },
    /// Midpoint-smoothed quadratic path through the sample sequence.
    Curve {
        start: Position,
        segments: Vec<QuadSegment>,
    },
}

/// Midpoint of two positions.
#[must_use]
pub fn midpoint(a: Position, b: Position) -> Position {
    Position::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Smooth a sampled point sequence into a drawable path.
///
/// With three or more samples the path starts at the first point, then for
/// every interior point draws a quadratic curve control-pointed at that
/// sample and ending at the midpoint to the next sample, closing with one
/// quadratic to the final point. The curve passes near every sample without
/// the sharp joints of a raw polyline.
#[must_use]
pub fn smooth(points: &[Position], line_width: f64) -> StrokePath {
    let Some(&last) = points.last() else {
        return StrokePath::Empty;
    };
    if points.len() < 3 {
        return StrokePath::Dot { center: last, radius: line_width / 2.0 };
    }

    let mut segments = Vec::with_capacity(points.len() - 2);
    for i in 1..points.len() - 2 {
        segments.push(QuadSegment {
            ctrl: points[i],
            to: midpoint(points[i], points[i + 1]),
        });
    }
    // Closing curve: control at the last interior point, ending at the
    // final sample so the stroke reaches the cursor.
    segments.push(QuadSegment {
        ctrl: points[points.len() - 2],
        to: last,
    });

    StrokePath::Curve { start: points[0], segments }
}
