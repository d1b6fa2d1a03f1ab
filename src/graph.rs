//! Sparkline trace builder for the temperature history.
//!
//! Builds the set of pixel offsets for a graph frame from a ring-buffer
//! snapshot plus the current live reading. The live value is the vertical
//! baseline, so the curve is always anchored to "now"; stored samples are
//! scaled, clipped to a +-radius band, and dashed (odd indices only) while
//! clipped so out-of-range excursions read differently from in-range data.
//!
//! Tracing is pure: the output depends only on the inputs, and points are
//! emitted in a fixed order (oldest-to-newest for the static variant,
//! newest-to-oldest for the scrolling one). Plotting lives in
//! [`crate::widgets`].

use embedded_graphics::prelude::Point;
use heapless::Vec;
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::config::{CURSOR_CLEARANCE_AFTER, CURSOR_CLEARANCE_BEFORE};
use crate::history::SampleHistory;

/// Marker drawn over the newest sample: a 1-pixel-radius circle, plus a
/// center pixel when the sample index is odd so the marker keeps its visual
/// weight against the dashed clipping pattern at either parity.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cursor {
    /// Offset of the marker center from the graph origin.
    pub offset: Point,
    /// Plot an extra center pixel (newest sample index is odd).
    pub emphasize: bool,
}

/// One frame's worth of sparkline geometry, relative to the graph origin.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SparklineTrace<const N: usize> {
    pub points: Vec<Point, N>,
    pub cursor: Option<Cursor>,
}

/// Vertical pixel for a sample value. Sign is inverted because pixel
/// coordinates grow downward; rounding is half-away-from-zero.
fn scaled_pixel(
    value: f32,
    scale: f32,
) -> i32 {
    (value * -scale).round() as i32
}

/// Clamp a pixel offset into the +-radius band. Returns the clamped value
/// and whether the sample was outside (the band boundary itself is inside).
const fn clip(
    pixel: i32,
    radius: i32,
) -> (i32, bool) {
    if pixel < -radius {
        (-radius, true)
    } else if pixel > radius {
        (radius, true)
    } else {
        (pixel, false)
    }
}

/// Trace the fixed-width-history variant: sample `i` plots at `x = i`,
/// oldest on the left. A window of raw samples straddling the newest one is
/// suppressed to leave a clear slot for the cursor marker.
pub fn trace_static<const N: usize>(
    history: &SampleHistory<N>,
    live_value: f32,
    scale: f32,
    radius: i32,
) -> SparklineTrace<N> {
    let mut trace = SparklineTrace::default();
    let (_, count) = history.snapshot();
    if count == 0 {
        return trace;
    }

    let bi = (count - 1) as i32;
    let base = scaled_pixel(live_value, scale);

    for i in 0..count {
        let (pixel, outside) = clip(scaled_pixel(history.get(i), scale) - base, radius);
        let xi = i as i32;
        if xi >= bi + CURSOR_CLEARANCE_BEFORE && xi < bi + CURSOR_CLEARANCE_AFTER {
            continue;
        }
        if !outside || (i & 1) == 1 {
            let _ = trace.points.push(Point::new(xi, pixel));
        }
    }

    trace.cursor = Some(Cursor {
        offset: Point::new(bi, 0),
        emphasize: (bi & 1) == 1,
    });
    trace
}

/// Trace the scrolling variant: the newest sample plots at `x = 0` and older
/// samples extend leftward (`x = -i`), limited to `width` samples.
pub fn trace_scrolling<const N: usize>(
    history: &SampleHistory<N>,
    live_value: f32,
    scale: f32,
    radius: i32,
    width: usize,
) -> SparklineTrace<N> {
    let mut trace = SparklineTrace::default();
    let (_, count) = history.snapshot();
    if count == 0 {
        return trace;
    }

    let bi = (count - 1) as i32;
    let base = scaled_pixel(live_value, scale);

    for i in 0..width.min(count) {
        let logical = count - 1 - i;
        let (pixel, outside) = clip(scaled_pixel(history.get(logical), scale) - base, radius);
        if !outside || (i & 1) == 1 {
            let _ = trace.points.push(Point::new(-(i as i32), pixel));
        }
    }

    trace.cursor = Some(Cursor {
        offset: Point::new(0, 0),
        emphasize: (bi & 1) == 1,
    });
    trace
}

// =============================================================================
// Unit Tests
// =============================================================================
